//! Configuration system for the sandbox dev server with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod types;
mod validation;

use path_clean::PathClean;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::{ConfigOverrides, CONFIG_FILE_NAME};
pub use types::*;
pub use validation::parse_host;

/// Sandbox configuration - loaded from sandbox.config.json, env and CLI args.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SandboxConfig {
    /// Project root; the landing page lives at `<root>/index.html`
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory holding one sub-folder per sandbox, relative to `root`
    #[serde(default = "default_examples_dir")]
    pub examples_dir: PathBuf,

    /// Dev server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Filesystem access policy
    #[serde(default)]
    pub fs: FsConfig,

    /// Synthesized HTML shell settings
    #[serde(default)]
    pub html: HtmlConfig,

    /// Tags injected into every synthesized page
    #[serde(default)]
    pub inject: InjectConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            examples_dir: default_examples_dir(),
            server: ServerConfig::default(),
            fs: FsConfig::default(),
            html: HtmlConfig::default(),
            inject: InjectConfig::default(),
        }
    }
}

impl SandboxConfig {
    /// Lexically normalized project root.
    pub fn project_root(&self) -> PathBuf {
        self.root.clean()
    }

    /// Lexically normalized examples root (`examplesDir` joined onto `root`).
    pub fn examples_root(&self) -> PathBuf {
        self.root.join(&self.examples_dir).clean()
    }

    /// URL prefix the examples root is served under, e.g. `/examples`.
    pub fn examples_mount(&self) -> String {
        let name = self
            .examples_root()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("/{}", name)
    }

    /// Path of the landing page document.
    pub fn landing_page(&self) -> PathBuf {
        self.project_root().join("index.html")
    }

    /// Generate JSON Schema for sandbox.config.json.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(SandboxConfig);
        serde_json::to_value(schema).unwrap_or_default()
    }

    /// Generate example sandbox.config.json content.
    pub fn example_config() -> String {
        let example = Self {
            server: ServerConfig {
                open: true,
                ..ServerConfig::default()
            },
            inject: InjectConfig {
                head: vec![r#"<link rel="stylesheet" href="/shared/base.css" />"#.to_string()],
                body: vec![],
            },
            ..Self::default()
        };

        serde_json::to_string_pretty(&example).unwrap_or_default()
    }
}
