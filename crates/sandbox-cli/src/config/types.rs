use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::defaults::*;

/// Dev server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind (IP address or `localhost`)
    #[serde(default = "default_host")]
    pub host: String,

    /// Preferred port; the next ten are tried when it is busy
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the browser once the server is listening
    #[serde(default)]
    pub open: bool,

    /// Path opened in the browser when `open` is set
    #[serde(default = "default_open_path")]
    pub open_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: false,
            open_path: default_open_path(),
        }
    }
}

/// Filesystem access policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FsConfig {
    /// Require the examples root to live inside the project root.
    ///
    /// Off by default: sandboxes commonly import siblings through relative
    /// paths that leave the project root.
    #[serde(default)]
    pub strict: bool,
}

/// Settings for the synthesized HTML shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtmlConfig {
    /// Value of the `lang` attribute on `<html>`
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
        }
    }
}

/// Raw HTML tags injected into synthesized pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InjectConfig {
    /// Inserted before `</head>`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<String>,

    /// Inserted before `</body>`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
}
