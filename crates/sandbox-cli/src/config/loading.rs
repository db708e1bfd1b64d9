use crate::config::SandboxConfig;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    value::Value,
    Figment,
};
use std::path::PathBuf;

/// File name looked up in the project root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "sandbox.config.json";

/// Values supplied on the command line.
///
/// Every field is optional; only the ones that are set override lower
/// priority sources.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub examples_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub open: bool,
}

impl SandboxConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// Relative roots are resolved against the process working directory.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let env = env_overrides();
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::config_file(overrides, &env)? {
            tracing::debug!("Loading configuration from {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(env);

        if let Some(root) = &overrides.root {
            figment = figment.merge(Serialized::default("root", root));
        }
        if let Some(examples_dir) = &overrides.examples_dir {
            figment = figment.merge(Serialized::default("examplesDir", examples_dir));
        }
        if let Some(host) = &overrides.host {
            figment = figment.merge(Serialized::default("server.host", host));
        }
        if let Some(port) = overrides.port {
            figment = figment.merge(Serialized::default("server.port", port));
        }
        if overrides.open {
            figment = figment.merge(Serialized::default("server.open", true));
        }

        let mut config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        if config.root.is_relative() {
            config.root = std::env::current_dir()?.join(&config.root);
        }

        Ok(config)
    }

    /// Locate the config file: `--config` if given (must exist), otherwise
    /// `sandbox.config.json` in the effective root (CLI, then `SANDBOX_ROOT`,
    /// then the working directory) when present.
    fn config_file(overrides: &ConfigOverrides, env: &Figment) -> Result<Option<PathBuf>> {
        if let Some(path) = &overrides.config {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            return Ok(Some(path.clone()));
        }

        let root = overrides
            .root
            .clone()
            .or_else(|| env.extract_inner::<PathBuf>("root").ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let default_path = root.join(CONFIG_FILE_NAME);
        Ok(default_path.is_file().then_some(default_path))
    }
}

/// `SANDBOX_*` variables as a provider keyed by camelCase config paths.
///
/// `SANDBOX_EXAMPLES_DIR`, `SANDBOX_SERVER__PORT`, `SANDBOX_SERVER__OPEN_PATH`...
/// Values are parsed into their most specific type, so `8031` is a number
/// and `true` a boolean.
fn env_overrides() -> Figment {
    Env::prefixed("SANDBOX_")
        .iter()
        .fold(Figment::new(), |figment, (key, value)| {
            let key = env_key(key.as_str());
            let value = value
                .parse::<Value>()
                .unwrap_or_else(|_| Value::from(value.clone()));
            figment.merge(Serialized::default(&key, value))
        })
}

/// Map an environment variable suffix onto a config key path.
///
/// `__` separates nesting levels and each level is converted to camelCase,
/// so `SERVER__OPEN_PATH` becomes `server.openPath`.
fn env_key(key: &str) -> String {
    key.split("__")
        .map(|segment| {
            let mut out = String::with_capacity(segment.len());
            for (i, word) in segment.split('_').filter(|w| !w.is_empty()).enumerate() {
                let word = word.to_ascii_lowercase();
                if i == 0 {
                    out.push_str(&word);
                } else {
                    let mut chars = word.chars();
                    if let Some(first) = chars.next() {
                        out.push(first.to_ascii_uppercase());
                        out.push_str(chars.as_str());
                    }
                }
            }
            out
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::env_key;

    #[test]
    fn test_env_key() {
        assert_eq!(env_key("ROOT"), "root");
        assert_eq!(env_key("EXAMPLES_DIR"), "examplesDir");
        assert_eq!(env_key("SERVER__PORT"), "server.port");
        assert_eq!(env_key("SERVER__OPEN_PATH"), "server.openPath");
        assert_eq!(env_key("fs__strict"), "fs.strict");
    }
}
