use crate::config::SandboxConfig;
use crate::error::{ConfigError, Result};
use std::net::IpAddr;

/// Resolve a configured host to an IP address.
///
/// Accepts any IP literal plus `localhost`.
pub fn parse_host(host: &str) -> Result<IpAddr> {
    if host.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::from([127, 0, 0, 1]));
    }

    host.parse::<IpAddr>().map_err(|_| {
        ConfigError::InvalidValue {
            field: "server.host".to_string(),
            value: host.to_string(),
            hint: "Use an IP address such as 127.0.0.1 or 0.0.0.0, or 'localhost'".to_string(),
        }
        .into()
    })
}

/// Whether `segment` can appear in a URL path without percent-encoding.
fn is_url_safe_segment(segment: &str) -> bool {
    segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

impl SandboxConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.examples_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "examplesDir".to_string(),
                hint: "Point examplesDir at the folder holding your sandboxes".to_string(),
            }
            .into());
        }

        let mount = self.examples_mount();
        if !is_url_safe_segment(&mount[1..]) {
            return Err(ConfigError::InvalidValue {
                field: "examplesDir".to_string(),
                value: self.examples_dir.display().to_string(),
                hint: "The examples folder name is used as a URL prefix; use only letters, \
                       digits, '-', '_', '.' and '~'"
                    .to_string(),
            }
            .into());
        }
        if mount == "/" || mount == "/index" || mount.starts_with("/@") {
            return Err(ConfigError::InvalidValue {
                field: "examplesDir".to_string(),
                value: self.examples_dir.display().to_string(),
                hint: "The examples folder name is used as a URL prefix and must not be \
                       empty, 'index' or start with '@'"
                    .to_string(),
            }
            .into());
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: "0".to_string(),
                hint: "Use a port between 1 and 65535".to_string(),
            }
            .into());
        }

        parse_host(&self.server.host)?;

        if !self.server.open_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "server.openPath".to_string(),
                value: self.server.open_path.clone(),
                hint: "Must be an absolute URL path such as '/' or '/counter/'".to_string(),
            }
            .into());
        }

        if self.fs.strict && !self.examples_root().starts_with(self.project_root()) {
            return Err(ConfigError::InvalidValue {
                field: "examplesDir".to_string(),
                value: self.examples_root().display().to_string(),
                hint: "fs.strict requires the examples folder to live inside the project root"
                    .to_string(),
            }
            .into());
        }

        Ok(())
    }
}
