//! YAML configuration files.
//!
//! ```yaml
//! options:
//!   font_name: Arial
//!   font_size: 12
//!   line_spacing: "1.15"
//!   insert_toc: true
//! refresh:
//!   program: soffice
//!   args: ["--headless", "macro:///Standard.Toc.Update({path})"]
//! ```

use crate::format::error::ConfigError;
use crate::format::options::FormattingOptions;
use crate::format::refresh::CommandRefresher;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Formatter configuration as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub options: FormattingOptions,
    /// External TOC refresh command; none leaves the field for the reader to update
    pub refresh: Option<CommandRefresher>,
}

impl FormatterConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        config.options.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    /// Serialize as YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Yaml(e.to_string()))
    }
}
