// src/system/config.rs

//! Runtime configuration: where to audit, which system logs to watch and
//! how to word negative statuses.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILENAME, DEFAULT_AUDIT_LOG, DEFAULT_SYSLOG_PATHS,
};
use crate::core::status::CliMode;

/// Failure to load the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but cannot be read.
    #[error("Could not read configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys.
    #[error("Invalid configuration file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// A `~` or `$VAR` in a path could not be expanded.
    #[error("Could not expand path '{path}': {message}")]
    Expand { path: String, message: String },
}

/// Settings read from `sedcli.toml`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Append-only audit log receiving one line per executed command.
    pub audit_log: PathBuf,
    /// Whether audit lines are written at all.
    pub audit: bool,
    /// System log candidates; the first readable one is snapshotted.
    pub syslog_paths: Vec<PathBuf>,
    /// Wording of status reports.
    pub mode: CliMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_log: PathBuf::from(DEFAULT_AUDIT_LOG),
            audit: true,
            syslog_paths: DEFAULT_SYSLOG_PATHS.iter().map(PathBuf::from).collect(),
            mode: CliMode::Standard,
        }
    }
}

fn expand(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw).map_err(|e| ConfigError::Expand {
        path: raw.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

impl Config {
    /// Parses a TOML document, expanding `~` and `$VAR` in paths.
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            source: e,
        })?;
        config.audit_log = expand(&config.audit_log)?;
        config.syslog_paths = config
            .syslog_paths
            .iter()
            .map(|path| expand(path))
            .collect::<Result<_, _>>()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No configuration at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: origin.clone(),
            source: e,
        })?;
        Self::from_toml(&content, &origin)
    }

    /// Loads the configuration named by `SEDCLI_CONFIG`, else the one in the
    /// user configuration directory, else the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Where [`Config::load`] looks for its file.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(explicit));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.audit_log, PathBuf::from("/var/log/sedcli.log"));
        assert!(config.audit);
        assert_eq!(config.syslog_paths.len(), 2);
        assert_eq!(config.mode, CliMode::Standard);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = Config::from_toml("mode = \"kmip\"\naudit = false\n", "inline").unwrap();
        assert_eq!(config.mode, CliMode::Kmip);
        assert!(!config.audit);
        assert_eq!(config.audit_log, PathBuf::from("/var/log/sedcli.log"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Config::from_toml("colour = true\n", "inline");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = PathBuf::from("non_existent_sedcli_config_for_test.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "audit_log = \"/tmp/sedcli-audit.log\"").unwrap();
        writeln!(file, "syslog_paths = [\"/tmp/messages\"]").unwrap();
        file.flush().unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.audit_log, PathBuf::from("/tmp/sedcli-audit.log"));
        assert_eq!(config.syslog_paths, vec![PathBuf::from("/tmp/messages")]);
    }
}
