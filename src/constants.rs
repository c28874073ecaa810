// src/constants.rs

//! Exit codes, layout widths, reserved option names and default paths.

/// Exit status of a successful parse or help request.
pub const SUCCESS: i32 = 0;

/// Exit status of every parse-time rejection.
pub const FAILURE: i32 = 1;

/// Indentation used by every help listing.
pub const PADDING: &str = "   ";

/// Widest rendered option cell (`--name <arg>`); longer cells are cut.
pub const MAX_OPT_HELP_LEN: usize = 39;

/// Long name of the help pseudo-option (`--help`).
pub const HELP_LONG: &str = "help";
/// Short name of the help pseudo-option (`-H`).
pub const HELP_SHORT: char = 'H';

/// Long name of the version pseudo-option (`--version`).
pub const VERSION_LONG: &str = "version";
/// Short name of the version pseudo-option (`-V`).
pub const VERSION_SHORT: char = 'V';

/// Default append-only audit log.
pub const DEFAULT_AUDIT_LOG: &str = "/var/log/sedcli.log";

/// System log candidates, tried in order (the second covers Debian-based systems).
pub const DEFAULT_SYSLOG_PATHS: &[&str] = &["/var/log/messages", "/var/log/syslog"];

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "SEDCLI_CONFIG";

/// Directory of the configuration, under the user config dir.
pub const CONFIG_DIR_NAME: &str = "sedcli";
/// File name of the configuration.
pub const CONFIG_FILENAME: &str = "sedcli.toml";

// Negated by handlers; the status reporter gives these a dedicated message.

/// Invalid argument.
pub const EINVAL: i32 = 22;
/// No such device.
pub const ENODEV: i32 = 19;
/// Out of memory.
pub const ENOMEM: i32 = 12;

/// Generic failure reported by the key-management (KMIP) backend.
pub const KMIP_FAILURE: i32 = -1;
/// Lowest success status of the KMIP backend; every status from here up is a success.
pub const KMIP_SUCCESS: i32 = 0;
/// KMIP success carrying the news that the server connection was established.
pub const KMIP_SUCCESS_CONNECTED: i32 = 1;
