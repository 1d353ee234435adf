//! Infrastructure constants

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "courserec.toml";

/// Directory name used for config discovery under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "courserec";

/// Environment variable prefix; nested keys use a double underscore
/// (e.g. `COURSEREC__SEARCH__TOP_N`)
pub const CONFIG_ENV_PREFIX: &str = "COURSEREC";

/// Environment variable consulted first for the log filter
pub const LOG_FILTER_ENV: &str = "COURSEREC_LOG";
