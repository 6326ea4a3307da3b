//! Terminal-client configuration.
use std::env;
use std::path::PathBuf;

/// Settings specific to the terminal client, separate from
/// [`runtime::RuntimeConfig`].
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Write logs to a daily rolling file here instead of stderr.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HAND_CRICKET_LOG_DIR` - Log file directory (default: log to stderr)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("HAND_CRICKET_LOG_DIR").filter(|v| !v.is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}
