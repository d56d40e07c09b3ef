use std::path::PathBuf;

/// Environment variable overriding the base directory.
pub const HOME_ENV: &str = "A3S_CRON_HOME";

/// Returns the base directory for cron-explain data.
///
/// Uses `$A3S_CRON_HOME` if set, otherwise defaults to `~/.a3s/cron`.
pub fn cron_home() -> PathBuf {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".a3s")
        .join("cron")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    cron_home().join("config.toml")
}
