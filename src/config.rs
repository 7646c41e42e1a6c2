use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use crate::error::ConfigError;
use crate::logging::DEFAULT_LOG_DIR;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 260;
pub const DEFAULT_TOAST_MS: u64 = 2600;
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub server: Option<String>,
    pub debounce_ms: Option<u64>,
    pub toast_ms: Option<u64>,
    pub enumerate_users: Option<bool>,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: String,
    pub debounce: Duration,
    pub toast: Duration,
    pub enumerate_users: bool,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            server: args
                .server
                .clone()
                .or(file.server)
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            debounce: Duration::from_millis(
                args.debounce_ms.or(file.debounce_ms).unwrap_or(DEFAULT_DEBOUNCE_MS),
            ),
            toast: Duration::from_millis(args.toast_ms.or(file.toast_ms).unwrap_or(DEFAULT_TOAST_MS)),
            enumerate_users: args.enumerate_users || file.enumerate_users.unwrap_or(false),
            log_dir: args
                .log_dir
                .clone()
                .or(file.log_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("pooprequests.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("pooprequests").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = Config::resolve(None, &Args::default());
        assert_eq!(config.server, DEFAULT_SERVER);
        assert_eq!(config.debounce, Duration::from_millis(260));
        assert_eq!(config.toast, Duration::from_millis(2600));
        assert!(!config.enumerate_users);
        assert_eq!(config.log_dir, PathBuf::from(".logs"));
    }

    #[test]
    fn flags_override_file() {
        let file: FileConfig = toml::from_str(
            r#"
            server = "http://requests.lan"
            debounce_ms = 300
            enumerate_users = true
            "#,
        )
        .unwrap();
        let args = Args {
            server: Some("http://other:8080".into()),
            ..Args::default()
        };

        let config = Config::resolve(Some(file), &args);
        assert_eq!(config.server, "http://other:8080");
        assert_eq!(config.debounce, Duration::from_millis(300));
        assert!(config.enumerate_users);
    }

    #[test]
    fn unknown_value_types_fail_to_parse() {
        let err = toml::from_str::<FileConfig>("debounce_ms = \"fast\"").unwrap_err();
        assert!(ConfigError::from(err).to_string().starts_with("failed to parse"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
