use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "pooprequests",
    about = "Search the catalog and request movies, shows, books and audiobooks from the terminal",
    long_about = None,
    version,
)]
pub struct Args {
    /// Base URL of the request service [default: http://127.0.0.1:5000]
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Path to TOML config file (overrides default search: ./pooprequests.toml, ~/.config/pooprequests/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quiet window after the last keystroke before a search runs [default: 260]
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// How long a notification stays on screen [default: 2600]
    #[arg(long, value_name = "MS")]
    pub toast_ms: Option<u64>,

    /// List backend users after signing in
    #[arg(long)]
    pub enumerate_users: bool,

    /// Directory for log files [default: .logs]
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
