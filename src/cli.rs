use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hn-pager")]
#[command(about = "Page through Hacker News top stories in the terminal", long_about = None)]
pub struct Cli {
    /// Custom config directory (default: ~/.config/hn-pager)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Page to open on start, counting from 0
    #[arg(short, long, default_value_t = 0, value_name = "N")]
    pub page: usize,

    /// Stories per page (overrides settings.toml)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Base URL of the HN API (overrides settings.toml)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Enable verbose logging (prints log path, sets DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,
}
