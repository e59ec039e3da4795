use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub mod error;
pub mod handlers;
pub mod listing;
pub mod log;
pub mod rate_limit;
pub mod release;
pub mod storage;
pub mod version;
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;

/// A distribution server for LeadMe application releases
#[derive(Parser)]
#[command(name = "leadme-server")]
#[command(bin_name = "leadme-server")]
pub struct Opts {
    /// listen address
    #[arg(
        short,
        long,
        default_value = "0.0.0.0:8082",
        env = "LEADME_SERVER_LISTEN"
    )]
    pub listen: String,
    /// directory holding the application release trees
    #[arg(
        short,
        long,
        default_value = "applications",
        env = "LEADME_SERVER_DATA_DIR"
    )]
    pub data_dir: PathBuf,
    /// requests allowed per client per minute
    #[arg(long, default_value_t = 120, env = "LEADME_SERVER_RATE_LIMIT")]
    pub rate_limit: u32,
    /// logging level (Off/Error/Warn/Info/Debug/Trace)
    #[arg(long, default_value = "Info")]
    pub log: LevelFilter,
}
