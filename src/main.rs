use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Result;
use clap::Parser;

use leadme_server::{
    log::init_tracing, rate_limit::RateLimitConfig, storage::LocalStorage, web::start_web_server,
    Opts,
};

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    init_tracing(opts.log);

    let storage = LocalStorage::try_new(&opts.data_dir)?;
    let rate_limit = RateLimitConfig::per_minute(opts.rate_limit);

    let socket_address = SocketAddr::from_str(&opts.listen)?;
    start_web_server(storage, rate_limit, socket_address).await?;
    Ok(())
}
