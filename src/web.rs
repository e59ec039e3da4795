use std::net::SocketAddr;

use anyhow::Result;
use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, services::ServeDir};
use tracing::level_filters::LevelFilter;

use crate::{
    handlers::{
        folder_entry::download_folder_entry,
        folder_list::download_folder,
        health::{init_start_time, live_check},
        launcher::{launcher_archive, launcher_version},
    },
    log::print_request_response,
    rate_limit::{init_rate_limiter, rate_limit, RateLimitConfig, RateLimiter},
    storage::{init_storage, LocalStorage, STORAGE},
};

pub async fn start_web_server(
    storage: LocalStorage,
    rate_limit_config: RateLimitConfig,
    socket_address: SocketAddr,
) -> Result<()> {
    init_storage(storage);
    init_rate_limiter(RateLimiter::with_config(rate_limit_config));
    init_start_time();

    let release_dir = STORAGE.get().unwrap().release_dir();

    // -------------------------------------
    // Create routing structure
    // -------------------------------------
    // The root listing and the sub-path lookup are two separate routes on
    // purpose: only the root listing is ever filtered.
    let mut app = Router::new()
        .route("/download-folder", get(download_folder))
        .route("/download-folder/*path", get(download_folder_entry))
        .route("/launcher/version", get(launcher_version))
        .route("/launcher/download", get(launcher_archive))
        .route("/health/live", get(live_check))
        .nest_service("/static/electron-launcher", ServeDir::new(release_dir))
        .layer(middleware::from_fn(rate_limit))
        .layer(CompressionLayer::new());

    // -----------------------------------------------
    // Extra logging requested. Handlers will log too
    // ----------------------------------------------
    let level_filter = LevelFilter::current();
    match level_filter {
        LevelFilter::TRACE | LevelFilter::DEBUG => {
            app = app.layer(middleware::from_fn(print_request_response));
        }
        _ => {}
    };

    tracing::info!("leadme_server listening on {}", &socket_address);
    axum::serve(
        TcpListener::bind(socket_address).await?,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
