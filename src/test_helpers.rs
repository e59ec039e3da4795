use std::{
    env,
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use axum::{
    body::Body,
    http::{Method, Request},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    rate_limit::{init_rate_limiter, RateLimitConfig, RateLimiter},
    storage::{init_storage, LocalStorage},
};

// ------------------------------------------------
// test facility prevent repeated calls in tests
// ------------------------------------------------

/// Common GET-style request against the test router.
pub(crate) fn request_uri_for_test(uri: &str, method: Method) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap()
}

// ------------------------------------------------
// test facility for tracing
// ------------------------------------------------

pub(crate) fn init_tracing() {
    init_mutex();
}

/// When we initialize the global tracing subscriber, this must only happen once.
/// During tests, each test will initialize, to make sure we have at least tracing once.
/// This means that the init() call must be robust for this.
/// Since we do not need this in production code, it is located in the test code.
static TRACER: OnceLock<Mutex<usize>> = OnceLock::new();
fn init_mutex() {
    TRACER.get_or_init(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
        Mutex::new(0)
    });
}

// ------------------------------------------------
// test facility for creating a minimum test environment
// ------------------------------------------------

pub(crate) fn init_test_environment() {
    init_tracing();
    init_static_storage();
    init_static_rate_limiter();
}

fn init_static_storage() {
    let cwd = env::current_dir().unwrap();
    let data_dir = PathBuf::new()
        .join(cwd)
        .join("tests")
        .join("fixtures")
        .join("test_data")
        .join("applications");
    tracing::debug!("[test_init_static_storage] data dir: {:?}", &data_dir);
    let local_storage = LocalStorage::try_new(&data_dir).unwrap();
    init_storage(local_storage);
}

fn init_static_rate_limiter() {
    // generous budget so handler tests never trip the limiter
    let limiter = RateLimiter::with_config(RateLimitConfig::per_minute(100_000));
    init_rate_limiter(limiter);
}
