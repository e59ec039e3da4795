use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{OnceLock, RwLock};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiErrorKind;

// Static storage of the limiter state
pub static RATE_LIMITER: OnceLock<RateLimiter> = OnceLock::new();

pub fn init_rate_limiter(limiter: RateLimiter) {
    let _ = RATE_LIMITER.get_or_init(|| limiter);
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Maximum requests per client within one window
    pub max_requests: u32,
    /// Refill window duration
    pub window: Duration,
}

impl RateLimitConfig {
    pub fn per_minute(max_requests: u32) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(60),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::per_minute(120)
    }
}

/// Token bucket, refilled continuously based on elapsed time.
#[derive(Debug, Clone)]
struct TokenBucket {
    capacity: u32,
    tokens: u32,
    last_refill: Instant,
    refill_rate: u32,
    window: Duration,
}

impl TokenBucket {
    fn new(capacity: u32, refill_rate: u32, window: Duration) -> Self {
        Self {
            capacity,
            tokens: capacity,
            last_refill: Instant::now(),
            refill_rate,
            window,
        }
    }

    fn try_consume(&mut self, tokens: u32) -> bool {
        self.refill();

        if self.tokens >= tokens {
            self.tokens -= tokens;
            true
        } else {
            false
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);

        let tokens_per_sec = f64::from(self.refill_rate) / self.window.as_secs_f64();
        let tokens_to_add = (tokens_per_sec * elapsed.as_secs_f64()) as u32;

        if tokens_to_add > 0 {
            self.tokens = self.capacity.min(self.tokens + tokens_to_add);
            self.last_refill = now;
        }
    }
}

/// Per-client request budget, keyed by peer address.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: RwLock<HashMap<String, TokenBucket>>,
}

impl RateLimiter {
    pub fn with_config(config: RateLimitConfig) -> Self {
        Self {
            config,
            buckets: RwLock::new(HashMap::new()),
        }
    }

    /// Takes one token from the client's bucket. `false` means the client
    /// exhausted its budget for the current window.
    pub fn try_acquire(&self, client: &str) -> bool {
        let mut buckets = self.buckets.write().expect("rate limiter lock poisoned");
        let bucket = buckets.entry(client.to_string()).or_insert_with(|| {
            TokenBucket::new(
                self.config.max_requests,
                self.config.max_requests,
                self.config.window,
            )
        });
        bucket.try_consume(1)
    }
}

/// Middleware refusing requests from clients that exceed their budget.
pub async fn rate_limit(
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client = connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".to_string());

    match RATE_LIMITER.get() {
        Some(limiter) if !limiter.try_acquire(&client) => {
            tracing::warn!("rate limit exceeded for {client}");
            ApiErrorKind::TooManyRequests.into_response()
        }
        _ => next.run(request).await,
    }
}
