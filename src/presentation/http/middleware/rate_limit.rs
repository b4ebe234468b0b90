// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tracing::warn;

pub type IpRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// One request replenished every `REPLENISH_SECS` seconds per client address.
const REPLENISH_SECS: u64 = 2;
const BURST: u32 = 5;

/// Per-IP limiter for the auth endpoints and the public contact form.
///
/// The client address comes from `X-Forwarded-For`/`X-Real-IP`/`Forwarded`
/// and falls back to the peer address, so the server must be started with
/// connect info.
pub fn public_write_limit() -> Option<IpRateLimit> {
    static LIMITER: OnceLock<Option<IpRateLimit>> = OnceLock::new();

    LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_SECS);
            builder.burst_size(BURST);
            let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
                warn!("rate limit configuration rejected; requests will not be throttled");
                return None;
            };
            Some(GovernorLayer::new(config))
        })
        .clone()
}
