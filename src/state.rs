use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::rate_limit::SubmissionRateLimiter;
use crate::relay::RelayClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub relay: RelayClient,
    pub submission_limiter: SubmissionRateLimiter,
}
