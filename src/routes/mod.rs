pub mod forms;
pub mod waitlist;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/forms/{variant}", post(forms::submit))
        .route("/api/v1/waitlist", get(waitlist::list))
}
