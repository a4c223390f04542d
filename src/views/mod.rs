pub mod admin;
pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(pages::landing))
        .route("/waitlist", get(pages::waitlist))
        .route("/partners", get(pages::partners))
        .route("/contact", get(pages::contact))
        .route("/admin", get(admin::entries_page))
}
