use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::db;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "admin.html")]
#[allow(dead_code)]
struct AdminTemplate {
    entries: Vec<EntryCard>,
    total: usize,
}

#[allow(dead_code)]
struct EntryCard {
    name: String,
    email: String,
    company: Option<String>,
    interest: Option<String>,
    created_at: String,
}

/// Waitlist entries, newest first. A fetch failure is logged and renders
/// as the empty state rather than an error page.
pub async fn entries_page(State(state): State<SharedState>) -> impl IntoResponse {
    let rows = match db::waitlist::list_newest_first(&state.pool).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch waitlist entries: {e}");
            Vec::new()
        }
    };

    let entries: Vec<EntryCard> = rows
        .into_iter()
        .map(|row| EntryCard {
            name: row.name,
            email: row.email,
            company: row.company,
            interest: row.interest,
            created_at: row.created_at.format("%B %-d, %Y %H:%M").to_string(),
        })
        .collect();

    let total = entries.len();
    let template = AdminTemplate { entries, total };
    Html(template.render().unwrap_or_default())
}
