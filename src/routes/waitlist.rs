use axum::extract::State;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::WaitlistEntry;
use crate::state::SharedState;

/// All waitlist entries, newest first, as consumed by the admin page.
pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<WaitlistEntry>>, AppError> {
    let entries = db::waitlist::list_newest_first(&state.pool).await?;
    Ok(Json(entries))
}
