use std::net::IpAddr;

use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

use super::honeypot;
use super::schema::{RawValues, ValidatedValues};
use super::variants::{Collection, Destination, FormVariant};

#[derive(Debug)]
pub enum Outcome {
    /// Stored in the managed data store.
    Created { id: Uuid },
    /// Handed to the hosted form relay.
    Forwarded,
    /// Honeypot tripped; accepted silently, nothing dispatched.
    Discarded,
}

/// Run one submission through the pipeline: rate limit, honeypot,
/// validation, then exactly one destination call.
pub async fn run(
    state: &SharedState,
    variant: &FormVariant,
    peer_ip: IpAddr,
    raw: RawValues,
) -> Result<Outcome, AppError> {
    if let Err(retry_after) = state.submission_limiter.check(
        variant.slug,
        peer_ip,
        state.config.submission_rate_limit,
        state.config.submission_rate_window_secs,
    ) {
        return Err(AppError::RateLimited(retry_after));
    }

    if honeypot::is_spam(&raw) {
        tracing::debug!("Honeypot tripped on {} from {peer_ip}", variant.slug);
        return Ok(Outcome::Discarded);
    }

    let values = variant.schema.validate(&raw).map_err(AppError::Validation)?;

    match variant.destination {
        Destination::Store(collection) => {
            let id = insert(state, collection, &values).await?;
            Ok(Outcome::Created { id })
        }
        Destination::Relay => {
            state.relay.submit(&state.config.relay_url, &values).await?;
            Ok(Outcome::Forwarded)
        }
    }
}

async fn insert(
    state: &SharedState,
    collection: Collection,
    values: &ValidatedValues,
) -> Result<Uuid, AppError> {
    match collection {
        Collection::Waitlist => {
            let entry = db::waitlist::create(
                &state.pool,
                required(values, "name")?,
                required(values, "email")?,
                values.get("company"),
                values.get("interest"),
            )
            .await?;
            Ok(entry.id)
        }
        Collection::ContactSubmissions => {
            let submission = db::contact::create(
                &state.pool,
                required(values, "name")?,
                required(values, "email")?,
                required(values, "company")?,
                required(values, "message")?,
            )
            .await?;
            Ok(submission.id)
        }
    }
}

// Required fields are guaranteed present after validation; a miss here is
// a variant schema out of step with its table.
fn required<'a>(values: &'a ValidatedValues, name: &str) -> Result<&'a str, AppError> {
    values
        .get(name)
        .ok_or_else(|| AppError::Internal(format!("Validated field missing: {name}")))
}
