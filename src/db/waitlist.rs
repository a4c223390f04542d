use sqlx::PgPool;

use crate::models::WaitlistEntry;

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    company: Option<&str>,
    interest: Option<&str>,
) -> Result<WaitlistEntry, sqlx::Error> {
    sqlx::query_as::<_, WaitlistEntry>(
        "INSERT INTO waitlist (name, email, company, interest)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(company)
    .bind(interest)
    .fetch_one(pool)
    .await
}

/// All entries, newest first. The admin listing renders these unpaginated.
pub async fn list_newest_first(pool: &PgPool) -> Result<Vec<WaitlistEntry>, sqlx::Error> {
    sqlx::query_as::<_, WaitlistEntry>("SELECT * FROM waitlist ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waitlist")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
