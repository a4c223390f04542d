use sqlx::PgPool;

use crate::models::ContactSubmission;

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    company: &str,
    message: &str,
) -> Result<ContactSubmission, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        "INSERT INTO contact_submissions (name, email, company, message)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(company)
    .bind(message)
    .fetch_one(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
