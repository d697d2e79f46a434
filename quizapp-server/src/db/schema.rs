//! Table creation for questions and choices
//!
//! Idempotent: every statement uses IF NOT EXISTS, so this runs on each
//! startup. There is no schema versioning.

use sqlx::PgPool;

use super::DbError;

/// Create the `questions` and `choices` tables if they don't exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring quiz schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question_text TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS choices (
            id SERIAL PRIMARY KEY,
            choice_text TEXT NOT NULL,
            is_correct BOOLEAN NOT NULL,
            question_id INTEGER NOT NULL REFERENCES questions(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_choices_question ON choices(question_id)")
        .execute(pool)
        .await?;

    tracing::info!("Quiz schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first run");
        ensure_schema(&pool).await.expect("second run");
    }
}
