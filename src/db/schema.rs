use sqlx::PgPool;

use crate::errors::AppError;

const CREATE_PENDING: &str = "CREATE TABLE IF NOT EXISTS pending_reviews (
    id BIGSERIAL PRIMARY KEY,
    elective_module TEXT NOT NULL,
    elective_code TEXT NOT NULL,
    academic_year TEXT NOT NULL,
    semester TEXT NOT NULL,
    ratings INTEGER NOT NULL CHECK (ratings BETWEEN 1 AND 5),
    rating_reason TEXT NOT NULL,
    tldr_experiences TEXT NOT NULL,
    assignment_review TEXT NOT NULL,
    assignment_weightage TEXT NOT NULL,
    life_hacks TEXT NOT NULL
)";

// Approved rows keep the id they were given while pending.
const CREATE_APPROVED: &str = "CREATE TABLE IF NOT EXISTS user_reviews (
    id BIGINT PRIMARY KEY,
    elective_module TEXT NOT NULL,
    elective_code TEXT NOT NULL,
    academic_year TEXT NOT NULL,
    semester TEXT NOT NULL,
    ratings INTEGER NOT NULL CHECK (ratings BETWEEN 1 AND 5),
    rating_reason TEXT NOT NULL,
    tldr_experiences TEXT NOT NULL,
    assignment_review TEXT NOT NULL,
    assignment_weightage TEXT NOT NULL,
    life_hacks TEXT NOT NULL
)";

pub async fn ensure_schema(postgres: &PgPool) -> Result<(), AppError> {
    for statement in [CREATE_PENDING, CREATE_APPROVED] {
        sqlx::query(statement)
            .execute(postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to create schema: {}", e)))?;
    }

    tracing::info!("Review tables ready");
    Ok(())
}
