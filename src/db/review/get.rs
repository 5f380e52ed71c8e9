use sqlx::PgPool;

use crate::{errors::AppError, models::Review};

const REVIEW_COLUMNS: &str = "id, elective_module, elective_code, academic_year, semester, ratings, \
     rating_reason, tldr_experiences, assignment_review, assignment_weightage, life_hacks";

pub async fn get_pending_review(id: i64, postgres: &PgPool) -> Result<Option<Review>, AppError> {
    let review = sqlx::query_as::<_, Review>(&format!(
        "SELECT {REVIEW_COLUMNS} FROM pending_reviews WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch pending review {}: {}", id, e)))?;

    Ok(review)
}

pub async fn get_latest_pending_review(postgres: &PgPool) -> Result<Option<Review>, AppError> {
    let review = sqlx::query_as::<_, Review>(&format!(
        "SELECT {REVIEW_COLUMNS}
            FROM pending_reviews
            ORDER BY id DESC
            LIMIT 1"
    ))
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch latest pending review: {}", e)))?;

    Ok(review)
}

pub async fn get_approved_review(id: i64, postgres: &PgPool) -> Result<Option<Review>, AppError> {
    let review = sqlx::query_as::<_, Review>(&format!(
        "SELECT {REVIEW_COLUMNS} FROM user_reviews WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch approved review {}: {}", id, e)))?;

    Ok(review)
}
