use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{NewReview, Review},
};

pub async fn insert_pending_review(review: NewReview, postgres: &PgPool) -> Result<Review, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO pending_reviews (elective_module, elective_code, academic_year, semester,
            ratings, rating_reason, tldr_experiences, assignment_review, assignment_weightage,
            life_hacks)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id",
    )
    .bind(&review.elective_module)
    .bind(&review.elective_code)
    .bind(&review.academic_year)
    .bind(&review.semester)
    .bind(review.ratings)
    .bind(&review.rating_reason)
    .bind(&review.tldr_experiences)
    .bind(&review.assignment_review)
    .bind(&review.assignment_weightage)
    .bind(&review.life_hacks)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert pending review: {}", e)))?;

    tracing::info!("Stored pending review {} for {}", id, review.elective_code);

    Ok(review.with_id(id))
}

/// Copies the review into `user_reviews` and removes it from `pending_reviews`
/// in one transaction. Returns `false` if the pending row was already gone.
pub async fn approve_pending_review(review: &Review, postgres: &PgPool) -> Result<bool, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to start transaction: {}", e)))?;

    let removed = sqlx::query("DELETE FROM pending_reviews WHERE id = $1")
        .bind(review.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to remove pending review: {}", e)))?
        .rows_affected();

    if removed == 0 {
        tx.rollback()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to roll back: {}", e)))?;
        return Ok(false);
    }

    sqlx::query(
        "INSERT INTO user_reviews (id, elective_module, elective_code, academic_year, semester,
            ratings, rating_reason, tldr_experiences, assignment_review, assignment_weightage,
            life_hacks)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(review.id)
    .bind(&review.elective_module)
    .bind(&review.elective_code)
    .bind(&review.academic_year)
    .bind(&review.semester)
    .bind(review.ratings)
    .bind(&review.rating_reason)
    .bind(&review.tldr_experiences)
    .bind(&review.assignment_review)
    .bind(&review.assignment_weightage)
    .bind(&review.life_hacks)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert approved review: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit approval: {}", e)))?;

    Ok(true)
}
