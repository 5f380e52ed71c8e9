use sqlx::PgPool;

use crate::errors::AppError;

pub async fn delete_pending_review(id: i64, postgres: &PgPool) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM pending_reviews WHERE id = $1")
        .bind(id)
        .execute(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete pending review {}: {}", id, e)))?;

    Ok(result.rows_affected() > 0)
}
