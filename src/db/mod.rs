//! Review persistence.
//!
//! Reviews live in one of two collections: `pending_reviews` while they wait
//! for a moderator, and `user_reviews` once approved. The `ReviewStore` trait
//! hides which backend holds them so handlers can run against Postgres in
//! production and against [`MemoryReviewStore`] in tests.

pub mod memory;
pub mod review;
pub mod schema;

pub use memory::MemoryReviewStore;
pub use schema::ensure_schema;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{NewReview, Review},
};

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Insert into Pending, returning the review with its assigned id.
    async fn insert_pending(&self, review: NewReview) -> Result<Review, AppError>;

    async fn get_pending(&self, id: i64) -> Result<Option<Review>, AppError>;

    /// The most recently inserted pending review (highest id).
    async fn latest_pending(&self) -> Result<Option<Review>, AppError>;

    /// Move a pending review into Approved. Returns `false` when the pending
    /// row no longer exists, in which case nothing is written.
    async fn approve(&self, review: &Review) -> Result<bool, AppError>;

    /// Delete a pending review. Deleting an absent id is not an error.
    async fn delete_pending(&self, id: i64) -> Result<bool, AppError>;

    async fn get_approved(&self, id: i64) -> Result<Option<Review>, AppError>;
}

#[derive(Clone)]
pub struct PgReviewStore {
    postgres: PgPool,
}

impl PgReviewStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn insert_pending(&self, review: NewReview) -> Result<Review, AppError> {
        review::insert_pending_review(review, &self.postgres).await
    }

    async fn get_pending(&self, id: i64) -> Result<Option<Review>, AppError> {
        review::get_pending_review(id, &self.postgres).await
    }

    async fn latest_pending(&self) -> Result<Option<Review>, AppError> {
        review::get_latest_pending_review(&self.postgres).await
    }

    async fn approve(&self, review: &Review) -> Result<bool, AppError> {
        review::approve_pending_review(review, &self.postgres).await
    }

    async fn delete_pending(&self, id: i64) -> Result<bool, AppError> {
        review::delete_pending_review(id, &self.postgres).await
    }

    async fn get_approved(&self, id: i64) -> Result<Option<Review>, AppError> {
        review::get_approved_review(id, &self.postgres).await
    }
}
