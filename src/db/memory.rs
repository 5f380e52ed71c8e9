//! In-memory implementation of `ReviewStore`.
//!
//! Mirrors the Postgres tables with two ordered maps. Ids come from a
//! counter that only moves forward, so deleted ids are never handed out
//! again. All state is lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ReviewStore;
use crate::{
    errors::AppError,
    models::{NewReview, Review},
};

#[derive(Default)]
struct Collections {
    last_id: i64,
    pending: BTreeMap<i64, Review>,
    approved: BTreeMap<i64, Review>,
}

#[derive(Default)]
pub struct MemoryReviewStore {
    inner: RwLock<Collections>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn pending_ids(&self) -> Vec<i64> {
        self.inner.read().await.pending.keys().copied().collect()
    }

    pub async fn approved_ids(&self) -> Vec<i64> {
        self.inner.read().await.approved.keys().copied().collect()
    }
}

#[async_trait]
impl ReviewStore for MemoryReviewStore {
    async fn insert_pending(&self, review: NewReview) -> Result<Review, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let review = review.with_id(inner.last_id);
        inner.pending.insert(review.id, review.clone());
        Ok(review)
    }

    async fn get_pending(&self, id: i64) -> Result<Option<Review>, AppError> {
        Ok(self.inner.read().await.pending.get(&id).cloned())
    }

    async fn latest_pending(&self) -> Result<Option<Review>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .pending
            .last_key_value()
            .map(|(_, review)| review.clone()))
    }

    async fn approve(&self, review: &Review) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        if inner.pending.remove(&review.id).is_none() {
            return Ok(false);
        }
        inner.approved.insert(review.id, review.clone());
        Ok(true)
    }

    async fn delete_pending(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.pending.remove(&id).is_some())
    }

    async fn get_approved(&self, id: i64) -> Result<Option<Review>, AppError> {
        Ok(self.inner.read().await.approved.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_review(code: &str) -> NewReview {
        NewReview {
            elective_module: "Module".into(),
            elective_code: code.into(),
            academic_year: "2024".into(),
            semester: "1".into(),
            ratings: 3,
            rating_reason: "reason".into(),
            tldr_experiences: "tldr".into(),
            assignment_review: "assignments".into(),
            assignment_weightage: "50%".into(),
            life_hacks: "hacks".into(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = MemoryReviewStore::new();
        let first = store.insert_pending(new_review("A1")).await.unwrap();
        store.delete_pending(first.id).await.unwrap();
        let second = store.insert_pending(new_review("A2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_latest_pending_is_highest_id() {
        let store = MemoryReviewStore::new();
        store.insert_pending(new_review("A1")).await.unwrap();
        store.insert_pending(new_review("A2")).await.unwrap();

        let latest = store.latest_pending().await.unwrap().unwrap();
        assert_eq!(latest.elective_code, "A2");
    }

    #[tokio::test]
    async fn test_approve_moves_between_collections() {
        let store = MemoryReviewStore::new();
        let review = store.insert_pending(new_review("A1")).await.unwrap();

        assert!(store.approve(&review).await.unwrap());
        assert!(store.pending_ids().await.is_empty());
        assert_eq!(store.get_approved(review.id).await.unwrap(), Some(review.clone()));

        // A second move finds nothing left to move.
        assert!(!store.approve(&review).await.unwrap());
        assert_eq!(store.approved_ids().await, vec![review.id]);
    }
}
