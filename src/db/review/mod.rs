pub mod delete;
pub mod get;
pub mod post;

pub use delete::delete_pending_review;
pub use get::{get_approved_review, get_latest_pending_review, get_pending_review};
pub use post::{approve_pending_review, insert_pending_review};
