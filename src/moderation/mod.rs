//! The approval workflow.
//!
//! A review is submitted into Pending, presented to the moderator chat as a
//! prompt with Approve/Reject buttons, and resolved by the callback those
//! buttons produce:
//!
//! ```text
//! Pending --approve--> Approved   (moved to user_reviews, announced publicly)
//! Pending --reject---> Deleted    (removed from pending_reviews)
//! ```
//!
//! Both targets are terminal. A callback for an id that is no longer
//! pending changes nothing, which is what makes repeated button presses
//! harmless.

pub mod decision;
pub mod notifier;
pub mod submission;

pub use decision::{DecisionOutcome, handle_callback};
pub use notifier::{announce, announce_approved};
pub use submission::{send_for_approval, submit_review};
