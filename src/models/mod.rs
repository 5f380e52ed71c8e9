pub mod callback;
pub mod notification;
pub mod review;

pub use callback::{CallbackEvent, Decision, ReviewAction};
pub use notification::{Announcement, NotifyPayload};
pub use review::{NewReview, Review, ReviewSubmission};
