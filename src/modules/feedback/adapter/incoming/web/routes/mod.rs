pub mod list_feedback;
pub mod moderate_feedback;
pub mod submit_feedback;

pub use list_feedback::{list_feedback_handler, AdminFeedbackResponse};
pub use moderate_feedback::{moderate_feedback_handler, ModerateFeedbackRequest};
pub use submit_feedback::{submit_feedback_handler, FeedbackResponse, SubmitFeedbackRequest};
