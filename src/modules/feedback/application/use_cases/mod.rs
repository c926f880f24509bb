pub mod list_feedback;
pub mod moderate_feedback;
pub mod submit_feedback;
