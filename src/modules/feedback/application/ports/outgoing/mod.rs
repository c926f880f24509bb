pub mod feedback_query;
pub mod feedback_repository;

pub use feedback_query::{FeedbackFilters, FeedbackQuery, FeedbackQueryError};
pub use feedback_repository::{FeedbackRepository, FeedbackRepositoryError};
