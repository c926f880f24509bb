pub mod account_query;
pub mod account_repository;

pub use account_query::{AccountQuery, AccountQueryError};
pub use account_repository::{AccountRepository, AccountRepositoryError, ProfileChanges};
