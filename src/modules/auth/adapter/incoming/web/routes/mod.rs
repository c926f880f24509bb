pub mod deactivate_account;
pub mod fetch_profile;
pub mod login_account;
pub mod register_account;
pub mod update_profile;

pub use deactivate_account::{deactivate_account_handler, DeactivateAccountRequest};
pub use fetch_profile::{fetch_profile_handler, ProfileResponse};
pub use login_account::{login_account_handler, LoginResponseBody, SessionAccount};
pub use register_account::{register_account_handler, RegisterResponseBody, RegisteredAccount};
pub use update_profile::{update_profile_handler, UpdateProfileRequest};
