pub mod deactivate_account;
pub mod fetch_profile;
pub mod login_account;
pub mod register_account;
pub mod update_profile;
