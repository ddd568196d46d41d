pub mod app_state_builder;
pub mod stubs;

pub use app_state_builder::{bearer_token, test_token_provider, TestAppStateBuilder};
