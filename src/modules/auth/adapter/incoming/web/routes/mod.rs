mod login;
mod refresh;

pub use login::login_handler;
pub use refresh::refresh_token_handler;
