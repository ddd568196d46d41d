mod login;
mod refresh;

pub use login::LoginService;
pub use refresh::RefreshTokenService;
