mod auth;

pub use auth::AuthStatus;
pub use auth::TokenManager;
