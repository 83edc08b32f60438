//! Authentication service module
//!
//! - [`AuthService`]: registration and login
//! - [`AuthGuard`]: resolves a bearer credential to the user it belongs to
//! - [`PasswordHasher`]: bcrypt hashing on the blocking pool

mod guard;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use guard::{
    extract_bearer_token, AuthGuard, NOT_LOGGED_IN_MESSAGE, USER_NO_LONGER_EXISTS_MESSAGE,
};
pub use password::PasswordHasher;
pub use service::AuthService;
