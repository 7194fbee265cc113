//! HTTP middleware

pub mod identity;
pub mod logging;

pub use identity::{CurrentUser, OptionalIdentity, identity_middleware, require_login};
pub use logging::logging_middleware;
