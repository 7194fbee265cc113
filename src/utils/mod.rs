//! Utility functions

pub mod crypto;
pub mod time;

pub use crypto::{generate_session_token, hash_string};
pub use time::{epoch_seconds, format_epoch};
