//! Authentication response DTOs

use serde::Serialize;

/// Response for `/login` when a session already exists
#[derive(Debug, Serialize)]
pub struct AlreadyLoggedInResponse {
    pub message: String,
    pub login: String,
}
