//! Problem model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Problem database model
///
/// Problems are seeded out of band; the application only reads them.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub slug: String,
}
