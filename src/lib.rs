//! golfboard - Code-Golf Leaderboard with GitHub Sign-in
//!
//! This library provides the core functionality for golfboard, a small web
//! service where users sign in with GitHub, browse coding problems, and
//! compete for the smallest passing solution.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//!
//! Identity is resolved per request from a Redis-backed session; GitHub is
//! reached through a dedicated client owned by the application state.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod github;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
