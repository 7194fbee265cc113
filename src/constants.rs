//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

/// Cookie that carries the opaque session token
pub const SESSION_COOKIE_NAME: &str = "golfboard_session";

/// Length of the session token in characters
pub const SESSION_TOKEN_LENGTH: usize = 64;

/// Default session lifetime in seconds (7 days)
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

// =============================================================================
// GITHUB DEFAULTS
// =============================================================================

/// GitHub OAuth authorization endpoint
pub const DEFAULT_GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

/// GitHub OAuth code-for-token exchange endpoint
pub const DEFAULT_GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// GitHub REST API base URL
pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";

/// Repository whose metadata the `/repo` showcase endpoint returns
pub const SHOWCASE_REPO: &str = "cenkalti/github-flask";

// =============================================================================
// LEADERBOARD & FEED LIMITS
// =============================================================================

/// Number of entries on a problem's smallest-passing leaderboard
pub const LEADERBOARD_LIMIT: i64 = 10;

/// Number of entries in the site-wide recent submissions feed
pub const RECENT_SUBMISSIONS_LIMIT: i64 = 20;

// =============================================================================
// SUBMISSION LIMITS
// =============================================================================

/// Smallest accepted solution size in bytes
pub const MIN_SUBMISSION_SIZE: i32 = 1;

/// Largest accepted solution size in bytes
pub const MAX_SUBMISSION_SIZE: i32 = 1_048_576;
