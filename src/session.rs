//! Server-side session store
//!
//! Sessions are keyed by user id and carried by an opaque token in a
//! cookie. The token is hashed before it is used as a Redis key, so a
//! dump of the store never reveals a usable credential.

use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::{
    error::AppResult,
    utils::crypto::{generate_session_token, hash_string},
};

/// Redis-backed session store
#[derive(Clone)]
pub struct SessionStore {
    redis: ConnectionManager,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(redis: ConnectionManager, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }

    /// Start a session for a user, returning the token to hand to the client
    pub async fn create(&self, user_id: i64) -> AppResult<String> {
        let token = generate_session_token();
        let mut redis = self.redis.clone();

        redis
            .set_ex::<_, _, ()>(Self::key(&token), user_id, self.ttl_seconds)
            .await?;

        Ok(token)
    }

    /// Resolve a session token to the user id it was created for
    pub async fn resolve(&self, token: &str) -> AppResult<Option<i64>> {
        let mut redis = self.redis.clone();
        let user_id: Option<i64> = redis.get(Self::key(token)).await?;

        Ok(user_id)
    }

    /// End a session. Idempotent; unknown tokens are a no-op.
    pub async fn destroy(&self, token: &str) -> AppResult<()> {
        let mut redis = self.redis.clone();
        redis.del::<_, ()>(Self::key(token)).await?;

        Ok(())
    }

    fn key(token: &str) -> String {
        format!("session:{}", hash_string(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_hashed() {
        let key = SessionStore::key("some-token");
        assert!(key.starts_with("session:"));
        assert!(!key.contains("some-token"));
    }

    #[test]
    fn test_key_is_stable() {
        assert_eq!(SessionStore::key("abc"), SessionStore::key("abc"));
        assert_ne!(SessionStore::key("abc"), SessionStore::key("abd"));
    }
}
