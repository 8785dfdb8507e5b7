use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{SessionStore, SessionStoreError, SessionToken};
use crate::auth::application::services::token_hasher::hash_token;

/// Redis-backed sessions.
///
/// ## Redis data model
/// ```text
/// session:{token_hash} -> "{user_id}"   (EX = session TTL)
/// ```
/// Redis TTL is the only expiry mechanism; nothing is swept by hand.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>, ttl_secs: u64) -> Self {
        Self { pool, ttl_secs }
    }

    fn session_key(token: &SessionToken) -> String {
        format!("session:{}", hash_token(token.as_str()))
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, user_id: i32) -> Result<SessionToken, SessionStoreError> {
        let token = SessionToken::new_random();
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::session_key(&token), user_id, self.ttl_secs)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        Ok(token)
    }

    async fn resolve(&self, token: &SessionToken) -> Result<Option<i32>, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        conn.get::<_, Option<i32>>(Self::session_key(token))
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }

    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(Self::session_key(token))
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }
}
