//! Redis-backed cohort cache.
//!
//! `GET` of a missing key comes back as [`CacheError::Miss`]; values are written
//! with `SET key value EX ttl` so Redis expires them on its own.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::ports::{CacheError, CacheRepository};

#[derive(Clone)]
pub struct RedisCacheRepository {
    redis: ConnectionManager,
}

impl RedisCacheRepository {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    /// Redis rejects `EX 0`, so sub-second TTLs round up to one second.
    fn ttl_seconds(ttl: Duration) -> u64 {
        ttl.as_secs().max(1)
    }
}

#[async_trait]
impl CacheRepository for RedisCacheRepository {
    async fn get(&self, key: &str) -> Result<String, CacheError> {
        let mut redis = self.redis.clone();
        let value: Option<String> = redis.get(key).await?;
        value.ok_or_else(|| CacheError::Miss(key.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut redis = self.redis.clone();
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(Self::ttl_seconds(ttl))
            .query_async(&mut redis)
            .await?;
        Ok(())
    }
}
