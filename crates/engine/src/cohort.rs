//! Cohort resolver: cache-aside lookup of the active users of a tier.
//!
//! 1. Read `users:<type>` from the cache and decode it
//! 2. On any cache error, query the durable store for active, non-deleted users
//! 3. Refill the cache from a detached task so the caller never waits on the write
//!
//! A cached payload that fails to decode is an internal error, not a miss.

use std::sync::Arc;
use std::time::Duration;

use tiercast_common::error::AppError;
use tiercast_common::types::{CohortQuery, User};

use crate::codec::CohortCodec;
use crate::ports::{CacheRepository, UserRepository};

/// How long a cached cohort stays valid.
pub const COHORT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Cache key holding the cohort of `user_type`.
pub fn cohort_cache_key(user_type: &str) -> String {
    format!("users:{}", user_type)
}

/// Resolves tier cohorts from the cache, falling back to the user store.
pub struct CohortResolver {
    users: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheRepository>,
    codec: Arc<dyn CohortCodec>,
}

impl CohortResolver {
    pub fn new(
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheRepository>,
        codec: Arc<dyn CohortCodec>,
    ) -> Self {
        Self {
            users,
            cache,
            codec,
        }
    }

    /// Resolve the active users of `user_type`.
    ///
    /// Returns `NotFound` when the store has no matching users and `Internal`
    /// for store failures or a corrupted cache entry.
    pub async fn resolve(&self, user_type: &str) -> Result<Vec<User>, AppError> {
        let key = cohort_cache_key(user_type);

        match self.cache.get(&key).await {
            Ok(payload) => {
                let users = self.codec.decode(&payload).map_err(|e| {
                    tracing::error!(key = %key, error = %e, "Cached cohort could not be decoded");
                    AppError::Internal(e.to_string())
                })?;
                tracing::debug!(key = %key, count = users.len(), "Cohort served from cache");
                return Ok(users);
            }
            Err(e) => {
                tracing::debug!(key = %key, reason = %e, "Cohort cache miss");
            }
        }

        let query = CohortQuery::active(user_type);
        let users = self
            .users
            .get_by_type_and_state(&query)
            .await
            .map_err(|e| {
                tracing::error!(user_type, error = %e, "Failed to load cohort from user store");
                AppError::Internal(e.to_string())
            })?;

        if users.is_empty() {
            return Err(AppError::NotFound("users not found".to_string()));
        }

        self.spawn_refill(key, users.clone());

        Ok(users)
    }

    /// Write the cohort back to the cache without blocking the caller.
    ///
    /// The handle is dropped on purpose: failures only reach the log.
    fn spawn_refill(&self, key: String, users: Vec<User>) {
        let cache = Arc::clone(&self.cache);
        let codec = Arc::clone(&self.codec);

        tokio::spawn(async move {
            let payload = match codec.encode(&users) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!(
                        key = %key,
                        count = users.len(),
                        error = %e,
                        "Failed to encode cohort for cache refill"
                    );
                    return;
                }
            };

            match cache.set(&key, &payload, COHORT_CACHE_TTL).await {
                Ok(()) => tracing::debug!(key = %key, count = users.len(), "Cohort cache refilled"),
                Err(e) => tracing::warn!(key = %key, error = %e, "Failed to refill cohort cache"),
            }
        });
    }
}
