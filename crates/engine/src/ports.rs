//! Capability ports consumed by the notification pipeline.
//!
//! The resolver and dispatcher only see these traits. Adapters for PostgreSQL,
//! Redis and the outbound channels live in `store`, `cache` and the
//! `tiercast-notifier` crate.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use tiercast_common::types::{CohortQuery, User};

/// Errors raised by durable user store adapters.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("user store connection failed: {0}")]
    Connection(String),

    #[error("user store query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                RepositoryError::Connection(err.to_string())
            }
            other => RepositoryError::Query(other.to_string()),
        }
    }
}

/// Errors raised by cache adapters. The resolver treats every variant as a miss.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache miss for key {0}")]
    Miss(String),

    #[error("cache backend error: {0}")]
    Backend(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Backend(err.to_string())
    }
}

/// Errors raised by a notification channel for a single delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Durable source of user snapshots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user matching the tier and state filter.
    async fn get_by_type_and_state(
        &self,
        query: &CohortQuery,
    ) -> Result<Vec<User>, RepositoryError>;
}

/// Short-lived string cache.
///
/// Absence and transport failure both come back through the error channel.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<String, CacheError>;

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}

/// One outbound delivery channel (email, SMS, ...).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` to `destination`. One attempt, no retry.
    async fn notify(&self, destination: &str, message: &str) -> Result<(), NotifyError>;
}
