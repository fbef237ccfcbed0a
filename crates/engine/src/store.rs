//! PostgreSQL-backed user store.

use async_trait::async_trait;
use sqlx::PgPool;

use tiercast_common::types::{CohortQuery, User};

use crate::ports::{RepositoryError, UserRepository};

/// Reads user snapshots from the `users` table.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_by_type_and_state(
        &self,
        query: &CohortQuery,
    ) -> Result<Vec<User>, RepositoryError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, name, type, phone_number, email, score
            FROM users
            WHERE type = $1
              AND is_deleted = $2
              AND is_active = $3
            ORDER BY id
            "#,
        )
        .bind(&query.user_type)
        .bind(query.is_deleted)
        .bind(query.is_active)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            user_type = %query.user_type,
            count = users.len(),
            "Loaded cohort from user store"
        );

        Ok(users)
    }
}
