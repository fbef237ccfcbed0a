use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Tier name for premium accounts.
pub const USER_TYPE_PREMIUM: &str = "premium";

/// A user snapshot as stored in the `users` table and in the cohort cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub user_type: String,
    pub phone_number: String,
    pub email: String,
    pub score: i32,
}

/// Request to notify every active user of a given tier.
///
/// Missing fields deserialize as empty so they fail validation, not parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotifyRequest {
    pub message: String,
    pub user_type: String,
}

impl NotifyRequest {
    /// Reject requests with an empty message or tier.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.message.is_empty() {
            return Err(AppError::Validation(
                "message should not be empty".to_string(),
            ));
        }
        if self.user_type.is_empty() {
            return Err(AppError::Validation(
                "user type should not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Durable-store filter for a tier cohort. Only active, non-deleted users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortQuery {
    pub user_type: String,
    pub is_deleted: bool,
    pub is_active: bool,
}

impl CohortQuery {
    pub fn active(user_type: &str) -> Self {
        Self {
            user_type: user_type.to_string(),
            is_deleted: false,
            is_active: true,
        }
    }
}

impl From<&NotifyRequest> for CohortQuery {
    fn from(request: &NotifyRequest) -> Self {
        Self::active(&request.user_type)
    }
}

/// Per-user delivery outcome. `message` carries the error text on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyOutcome {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NotifyOutcome {
    pub fn succeeded(user_id: i64) -> Self {
        Self {
            user_id,
            message: None,
        }
    }

    pub fn failed(user_id: i64, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: Some(message.into()),
        }
    }
}

/// Aggregated result of one fan-out pass, in cohort order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub succeeded: Vec<NotifyOutcome>,
    pub failed: Vec<NotifyOutcome>,
}

/// Delivery channel a user is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Email,
    Phone,
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelType::Email => write!(f, "email"),
            ChannelType::Phone => write!(f, "phone"),
        }
    }
}
