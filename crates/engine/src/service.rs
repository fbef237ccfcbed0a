//! Notify-by-type orchestration.
//!
//! Validates the request, resolves the tier cohort and fans the message out.
//! A validation or resolution error stops the pipeline before any delivery.

use std::sync::Arc;

use tiercast_common::error::AppError;
use tiercast_common::types::{NotifyRequest, NotifyResponse};

use crate::codec::{CohortCodec, JsonCodec};
use crate::cohort::CohortResolver;
use crate::dispatcher::NotificationDispatcher;
use crate::ports::{CacheRepository, Notifier, UserRepository};
use crate::validation::{DefaultValidator, RequestValidator};

/// Service layer behind `POST /api/notifications/by-type`.
pub struct NotifyService {
    validator: Arc<dyn RequestValidator>,
    resolver: CohortResolver,
    dispatcher: NotificationDispatcher,
}

impl NotifyService {
    pub fn new(
        validator: Arc<dyn RequestValidator>,
        resolver: CohortResolver,
        dispatcher: NotificationDispatcher,
    ) -> Self {
        Self {
            validator,
            resolver,
            dispatcher,
        }
    }

    /// Wire the service with the default validator and JSON cache codec.
    pub fn from_ports(
        users: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheRepository>,
        email: Arc<dyn Notifier>,
        phone: Arc<dyn Notifier>,
    ) -> Self {
        let codec: Arc<dyn CohortCodec> = Arc::new(JsonCodec);
        Self::new(
            Arc::new(DefaultValidator),
            CohortResolver::new(users, cache, codec),
            NotificationDispatcher::new(email, phone),
        )
    }

    /// Notify every active user of `request.user_type`.
    ///
    /// Partial delivery failure is not an error: it shows up in `failed`.
    pub async fn notify_by_type(
        &self,
        request: &NotifyRequest,
    ) -> Result<NotifyResponse, AppError> {
        self.validator.validate(request)?;

        let users = self.resolver.resolve(&request.user_type).await?;

        let response = self.dispatcher.dispatch(&users, &request.message).await;

        tracing::info!(
            user_type = %request.user_type,
            cohort = users.len(),
            succeeded = response.succeeded.len(),
            failed = response.failed.len(),
            "Cohort notified"
        );

        Ok(response)
    }
}
