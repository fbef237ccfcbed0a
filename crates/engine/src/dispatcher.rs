//! Notification dispatcher: routes each user of a cohort to one channel.
//!
//! Users scoring above [`EMAIL_SCORE_THRESHOLD`] get an email, everyone else a
//! phone message. Deliveries run one at a time in cohort order, so the
//! `succeeded` and `failed` sequences are reproducible for a given cohort.

use std::sync::Arc;

use tiercast_common::types::{ChannelType, NotifyOutcome, NotifyResponse, User};

use crate::ports::Notifier;

/// Scores strictly above this value are delivered by email.
pub const EMAIL_SCORE_THRESHOLD: i32 = 50;

/// Pick the delivery channel for a user.
pub fn channel_for(user: &User) -> ChannelType {
    if user.score > EMAIL_SCORE_THRESHOLD {
        ChannelType::Email
    } else {
        ChannelType::Phone
    }
}

/// Fans a message out over the email and phone channels.
pub struct NotificationDispatcher {
    email: Arc<dyn Notifier>,
    phone: Arc<dyn Notifier>,
}

impl NotificationDispatcher {
    pub fn new(email: Arc<dyn Notifier>, phone: Arc<dyn Notifier>) -> Self {
        Self { email, phone }
    }

    /// Deliver `message` to every user, exactly one attempt each.
    ///
    /// Per-user failures are recorded in the response rather than returned.
    pub async fn dispatch(&self, users: &[User], message: &str) -> NotifyResponse {
        let mut response = NotifyResponse::default();

        for user in users {
            let channel = channel_for(user);
            let result = match channel {
                ChannelType::Email => self.email.notify(&user.email, message).await,
                ChannelType::Phone => self.phone.notify(&user.phone_number, message).await,
            };

            match result {
                Ok(()) => response.succeeded.push(NotifyOutcome::succeeded(user.id)),
                Err(e) => {
                    tracing::warn!(
                        user_id = user.id,
                        channel = %channel,
                        error = %e,
                        "Notification delivery failed"
                    );
                    response
                        .failed
                        .push(NotifyOutcome::failed(user.id, e.to_string()));
                }
            }
        }

        response
    }
}
