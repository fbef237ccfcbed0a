//! Outbound notification channels.
//!
//! - Email via the Resend HTTP API ([`email::EmailNotifier`])
//! - SMS via a JSON HTTP gateway ([`sms::SmsNotifier`])
//! - [`UnconfiguredNotifier`] standing in for a channel without credentials
//!
//! Each call is a single attempt. Timeouts come from the shared reqwest client.

pub mod email;
pub mod sms;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use tiercast_common::config::AppConfig;
use tiercast_common::error::AppError;
use tiercast_common::types::ChannelType;
use tiercast_engine::ports::{NotifyError, Notifier};

use crate::email::EmailNotifier;
use crate::sms::SmsNotifier;

/// Build the HTTP client shared by the channel adapters.
pub fn build_client(timeout_ms: u64) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Build the email and phone channels from configuration.
///
/// A channel without credentials becomes an [`UnconfiguredNotifier`], so its
/// users are reported in `failed` instead of being counted as delivered.
pub fn build_notifiers(
    config: &AppConfig,
) -> Result<(Arc<dyn Notifier>, Arc<dyn Notifier>), AppError> {
    let client = build_client(config.notifier_timeout_ms)?;

    let email: Arc<dyn Notifier> = match &config.resend_api_key {
        Some(api_key) => Arc::new(EmailNotifier::new(
            client.clone(),
            api_key.clone(),
            &config.resend_base_url,
            config.email_from.clone(),
            config.email_subject.clone(),
        )),
        None => {
            tracing::warn!("RESEND_API_KEY not set, email deliveries will fail");
            Arc::new(UnconfiguredNotifier::new(ChannelType::Email))
        }
    };

    let phone: Arc<dyn Notifier> = match (&config.sms_gateway_url, &config.sms_api_key) {
        (Some(url), Some(api_key)) => {
            Arc::new(SmsNotifier::new(client, url.clone(), api_key.clone()))
        }
        _ => {
            tracing::warn!("SMS_GATEWAY_URL or SMS_API_KEY not set, phone deliveries will fail");
            Arc::new(UnconfiguredNotifier::new(ChannelType::Phone))
        }
    };

    Ok((email, phone))
}

/// POST a JSON body with bearer auth, mapping non-2xx replies to `Rejected`.
pub(crate) async fn post_json<T: Serialize + ?Sized>(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    body: &T,
) -> Result<(), NotifyError> {
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| NotifyError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(NotifyError::Rejected {
        status: status.as_u16(),
        body,
    })
}

pub(crate) fn require_destination(destination: &str) -> Result<(), NotifyError> {
    if destination.trim().is_empty() {
        return Err(NotifyError::InvalidDestination(
            "destination is empty".to_string(),
        ));
    }
    Ok(())
}

/// Placeholder for a channel without credentials.
///
/// Every delivery fails with a transport error, so affected users are
/// reported in `failed` rather than silently dropped.
#[derive(Debug, Clone, Copy)]
pub struct UnconfiguredNotifier {
    channel: ChannelType,
}

impl UnconfiguredNotifier {
    pub fn new(channel: ChannelType) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl Notifier for UnconfiguredNotifier {
    async fn notify(&self, destination: &str, _message: &str) -> Result<(), NotifyError> {
        require_destination(destination)?;
        tracing::warn!(channel = %self.channel, destination, "Delivery skipped, channel not configured");
        Err(NotifyError::Transport(format!(
            "{} channel not configured",
            self.channel
        )))
    }
}
