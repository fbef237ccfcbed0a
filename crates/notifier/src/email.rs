//! Email channel backed by the Resend HTTP API.

use async_trait::async_trait;
use serde::Serialize;

use tiercast_engine::ports::{NotifyError, Notifier};

use crate::{post_json, require_destination};

/// Request body for `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

pub struct EmailNotifier {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    from: String,
    subject: String,
}

impl EmailNotifier {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: &str,
        from: String,
        subject: String,
    ) -> Self {
        Self {
            client,
            api_key,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
            from,
            subject,
        }
    }

    fn payload<'a>(&'a self, destination: &'a str, message: &'a str) -> SendEmail<'a> {
        SendEmail {
            from: &self.from,
            to: [destination],
            subject: &self.subject,
            text: message,
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, destination: &str, message: &str) -> Result<(), NotifyError> {
        require_destination(destination)?;

        let payload = self.payload(destination, message);
        post_json(&self.client, &self.endpoint, &self.api_key, &payload).await?;

        tracing::debug!(destination, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> EmailNotifier {
        EmailNotifier::new(
            reqwest::Client::new(),
            "re_test".to_string(),
            "https://api.resend.com/",
            "alerts@tiercast.local".to_string(),
            "Notification".to_string(),
        )
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(notifier().endpoint, "https://api.resend.com/emails");
    }

    #[test]
    fn test_payload_shape() {
        let notifier = notifier();
        let value = serde_json::to_value(notifier.payload("a@test.mail", "hello")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "from": "alerts@tiercast.local",
                "to": ["a@test.mail"],
                "subject": "Notification",
                "text": "hello"
            })
        );
    }

    #[tokio::test]
    async fn test_empty_address_is_rejected_before_sending() {
        let err = notifier().notify("", "hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::InvalidDestination(_)));
    }
}
