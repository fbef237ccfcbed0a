//! Phone channel posting `{to, body}` to an SMS gateway.

use async_trait::async_trait;
use serde::Serialize;

use tiercast_engine::ports::{NotifyError, Notifier};

use crate::{post_json, require_destination};

#[derive(Debug, Serialize)]
struct SendSms<'a> {
    to: &'a str,
    body: &'a str,
}

pub struct SmsNotifier {
    client: reqwest::Client,
    gateway_url: String,
    api_key: String,
}

impl SmsNotifier {
    pub fn new(client: reqwest::Client, gateway_url: String, api_key: String) -> Self {
        Self {
            client,
            gateway_url,
            api_key,
        }
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    async fn notify(&self, destination: &str, message: &str) -> Result<(), NotifyError> {
        require_destination(destination)?;

        let payload = SendSms {
            to: destination,
            body: message,
        };
        post_json(&self.client, &self.gateway_url, &self.api_key, &payload).await?;

        tracing::debug!(destination, "SMS sent");
        Ok(())
    }
}
