use async_trait::async_trait;
use serde_json::json;

use super::{EmailDispatcher, OutgoingEmail};
use crate::config::ResendConfig;

const RESEND_API_URL: &str = "https://api.resend.com";

/// Mailer backed by the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl ResendMailer {
    pub fn new(config: &ResendConfig) -> Result<Self, String> {
        Self::with_base_url(
            RESEND_API_URL.to_string(),
            config.api_key.clone(),
            config.from.clone(),
        )
    }

    /// Point the mailer at an explicit base URL. Used by tests.
    pub fn with_base_url(base_url: String, api_key: String, from: String) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url,
            api_key,
            from,
        })
    }
}

#[async_trait]
impl EmailDispatcher for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        let payload = json!({
            "from": self.from,
            "to": [email.to],
            "reply_to": email.reply_to,
            "subject": email.subject,
            "html": email.html,
        });

        let resp = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Resend request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            return Err(format!("Resend returned {status}: {body}"));
        }

        Ok(())
    }
}
