use super::{INotifier, NotificationError};
use reqwest::Client;
use serde::Deserialize;
use text_reminders_domain::reminder_notification_body;
use tracing::{error, info};

const TWILIO_API_BASE_URL: &str = "https://api.twilio.com";

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// The Twilio number messages are sent from
    pub phone_number: String,
    pub api_base_url: String,
}

impl TwilioConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| anyhow::anyhow!("{} env var to be present.", name))
        };
        Ok(Self {
            account_sid: var("TWILIO_ACCOUNT_SID")?,
            auth_token: var("TWILIO_AUTH_TOKEN")?,
            phone_number: var("TWILIO_PHONE_NUMBER")?,
            api_base_url: std::env::var("TWILIO_API_BASE_URL")
                .unwrap_or_else(|_| TWILIO_API_BASE_URL.to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<i64>,
    message: String,
}

/// Sends reminder notifications through the Twilio Messaging REST API
pub struct TwilioNotifier {
    client: Client,
    config: TwilioConfig,
}

impl TwilioNotifier {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait::async_trait]
impl INotifier for TwilioNotifier {
    async fn send(&self, phone_number: &str, text: &str) -> Result<(), NotificationError> {
        let body = reminder_notification_body(text);
        let params = [
            ("To", phone_number),
            ("From", self.config.phone_number.as_str()),
            ("Body", body.as_str()),
        ];

        let res = self
            .client
            .post(&self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!(
                    "[Network Error] Twilio send message error. Error message: {:?}",
                    e
                );
                NotificationError::Network(e.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            let reason = match res.json::<ErrorResponse>().await {
                Ok(err) => match err.code {
                    Some(code) => format!("{} (code {})", err.message, code),
                    None => err.message,
                },
                Err(_) => format!("Unexpected status code: {}", status),
            };
            error!(
                "[Unexpected Response] Twilio rejected message to: {}. Error message: {}",
                phone_number, reason
            );
            return Err(NotificationError::Rejected(reason));
        }

        match res.json::<MessageResponse>().await {
            Ok(message) => {
                info!(
                    "Twilio accepted message {} with status: {}",
                    message.sid, message.status
                );
            }
            Err(e) => {
                // The message was accepted, only the receipt is unreadable
                error!(
                    "[Unexpected Response] Twilio message receipt could not be parsed. Error message: {:?}",
                    e
                );
            }
        }
        Ok(())
    }
}
