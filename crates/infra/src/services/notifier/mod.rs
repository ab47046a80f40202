mod inmemory;
mod twilio;

pub use inmemory::{InMemoryNotifier, SentNotification};
pub use twilio::{TwilioConfig, TwilioNotifier};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotificationError {
    #[error("Unable to reach the messaging provider: {0}")]
    Network(String),
    #[error("The messaging provider rejected the message: {0}")]
    Rejected(String),
}

/// Texts the owner of a `Reminder`.
///
/// Every call dispatches a new message, nothing is deduplicated or retried.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send(&self, phone_number: &str, text: &str) -> Result<(), NotificationError>;
}
