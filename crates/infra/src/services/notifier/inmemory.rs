use super::{INotifier, NotificationError};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};
use text_reminders_domain::reminder_notification_body;

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub phone_number: String,
    pub body: String,
}

/// Records notifications instead of sending them. Used for testing and local runs.
#[derive(Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<SentNotification>>,
    failing: AtomicBool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Default::default()
    }

    /// Every notification attempted so far, including failed ones
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, phone_number: &str) -> Vec<SentNotification> {
        self.sent()
            .into_iter()
            .filter(|n| n.phone_number == phone_number)
            .collect()
    }

    /// Makes subsequent sends fail as if the provider rejected them
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn send(&self, phone_number: &str, text: &str) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(SentNotification {
            phone_number: phone_number.to_string(),
            body: reminder_notification_body(text),
        });
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Rejected(
                "In memory notifier is set to fail".into(),
            ));
        }
        Ok(())
    }
}
