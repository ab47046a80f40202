mod base;
mod inbound_sms;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use inbound_sms::InboundSmsClient;
pub use inbound_sms::ReceiveInboundSmsInput;
use reminder::ReminderClient;
pub use reminder::{CreateReminderInput, UpdateReminderInput};
use status::StatusClient;
use std::sync::Arc;
pub use text_reminders_api_structs::dtos::ReminderDTO as Reminder;
pub use text_reminders_domain::ID;

/// Text Reminders Server SDK
///
/// The SDK contains methods for interacting with the Text Reminders server
/// API.
#[derive(Clone)]
pub struct RemindersSDK {
    pub inbound_sms: InboundSmsClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl RemindersSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let inbound_sms = InboundSmsClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            inbound_sms,
            reminder,
            status,
        }
    }
}
