mod inbound_sms;
mod reminder;
mod shared;

pub use inbound_sms::InboundSmsCommand;
pub use reminder::{reminder_notification_body, Reminder, ReminderStatus};
pub use shared::entity::{Entity, InvalidIDError, ID};
