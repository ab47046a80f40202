use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A `Reminder` is a task with a due date that belongs to the owner
/// of a phone number. The owner is texted when the `Reminder` is created
/// and can reply to that text to mark it as done.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// User supplied description of the task, never empty
    pub text: String,
    /// When the task is due
    pub date: DateTime<Utc>,
    /// E.164 formatted number of the owner. Replies from this number
    /// are applied to every `Reminder` sharing it.
    pub phone_number: String,
    pub completed: bool,
    /// Set once the owner has replied with a stop command
    pub stop_reminders: bool,
    /// Unix timestamp in millis. Listings are ordered by this field.
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    Active,
    /// Terminal for the inbound sms path
    Completed,
}

impl Reminder {
    pub fn new(text: String, date: DateTime<Utc>, phone_number: String, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            text,
            date,
            phone_number,
            completed: false,
            stop_reminders: false,
            created_at,
        }
    }

    pub fn status(&self) -> ReminderStatus {
        if self.stop_reminders {
            ReminderStatus::Completed
        } else {
            ReminderStatus::Active
        }
    }

    /// Applied when the owner replies with a stop command
    pub fn mark_done(&mut self) {
        self.completed = true;
        self.stop_reminders = true;
    }

    pub fn belongs_to(&self, phone_number: &str) -> bool {
        self.phone_number == phone_number
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The text message sent to the owner of a `Reminder`
pub fn reminder_notification_body(text: &str) -> String {
    format!(
        "Reminder: Your task \"{}\" is due. Reply COMPLETED if you've finished it.",
        text
    )
}
