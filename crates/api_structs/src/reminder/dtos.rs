use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use text_reminders_domain::{Reminder, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub text: String,
    pub date: DateTime<Utc>,
    pub phone_number: String,
    pub completed: bool,
    pub stop_reminders: bool,
    pub created_at: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            text: reminder.text,
            date: reminder.date,
            phone_number: reminder.phone_number,
            completed: reminder.completed,
            stop_reminders: reminder.stop_reminders,
            created_at: reminder.created_at,
        }
    }
}
