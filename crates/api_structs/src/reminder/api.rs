use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use text_reminders_domain::ID;

pub mod create_reminder {
    use super::*;

    /// An absent `text` or `phoneNumber` reads as blank and is rejected by
    /// the use case, an absent or unparsable `date` makes the body malformed
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub text: String,
        pub date: DateTime<Utc>,
        #[serde(default)]
        pub phone_number: String,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderDTO>;
}

pub mod update_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub completed: bool,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderDTO;
}
