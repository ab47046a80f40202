use crate::base::{APIResponse, BaseClient};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;
use text_reminders_api_structs::*;
use text_reminders_domain::ID;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub text: String,
    pub date: DateTime<Utc>,
    pub phone_number: String,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub completed: bool,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            text: input.text,
            date: input.date,
            phone_number: input.phone_number,
        };
        self.base.post(body, "todos".into(), StatusCode::OK).await
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("todos".into(), StatusCode::OK).await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            completed: input.completed,
        };
        self.base
            .put(
                body,
                format!("todos/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, reminder_id: ID) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("todos/{}", reminder_id), StatusCode::OK)
            .await
    }
}
