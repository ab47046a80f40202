use crate::error::RemindersError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use text_reminders_api_structs::create_reminder::*;
use text_reminders_domain::Reminder;
use text_reminders_infra::{NotificationError, RemindersContext};
use tracing::warn;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindersContext>,
) -> Result<HttpResponse, RemindersError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        text: body.text,
        date: body.date,
        phone_number: body.phone_number,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(RemindersError::from)
}

/// Stores a new `Reminder` and then texts its owner once.
///
/// The store write and the text message are not transactional. `Ok` means
/// both happened, the error tells how far the use case got.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub text: String,
    pub date: DateTime<Utc>,
    pub phone_number: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingRequiredFields,
    /// Nothing was stored and nobody was texted
    CreationFailed,
    /// The `Reminder` is stored but its owner was never texted
    CreatedButNotificationFailed {
        reminder: Reminder,
        reason: NotificationError,
    },
}

impl From<UseCaseError> for RemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingRequiredFields => {
                Self::BadClientData("Missing required fields".into())
            }
            UseCaseError::CreationFailed => Self::InternalError("Failed to create todo".into()),
            UseCaseError::CreatedButNotificationFailed { reminder, reason } => {
                warn!(
                    "Reminder with id: {} was stored but its owner was not notified: {}",
                    reminder.id, reason
                );
                Self::InternalError("Failed to create todo".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &RemindersContext) -> Result<Self::Response, Self::Error> {
        if self.text.trim().is_empty() || self.phone_number.trim().is_empty() {
            return Err(UseCaseError::MissingRequiredFields);
        }

        let reminder = Reminder::new(
            self.text.clone(),
            self.date,
            self.phone_number.clone(),
            ctx.sys.get_timestamp_millis(),
        );

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::CreationFailed)?;

        // The `stop_reminders` flag of earlier reminders for this number is not consulted
        match ctx
            .notifier
            .send(&reminder.phone_number, &reminder.text)
            .await
        {
            Ok(()) => Ok(reminder),
            Err(reason) => Err(UseCaseError::CreatedButNotificationFailed { reminder, reason }),
        }
    }
}
