use crate::error::RemindersError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use text_reminders_api_structs::update_reminder::*;
use text_reminders_domain::{Reminder, ID};
use text_reminders_infra::RemindersContext;

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<RemindersContext>,
) -> Result<HttpResponse, RemindersError> {
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.into_inner().reminder_id,
        completed: body.0.completed,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(RemindersError::from)
}

/// Sets `completed` of a single `Reminder`. Unlike the inbound sms path
/// this can also mark a `Reminder` as not completed.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub completed: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The todo with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError("Failed to update todo".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &RemindersContext) -> Result<Self::Response, Self::Error> {
        match ctx
            .repos
            .reminders
            .set_completed(&self.reminder_id, self.completed)
            .await
        {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(UseCaseError::NotFound(self.reminder_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
