use crate::error::RemindersError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use text_reminders_api_structs::delete_reminder::*;
use text_reminders_domain::{Reminder, ID};
use text_reminders_infra::RemindersContext;

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RemindersContext>,
) -> Result<HttpResponse, RemindersError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.into_inner().reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(RemindersError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
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
            UseCaseError::StorageError => Self::InternalError("Failed to delete todo".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &RemindersContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.reminders.delete(&self.reminder_id).await {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(UseCaseError::NotFound(self.reminder_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
