use crate::error::RemindersError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use text_reminders_api_structs::dtos::ReminderDTO;
use text_reminders_api_structs::get_reminders::*;
use text_reminders_domain::Reminder;
use text_reminders_infra::RemindersContext;

pub async fn get_reminders_controller(
    ctx: web::Data<RemindersContext>,
) -> Result<HttpResponse, RemindersError> {
    let usecase = GetRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reminders| {
            let res: APIResponse = reminders.into_iter().map(ReminderDTO::new).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(RemindersError::from)
}

/// Every `Reminder`, newest first
#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for RemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError("Failed to fetch todos".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &RemindersContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
