use crate::error::RemindersError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use text_reminders_api_structs::receive_inbound_sms::*;
use text_reminders_domain::InboundSmsCommand;
use text_reminders_infra::RemindersContext;

pub async fn receive_inbound_sms_controller(
    form: web::Form<RequestBody>,
    ctx: web::Data<RemindersContext>,
) -> Result<HttpResponse, RemindersError> {
    let form = form.into_inner();
    let usecase = ReceiveInboundSmsUseCase {
        body: form.body.unwrap_or_default(),
        from: form.from.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let message = match res {
                UseCaseResponse::Completed { .. } => "Task marked as completed",
                UseCaseResponse::Ignored => "Webhook received",
            };
            HttpResponse::Ok().json(APIResponse::new(message))
        })
        .map_err(RemindersError::from)
}

/// Applies a text message sent by a phone number to every `Reminder`
/// owned by that number
#[derive(Debug)]
pub struct ReceiveInboundSmsUseCase {
    pub body: String,
    pub from: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseResponse {
    Completed { updated_count: u64 },
    Ignored,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingRequiredFields,
    StorageError,
}

impl From<UseCaseError> for RemindersError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingRequiredFields => {
                Self::BadClientData("Missing required fields".into())
            }
            UseCaseError::StorageError => Self::InternalError("Internal server error".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ReceiveInboundSmsUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "ReceiveInboundSms";

    async fn execute(&mut self, ctx: &RemindersContext) -> Result<Self::Response, Self::Error> {
        if self.body.is_empty() || self.from.is_empty() {
            return Err(UseCaseError::MissingRequiredFields);
        }

        match InboundSmsCommand::parse(&self.body) {
            InboundSmsCommand::Stop => {
                let res = ctx
                    .repos
                    .reminders
                    .mark_done_by_phone_number(&self.from)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(UseCaseResponse::Completed {
                    updated_count: res.updated_count,
                })
            }
            InboundSmsCommand::Unrecognized => Ok(UseCaseResponse::Ignored),
        }
    }
}
