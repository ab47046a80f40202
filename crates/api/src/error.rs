use actix_web::{http::StatusCode, HttpResponse};
use text_reminders_api_structs::ErrorResponse;
use thiserror::Error;

/// Errors returned to the caller. The message is what the caller sees,
/// internal details are logged where the error happens and never leaked.
#[derive(Error, Debug)]
pub enum RemindersError {
    #[error("{0}")]
    InternalError(String),
    #[error("{0}")]
    BadClientData(String),
    #[error("{0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for RemindersError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
