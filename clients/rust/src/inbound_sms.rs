use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use text_reminders_api_structs::*;

/// Plays the role of the messaging provider calling the webhook
#[derive(Clone)]
pub struct InboundSmsClient {
    base: Arc<BaseClient>,
}

pub struct ReceiveInboundSmsInput {
    pub body: Option<String>,
    pub from: Option<String>,
}

impl InboundSmsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn receive(
        &self,
        input: ReceiveInboundSmsInput,
    ) -> APIResponse<receive_inbound_sms::APIResponse> {
        let body = receive_inbound_sms::RequestBody {
            body: input.body,
            from: input.from,
        };
        self.base
            .post_form(body, "twilio/webhook".into(), StatusCode::OK)
            .await
    }
}
