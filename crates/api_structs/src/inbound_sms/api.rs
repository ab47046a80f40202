use serde::{Deserialize, Serialize};

pub mod receive_inbound_sms {
    use super::*;

    /// The subset of the messaging provider's form fields the webhook reads.
    /// A missing field is a validation error of the use case, not a form error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RequestBody {
        #[serde(rename = "Body", default, skip_serializing_if = "Option::is_none")]
        pub body: Option<String>,
        #[serde(rename = "From", default, skip_serializing_if = "Option::is_none")]
        pub from: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }

    impl APIResponse {
        pub fn new(message: &str) -> Self {
            Self {
                message: message.into(),
            }
        }
    }
}
