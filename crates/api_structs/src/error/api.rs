use serde::{Deserialize, Serialize};

/// Body of every non 2xx response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
