use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use text_reminders_api_structs::ErrorResponse;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode(StatusCode),
}

/// `message` is the `error` field of the server response when there is one
#[derive(Debug, Clone, PartialEq)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

impl APIError {
    pub fn status_code(&self) -> Option<StatusCode> {
        match self.variant {
            APIErrorVariant::UnexpectedStatusCode(status) => Some(status),
            _ => None,
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        let address = format!("{}/api", address.trim_end_matches('/'));
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;
        self.handle_api_response(res, expected_status_code).await
    }

    async fn handle_api_response<T: DeserializeOwned>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            let message = match res.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode(status),
                message,
            });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.get(self.url(&path)), expected_status_code)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.delete(self.url(&path)), expected_status_code)
            .await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        body: impl Serialize,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.post(self.url(&path)).json(&body),
            expected_status_code,
        )
        .await
    }

    /// Posts `body` url encoded, the way messaging providers call webhooks
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        body: impl Serialize,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.post(self.url(&path)).form(&body),
            expected_status_code,
        )
        .await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        body: impl Serialize,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.put(self.url(&path)).json(&body),
            expected_status_code,
        )
        .await
    }
}
