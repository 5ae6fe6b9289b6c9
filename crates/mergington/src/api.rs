//! HTTP client used by the landing page to talk to the activities backend.

use gloo_net::http::Response;
use std::collections::HashMap;

use crate::data::ErrorResponse;

#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

/// Maps a non-success status to an [`ApiError`].
///
/// `detail` is the `detail` field of the error body when the server sent one;
/// otherwise a generic text naming the endpoint is used.
pub fn status_error(status: u16, endpoint: &str, detail: Option<String>) -> Option<ApiError> {
    match status {
        200..=299 => None,
        400 => Some(ApiError::BadRequest(
            detail.unwrap_or_else(|| format!("Bad request to {endpoint}")),
        )),
        404 => Some(ApiError::NotFound(
            detail.unwrap_or_else(|| format!("{endpoint} not found")),
        )),
        500..=599 => Some(ApiError::InternalServerError),
        status => Some(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    let status = response.status();
    if (200..=299).contains(&status) {
        return Ok(response);
    }

    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorResponse>(&body).ok())
        .map(|body| body.detail);

    match status_error(status, endpoint, detail) {
        Some(err) => Err(err),
        None => Err(ApiError::UnexpectedStatusCode(status)),
    }
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, endpoint).await?;
    validated_response
        .json::<T>()
        .await
        .map_err(ApiError::ParseError)
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn make_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<Response>;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    /// POST without a body, passing parameters in the query string.
    async fn post_query<T>(&self, endpoint: &str, query: &[(&str, &str)]) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::new(),
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<Response> {
        let url = format!("{}{}", self.root_url, endpoint);

        let request = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
        };

        request
            .headers(self.headers.clone().into())
            .query(query.iter().copied())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint, &[]).await?;
        handle_json_response(response, endpoint).await
    }

    async fn post_query<T>(&self, endpoint: &str, query: &[(&str, &str)]) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .make_request(HttpMethod::Post, endpoint, query)
            .await?;
        handle_json_response(response, endpoint).await
    }
}
