//! Backend API Client
//!
//! Frontend bindings to the todo service's REST endpoints, organized by domain.

mod todo;
mod user;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;

// Re-export all public items
pub use todo::*;
pub use user::*;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Handle to the backend origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.api_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn get(&self, path: &str) -> RequestBuilder {
        prepare(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        prepare(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        prepare(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        prepare(Request::delete(&self.url(path)))
    }
}

/// `/{prefix}/{id}` with the id escaped as one segment
pub(crate) fn id_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, utf8_percent_encode(id, PATH_SEGMENT))
}

/// Cookies, JSON content type and the stored bearer token on every call
fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json");
    match auth::bearer(auth::load_token().as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Fail on non-2xx, otherwise hand the response back
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
