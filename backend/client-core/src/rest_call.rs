//! One round trip: prepare, send, check status.

use crate::context::ApiContext;
use crate::error::{ClientError, TransportError};
use crate::handler::{CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE, RestHandler};
use crate::http::{HttpMethod, HttpRequest, Transport};

use log::{debug, warn};

const MAX_LOGGED_BODY_CHARS: usize = 200;

/// What an operation asks for, before authentication is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: HttpMethod,
    /// Path below the endpoint, query included, e.g. `/v1/btc/main/addrs/x?`.
    pub path: String,
    pub body: Option<String>,
}

impl RestRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Option<String>) -> Self {
        Self {
            body,
            ..Self::new(HttpMethod::Post, path)
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }
}

/// Run `request` and return the raw body of a 2xx response.
///
/// # Errors
///
/// - Credential or configuration errors raised by `handler` (no I/O happens)
/// - [`TransportError::Network`] when no response arrives
/// - [`TransportError::Status`] for any non-2xx status
pub(crate) async fn execute(
    transport: &dyn Transport,
    handler: &dyn RestHandler,
    request: RestRequest,
    context: &ApiContext,
) -> Result<Vec<u8>, ClientError> {
    let mut http_request = HttpRequest::new(request.method, String::new());
    if let Some(body) = request.body {
        http_request
            .headers
            .insert(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string());
        http_request.body = Some(body);
    }

    handler.handle(&mut http_request, &request.path, context)?;

    debug!("{} {}", http_request.method, http_request.redacted_url());
    let response = transport.execute(&http_request).await?;

    if !response.status.is_success() {
        let body = response.body_text().into_owned();
        warn!(
            "{} {} failed with status {}: {}",
            http_request.method,
            http_request.redacted_url(),
            response.status,
            truncate_for_log(&body)
        );
        return Err(TransportError::status(response.status, body).into());
    }

    Ok(response.body)
}

pub(crate) fn truncate_for_log(body: &str) -> String {
    if body.chars().count() > MAX_LOGGED_BODY_CHARS {
        let truncated: String = body.chars().take(MAX_LOGGED_BODY_CHARS).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}
