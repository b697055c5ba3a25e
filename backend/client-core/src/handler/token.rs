use super::{DEFAULT_USER_AGENT, REQUEST_ID_HEADER, RestHandler, USER_AGENT_HEADER};
use crate::context::ApiContext;
use crate::credential::{Credential, CredentialManager};
use crate::error::{ClientError, CredentialError};
use crate::http::HttpRequest;

use std::sync::Arc;

use url::form_urlencoded;

const HANDLER_NAME: &str = "token";

/// Authenticates requests by appending the access token to the URL.
pub struct TokenRestHandler {
    endpoint: String,
    user_agent: String,
    credentials: Arc<CredentialManager>,
}

impl TokenRestHandler {
    pub fn new(
        endpoint: &str,
        user_agent: Option<&str>,
        credentials: Arc<CredentialManager>,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            user_agent: user_agent.unwrap_or(DEFAULT_USER_AGENT).to_string(),
            credentials,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RestHandler for TokenRestHandler {
    fn handle(
        &self,
        request: &mut HttpRequest,
        path: &str,
        context: &ApiContext,
    ) -> Result<(), ClientError> {
        let credential = match context.credential() {
            Some(credential) => credential,
            None => self.credentials.default_credential()?,
        };

        let token = match credential {
            Credential::Token(token) => token,
            other => return Err(CredentialError::invalid(other.kind(), HANDLER_NAME).into()),
        };

        if token.is_empty() {
            return Err(CredentialError::missing("Empty or invalid credentials passed").into());
        }

        request.url = append_token(&format!("{}{path}", self.endpoint), token.expose());

        if !request.headers.contains_key(USER_AGENT_HEADER) {
            request
                .headers
                .insert(USER_AGENT_HEADER.to_string(), self.user_agent.clone());
        }

        if request.method.is_write() {
            request.headers.insert(
                REQUEST_ID_HEADER.to_string(),
                context.request_id().to_string(),
            );
        }

        for (name, value) in context.request_headers() {
            request.headers.insert(name.clone(), value.clone());
        }

        Ok(())
    }
}

/// Add `token=<t>` to the query string of `url`.
///
/// `?` starts a new query, `&` extends a non-empty one, and a URL that
/// already ends in a bare `?` takes the pair as is. The token is
/// form-encoded so reserved characters stay inside the value.
pub fn append_token(url: &str, token: &str) -> String {
    let token: String = form_urlencoded::byte_serialize(token.as_bytes()).collect();
    match url.split_once('?') {
        None => format!("{url}?token={token}"),
        Some((_, "")) => format!("{url}token={token}"),
        Some(_) if url.ends_with('&') => format!("{url}token={token}"),
        Some(_) => format!("{url}&token={token}"),
    }
}
