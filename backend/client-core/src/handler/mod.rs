//! Request preparation between an operation and the transport.

pub mod token;

pub use token::TokenRestHandler;

use crate::context::ApiContext;
use crate::error::ClientError;
use crate::http::HttpRequest;

pub const USER_AGENT_HEADER: &str = "User-Agent";
pub const REQUEST_ID_HEADER: &str = "BlockCypher-Request-Id";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const SDK_NAME: &str = "BlockCypherSDK";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_USER_AGENT: &str = const_format::concatcp!(
    SDK_NAME,
    "/",
    SDK_VERSION,
    " (lang=Rust; os=",
    std::env::consts::OS,
    "; arch=",
    std::env::consts::ARCH,
    ")"
);

/// Fills in the absolute URL, authentication and headers of a request
/// whose method and body are already set.
///
/// Every failure is raised before the request reaches the transport.
pub trait RestHandler: Send + Sync {
    fn handle(
        &self,
        request: &mut HttpRequest,
        path: &str,
        context: &ApiContext,
    ) -> Result<(), ClientError>;
}
