//! Shared building blocks for the BlockCypher SDK crates.
//!
//! - **common** (this crate): error locations, secret handling, status codes
//! - **models**: resource data structures returned by the API
//! - **blockcypher-client**: configuration, authentication and resource operations
//!
//! Nothing here performs I/O.

pub mod error;
pub mod http_status;
pub mod redacted_token;


pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::{HttpStatusCode, StatusClass};
pub use redacted_token::RedactedToken;
