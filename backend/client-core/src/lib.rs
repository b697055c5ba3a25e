//! Client for the BlockCypher REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), blockcypher_client::ClientError> {
//! use blockcypher_client::{BlockCypherClient, Params, SdkConfig};
//!
//! let config = SdkConfig::default().with_access_token("your-token");
//! let client = BlockCypherClient::new(config)?;
//! let address = client
//!     .addresses()
//!     .get("1DEP8i3QJCsomS4BSMY2RpU1upv62aGvhD", &Params::new(), None)
//!     .await?;
//! println!("{:?}", address.balance);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod credential;
pub mod error;
pub mod handler;
pub mod http;
pub mod rest_call;
pub mod validation;

#[cfg(test)]
mod tests;

pub use client::BlockCypherClient;
pub use config::SdkConfig;
pub use context::ApiContext;
pub use credential::{Credential, CredentialManager};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use validation::Params;

pub use models;
