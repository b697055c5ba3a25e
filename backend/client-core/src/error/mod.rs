pub mod argument;
pub mod config;
pub mod credential;
pub mod transport;

pub use argument::ArgumentError;
pub use config::ConfigError;
pub use credential::CredentialError;
pub use transport::TransportError;

use models::ModelError;

use thiserror::Error;

/// Every failure an SDK operation can surface.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Response body was not the JSON shape the operation expected.
    #[error(transparent)]
    Model(#[from] ModelError),
}
