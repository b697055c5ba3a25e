//! Resource models for the BlockCypher REST API.
//!
//! Plain data: every field is optional and mirrors the JSON field of the same
//! name. Hydration and serialization go through [`ResourceModel`].

pub mod address;
pub mod block;
pub mod blockchain;
pub mod error;
pub mod resource;
pub mod transaction;
pub mod txref;
pub mod wallet;

#[cfg(test)]
mod tests;

pub use address::{Address, AddressBalance, AddressKeyChain, FullAddress};
pub use block::Block;
pub use blockchain::Blockchain;
pub use error::model_error::ModelError;
pub use resource::ResourceModel;
pub use transaction::{Transaction, TxInput, TxOutput};
pub use txref::Txref;
pub use wallet::builder::WalletBuilder;
pub use wallet::{Wallet, WalletKeyChain};
