//! Resource operations, one borrowed view of the client per resource.

pub mod address;
pub mod address_balance;
pub mod block;
pub mod blockchain;
pub mod full_address;
pub mod transaction;
pub mod wallet;

pub use address::AddressApi;
pub use address_balance::AddressBalanceApi;
pub use block::BlockApi;
pub use blockchain::BlockchainApi;
pub use full_address::FullAddressApi;
pub use transaction::TransactionApi;
pub use wallet::WalletApi;

/// Path segment under the chain prefix for address resources.
pub(crate) const ADDRS_SEGMENT: &str = "addrs";
