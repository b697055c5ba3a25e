//! Command-line surface of `bcy`.

use blockcypher_client::Params;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

pub const TOKEN_ENV_VAR: &str = "BLOCKCYPHER_TOKEN";

/// Query the BlockCypher API from the terminal
#[derive(Parser, Debug)]
#[command(name = "bcy", version, about, long_about = None)]
pub struct Cli {
    /// SDK config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token; overrides any configured credential
    #[arg(long, global = true, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Coin, e.g. btc, ltc, doge, bcy
    #[arg(long, global = true)]
    pub coin: Option<String>,

    /// Chain, e.g. main, test3
    #[arg(long, global = true)]
    pub chain: Option<String>,

    /// Directory for bcy.log (defaults to the platform cache directory)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Current state of the chain
    Chain,
    #[command(subcommand)]
    Address(AddressCommand),
    #[command(subcommand)]
    Block(BlockCommand),
    #[command(subcommand)]
    Tx(TxCommand),
    #[command(subcommand)]
    Wallet(WalletCommand),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum AddressCommand {
    /// Generate a new address and key pair
    Create,
    /// Address summary with transaction references
    Get {
        address: String,
        #[command(flatten)]
        filter: AddressFilter,
    },
    /// Address with full transactions
    Full {
        address: String,
        #[arg(long)]
        before: Option<u64>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Balance only
    Balance { address: String },
    /// Several addresses in one request
    Multi {
        #[arg(required = true)]
        addresses: Vec<String>,
        #[command(flatten)]
        filter: AddressFilter,
    },
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct AddressFilter {
    /// Only unspent outputs
    #[arg(long)]
    pub unspent_only: bool,
    /// Only transactions below this block height
    #[arg(long)]
    pub before: Option<u64>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum BlockCommand {
    /// Block by hash or height
    Get {
        hash_or_height: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum TxCommand {
    /// Transaction by hash
    Get {
        hash: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum WalletCommand {
    Get { name: String },
    /// Create a wallet, optionally seeded with addresses
    Create { name: String, addresses: Vec<String> },
    Delete { name: String },
}

impl AddressFilter {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        if self.unspent_only {
            params.insert("unspentOnly".to_string(), "true".to_string());
        }
        if let Some(before) = self.before {
            params.insert("before".to_string(), before.to_string());
        }
        params
    }
}

/// `before`/`limit` style params, skipping unset values.
pub fn optional_params(pairs: &[(&str, Option<String>)]) -> Params {
    pairs
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
}
