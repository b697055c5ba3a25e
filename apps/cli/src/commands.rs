//! Turns parsed arguments into SDK calls.

use crate::cli::{AddressCommand, BlockCommand, Cli, Command, TxCommand, WalletCommand, optional_params};
use crate::error::CliError;

use blockcypher_client::{BlockCypherClient, ClientError, Params, SdkConfig};
use models::WalletBuilder;

use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};

/// Resolve the SDK config from `--config` (or the default location) and
/// apply the command-line overrides.
pub fn build_config(cli: &Cli) -> Result<SdkConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => SdkConfig::load(path),
        None => SdkConfig::load_default(),
    }
    .map_err(ClientError::from)?;

    if let Some(token) = &cli.token {
        debug!("Using access token from command line or environment");
        config = config.with_access_token(token.clone());
    }
    if let Some(coin) = &cli.coin {
        config.api.coin = coin.clone();
    }
    if let Some(chain) = &cli.chain {
        config.api.chain = chain.clone();
    }

    config.validate().map_err(ClientError::from)?;
    Ok(config)
}

/// Run one command and return its result as JSON.
pub async fn execute(client: &BlockCypherClient, command: &Command) -> Result<Value, CliError> {
    info!("Running {command:?}");

    match command {
        Command::Chain => render(&client.chain().get(None).await?),
        Command::Address(command) => execute_address(client, command).await,
        Command::Block(BlockCommand::Get {
            hash_or_height,
            limit,
        }) => {
            let params = optional_params(&[("limit", limit.map(|l| l.to_string()))]);
            render(&client.blocks().get(hash_or_height, &params, None).await?)
        }
        Command::Tx(TxCommand::Get { hash, limit }) => {
            let params = optional_params(&[("limit", limit.map(|l| l.to_string()))]);
            render(&client.transactions().get(hash, &params, None).await?)
        }
        Command::Wallet(command) => execute_wallet(client, command).await,
    }
}

async fn execute_address(
    client: &BlockCypherClient,
    command: &AddressCommand,
) -> Result<Value, CliError> {
    let addresses = client.addresses();

    match command {
        AddressCommand::Create => render(&addresses.create(None).await?),
        AddressCommand::Get { address, filter } => {
            render(&addresses.get(address, &filter.to_params(), None).await?)
        }
        AddressCommand::Full {
            address,
            before,
            limit,
        } => {
            let params = optional_params(&[
                ("before", before.map(|b| b.to_string())),
                ("limit", limit.map(|l| l.to_string())),
            ]);
            render(&addresses.get_full_address(address, &params, None).await?)
        }
        AddressCommand::Balance { address } => {
            render(&addresses.get_only_balance(address, &Params::new(), None).await?)
        }
        AddressCommand::Multi {
            addresses: identifiers,
            filter,
        } => render(
            &addresses
                .get_multiple(identifiers, &filter.to_params(), None)
                .await?,
        ),
    }
}

async fn execute_wallet(
    client: &BlockCypherClient,
    command: &WalletCommand,
) -> Result<Value, CliError> {
    let wallets = client.wallets();

    match command {
        WalletCommand::Get { name } => render(&wallets.get(name, None).await?),
        WalletCommand::Create { name, addresses } => {
            let wallet = WalletBuilder::default()
                .with_name(name)
                .with_addresses(addresses.iter().cloned())
                .build()
                .map_err(ClientError::from)?;
            render(&wallets.create(&wallet, None).await?)
        }
        WalletCommand::Delete { name } => {
            wallets.delete(name, None).await?;
            Ok(json!({ "deleted": name }))
        }
    }
}

pub(crate) fn render<T: Serialize>(value: &T) -> Result<Value, CliError> {
    serde_json::to_value(value).map_err(|e| CliError::cli(format!("Failed to render output: {e}")))
}
