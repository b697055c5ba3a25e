use crate::resource::{ResourceModel, push_item, remove_item};

use serde::{Deserialize, Serialize};

/// A transaction as returned by `GET /txs/{hash}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    /// -1 while unconfirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relayed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_spend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_of: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin_sz: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vout_sz: Option<u64>,
    /// Raw transaction, only with `includeHex=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    /// Only with `includeConfidence=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Set when `inputs` was truncated; URL of the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_inputs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_outputs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<TxInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<TxOutput>>,
}

impl ResourceModel for Transaction {}

impl Transaction {
    pub fn inputs(&self) -> &[TxInput] {
        self.inputs.as_deref().unwrap_or_default()
    }

    pub fn outputs(&self) -> &[TxOutput] {
        self.outputs.as_deref().unwrap_or_default()
    }

    pub fn add_input(&mut self, input: TxInput) -> &mut Self {
        push_item(&mut self.inputs, input);
        self
    }

    pub fn remove_input(&mut self, input: &TxInput) -> &mut Self {
        remove_item(&mut self.inputs, input);
        self
    }

    pub fn add_output(&mut self, output: TxOutput) -> &mut Self {
        push_item(&mut self.outputs, output);
        self
    }

    pub fn remove_output(&mut self, output: &TxOutput) -> &mut Self {
        remove_item(&mut self.outputs, output);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_by: Option<String>,
    /// OP_RETURN payload, hex encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_string: Option<String>,
}
