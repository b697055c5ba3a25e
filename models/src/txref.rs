use serde::{Deserialize, Serialize};

/// One transaction input or output touching an address.
///
/// `tx_input_n` is -1 for outputs and `tx_output_n` is -1 for inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Txref {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_input_n: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_output_n: Option<i64>,
    /// Satoshis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_spend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_of: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Txref {
    pub fn new(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: Some(tx_hash.into()),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_block_height(mut self, block_height: i64) -> Self {
        self.block_height = Some(block_height);
        self
    }

    pub fn with_output_n(mut self, tx_output_n: i64) -> Self {
        self.tx_input_n = Some(-1);
        self.tx_output_n = Some(tx_output_n);
        self
    }

    pub fn with_input_n(mut self, tx_input_n: i64) -> Self {
        self.tx_input_n = Some(tx_input_n);
        self.tx_output_n = Some(-1);
        self
    }
}
