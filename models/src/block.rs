use crate::resource::ResourceModel;

use serde::{Deserialize, Serialize};

/// A block as returned by `GET /blocks/{hash-or-height}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relayed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrkl_root: Option<String>,
    /// Page of transaction hashes; see `txstart` and `limit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_block_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_txids: Option<String>,
}

impl ResourceModel for Block {}
