use crate::resource::ResourceModel;

use serde::{Deserialize, Serialize};

/// Current state of a chain (`GET /v1/{coin}/{chain}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Blockchain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_fee_per_kb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_fee_per_kb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_fee_per_kb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fork_height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fork_hash: Option<String>,
}

impl ResourceModel for Blockchain {}
