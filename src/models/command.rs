use serde::{Deserialize, Serialize};

use super::alert::MacAddress;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnblockRequest {
    pub mac: MacAddress,
}

/// Acknowledgement of an unblock. A missing `success` field means failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnblockResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub error: Option<String>,
}
