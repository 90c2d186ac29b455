use serde::{Deserialize, Serialize};

/// Detection limits currently enforced by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// ARP packets per second.
    #[serde(default)]
    pub arp: u64,

    /// Seconds ARP must stay above `arp` before an attack is declared.
    #[serde(rename = "arp_consec", default)]
    pub arp_consecutive_secs: u64,

    /// Distinct source MACs per second.
    #[serde(default)]
    pub mac: u64,

    #[serde(rename = "mac_consec", default)]
    pub mac_consecutive_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub arp_under_attack: bool,

    #[serde(default)]
    pub mac_under_attack: bool,

    #[serde(default)]
    pub thresholds: ThresholdSet,
}

impl SystemStatus {
    pub fn under_attack(&self) -> bool {
        self.arp_under_attack || self.mac_under_attack
    }
}

/// Latest verdict of the backend's AI classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiStatus {
    #[serde(default)]
    pub prediction: String,

    /// In `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,

    #[serde(default)]
    pub source: String,
}
