use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One point-in-time reading of the backend's packet/MAC counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(rename = "total_pkts", default, deserialize_with = "null_as_zero")]
    pub total_packets: u64,

    #[serde(rename = "arp_pkts", default, deserialize_with = "null_as_zero")]
    pub arp_packets: u64,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub unique_src_macs: u64,
}

/// Counters the collector has not filled in yet arrive as `null`.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the `stats` call. The backend keeps answering with zeroed
/// counters plus an `error` field while it has no capture data.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub snapshot: StatsSnapshot,

    #[serde(default)]
    pub error: Option<Value>,
}

impl StatsResponse {
    /// The error marker counts only when it is truthy (`""`, `0`, `false`
    /// and `null` are ignored).
    pub fn error_marker(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// One entry of the backend's bounded history ring, oldest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Epoch seconds; the collector may report fractional seconds.
    pub timestamp: f64,

    #[serde(rename = "total_pkts", default, deserialize_with = "null_as_zero")]
    pub total_packets: u64,

    #[serde(rename = "arp_pkts", default, deserialize_with = "null_as_zero")]
    pub arp_packets: u64,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub unique_src_macs: u64,
}
