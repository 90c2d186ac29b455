//! Element ids of the operator page.

pub const TOTAL_PACKETS: &str = "total-packets";
pub const ARP_PACKETS: &str = "arp-packets";
pub const UNIQUE_MACS: &str = "unique-macs";
pub const TOTAL_TREND: &str = "total-trend";
pub const ARP_TREND: &str = "arp-trend";
pub const MAC_TREND: &str = "mac-trend";
pub const ARP_CARD: &str = "arp-card";
pub const MAC_CARD: &str = "mac-card";

pub const ALERT_LIST: &str = "alert-list";
pub const ALERT_COUNT: &str = "alert-count";
pub const BLOCKED_LIST: &str = "blocked-list";
pub const BLOCKED_COUNT: &str = "blocked-count";

pub const STATUS_DOT: &str = "status-dot";
pub const STATUS_TEXT: &str = "status-text";
pub const THRESHOLD_ARP: &str = "threshold-arp";
pub const THRESHOLD_ARP_CONSEC: &str = "threshold-arp-consec";
pub const THRESHOLD_MAC: &str = "threshold-mac";
pub const THRESHOLD_MAC_CONSEC: &str = "threshold-mac-consec";

pub const AI_BOX: &str = "ai-status-box";
pub const AI_PREDICTION: &str = "ai-prediction";
pub const AI_CONFIDENCE: &str = "ai-confidence";
pub const AI_SOURCE: &str = "ai-source";

pub const NOTICE: &str = "operator-notice";
