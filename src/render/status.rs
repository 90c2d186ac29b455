use super::document::Fragment;
use super::ids;
use crate::models::status::SystemStatus;

/// Global status indicator plus the threshold panel.
pub fn render_status(status: &SystemStatus) -> Fragment {
    let (dot, text) = if status.under_attack() {
        ("status-dot alert", "⚠ Attack detected!")
    } else {
        ("status-dot online", "Monitoring…")
    };

    let t = &status.thresholds;
    Fragment::new()
        .class(ids::STATUS_DOT, dot)
        .text(ids::STATUS_TEXT, text)
        .text(ids::THRESHOLD_ARP, format!("{} pkts/s", t.arp))
        .text(ids::THRESHOLD_ARP_CONSEC, format!("{} s", t.arp_consecutive_secs))
        .text(ids::THRESHOLD_MAC, format!("{} MACs/s", t.mac))
        .text(ids::THRESHOLD_MAC_CONSEC, format!("{} s", t.mac_consecutive_secs))
}

/// Operator notice for rejected commands; `None` hides it.
pub fn render_notice(message: Option<&str>) -> Fragment {
    match message {
        Some(message) => Fragment::new()
            .text(ids::NOTICE, message)
            .class(ids::NOTICE, "notice visible"),
        None => Fragment::new()
            .text(ids::NOTICE, "")
            .class(ids::NOTICE, "notice hidden"),
    }
}
