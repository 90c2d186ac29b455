use super::document::Fragment;
use super::ids;
use crate::engine::reconciler::{CardAlert, StatsView};

const CARD_CLASS: &str = "stat-card";
const CARD_ALERT_CLASS: &str = "stat-card alert";
const OVER_THRESHOLD_LABEL: &str = "⚠ Over threshold!";

/// Counter cards. Trend and threshold badges are left untouched while the
/// view carries no decision for them.
pub fn render_stats(view: &StatsView) -> Fragment {
    let mut fragment = Fragment::new()
        .text(ids::TOTAL_PACKETS, view.values.total_packets.to_string())
        .text(ids::ARP_PACKETS, view.values.arp_packets.to_string())
        .text(ids::UNIQUE_MACS, view.values.unique_src_macs.to_string());

    if let Some(trend) = view.trend {
        fragment = fragment
            .text(ids::TOTAL_TREND, trend.label())
            .class(ids::TOTAL_TREND, trend.css_class());
    }

    if let Some(alerts) = view.alerts {
        fragment = fragment
            .extend(card(ids::ARP_CARD, ids::ARP_TREND, alerts.arp))
            .extend(card(ids::MAC_CARD, ids::MAC_TREND, alerts.mac));
    }

    fragment
}

fn card(card_id: &'static str, badge_id: &'static str, alert: CardAlert) -> Fragment {
    if alert.over_threshold {
        Fragment::new()
            .class(card_id, CARD_ALERT_CLASS)
            .text(badge_id, OVER_THRESHOLD_LABEL)
            .class(badge_id, "stat-trend up")
    } else {
        Fragment::new()
            .class(card_id, CARD_CLASS)
            .text(badge_id, format!("Threshold: {}", alert.threshold))
            .class(badge_id, "stat-trend normal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reconciler::reconcile;
    use crate::engine::thresholds::ThresholdStore;
    use crate::models::stats::StatsSnapshot;
    use crate::render::document::Document;

    fn snap(total: u64, arp: u64, macs: u64) -> StatsSnapshot {
        StatsSnapshot { total_packets: total, arp_packets: arp, unique_src_macs: macs }
    }

    #[test]
    fn test_baseline_renders_counters_only() {
        let out = reconcile(snap(5, 2, 1), None, &ThresholdStore::default());
        let mut doc = Document::new();
        doc.apply(&render_stats(&out.view));
        assert_eq!(doc.text(ids::TOTAL_PACKETS), Some("5"));
        assert_eq!(doc.text(ids::ARP_PACKETS), Some("2"));
        assert_eq!(doc.text(ids::UNIQUE_MACS), Some("1"));
        assert!(doc.element(ids::TOTAL_TREND).is_none());
        assert!(doc.element(ids::ARP_CARD).is_none());
    }

    #[test]
    fn test_breach_and_recovery() {
        let store = ThresholdStore::default();
        let mut doc = Document::new();

        let hot = reconcile(snap(0, 11, 3), Some(snap(0, 5, 3)), &store);
        doc.apply(&render_stats(&hot.view));
        assert_eq!(doc.class(ids::ARP_CARD), Some(CARD_ALERT_CLASS));
        assert_eq!(doc.text(ids::ARP_TREND), Some(OVER_THRESHOLD_LABEL));
        assert_eq!(doc.class(ids::MAC_CARD), Some(CARD_CLASS));
        assert_eq!(doc.text(ids::MAC_TREND), Some("Threshold: 10"));

        let calm = reconcile(snap(0, 10, 3), hot.previous, &store);
        doc.apply(&render_stats(&calm.view));
        assert_eq!(doc.class(ids::ARP_CARD), Some(CARD_CLASS));
        assert_eq!(doc.text(ids::ARP_TREND), Some("Threshold: 10"));
        assert_eq!(doc.text(ids::TOTAL_TREND), Some("— Stable"));
    }
}
