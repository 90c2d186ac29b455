//! Merges a freshly polled stats snapshot with the previous one and the
//! cached thresholds into render-ready card state.

use serde::Serialize;

use super::thresholds::ThresholdStore;
use super::trend::{classify_trend, Trend};
use crate::models::stats::StatsSnapshot;

/// Threshold verdict for one counter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardAlert {
    pub over_threshold: bool,
    /// Limit the counter was compared against.
    pub threshold: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdAlerts {
    pub arp: CardAlert,
    pub mac: CardAlert,
}

/// View state for the three counter cards.
///
/// `trend` and `alerts` are `None` on the first observation: a single
/// reading only establishes the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub values: StatsSnapshot,
    pub trend: Option<Trend>,
    pub alerts: Option<ThresholdAlerts>,
}

/// Output of one reconciliation: the view plus the baseline to hand to the
/// next cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    pub view: StatsView,
    pub previous: Option<StatsSnapshot>,
}

pub fn reconcile(
    snapshot: StatsSnapshot,
    previous: Option<StatsSnapshot>,
    thresholds: &ThresholdStore,
) -> Reconciled {
    let (trend, alerts) = match previous {
        Some(prev) => {
            let trend = classify_trend(
                saturating_i64(snapshot.total_packets),
                saturating_i64(prev.total_packets),
            );

            let arp_limit = thresholds.arp_limit();
            let mac_limit = thresholds.mac_limit();
            let alerts = ThresholdAlerts {
                arp: CardAlert {
                    over_threshold: snapshot.arp_packets > arp_limit,
                    threshold: arp_limit,
                },
                mac: CardAlert {
                    over_threshold: snapshot.unique_src_macs > mac_limit,
                    threshold: mac_limit,
                },
            };
            (Some(trend), Some(alerts))
        }
        None => (None, None),
    };

    Reconciled {
        view: StatsView {
            values: snapshot,
            trend,
            alerts,
        },
        previous: Some(snapshot),
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::ThresholdSet;

    fn snap(total: u64, arp: u64, macs: u64) -> StatsSnapshot {
        StatsSnapshot {
            total_packets: total,
            arp_packets: arp,
            unique_src_macs: macs,
        }
    }

    #[test]
    fn test_first_observation_is_baseline_only() {
        let out = reconcile(snap(100, 50, 40), None, &ThresholdStore::default());
        assert_eq!(out.view.values, snap(100, 50, 40));
        assert!(out.view.trend.is_none());
        assert!(out.view.alerts.is_none());
        assert_eq!(out.previous, Some(snap(100, 50, 40)));
    }

    #[test]
    fn test_arp_threshold_is_strict() {
        let store = ThresholdStore::default();
        let prev = Some(snap(0, 5, 0));

        let over = reconcile(snap(0, 11, 0), prev, &store);
        let alerts = over.view.alerts.unwrap();
        assert!(alerts.arp.over_threshold);
        assert_eq!(alerts.arp.threshold, 10);

        let at = reconcile(snap(0, 10, 0), prev, &store);
        assert!(!at.view.alerts.unwrap().arp.over_threshold);
    }

    #[test]
    fn test_cards_alert_independently() {
        let mut store = ThresholdStore::default();
        store.update(ThresholdSet { arp: 100, mac: 5, ..Default::default() });

        let out = reconcile(snap(0, 60, 6), Some(snap(0, 0, 0)), &store);
        let alerts = out.view.alerts.unwrap();
        assert!(!alerts.arp.over_threshold);
        assert_eq!(alerts.arp.threshold, 100);
        assert!(alerts.mac.over_threshold);
        assert_eq!(alerts.mac.threshold, 5);
    }

    #[test]
    fn test_trend_uses_total_packets() {
        let store = ThresholdStore::default();
        let up = reconcile(snap(150, 0, 0), Some(snap(100, 0, 0)), &store);
        assert_eq!(up.view.trend, Some(Trend::Up));
        let flat = reconcile(snap(110, 0, 0), Some(snap(100, 0, 0)), &store);
        assert_eq!(flat.view.trend, Some(Trend::Stable));
        let down = reconcile(snap(0, 0, 0), Some(snap(100, 0, 0)), &store);
        assert_eq!(down.view.trend, Some(Trend::Down));
    }

    #[test]
    fn test_new_snapshot_becomes_baseline() {
        let store = ThresholdStore::default();
        let first = reconcile(snap(10, 0, 0), None, &store);
        let second = reconcile(snap(40, 0, 0), first.previous, &store);
        assert_eq!(second.view.trend, Some(Trend::Up));
        assert_eq!(second.previous, Some(snap(40, 0, 0)));
    }
}
