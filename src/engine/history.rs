use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::models::stats::HistoryPoint;

const TIME_LABEL_FORMAT: &str = "%H:%M:%S";
const INVALID_TIME_LABEL: &str = "--:--:--";

/// Presentation metadata for one chart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStyle {
    pub label: &'static str,
    pub border_color: &'static str,
    pub background_color: &'static str,
}

pub const DATASETS: [DatasetStyle; 3] = [
    DatasetStyle {
        label: "Total packets",
        border_color: "#06b6d4",
        background_color: "rgba(6, 182, 212, 0.1)",
    },
    DatasetStyle {
        label: "ARP packets",
        border_color: "#ef4444",
        background_color: "rgba(239, 68, 68, 0.1)",
    },
    DatasetStyle {
        label: "Unique MACs",
        border_color: "#8b5cf6",
        background_color: "rgba(139, 92, 246, 0.1)",
    },
];

/// Chart-ready traffic history. All vectors share one index space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub total: Vec<u64>,
    pub arp: Vec<u64>,
    pub unique_macs: Vec<u64>,
    pub datasets: &'static [DatasetStyle],
    /// Always `false`: the chart is redrawn every second.
    pub animate: bool,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Convert history points to a chart series labelled in local time.
pub fn adapt(points: &[HistoryPoint]) -> ChartSeries {
    adapt_in(points, &Local)
}

pub fn adapt_in<Tz: TimeZone>(points: &[HistoryPoint], tz: &Tz) -> ChartSeries
where
    Tz::Offset: std::fmt::Display,
{
    ChartSeries {
        labels: points.iter().map(|p| time_label(p.timestamp, tz)).collect(),
        total: points.iter().map(|p| p.total_packets).collect(),
        arp: points.iter().map(|p| p.arp_packets).collect(),
        unique_macs: points.iter().map(|p| p.unique_src_macs).collect(),
        datasets: &DATASETS,
        animate: false,
    }
}

fn time_label<Tz: TimeZone>(epoch_secs: f64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if !epoch_secs.is_finite() {
        return INVALID_TIME_LABEL.to_string();
    }
    let secs = epoch_secs.floor();
    let nanos = ((epoch_secs - secs) * 1e9) as u32;
    match DateTime::from_timestamp(secs as i64, nanos.min(999_999_999)) {
        Some(utc) => utc.with_timezone(tz).format(TIME_LABEL_FORMAT).to_string(),
        None => INVALID_TIME_LABEL.to_string(),
    }
}
