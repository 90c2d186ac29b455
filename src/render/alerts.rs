use super::document::{escape_html, Fragment};
use super::ids;
use crate::models::alert::{Alert, AlertKind};

pub const NO_ALERTS_HTML: &str = concat!(
    r#"<div class="no-alerts">"#,
    r#"<div class="no-alerts-icon">✅</div>"#,
    r#"<div>No active alerts</div>"#,
    r#"</div>"#
);

pub struct AlertListView {
    pub count: usize,
    pub fragment: Fragment,
}

pub fn alert_class(kind: &AlertKind) -> &'static str {
    match kind {
        AlertKind::Block => "alert-item block",
        AlertKind::Unblock => "alert-item unblock",
        AlertKind::Other(_) => "alert-item",
    }
}

/// Render alerts in the order the backend sent them.
pub fn render_alerts(alerts: &[Alert]) -> AlertListView {
    let html = if alerts.is_empty() {
        NO_ALERTS_HTML.to_string()
    } else {
        alerts.iter().map(alert_item).collect::<Vec<_>>().join("")
    };

    AlertListView {
        count: alerts.len(),
        fragment: Fragment::new()
            .html(ids::ALERT_LIST, html)
            .text(ids::ALERT_COUNT, alerts.len().to_string()),
    }
}

fn alert_item(alert: &Alert) -> String {
    format!(
        r#"<div class="{}"><div class="alert-type">{}</div><div class="alert-message">{}</div><div class="alert-time">{}</div></div>"#,
        alert_class(&alert.kind),
        escape_html(alert.kind.as_str()),
        escape_html(&alert.message),
        escape_html(&alert.timestamp),
    )
}
