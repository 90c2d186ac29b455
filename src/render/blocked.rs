use super::document::{escape_html, Fragment};
use super::ids;
use crate::backend::BackendResult;
use crate::dispatcher::{CommandDispatcher, UnblockOutcome};
use crate::models::alert::MacAddress;

pub const NO_BLOCKED_HTML: &str = r#"<div class="no-blocked">No blocked MACs</div>"#;

/// The unblock button of one row. Each action owns its MAC value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnblockAction {
    mac: MacAddress,
}

impl UnblockAction {
    pub fn new(mac: MacAddress) -> Self {
        Self { mac }
    }

    pub fn mac(&self) -> &MacAddress {
        &self.mac
    }

    pub async fn invoke(&self, dispatcher: &CommandDispatcher) -> BackendResult<UnblockOutcome> {
        dispatcher.unblock(&self.mac).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedRow {
    pub mac: MacAddress,
    pub action: UnblockAction,
}

pub struct BlockedListView {
    pub rows: Vec<BlockedRow>,
    pub fragment: Fragment,
}

pub fn render_blocked(macs: &[MacAddress]) -> BlockedListView {
    let rows: Vec<BlockedRow> = macs
        .iter()
        .map(|mac| BlockedRow {
            mac: mac.clone(),
            action: UnblockAction::new(mac.clone()),
        })
        .collect();

    let html = if rows.is_empty() {
        NO_BLOCKED_HTML.to_string()
    } else {
        rows.iter().map(row_html).collect::<Vec<_>>().join("")
    };

    BlockedListView {
        fragment: Fragment::new()
            .html(ids::BLOCKED_LIST, html)
            .text(ids::BLOCKED_COUNT, rows.len().to_string()),
        rows,
    }
}

fn row_html(row: &BlockedRow) -> String {
    let shown = escape_html(row.mac.as_str());
    let bound = escape_html(row.action.mac().as_str());
    format!(
        r#"<div class="mac-item"><span class="mac-address">{}</span><button class="unblock-btn" data-action="unblock" data-mac="{}">Unblock</button></div>"#,
        shown, bound
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::backend::testing::MockBackend;
    use crate::backend::Endpoint;
    use crate::config::settings::Settings;
    use crate::dashboard::Dashboard;
    use crate::render::document::Document;

    #[test]
    fn test_empty_is_placeholder() {
        let view = render_blocked(&[]);
        assert!(view.rows.is_empty());
        let mut doc = Document::new();
        doc.apply(&view.fragment);
        assert_eq!(doc.html(ids::BLOCKED_LIST), Some(NO_BLOCKED_HTML));
        assert_eq!(doc.text(ids::BLOCKED_COUNT), Some("0"));
    }

    #[test]
    fn test_each_row_binds_its_own_mac() {
        let macs = [MacAddress::new("AA:BB:CC:DD:EE:01"), MacAddress::new("AA:BB:CC:DD:EE:02")];
        let view = render_blocked(&macs);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].action.mac().as_str(), "AA:BB:CC:DD:EE:01");
        assert_eq!(view.rows[1].action.mac().as_str(), "AA:BB:CC:DD:EE:02");

        let mut doc = Document::new();
        doc.apply(&view.fragment);
        let html = doc.html(ids::BLOCKED_LIST).unwrap();
        assert!(html.contains(r#"data-mac="AA:BB:CC:DD:EE:01""#));
        assert!(html.contains(r#"data-mac="AA:BB:CC:DD:EE:02""#));
        assert_eq!(doc.text(ids::BLOCKED_COUNT), Some("2"));
    }

    #[tokio::test]
    async fn test_action_dispatches_exact_mac() {
        let backend = Arc::new(MockBackend::new());
        backend.respond(Endpoint::Unblock, json!({ "success": true }));
        backend.respond(Endpoint::Blocked, json!([]));
        backend.respond(Endpoint::Alerts, json!([]));
        let dashboard = Arc::new(Dashboard::new(backend.clone(), &Settings::default()));
        let dispatcher = CommandDispatcher::new(dashboard);

        let view = render_blocked(&[MacAddress::new("AA:BB:CC:DD:EE:FF")]);
        assert_eq!(view.rows.len(), 1);
        let outcome = view.rows[0].action.invoke(&dispatcher).await.unwrap();
        assert_eq!(outcome, UnblockOutcome::Unblocked);

        let posted: Vec<_> = backend
            .calls()
            .into_iter()
            .filter(|(endpoint, _)| *endpoint == Endpoint::Unblock)
            .collect();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].1, Some(json!({ "mac": "AA:BB:CC:DD:EE:FF" })));
    }
}
