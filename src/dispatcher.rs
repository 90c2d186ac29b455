use std::sync::Arc;

use tracing::{info, warn};

use crate::backend::{BackendError, BackendResult, Endpoint};
use crate::dashboard::Dashboard;
use crate::models::alert::MacAddress;
use crate::models::command::{UnblockRequest, UnblockResponse};
use crate::scheduler::PollTask;

/// Shown when the backend rejects an unblock without saying why.
pub const UNBLOCK_FAILED: &str = "Unblock failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnblockOutcome {
    Unblocked,
    /// The backend refused; carries the message shown to the operator.
    Rejected(String),
}

/// Issues state-changing calls and re-polls the views they affect without
/// waiting for the next cadence tick.
pub struct CommandDispatcher {
    dashboard: Arc<Dashboard>,
}

impl CommandDispatcher {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    pub async fn unblock(&self, mac: &MacAddress) -> BackendResult<UnblockOutcome> {
        let body = serde_json::to_value(UnblockRequest { mac: mac.clone() })?;

        let reply = match self.dashboard.backend().call(Endpoint::Unblock, Some(body)).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(mac = %mac, error = %e, "Unblock request failed");
                return Err(e);
            }
        };
        let response: UnblockResponse = serde_json::from_value(reply)?;

        if !response.success {
            let message = response
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNBLOCK_FAILED.to_string());
            warn!(mac = %mac, error = %message, "Backend rejected unblock");
            self.dashboard.notify(Some(&message));
            return Ok(UnblockOutcome::Rejected(message));
        }

        info!(mac = %mac, "MAC unblocked");
        self.dashboard.notify(None);
        // Refresh failures are logged by the dashboard and retried on cadence.
        let _ = tokio::join!(
            self.dashboard.refresh(PollTask::Blocked),
            self.dashboard.refresh(PollTask::Alerts),
        );
        Ok(UnblockOutcome::Unblocked)
    }

    /// Clear the backend's alert list. Any reply counts as acknowledgement;
    /// only a failed exchange skips the refresh.
    pub async fn clear_alerts(&self) -> BackendResult<()> {
        match self.dashboard.backend().call(Endpoint::ClearAlerts, None).await {
            Ok(_) | Err(BackendError::Decode(_)) | Err(BackendError::Status(_)) => {}
            Err(e) => {
                warn!(error = %e, "Clear-alerts request failed");
                return Err(e);
            }
        }

        info!("Alerts cleared");
        let _ = self.dashboard.refresh(PollTask::Alerts).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::backend::testing::MockBackend;
    use crate::config::settings::Settings;
    use crate::render::ids;

    fn setup() -> (Arc<MockBackend>, Arc<Dashboard>, CommandDispatcher) {
        let backend = Arc::new(MockBackend::new());
        let dashboard = Arc::new(Dashboard::new(backend.clone(), &Settings::default()));
        let dispatcher = CommandDispatcher::new(dashboard.clone());
        (backend, dashboard, dispatcher)
    }

    #[tokio::test]
    async fn test_unblock_success_refreshes_lists() {
        let (backend, dashboard, dispatcher) = setup();
        backend.respond(Endpoint::Unblock, json!({ "success": true }));
        backend.respond(Endpoint::Blocked, json!([]));
        backend.respond(
            Endpoint::Alerts,
            json!([{ "type": "UNBLOCK", "message": "released AA:BB:CC:DD:EE:FF", "timestamp": "t" }]),
        );

        let outcome = dispatcher.unblock(&MacAddress::new("AA:BB:CC:DD:EE:FF")).await.unwrap();
        assert_eq!(outcome, UnblockOutcome::Unblocked);
        assert_eq!(backend.call_count(Endpoint::Blocked), 1);
        assert_eq!(backend.call_count(Endpoint::Alerts), 1);
        assert_eq!(dashboard.document().text(ids::ALERT_COUNT), Some("1"));
    }

    #[tokio::test]
    async fn test_unblock_rejection_surfaces_message() {
        let (backend, dashboard, dispatcher) = setup();
        backend.respond(Endpoint::Blocked, json!(["AA:BB:CC:DD:EE:FF"]));
        dashboard.refresh(PollTask::Blocked).await.unwrap();
        let list_before = dashboard.document().html(ids::BLOCKED_LIST).map(str::to_string);

        backend.respond(Endpoint::Unblock, json!({ "success": false, "error": "not found" }));
        let outcome = dispatcher.unblock(&MacAddress::new("AA:BB:CC:DD:EE:FF")).await.unwrap();

        assert_eq!(outcome, UnblockOutcome::Rejected("not found".to_string()));
        assert_eq!(backend.call_count(Endpoint::Blocked), 1);
        assert_eq!(backend.call_count(Endpoint::Alerts), 0);
        assert_eq!(dashboard.blocked(), vec![MacAddress::new("AA:BB:CC:DD:EE:FF")]);

        let doc = dashboard.document();
        assert_eq!(doc.html(ids::BLOCKED_LIST).map(str::to_string), list_before);
        assert_eq!(doc.text(ids::NOTICE), Some("not found"));
        assert_eq!(doc.class(ids::NOTICE), Some("notice visible"));
    }

    #[tokio::test]
    async fn test_unblock_rejection_without_message_uses_fallback() {
        let (backend, _dashboard, dispatcher) = setup();
        backend.respond(Endpoint::Unblock, json!({ "error": "" }));
        let outcome = dispatcher.unblock(&MacAddress::new("00:11:22:33:44:55")).await.unwrap();
        assert_eq!(outcome, UnblockOutcome::Rejected(UNBLOCK_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_successful_unblock_clears_notice() {
        let (backend, dashboard, dispatcher) = setup();
        backend.respond(Endpoint::Blocked, json!([]));
        backend.respond(Endpoint::Alerts, json!([]));
        backend.respond(Endpoint::Unblock, json!({ "error": "busy" }));
        dispatcher.unblock(&MacAddress::new("00:11:22:33:44:55")).await.unwrap();
        assert_eq!(dashboard.document().text(ids::NOTICE), Some("busy"));

        backend.respond(Endpoint::Unblock, json!({ "success": true }));
        dispatcher.unblock(&MacAddress::new("00:11:22:33:44:55")).await.unwrap();
        assert_eq!(dashboard.document().class(ids::NOTICE), Some("notice hidden"));
    }

    #[tokio::test]
    async fn test_unblock_transport_failure_skips_refresh() {
        let (backend, _dashboard, dispatcher) = setup();
        backend.fail(Endpoint::Unblock);
        assert!(dispatcher.unblock(&MacAddress::new("00:11:22:33:44:55")).await.is_err());
        assert_eq!(backend.call_count(Endpoint::Blocked), 0);
        assert_eq!(backend.call_count(Endpoint::Alerts), 0);
    }

    #[tokio::test]
    async fn test_clear_alerts_always_refreshes() {
        let (backend, dashboard, dispatcher) = setup();
        backend.respond(Endpoint::ClearAlerts, serde_json::Value::Null);
        backend.respond(Endpoint::Alerts, json!([]));

        dispatcher.clear_alerts().await.unwrap();
        assert_eq!(backend.call_count(Endpoint::Alerts), 1);
        assert_eq!(dashboard.document().text(ids::ALERT_COUNT), Some("0"));
    }

    #[tokio::test]
    async fn test_clear_alerts_transport_failure() {
        let (backend, _dashboard, dispatcher) = setup();
        backend.fail(Endpoint::ClearAlerts);
        assert!(dispatcher.clear_alerts().await.is_err());
        assert_eq!(backend.call_count(Endpoint::Alerts), 0);
    }
}
