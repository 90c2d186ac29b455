use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::backend::{fetch, Backend, BackendResult};
use crate::config::settings::Settings;
use crate::engine::history::adapt;
use crate::engine::reconciler::reconcile;
use crate::engine::thresholds::ThresholdStore;
use crate::models::alert::{Alert, MacAddress};
use crate::models::stats::{HistoryPoint, StatsResponse, StatsSnapshot};
use crate::models::status::{AiStatus, SystemStatus};
use crate::render::ai_status::render_ai_status;
use crate::render::alerts::render_alerts;
use crate::render::blocked::render_blocked;
use crate::render::document::Document;
use crate::render::stats::render_stats;
use crate::render::status::{render_notice, render_status};
use crate::scheduler::PollTask;

/// What a successful poll did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Applied,
    /// The backend answered but flagged the payload as unusable.
    Suppressed,
    /// A newer response of the same task was already applied.
    Stale,
}

// ---------------------------------------------------------------------------
// DashboardState – everything a poll may mutate
// ---------------------------------------------------------------------------

struct DashboardState {
    previous_stats: Option<StatsSnapshot>,
    thresholds: ThresholdStore,
    last_alert_count: usize,
    blocked: Vec<MacAddress>,
    document: Document,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Owner of the console's view state.
///
/// Each poll fetches without holding any lock, then applies its result
/// inside one short critical section. Responses carry a per-dashboard
/// sequence number; a response older than the last one applied for the
/// same task is dropped.
pub struct Dashboard {
    backend: Arc<dyn Backend>,
    flood_label: String,
    state: Mutex<DashboardState>,
    next_sequence: AtomicU64,
    applied: DashMap<PollTask, u64>,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn Backend>, settings: &Settings) -> Self {
        let mut document = Document::new();
        document.apply(&render_notice(None));

        Self {
            backend,
            flood_label: settings.ai.flood_label.clone(),
            state: Mutex::new(DashboardState {
                previous_stats: None,
                thresholds: ThresholdStore::new(&settings.thresholds),
                last_alert_count: 0,
                blocked: Vec::new(),
                document,
            }),
            next_sequence: AtomicU64::new(0),
            applied: DashMap::new(),
        }
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Poll one endpoint and fold the result into the view. On error the
    /// view is left exactly as it was.
    pub async fn refresh(&self, task: PollTask) -> BackendResult<Refresh> {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed) + 1;

        let result = match task {
            PollTask::Stats => self.refresh_stats(sequence).await,
            PollTask::History => self.refresh_history(sequence).await,
            PollTask::Alerts => self.refresh_alerts(sequence).await,
            PollTask::Blocked => self.refresh_blocked(sequence).await,
            PollTask::Status => self.refresh_status(sequence).await,
            PollTask::AiStatus => self.refresh_ai_status(sequence).await,
        };

        match &result {
            Ok(Refresh::Stale) => {
                debug!(task = task.name(), sequence, "Discarded out-of-order response");
            }
            Ok(_) => {}
            Err(e) => {
                warn!(task = task.name(), error = %e, "Poll failed; keeping previous state");
            }
        }

        result
    }

    async fn refresh_stats(&self, sequence: u64) -> BackendResult<Refresh> {
        let response: StatsResponse = fetch(self.backend(), PollTask::Stats.endpoint()).await?;

        let mut state = self.state.lock();
        if !self.accept(PollTask::Stats, sequence) {
            return Ok(Refresh::Stale);
        }

        if let Some(marker) = response.error_marker() {
            debug!(error = %marker, "Backend has no stats this cycle");
            return Ok(Refresh::Suppressed);
        }

        let reconciled = reconcile(response.snapshot, state.previous_stats, &state.thresholds);
        state.previous_stats = reconciled.previous;
        state.document.apply(&render_stats(&reconciled.view));
        Ok(Refresh::Applied)
    }

    async fn refresh_history(&self, sequence: u64) -> BackendResult<Refresh> {
        let points: Vec<HistoryPoint> = fetch(self.backend(), PollTask::History.endpoint()).await?;
        let series = adapt(&points);

        let mut state = self.state.lock();
        if !self.accept(PollTask::History, sequence) {
            return Ok(Refresh::Stale);
        }
        state.document.set_chart(series);
        Ok(Refresh::Applied)
    }

    async fn refresh_alerts(&self, sequence: u64) -> BackendResult<Refresh> {
        let alerts: Vec<Alert> = fetch(self.backend(), PollTask::Alerts.endpoint()).await?;
        let view = render_alerts(&alerts);

        let mut state = self.state.lock();
        if !self.accept(PollTask::Alerts, sequence) {
            return Ok(Refresh::Stale);
        }

        if view.count > state.last_alert_count && state.last_alert_count > 0 {
            info!(
                new = view.count - state.last_alert_count,
                total = view.count,
                "New alerts received"
            );
        }
        state.last_alert_count = view.count;
        state.document.apply(&view.fragment);
        Ok(Refresh::Applied)
    }

    async fn refresh_blocked(&self, sequence: u64) -> BackendResult<Refresh> {
        let macs: Vec<MacAddress> = fetch(self.backend(), PollTask::Blocked.endpoint()).await?;
        let view = render_blocked(&macs);

        let mut state = self.state.lock();
        if !self.accept(PollTask::Blocked, sequence) {
            return Ok(Refresh::Stale);
        }
        state.blocked = macs;
        state.document.apply(&view.fragment);
        Ok(Refresh::Applied)
    }

    async fn refresh_status(&self, sequence: u64) -> BackendResult<Refresh> {
        let status: SystemStatus = fetch(self.backend(), PollTask::Status.endpoint()).await?;

        let mut state = self.state.lock();
        if !self.accept(PollTask::Status, sequence) {
            return Ok(Refresh::Stale);
        }
        state.thresholds.update(status.thresholds);
        state.document.apply(&render_status(&status));
        Ok(Refresh::Applied)
    }

    async fn refresh_ai_status(&self, sequence: u64) -> BackendResult<Refresh> {
        let status: AiStatus = fetch(self.backend(), PollTask::AiStatus.endpoint()).await?;
        let view = render_ai_status(&status, &self.flood_label);

        let mut state = self.state.lock();
        if !self.accept(PollTask::AiStatus, sequence) {
            return Ok(Refresh::Stale);
        }
        state.document.apply(&view.fragment);
        Ok(Refresh::Applied)
    }

    /// Record `sequence` as the newest applied response of `task`, unless a
    /// newer one got there first.
    fn accept(&self, task: PollTask, sequence: u64) -> bool {
        let mut last = self.applied.entry(task).or_insert(0);
        if sequence < *last {
            return false;
        }
        *last = sequence;
        true
    }

    /// Show (or clear) the operator notice.
    pub fn notify(&self, message: Option<&str>) {
        self.state.lock().document.apply(&render_notice(message));
    }

    pub fn document(&self) -> Document {
        self.state.lock().document.clone()
    }

    pub fn revision(&self) -> u64 {
        self.state.lock().document.revision()
    }

    pub fn previous_stats(&self) -> Option<StatsSnapshot> {
        self.state.lock().previous_stats
    }

    pub fn thresholds(&self) -> ThresholdStore {
        self.state.lock().thresholds.clone()
    }

    pub fn blocked(&self) -> Vec<MacAddress> {
        self.state.lock().blocked.clone()
    }
}
