use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::backend::Endpoint;
use crate::config::settings::PollingConfig;
use crate::dashboard::Dashboard;

/// The independently timed polling loops of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollTask {
    Stats,
    History,
    Alerts,
    Blocked,
    Status,
    AiStatus,
}

impl PollTask {
    pub const ALL: [PollTask; 6] = [
        PollTask::Stats,
        PollTask::History,
        PollTask::Alerts,
        PollTask::Blocked,
        PollTask::Status,
        PollTask::AiStatus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PollTask::Stats => "stats",
            PollTask::History => "history",
            PollTask::Alerts => "alerts",
            PollTask::Blocked => "blocked",
            PollTask::Status => "status",
            PollTask::AiStatus => "ai-status",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            PollTask::Stats => Endpoint::Stats,
            PollTask::History => Endpoint::History,
            PollTask::Alerts => Endpoint::Alerts,
            PollTask::Blocked => Endpoint::Blocked,
            PollTask::Status => Endpoint::Status,
            PollTask::AiStatus => Endpoint::AiStatus,
        }
    }

    pub fn cadence(&self, polling: &PollingConfig) -> Duration {
        let ms = match self {
            PollTask::Stats => polling.stats_ms,
            PollTask::History => polling.history_ms,
            PollTask::Alerts => polling.alerts_ms,
            PollTask::Blocked => polling.blocked_ms,
            PollTask::Status => polling.status_ms,
            PollTask::AiStatus => polling.ai_status_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Drives one repeating loop per [`PollTask`]. Every loop fires once at
/// start-up and then on its own cadence; a failed poll is simply retried on
/// the next tick.
pub struct PollingScheduler {
    dashboard: Arc<Dashboard>,
    polling: PollingConfig,
}

impl PollingScheduler {
    pub fn new(dashboard: Arc<Dashboard>, polling: PollingConfig) -> Self {
        Self { dashboard, polling }
    }

    pub fn start(&self) -> SchedulerHandle {
        let token = CancellationToken::new();

        let tasks = PollTask::ALL
            .iter()
            .map(|&task| {
                let cadence = task.cadence(&self.polling);
                tokio::spawn(poll_loop(
                    task,
                    cadence,
                    self.dashboard.clone(),
                    token.child_token(),
                ))
            })
            .collect::<Vec<_>>();

        info!(tasks = tasks.len(), "Polling scheduler started");
        SchedulerHandle { token, tasks }
    }
}

async fn poll_loop(
    task: PollTask,
    cadence: Duration,
    dashboard: Arc<Dashboard>,
    token: CancellationToken,
) {
    let mut ticker = interval(cadence);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    debug!(task = task.name(), cadence_ms = cadence.as_millis() as u64, "Polling task started");

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                tokio::select! {
                    _ = token.cancelled() => break,
                    // Failures are logged by the dashboard; the next tick retries.
                    _ = dashboard.refresh(task) => {}
                }
            }
        }
    }

    debug!(task = task.name(), "Polling task stopped");
}

/// Stops the polling loops. Dropping the handle also stops them.
pub struct SchedulerHandle {
    token: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop every loop and wait for them to exit.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        for handle in std::mem::take(&mut self.tasks) {
            if let Err(e) = handle.await {
                warn!(error = %e, "Polling task ended abnormally");
            }
        }
        info!("Polling scheduler stopped");
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
