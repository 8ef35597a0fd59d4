//! Background update poller.
//!
//! Periodically asks the backend whether upstream has moved ahead of the
//! local checkout and keeps the latest answer around for the UI:
//! - Immediate check on start, then one check per interval
//! - One-shot notification on the "no update" to "update available" edge
//! - Failed checks are logged and leave the state untouched
//!
//! The scheduler runs as a spawned tokio task driven by an mpsc command
//! channel. Dropping every [`UpdatePollerHandle`] ends the task.

use crate::error::AppError;
use crate::models::{ApiResponse, UpdateCheck};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::git_update;
use crate::services::request::QueryParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, RwLock};
use tokio::time::{self, Interval, MissedTickBehavior};

/// Default poll interval in seconds (5 minutes).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 300;

/// Message shown when a new version is first noticed.
pub const NEW_VERSION_MESSAGE: &str = "New version available, update recommended";

/// Poller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Poll interval in seconds.
    pub interval_secs: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl PollerConfig {
    fn interval(&self) -> Duration {
        // A zero period would make tokio's interval panic.
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Point-in-time view of the poller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PollerSnapshot {
    /// Whether the recurring timer is active.
    pub running: bool,

    /// Whether an update has been surfaced and not yet acknowledged.
    pub has_new_update: bool,

    /// Last update-available payload, kept until superseded or resolved.
    pub latest: Option<UpdateCheck>,

    /// When a check last succeeded. Failed checks leave it alone.
    pub last_checked_at: Option<DateTime<Utc>>,
}

/// What a single check concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Transport failure or payload-level failure; state unchanged.
    Failed,

    /// Upstream has nothing new.
    NoUpdate,

    /// Upstream is ahead. `newly_surfaced` is true only on the edge that
    /// fired the notification.
    UpdateAvailable { newly_surfaced: bool },
}

/// Toast severity, mirrors the UI's success/error toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Sink for the one-shot "new version" notification.
pub trait UpdateNotifier: Send + Sync {
    fn notify(&self, message: &str, kind: ToastKind, check: &UpdateCheck);
}

impl<F> UpdateNotifier for F
where
    F: Fn(&str, ToastKind, &UpdateCheck) + Send + Sync,
{
    fn notify(&self, message: &str, kind: ToastKind, check: &UpdateCheck) {
        self(message, kind, check)
    }
}

/// Notifier used until a UI sink is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl UpdateNotifier for LogNotifier {
    fn notify(&self, message: &str, _kind: ToastKind, check: &UpdateCheck) {
        log::info!(
            "[update] {} ({} commit(s) behind on {})",
            message,
            check.commits_behind,
            check.branch.as_deref().unwrap_or("unknown branch")
        );
    }
}

/// Commands accepted by the poller task.
enum PollerCommand {
    Start(oneshot::Sender<()>),
    Stop(oneshot::Sender<()>),
}

#[derive(Debug, Default)]
struct PollerState {
    running: bool,
    has_new_update: bool,
    latest: Option<UpdateCheck>,
    last_checked_at: Option<DateTime<Utc>>,
}

/// The check routine shared by scheduled and manual checks.
struct Checker {
    client: Arc<ApiClient>,
    state: RwLock<PollerState>,
    notifier: RwLock<Arc<dyn UpdateNotifier>>,
}

impl Checker {
    async fn check(&self) -> CheckOutcome {
        let response: ApiResponse<UpdateCheck> =
            self.client.get(git_update::CHECK, &QueryParams::new()).await;

        // No state is touched until the call has settled.
        let mut state = self.state.write().await;

        let check = match response.into_data() {
            Some(check) if check.success => check,
            Some(check) => {
                log::warn!(
                    "[update] Update check reported failure: {}",
                    check.error.as_deref().unwrap_or("unknown error")
                );
                return CheckOutcome::Failed;
            }
            None => {
                log::warn!("[update] Update check failed");
                return CheckOutcome::Failed;
            }
        };
        state.last_checked_at = Some(Utc::now());

        if !check.has_update {
            if state.has_new_update {
                log::info!("[update] Pending update resolved");
                state.has_new_update = false;
                state.latest = None;
            }
            return CheckOutcome::NoUpdate;
        }

        let newly_surfaced = !state.has_new_update;
        state.has_new_update = true;
        state.latest = Some(check.clone());
        drop(state);

        if newly_surfaced {
            let notifier = self.notifier.read().await.clone();
            notifier.notify(NEW_VERSION_MESSAGE, ToastKind::Success, &check);
        }

        CheckOutcome::UpdateAvailable { newly_surfaced }
    }
}

/// Handle for controlling the background poller.
///
/// Cheap to clone; all clones talk to the same task.
#[derive(Clone)]
pub struct UpdatePollerHandle {
    command_tx: mpsc::Sender<PollerCommand>,
    checker: Arc<Checker>,
    config: PollerConfig,
}

impl std::fmt::Debug for UpdatePollerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatePollerHandle")
            .field("config", &self.config)
            .finish()
    }
}

impl UpdatePollerHandle {
    /// Start polling. Runs one check before returning; a no-op when the
    /// poller is already running.
    pub async fn start(&self) -> Result<(), AppError> {
        self.send(PollerCommand::Start).await
    }

    /// Stop the recurring timer. The retained snapshot is kept.
    pub async fn stop(&self) -> Result<(), AppError> {
        self.send(PollerCommand::Stop).await
    }

    /// Run one check right now, outside the timer.
    pub async fn check_now(&self) -> CheckOutcome {
        self.checker.check().await
    }

    /// Acknowledge the surfaced update without forgetting it.
    pub async fn clear_seen(&self) {
        self.checker.state.write().await.has_new_update = false;
    }

    /// Replace the notification sink.
    pub async fn set_notifier(&self, notifier: Arc<dyn UpdateNotifier>) {
        *self.checker.notifier.write().await = notifier;
    }

    pub async fn snapshot(&self) -> PollerSnapshot {
        let state = self.checker.state.read().await;
        PollerSnapshot {
            running: state.running,
            has_new_update: state.has_new_update,
            latest: state.latest.clone(),
            last_checked_at: state.last_checked_at,
        }
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    async fn send(
        &self,
        command: impl FnOnce(oneshot::Sender<()>) -> PollerCommand,
    ) -> Result<(), AppError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.command_tx
            .send(command(ack_tx))
            .await
            .map_err(|_| AppError::internal("Update poller not running"))?;
        ack_rx
            .await
            .map_err(|_| AppError::internal("Update poller stopped unexpectedly"))
    }
}

/// Background update poller.
pub struct UpdatePoller {
    command_rx: mpsc::Receiver<PollerCommand>,
    checker: Arc<Checker>,
    config: PollerConfig,
    ticker: Option<Interval>,
}

impl UpdatePoller {
    /// Spawn the poller task and return its handle. Must be called inside a
    /// tokio runtime. The poller starts idle.
    pub fn spawn(client: Arc<ApiClient>, config: PollerConfig) -> UpdatePollerHandle {
        Self::spawn_with_notifier(client, config, Arc::new(LogNotifier))
    }

    pub fn spawn_with_notifier(
        client: Arc<ApiClient>,
        config: PollerConfig,
        notifier: Arc<dyn UpdateNotifier>,
    ) -> UpdatePollerHandle {
        let (command_tx, command_rx) = mpsc::channel(16);
        let checker = Arc::new(Checker {
            client,
            state: RwLock::new(PollerState::default()),
            notifier: RwLock::new(notifier),
        });

        let poller = Self {
            command_rx,
            checker: checker.clone(),
            config: config.clone(),
            ticker: None,
        };
        tokio::spawn(poller.run());

        UpdatePollerHandle {
            command_tx,
            checker,
            config,
        }
    }

    async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(PollerCommand::Start(ack)) => {
                        self.handle_start().await;
                        let _ = ack.send(());
                    }
                    Some(PollerCommand::Stop(ack)) => {
                        self.handle_stop().await;
                        let _ = ack.send(());
                    }
                    None => break,
                },
                _ = next_tick(&mut self.ticker) => {
                    // Scheduled checks run inline, so they never overlap each other.
                    let outcome = self.checker.check().await;
                    log::debug!("[update] Scheduled check: {:?}", outcome);
                }
            }
        }

        log::debug!("[update] Poller task finished");
    }

    async fn handle_start(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        let outcome = self.checker.check().await;
        log::debug!("[update] Initial check: {:?}", outcome);

        let period = self.config.interval();
        let mut ticker = time::interval_at(time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.ticker = Some(ticker);
        self.checker.state.write().await.running = true;

        log::info!(
            "[update] Update poller started, checking every {}s",
            period.as_secs()
        );
    }

    async fn handle_stop(&mut self) {
        if self.ticker.take().is_some() {
            self.checker.state.write().await.running = false;
            log::info!("[update] Update poller stopped");
        }
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::ClientConfig;
    use crate::services::credentials::MemoryStore;
    use crate::services::request::{ApiRequest, RawResponse};
    use crate::services::transport::Transport;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Scripted {
        NoUpdate,
        Update(u32),
        Fail,
    }

    /// Transport replaying a script of check results, then "no update".
    struct ScriptedTransport {
        script: Mutex<VecDeque<Scripted>>,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        fn new(script: Vec<Scripted>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
            assert_eq!(request.path(), git_update::CHECK);
            self.calls.fetch_add(1, Ordering::SeqCst);

            let next = self.script.lock().unwrap().pop_front();
            match next.unwrap_or(Scripted::NoUpdate) {
                Scripted::NoUpdate => Ok(RawResponse::json(
                    200,
                    &json!({"success": true, "has_update": false, "commits_behind": 0}),
                )),
                Scripted::Update(behind) => Ok(RawResponse::json(
                    200,
                    &json!({
                        "success": true,
                        "has_update": true,
                        "commits_behind": behind,
                        "update_logs": ["fix things"],
                        "branch": "main"
                    }),
                )),
                Scripted::Fail => Err(AppError::network("connection refused")),
            }
        }
    }

    fn poller_with(
        transport: Arc<ScriptedTransport>,
    ) -> (UpdatePollerHandle, Arc<AtomicUsize>) {
        let client = Arc::new(ApiClient::with_transport(
            ClientConfig::default(),
            Arc::new(MemoryStore::new()),
            transport,
        ));
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = notified.clone();
        let notifier = move |_: &str, _: ToastKind, _: &UpdateCheck| {
            counter.fetch_add(1, Ordering::SeqCst);
        };
        let handle =
            UpdatePoller::spawn_with_notifier(client, PollerConfig::default(), Arc::new(notifier));
        (handle, notified)
    }

    fn interval() -> Duration {
        Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let transport = ScriptedTransport::new(vec![]);
        let (handle, _) = poller_with(transport.clone());

        handle.start().await.unwrap();
        handle.start().await.unwrap();
        assert_eq!(transport.calls(), 1);
        assert!(handle.snapshot().await.running);

        time::sleep(interval() + Duration::from_millis(10)).await;
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_notification_is_edge_triggered() {
        let transport = ScriptedTransport::new(vec![
            Scripted::NoUpdate,
            Scripted::Update(1),
            Scripted::Update(2),
            Scripted::NoUpdate,
            Scripted::Update(3),
        ]);
        let (handle, notified) = poller_with(transport);

        let outcomes = [
            handle.check_now().await,
            handle.check_now().await,
            handle.check_now().await,
            handle.check_now().await,
            handle.check_now().await,
        ];

        assert_eq!(
            outcomes,
            [
                CheckOutcome::NoUpdate,
                CheckOutcome::UpdateAvailable { newly_surfaced: true },
                CheckOutcome::UpdateAvailable { newly_surfaced: false },
                CheckOutcome::NoUpdate,
                CheckOutcome::UpdateAvailable { newly_surfaced: true },
            ]
        );
        assert_eq!(notified.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_repeated_update_refreshes_snapshot() {
        let transport = ScriptedTransport::new(vec![Scripted::Update(1), Scripted::Update(4)]);
        let (handle, _) = poller_with(transport);

        handle.check_now().await;
        handle.check_now().await;

        let snapshot = handle.snapshot().await;
        assert!(snapshot.has_new_update);
        assert_eq!(snapshot.latest.unwrap().commits_behind, 4);
    }

    #[tokio::test]
    async fn test_no_update_clears_flag_and_snapshot() {
        let transport = ScriptedTransport::new(vec![Scripted::Update(1), Scripted::NoUpdate]);
        let (handle, _) = poller_with(transport);

        handle.check_now().await;
        handle.check_now().await;

        let snapshot = handle.snapshot().await;
        assert!(!snapshot.has_new_update);
        assert!(snapshot.latest.is_none());
    }

    #[tokio::test]
    async fn test_clear_seen_keeps_snapshot() {
        let transport = ScriptedTransport::new(vec![Scripted::Update(2)]);
        let (handle, _) = poller_with(transport);

        handle.check_now().await;
        handle.clear_seen().await;

        let snapshot = handle.snapshot().await;
        assert!(!snapshot.has_new_update);
        assert_eq!(snapshot.latest.unwrap().commits_behind, 2);
    }

    #[tokio::test]
    async fn test_clear_seen_then_update_notifies_again() {
        let transport = ScriptedTransport::new(vec![Scripted::Update(1), Scripted::Update(1)]);
        let (handle, notified) = poller_with(transport);

        handle.check_now().await;
        handle.clear_seen().await;
        handle.check_now().await;

        assert_eq!(notified.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_check_leaves_state_and_keeps_ticking() {
        let transport =
            ScriptedTransport::new(vec![Scripted::Update(1), Scripted::Fail, Scripted::Update(5)]);
        let (handle, notified) = poller_with(transport.clone());

        handle.start().await.unwrap();
        let before = handle.snapshot().await;

        time::sleep(interval() + Duration::from_millis(10)).await;
        assert_eq!(transport.calls(), 2);
        let after_failure = handle.snapshot().await;
        assert!(before.last_checked_at.is_some());
        assert_eq!(after_failure, before);

        time::sleep(interval()).await;
        assert_eq!(transport.calls(), 3);
        let snapshot = handle.snapshot().await;
        assert_eq!(snapshot.latest.unwrap().commits_behind, 5);
        assert_eq!(notified.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_timer_and_keeps_snapshot() {
        let transport = ScriptedTransport::new(vec![Scripted::Update(3)]);
        let (handle, _) = poller_with(transport.clone());

        handle.start().await.unwrap();
        handle.stop().await.unwrap();

        time::sleep(interval() * 3).await;
        assert_eq!(transport.calls(), 1);

        let snapshot = handle.snapshot().await;
        assert!(!snapshot.running);
        assert!(snapshot.latest.is_some());

        // Restart runs a fresh immediate check.
        handle.start().await.unwrap();
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_payload_failure_is_ignored() {
        struct FailingPayload;

        #[async_trait]
        impl Transport for FailingPayload {
            async fn send(&self, _request: ApiRequest) -> Result<RawResponse, AppError> {
                Ok(RawResponse::json(
                    200,
                    &json!({"success": false, "has_update": true, "error": "git missing"}),
                ))
            }
        }

        let client = Arc::new(ApiClient::with_transport(
            ClientConfig::default(),
            Arc::new(MemoryStore::new()),
            Arc::new(FailingPayload),
        ));
        let handle = UpdatePoller::spawn(client, PollerConfig::default());

        assert_eq!(handle.check_now().await, CheckOutcome::Failed);
        let snapshot = handle.snapshot().await;
        assert!(!snapshot.has_new_update);
        assert_eq!(snapshot.last_checked_at, None);
    }
}
