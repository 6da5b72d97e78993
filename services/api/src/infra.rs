use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use teamsfit::config::SchedulingConfig;
use teamsfit::workflows::interviews::{
    ConflictChecker, InterviewSchedulingService, Notification, NotificationError,
    NotificationLevel, NotificationPublisher,
};
use teamsfit::workflows::MemoryStore;
use tracing::{info, warn};

pub(crate) type DashboardService = InterviewSchedulingService<MemoryStore, LogNotificationPublisher>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Writes notifications to the log. Only a recording publisher keeps them for the CLI.
#[derive(Default, Clone)]
pub(crate) struct LogNotificationPublisher {
    sent: Option<Arc<Mutex<Vec<Notification>>>>,
}

impl NotificationPublisher for LogNotificationPublisher {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        match notification.level {
            NotificationLevel::Success => {
                info!(title = %notification.title, "{}", notification.message)
            }
            NotificationLevel::Warning => {
                warn!(title = %notification.title, "{}", notification.message)
            }
        }
        if let Some(sent) = &self.sent {
            sent.lock()
                .expect("notification mutex poisoned")
                .push(notification);
        }
        Ok(())
    }
}

impl LogNotificationPublisher {
    pub(crate) fn recording() -> Self {
        Self {
            sent: Some(Arc::default()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<Notification> {
        self.sent
            .as_ref()
            .map(|sent| sent.lock().expect("notification mutex poisoned").clone())
            .unwrap_or_default()
    }
}

/// Seeded store plus a scheduling service tuned by configuration.
pub(crate) fn seeded_service(
    config: &SchedulingConfig,
    publisher: LogNotificationPublisher,
) -> (
    DashboardService,
    Arc<MemoryStore>,
    Arc<LogNotificationPublisher>,
) {
    let store = Arc::new(MemoryStore::seeded());
    let notifications = Arc::new(publisher);
    let service = InterviewSchedulingService::new(store.clone(), notifications.clone())
        .with_checker(ConflictChecker::from_minutes(config.conflict_window_minutes))
        .with_default_duration(config.default_duration_minutes);
    (service, store, notifications)
}
