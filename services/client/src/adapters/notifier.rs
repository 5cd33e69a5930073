//! services/client/src/adapters/notifier.rs
//!
//! `Notifier` implementations: one that writes toasts to the log and one that
//! keeps them so a caller can inspect what the user was shown.

use parking_lot::Mutex;
use project_manager_core::domain::{Notification, Severity};
use project_manager_core::ports::Notifier;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => {
                info!("[toast] {}: {}", notification.title, notification.description)
            }
            Severity::Error => {
                warn!("[toast] {}: {}", notification.title, notification.description)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        TracingNotifier.notify(notification.clone());
        self.entries.lock().push(notification);
    }
}
