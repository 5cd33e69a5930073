//! services/client/src/adapters/navigation.rs

use parking_lot::Mutex;
use project_manager_core::domain::Route;
use project_manager_core::ports::Navigator;
use tracing::info;

/// A `Navigator` that remembers every redirect, most recent last.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.history.lock().last().copied()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {}", route.path());
        self.history.lock().push(route);
    }
}
