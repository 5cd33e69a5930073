//! services/client/src/adapters/uploads.rs

use async_trait::async_trait;
use project_manager_core::domain::{SelectedFile, UploadRecord};
use project_manager_core::ports::{PortResult, UploadService};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::adapters::seeds;
use crate::config::Config;

/// An `UploadService` that pretends to send the bytes. Nothing is stored.
pub struct SimulatedUploadService {
    latency: Duration,
    seed_demo_data: bool,
}

impl SimulatedUploadService {
    pub fn new(config: &Config) -> Self {
        Self {
            latency: config.simulated_latency,
            seed_demo_data: config.seed_demo_data,
        }
    }
}

#[async_trait]
impl UploadService for SimulatedUploadService {
    async fn list_uploads(&self, user_id: Uuid) -> PortResult<Vec<UploadRecord>> {
        tokio::time::sleep(self.latency).await;
        debug!("Listing uploads for user {}", user_id);
        if !self.seed_demo_data {
            return Ok(Vec::new());
        }
        Ok(seeds::uploads())
    }

    async fn transfer(&self, file: &SelectedFile, project_id: Uuid) -> PortResult<()> {
        tokio::time::sleep(self.latency).await;
        debug!(
            "Transferred {} ({} bytes) for project {}",
            file.name,
            file.size_bytes(),
            project_id
        );
        Ok(())
    }
}
