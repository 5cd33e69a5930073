//! services/client/src/adapters/projects.rs

use async_trait::async_trait;
use project_manager_core::domain::{Project, ProjectDraft};
use project_manager_core::ports::{PortResult, ProjectService};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::adapters::seeds;
use crate::config::Config;

/// A `ProjectService` that accepts every submission after a simulated delay.
pub struct SimulatedProjectService {
    latency: Duration,
    seed_demo_data: bool,
}

impl SimulatedProjectService {
    pub fn new(config: &Config) -> Self {
        Self {
            latency: config.simulated_latency,
            seed_demo_data: config.seed_demo_data,
        }
    }
}

#[async_trait]
impl ProjectService for SimulatedProjectService {
    async fn list_projects(&self, owner_id: Uuid) -> PortResult<Vec<Project>> {
        tokio::time::sleep(self.latency).await;
        if !self.seed_demo_data {
            return Ok(Vec::new());
        }
        Ok(seeds::projects(owner_id))
    }

    async fn submit_project(&self, owner_id: Uuid, draft: &ProjectDraft) -> PortResult<()> {
        tokio::time::sleep(self.latency).await;
        debug!("Accepted project '{}' for owner {}", draft.name, owner_id);
        Ok(())
    }
}
