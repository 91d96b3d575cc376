use crate::domain::models::run::WorkflowRun;
use anyhow::Error;
use async_trait::async_trait;

/// Source of recent workflow runs, newest first
#[async_trait]
pub trait GitHubApi {
    async fn fetch_workflow_runs(&self, limit: u16) -> Result<Vec<WorkflowRun>, Error>;
}
