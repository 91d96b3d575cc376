use crate::domain::external_apis::github::GitHubApi;
use crate::domain::models::run::WorkflowRun;
use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;

/// Number of runs fetched when no limit is given
pub const DEFAULT_RUN_LIMIT: u16 = 20;

#[derive(Debug, Clone)]
pub struct ShowWorkflowRunsUseCaseInput {
    pub limit: u16,
}

impl Default for ShowWorkflowRunsUseCaseInput {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RUN_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShowWorkflowRunsUseCaseOutput {
    pub runs: Vec<WorkflowRun>,
    /// Set when the fetch failed; `runs` is then empty
    pub fetch_error: Option<String>,
}

impl ShowWorkflowRunsUseCaseOutput {
    #[must_use]
    pub fn has_runs(&self) -> bool {
        !self.runs.is_empty()
    }
}

#[async_trait]
pub trait ShowWorkflowRunsUseCase {
    async fn execute(&self, input: ShowWorkflowRunsUseCaseInput) -> ShowWorkflowRunsUseCaseOutput;
}

pub struct ShowWorkflowRunsInteractor<G: GitHubApi + Send + Sync + 'static> {
    github_api: Arc<G>,
}

impl<G: GitHubApi + Send + Sync + 'static> ShowWorkflowRunsInteractor<G> {
    pub fn new(github_api: Arc<G>) -> Self {
        Self { github_api }
    }
}

#[async_trait]
impl<G: GitHubApi + Send + Sync + 'static> ShowWorkflowRunsUseCase
    for ShowWorkflowRunsInteractor<G>
{
    // A failed fetch is reported as "no data" rather than an error
    async fn execute(&self, input: ShowWorkflowRunsUseCaseInput) -> ShowWorkflowRunsUseCaseOutput {
        tracing::info!("Fetching up to {} workflow runs...", input.limit);

        let fetched = self
            .github_api
            .fetch_workflow_runs(input.limit)
            .await
            .context("Failed to fetch workflow runs");

        match fetched {
            Ok(runs) => {
                tracing::info!("Fetched {} workflow runs", runs.len());
                ShowWorkflowRunsUseCaseOutput {
                    runs,
                    fetch_error: None,
                }
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                ShowWorkflowRunsUseCaseOutput {
                    runs: Vec::new(),
                    fetch_error: Some(format!("{e:#}")),
                }
            }
        }
    }
}
