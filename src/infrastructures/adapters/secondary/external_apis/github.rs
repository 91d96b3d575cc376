use crate::domain::external_apis::github::GitHubApi;
use crate::domain::models::run::WorkflowRun;
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Fields requested from `gh run list --json`
const RUN_FIELDS: &str = "status,conclusion,workflowName,createdAt,headBranch";

#[derive(Debug, Error)]
pub enum GhCliError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program} run list` failed ({status}): {stderr}")]
    NonZeroExit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("could not parse `gh run list` output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// Lists runs by shelling out to the GitHub CLI
pub struct GhCliAdapter {
    program: String,
    repo: Option<String>,
}

impl GhCliAdapter {
    pub fn new(program: String, repo: Option<String>) -> Self {
        Self { program, repo }
    }

    fn run_list_args(&self, limit: u16) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "list".to_string(),
            "--limit".to_string(),
            limit.to_string(),
            "--json".to_string(),
            RUN_FIELDS.to_string(),
        ];
        if let Some(repo) = &self.repo {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
        args
    }
}

/// Parses the JSON array printed by `gh run list --json ...`.
///
/// # Errors
///
/// Returns [`GhCliError::MalformedOutput`] when the output is not an array of
/// run objects.
pub fn parse_runs(stdout: &[u8]) -> Result<Vec<WorkflowRun>, GhCliError> {
    Ok(serde_json::from_slice(stdout)?)
}

#[async_trait]
impl GitHubApi for GhCliAdapter {
    #[tracing::instrument(name = "GhCliAdapter::fetch_workflow_runs", skip(self), fields(program = %self.program))]
    async fn fetch_workflow_runs(&self, limit: u16) -> Result<Vec<WorkflowRun>, anyhow::Error> {
        let args = self.run_list_args(limit);
        tracing::debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| GhCliError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GhCliError::NonZeroExit {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let runs = parse_runs(&output.stdout)?;
        tracing::debug!("Parsed {} runs from {} output", runs.len(), self.program);
        Ok(runs)
    }
}
