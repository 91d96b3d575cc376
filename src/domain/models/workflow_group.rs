use crate::domain::models::run::WorkflowRun;
use crate::domain::models::status::StatusSymbol;
use std::collections::HashMap;

/// Number of runs summarized in a workflow's progress strip
pub const PROGRESS_STRIP_RUNS: usize = 10;

/// Number of runs listed under each workflow in the tree
pub const TREE_VISIBLE_RUNS: usize = 5;

const BRANCH_CONNECTOR: &str = "├── ";
const LAST_CONNECTOR: &str = "└── ";

/// Runs of a single workflow, in fetch order
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowGroup<'a> {
    pub name: &'a str,
    pub runs: Vec<&'a WorkflowRun>,
}

/// One line of the per-workflow tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry<'a> {
    pub connector: &'static str,
    pub symbol: StatusSymbol,
    pub branch: &'a str,
    pub created_at: String,
}

impl<'a> WorkflowGroup<'a> {
    #[must_use]
    pub fn progress_strip(&self) -> Vec<StatusSymbol> {
        self.runs
            .iter()
            .take(PROGRESS_STRIP_RUNS)
            .map(|run| run.symbol())
            .collect()
    }

    #[must_use]
    pub fn tree_entries(&self) -> Vec<TreeEntry<'a>> {
        let visible = self.runs.len().min(TREE_VISIBLE_RUNS);

        self.runs
            .iter()
            .take(visible)
            .enumerate()
            .map(|(i, &run)| TreeEntry {
                connector: if i + 1 < visible {
                    BRANCH_CONNECTOR
                } else {
                    LAST_CONNECTOR
                },
                symbol: run.symbol(),
                branch: run.branch_label(),
                created_at: run.created_at_label(),
            })
            .collect()
    }
}

/// Groups runs by workflow name.
///
/// Groups come out in the order their workflow was first seen and each group
/// keeps the original order of its runs.
#[must_use]
pub fn group_by_workflow(runs: &[WorkflowRun]) -> Vec<WorkflowGroup<'_>> {
    let mut groups: Vec<WorkflowGroup<'_>> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for run in runs {
        let name = run.workflow_name.as_str();
        let index = *index_by_name.entry(name).or_insert_with(|| {
            groups.push(WorkflowGroup {
                name,
                runs: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].runs.push(run);
    }

    groups
}
