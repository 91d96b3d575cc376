pub mod show_workflow_runs;
