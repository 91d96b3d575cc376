use clap::Parser;
use gha_tree::application::use_cases::show_workflow_runs::{
    DEFAULT_RUN_LIMIT, ShowWorkflowRunsInteractor, ShowWorkflowRunsUseCaseInput,
};
use gha_tree::infrastructures::adapters::primary::console;
use gha_tree::infrastructures::adapters::secondary::external_apis::github::GhCliAdapter;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Show recent GitHub Actions runs as a tree with outcome statistics
#[derive(Parser, Debug)]
#[command(name = "gha-tree", version, about)]
struct Cli {
    /// Number of recent runs to fetch
    #[arg(short, long, default_value_t = DEFAULT_RUN_LIMIT, value_parser = clap::value_parser!(u16).range(1..=1000))]
    limit: u16,

    /// Repository to inspect (OWNER/REPO); defaults to the current directory's repository
    #[arg(short = 'R', long)]
    repo: Option<String>,

    /// GitHub CLI executable
    #[arg(long, default_value = "gh")]
    gh: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the report
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("Application starting");

    // Build dependencies
    let gh_cli_adapter = Arc::new(GhCliAdapter::new(cli.gh, cli.repo));
    let use_case = ShowWorkflowRunsInteractor::new(gh_cli_adapter);

    let mut stdout = std::io::stdout().lock();
    console::run(
        &use_case,
        ShowWorkflowRunsUseCaseInput { limit: cli.limit },
        &mut stdout,
    )
    .await?;

    Ok(())
}
