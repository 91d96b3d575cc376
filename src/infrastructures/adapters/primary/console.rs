use crate::application::use_cases::show_workflow_runs::{
    ShowWorkflowRunsUseCase, ShowWorkflowRunsUseCaseInput,
};
use crate::domain::models::run::WorkflowRun;
use crate::domain::models::stats::StatsTally;
use crate::domain::models::status::{StatusSymbol, Tone};
use crate::domain::models::workflow_group::{WorkflowGroup, group_by_workflow};
use colored::Colorize;
use std::io::{self, Write};

const BANNER: &str = r"
    ⚡ GitHub Actions Monitor ⚡

         🤖
        /|||\
       ( o.o )
        > ^ <

    Here is how your workflows are doing!
";

const WIDE_RULE_WIDTH: usize = 50;
const NARROW_RULE_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 12;

fn paint(text: &str, tone: Option<Tone>) -> String {
    match tone {
        Some(Tone::Success) => text.bright_green().to_string(),
        Some(Tone::Failure) => text.bright_red().to_string(),
        Some(Tone::InProgress) => text.bright_yellow().to_string(),
        Some(Tone::Cancelled) => text.bright_blue().to_string(),
        Some(Tone::Skipped) => text.bright_black().to_string(),
        None => text.to_string(),
    }
}

fn paint_symbol(symbol: StatusSymbol) -> String {
    paint(symbol.glyph, symbol.tone)
}

fn write_group(out: &mut impl Write, group: &WorkflowGroup<'_>) -> io::Result<()> {
    writeln!(out, "\n📋 {}", group.name)?;

    let strip: String = group.progress_strip().into_iter().map(paint_symbol).collect();
    writeln!(out, "   [{strip}]")?;

    for entry in group.tree_entries() {
        writeln!(
            out,
            "   {}{} {} ({})",
            entry.connector,
            paint_symbol(entry.symbol),
            entry.branch,
            entry.created_at
        )?;
    }
    Ok(())
}

/// Writes the per-workflow progress strips and run listings.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn write_tree(out: &mut impl Write, runs: &[WorkflowRun]) -> io::Result<()> {
    writeln!(out, "\n🌳 GitHub Actions workflow runs")?;
    writeln!(out, "{}", "=".repeat(WIDE_RULE_WIDTH))?;

    for group in group_by_workflow(runs) {
        write_group(out, &group)?;
    }
    Ok(())
}

/// Writes the outcome histogram. Nothing is written for an empty slice.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn write_statistics(out: &mut impl Write, runs: &[WorkflowRun]) -> io::Result<()> {
    if runs.is_empty() {
        return Ok(());
    }

    let tally = StatsTally::from_runs(runs);
    writeln!(out, "\n📊 Statistics (last {} runs)", tally.total)?;
    writeln!(out, "{}", "-".repeat(NARROW_RULE_WIDTH))?;

    for row in tally.rows() {
        let label = format!("{:LABEL_WIDTH$}", row.outcome.key());
        writeln!(
            out,
            "{} {} {:2} ({:5.1}%)",
            paint(&label, Some(row.outcome.tone())),
            row.bar(),
            row.count,
            row.percentage
        )?;
    }
    Ok(())
}

/// Runs the whole report: banner, fetch, tree, statistics and footer.
///
/// # Errors
///
/// Fails only when writing to `out` fails; fetch problems are printed and
/// treated as "no data".
pub async fn run<U: ShowWorkflowRunsUseCase + Sync>(
    use_case: &U,
    input: ShowWorkflowRunsUseCaseInput,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Fetching workflow runs with the GitHub CLI...")?;
    out.flush()?;

    let output = use_case.execute(input).await;

    if let Some(error) = &output.fetch_error {
        writeln!(out, "{} {error}", "Error:".red())?;
    }

    if !output.has_runs() {
        if output.fetch_error.is_some() {
            writeln!(out, "❌ Could not fetch workflow runs")?;
        } else {
            writeln!(out, "❌ No workflow runs found")?;
        }
        writeln!(out, "💡 Run 'gh auth login' to sign in to GitHub")?;
        return Ok(());
    }

    write_tree(out, &output.runs)?;
    write_statistics(out, &output.runs)?;

    writeln!(out, "\n🔗 Details: gh run list")?;
    writeln!(out, "{}", "=".repeat(WIDE_RULE_WIDTH))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::show_workflow_runs::ShowWorkflowRunsUseCaseOutput;
    use crate::domain::models::run::{Conclusion, RunStatus};
    use async_trait::async_trait;

    struct FixedUseCase(ShowWorkflowRunsUseCaseOutput);

    #[async_trait]
    impl ShowWorkflowRunsUseCase for FixedUseCase {
        async fn execute(
            &self,
            _input: ShowWorkflowRunsUseCaseInput,
        ) -> ShowWorkflowRunsUseCaseOutput {
            self.0.clone()
        }
    }

    fn run_of(workflow: &str, status: &str, conclusion: Option<&str>, branch: &str) -> WorkflowRun {
        WorkflowRun {
            workflow_name: workflow.to_string(),
            status: RunStatus::from(status.to_string()),
            conclusion: conclusion.map(|c| Conclusion::from(c.to_string())),
            head_branch: Some(branch.to_string()),
            created_at: Some("2024-01-15T09:30:00Z".to_string()),
        }
    }

    async fn render(output: ShowWorkflowRunsUseCaseOutput) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        run(
            &FixedUseCase(output),
            ShowWorkflowRunsUseCaseInput::default(),
            &mut buf,
        )
        .await?;
        Ok(String::from_utf8(buf)?)
    }

    fn strip_glyph_count(line: &str) -> usize {
        line.chars()
            .filter(|c| matches!(c, '✓' | '✗' | '○' | '−' | '⟳' | '?'))
            .count()
    }

    #[tokio::test]
    async fn test_empty_result_prints_no_data_only() -> anyhow::Result<()> {
        let text = render(ShowWorkflowRunsUseCaseOutput::default()).await?;

        assert!(text.contains("GitHub Actions Monitor"));
        assert!(text.contains("No workflow runs found"));
        assert!(!text.contains("Could not fetch workflow runs"));
        assert!(!text.contains("Error:"));
        assert!(text.contains("gh auth login"));
        assert!(!text.contains("🌳"));
        assert!(!text.contains("📊"));
        assert!(!text.contains("🔗"));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_error_is_reported() -> anyhow::Result<()> {
        let text = render(ShowWorkflowRunsUseCaseOutput {
            runs: Vec::new(),
            fetch_error: Some("`gh run list` failed (exit status: 4): auth required".to_string()),
        })
        .await?;

        assert!(text.contains("auth required"));
        assert!(text.contains("Could not fetch workflow runs"));
        assert!(!text.contains("No workflow runs found"));
        assert!(!text.contains("🌳"));
        Ok(())
    }

    #[tokio::test]
    async fn test_full_report_sections_in_order() -> anyhow::Result<()> {
        let runs = vec![
            run_of("Deploy", "in_progress", Some(""), "release"),
            run_of("CI", "completed", Some("success"), "main"),
            run_of("CI", "completed", Some("failure"), "fix/flaky"),
        ];

        let text = render(ShowWorkflowRunsUseCaseOutput {
            runs,
            fetch_error: None,
        })
        .await?;

        let tree = text.find("🌳").unwrap_or(usize::MAX);
        let deploy = text.find("📋 Deploy").unwrap_or(usize::MAX);
        let ci = text.find("📋 CI").unwrap_or(usize::MAX);
        let stats = text.find("📊 Statistics (last 3 runs)").unwrap_or(usize::MAX);
        let footer = text.find("🔗 Details: gh run list").unwrap_or(usize::MAX);
        assert!(tree < deploy && deploy < ci && ci < stats && stats < footer);

        assert!(text.contains("release (01/15 09:30)"));
        assert!(text.contains("fix/flaky (01/15 09:30)"));
        assert!(!text.contains("Error:"));
        Ok(())
    }

    #[test]
    fn test_tree_strip_and_listing_lengths() -> anyhow::Result<()> {
        let runs: Vec<WorkflowRun> = (0..12)
            .map(|i| run_of("CI", "completed", Some("success"), &format!("branch-{i}")))
            .collect();
        let mut buf = Vec::new();

        write_tree(&mut buf, &runs)?;
        let text = String::from_utf8(buf)?;

        let strip_line = text
            .lines()
            .find(|line| line.trim_start().starts_with('['))
            .unwrap_or_default();
        assert_eq!(strip_glyph_count(strip_line), 10);

        let listed = text
            .lines()
            .filter(|line| line.contains("├── ") || line.contains("└── "))
            .count();
        assert_eq!(listed, 5);
        assert!(text.contains("└── "));
        assert!(text.contains("branch-4 "));
        assert!(!text.contains("branch-5 "));
        Ok(())
    }

    #[test]
    fn test_statistics_even_split() -> anyhow::Result<()> {
        let runs: Vec<WorkflowRun> = (0..12)
            .map(|i| {
                let conclusion = if i % 2 == 0 { "success" } else { "failure" };
                run_of("CI", "completed", Some(conclusion), "main")
            })
            .collect();
        let mut buf = Vec::new();

        write_statistics(&mut buf, &runs)?;
        let text = String::from_utf8(buf)?;

        let bar_lines: Vec<&str> = text
            .lines()
            .filter(|line| line.contains("██████████░░░░░░░░░░  6 ( 50.0%)"))
            .collect();
        assert_eq!(bar_lines.len(), 2);
        assert!(bar_lines[0].contains("success"));
        assert!(bar_lines[1].contains("failure"));
        assert!(!text.contains("in_progress"));
        assert!(!text.contains("cancelled"));
        Ok(())
    }

    #[test]
    fn test_statistics_empty_input_writes_nothing() -> anyhow::Result<()> {
        let mut buf = Vec::new();
        write_statistics(&mut buf, &[])?;
        assert!(buf.is_empty());
        Ok(())
    }
}
