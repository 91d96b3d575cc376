use crate::domain::models::run::{Conclusion, RunStatus, WorkflowRun};
use crate::domain::models::status::Tone;

/// Width of a statistics bar in glyphs
pub const BAR_WIDTH: usize = 20;

const OUTCOME_COUNT: usize = 4;

/// Tracked outcome buckets, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
    Cancelled,
    InProgress,
}

impl Outcome {
    pub const ALL: [Outcome; OUTCOME_COUNT] = [
        Outcome::Success,
        Outcome::Failure,
        Outcome::Cancelled,
        Outcome::InProgress,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Cancelled => "cancelled",
            Outcome::InProgress => "in_progress",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Outcome::Success => Tone::Success,
            Outcome::Failure => Tone::Failure,
            Outcome::Cancelled => Tone::Cancelled,
            Outcome::InProgress => Tone::InProgress,
        }
    }

    fn of(run: &WorkflowRun) -> Option<Self> {
        match (run.status, run.conclusion) {
            (RunStatus::Completed, Some(Conclusion::Success)) => Some(Outcome::Success),
            (RunStatus::Completed, Some(Conclusion::Failure)) => Some(Outcome::Failure),
            (RunStatus::Completed, Some(Conclusion::Cancelled)) => Some(Outcome::Cancelled),
            (RunStatus::InProgress, _) => Some(Outcome::InProgress),
            _ => None,
        }
    }
}

/// Outcome counts over one fetch.
///
/// `total` is the number of fetched runs, including runs whose outcome is not
/// tracked (skipped, timed out, queued, ...), so percentages can sum to less
/// than 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsTally {
    counts: [usize; OUTCOME_COUNT],
    pub total: usize,
}

/// One rendered bucket of the statistics chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsRow {
    pub outcome: Outcome,
    pub count: usize,
    pub percentage: f64,
    pub filled: usize,
}

impl StatsRow {
    #[must_use]
    pub fn bar(&self) -> String {
        format!(
            "{}{}",
            "█".repeat(self.filled),
            "░".repeat(BAR_WIDTH - self.filled)
        )
    }
}

impl StatsTally {
    #[must_use]
    pub fn from_runs(runs: &[WorkflowRun]) -> Self {
        let mut tally = Self {
            total: runs.len(),
            ..Self::default()
        };
        for outcome in runs.iter().filter_map(Outcome::of) {
            tally.counts[outcome as usize] += 1;
        }
        tally
    }

    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.counts[outcome as usize]
    }

    /// Non-empty buckets in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<StatsRow> {
        Outcome::ALL
            .into_iter()
            .filter_map(|outcome| {
                let count = self.count(outcome);
                if count == 0 {
                    return None;
                }
                Some(StatsRow {
                    outcome,
                    count,
                    percentage: percentage(count, self.total),
                    // floor(percentage / 5) without float rounding
                    filled: (count * BAR_WIDTH / self.total).min(BAR_WIDTH),
                })
            })
            .collect()
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "run counts are bounded by the fetch limit"
)]
fn percentage(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}
