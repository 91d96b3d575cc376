use crate::domain::models::run::{Conclusion, RunStatus, WorkflowRun};

/// Color tag attached to a symbol; the console adapter decides the actual color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Failure,
    Cancelled,
    Skipped,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSymbol {
    pub glyph: &'static str,
    pub tone: Option<Tone>,
}

const SUCCESS: StatusSymbol = StatusSymbol {
    glyph: "✓",
    tone: Some(Tone::Success),
};
const FAILURE: StatusSymbol = StatusSymbol {
    glyph: "✗",
    tone: Some(Tone::Failure),
};
const CANCELLED: StatusSymbol = StatusSymbol {
    glyph: "○",
    tone: Some(Tone::Cancelled),
};
const SKIPPED: StatusSymbol = StatusSymbol {
    glyph: "−",
    tone: Some(Tone::Skipped),
};
const IN_PROGRESS: StatusSymbol = StatusSymbol {
    glyph: "⟳",
    tone: Some(Tone::InProgress),
};
const UNRECOGNIZED: StatusSymbol = StatusSymbol {
    glyph: "?",
    tone: None,
};

#[must_use]
pub fn classify(status: RunStatus, conclusion: Option<Conclusion>) -> StatusSymbol {
    match (status, conclusion) {
        (RunStatus::Completed, Some(Conclusion::Success)) => SUCCESS,
        (RunStatus::Completed, Some(Conclusion::Failure)) => FAILURE,
        (RunStatus::Completed, Some(Conclusion::Cancelled)) => CANCELLED,
        (RunStatus::Completed, Some(Conclusion::Skipped)) => SKIPPED,
        (RunStatus::InProgress, _) => IN_PROGRESS,
        _ => UNRECOGNIZED,
    }
}

impl WorkflowRun {
    #[must_use]
    pub fn symbol(&self) -> StatusSymbol {
        classify(self.status, self.conclusion)
    }
}
