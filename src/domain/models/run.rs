use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Fallback label for a missing branch or timestamp
pub const UNKNOWN_LABEL: &str = "unknown";

/// Number of raw characters shown when a timestamp cannot be parsed
const RAW_TIMESTAMP_PREFIX_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RunStatus {
    Completed,
    InProgress,
    /// queued, waiting, requested, pending and anything newer
    Other,
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => Self::Completed,
            "in_progress" => Self::InProgress,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Conclusion {
    Success,
    Failure,
    Cancelled,
    Skipped,
    /// `gh` reports an empty string for unfinished runs; timed_out,
    /// action_required, neutral and stale also land here
    Unknown,
}

impl From<String> for Conclusion {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "cancelled" => Self::Cancelled,
            "skipped" => Self::Skipped,
            _ => Self::Unknown,
        }
    }
}

/// One entry of `gh run list --json status,conclusion,workflowName,createdAt,headBranch`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkflowRun {
    #[serde(rename = "workflowName")]
    pub workflow_name: String,
    pub status: RunStatus,
    #[serde(default)]
    pub conclusion: Option<Conclusion>,
    #[serde(rename = "headBranch", default)]
    pub head_branch: Option<String>,
    // Kept raw; parsed only for display so a bad value never drops the run
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl WorkflowRun {
    #[must_use]
    pub fn branch_label(&self) -> &str {
        self.head_branch.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    #[must_use]
    pub fn created_at_label(&self) -> String {
        format_timestamp(self.created_at.as_deref())
    }
}

/// Formats an ISO 8601 timestamp as `MM/DD HH:MM` in its own offset.
///
/// Unparseable input falls back to its first 10 characters; a missing or
/// empty value becomes `unknown`.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => UNKNOWN_LABEL.to_string(),
        Some(raw) => parse_iso8601(raw).map_or_else(
            || raw.chars().take(RAW_TIMESTAMP_PREFIX_CHARS).collect(),
            |parsed| parsed.format("%m/%d %H:%M").to_string(),
        ),
    }
}

fn parse_iso8601(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.replace('Z', "+00:00");

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(parsed.naive_local());
    }

    // Minute precision and colon-less offsets are valid ISO 8601 but not RFC 3339
    let with_offset = [
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M%z",
        "%Y-%m-%d %H:%M%:z",
        "%Y-%m-%d %H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M%z",
    ]
    .iter()
    .find_map(|format| DateTime::parse_from_str(&normalized, format).ok());
    if let Some(parsed) = with_offset {
        return Some(parsed.naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
