use crate::profile::ProfileInput;
use serde::{Deserialize, Serialize};

/// Every request the UI can issue.
/// Variants are only ever appended so recorded command streams keep parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DashCommand {
    // ── Single Prediction ─────────────────────────
    Predict {
        #[serde(default)]
        profile: ProfileInput,
    },

    // ── Location Strategies ───────────────────────
    Strategies {
        region: String,
    },
    Compare,

    // ── Model Analysis ────────────────────────────
    Analysis,
}

impl DashCommand {
    /// Stable name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            DashCommand::Predict { .. }    => "predict",
            DashCommand::Strategies { .. } => "strategies",
            DashCommand::Compare           => "compare",
            DashCommand::Analysis          => "analysis",
        }
    }
}
