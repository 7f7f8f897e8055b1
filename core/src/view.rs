//! View modes and the view models each one renders.
//!
//! Mode selection is a plain three-way choice; there are no transitions.

use crate::{
    analysis::{Metric, MODEL_PERFORMANCE, KEY_INSIGHTS},
    config::RiskThresholds,
    error::{DashError, DashResult},
    profile::{parse_choice, Choice, Region},
    scoring::{format_percent, RiskAssessment, RiskLevel},
    strategy::{self, RegionComparison, RegionStrategy, IMPLEMENTATION_TIPS},
    types::Probability,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Suggestions listed under a single prediction.
pub const PREDICTION_SUGGESTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    SinglePrediction,
    LocationStrategies,
    ModelAnalysis,
}

impl Choice for ViewMode {
    const FIELD: &'static str = "mode";

    fn all() -> &'static [Self] {
        &[ViewMode::SinglePrediction, ViewMode::LocationStrategies, ViewMode::ModelAnalysis]
    }

    fn label(&self) -> &'static str {
        match self {
            ViewMode::SinglePrediction   => "Single Prediction",
            ViewMode::LocationStrategies => "Location Strategies",
            ViewMode::ModelAnalysis      => "Model Analysis",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ViewMode::SinglePrediction   => "single_prediction",
            ViewMode::LocationStrategies => "location_strategies",
            ViewMode::ModelAnalysis      => "model_analysis",
        }
    }
}

impl FromStr for ViewMode {
    type Err = DashError;

    /// Accepts labels, keys, and the short CLI names `predict`, `strategies`, `analysis`.
    fn from_str(s: &str) -> DashResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "predict" | "prediction" => return Ok(ViewMode::SinglePrediction),
            "strategies" | "strategy" => return Ok(ViewMode::LocationStrategies),
            "analysis" | "model"     => return Ok(ViewMode::ModelAnalysis),
            _ => {}
        }
        parse_choice(s).ok_or_else(|| DashError::UnknownViewMode { name: s.to_string() })
    }
}

// ── Risk meter ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBand {
    pub level: RiskLevel,
    pub start: Probability,
    pub end:   Probability,
    pub color: &'static str,
    /// "0-30%" style legend text.
    pub label: String,
}

/// Horizontal gauge: three coloured bands plus a marker at the current probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskMeter {
    pub bands:        Vec<RiskBand>,
    pub marker:       Probability,
    pub marker_label: String,
}

impl RiskMeter {
    pub fn new(marker: Probability, thresholds: &RiskThresholds) -> Self {
        let edges = [
            (RiskLevel::Low,    0.0,                 thresholds.medium),
            (RiskLevel::Medium, thresholds.medium,   thresholds.high),
            (RiskLevel::High,   thresholds.high,     1.0),
        ];
        let bands = edges
            .into_iter()
            .map(|(level, start, end)| RiskBand {
                level,
                start,
                end,
                color: level.color(),
                label: format!("{:.0}-{:.0}%", start * 100.0, end * 100.0),
            })
            .collect();

        Self {
            bands,
            marker,
            marker_label: format!("Current: {}", format_percent(marker)),
        }
    }
}

// ── Per-mode views ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub assessment:          RiskAssessment,
    pub probability_display: String,
    pub risk_level_label:    &'static str,
    pub region:              Region,
    pub region_label:        &'static str,
    pub recommended_actions: &'static [&'static str],
    pub local_offers:        &'static [&'static str],
    pub risk_meter:          RiskMeter,
}

impl PredictionView {
    pub fn new(assessment: RiskAssessment, region: Region, thresholds: &RiskThresholds) -> Self {
        let playbook = strategy::lookup(region);
        Self {
            probability_display: assessment.probability_display(),
            risk_level_label:    assessment.risk_level.label(),
            region,
            region_label:        region.label(),
            recommended_actions: playbook.top_suggestions(PREDICTION_SUGGESTION_COUNT),
            local_offers:        playbook.local_offers,
            risk_meter:          RiskMeter::new(assessment.probability, thresholds),
            assessment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyView {
    pub region:              Region,
    pub region_label:        &'static str,
    pub strategy:            &'static RegionStrategy,
    pub implementation_tips: &'static [&'static str],
    pub comparison:          Vec<RegionComparison>,
}

impl StrategyView {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            region_label:        region.label(),
            strategy:            strategy::lookup(region),
            implementation_tips: &IMPLEMENTATION_TIPS,
            comparison:          strategy::compare_regions(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub model_metrics:   Vec<Metric>,
    pub business_impact: Vec<Metric>,
    pub key_insights:    &'static [&'static str],
}

impl AnalysisView {
    pub fn new() -> Self {
        Self {
            model_metrics:   MODEL_PERFORMANCE.model_metrics(),
            business_impact: MODEL_PERFORMANCE.business_impact(),
            key_insights:    &KEY_INSIGHTS,
        }
    }
}

impl Default for AnalysisView {
    fn default() -> Self {
        Self::new()
    }
}

/// What a command produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashView {
    Prediction(PredictionView),
    Strategies(StrategyView),
    Analysis(AnalysisView),
    Comparison { rows: Vec<RegionComparison> },
}

impl DashView {
    pub fn mode(&self) -> ViewMode {
        match self {
            DashView::Prediction(_) => ViewMode::SinglePrediction,
            DashView::Strategies(_) | DashView::Comparison { .. } => ViewMode::LocationStrategies,
            DashView::Analysis(_) => ViewMode::ModelAnalysis,
        }
    }
}
