//! The dashboard engine — turns UI commands into view models.
//!
//! RULES:
//!   - Every command is handled synchronously and independently.
//!   - Profiles are validated before scoring; the scorer itself cannot fail.
//!   - The engine holds configuration only; no state carries between commands.

use crate::{
    command::DashCommand,
    config::DashConfig,
    error::DashResult,
    profile::{CustomerProfile, ProfileInput, Region},
    scoring::{RiskAssessment, RiskScorer},
    strategy::{self, RegionComparison},
    view::{AnalysisView, DashView, PredictionView, StrategyView},
};

#[derive(Debug, Clone)]
pub struct DashEngine {
    config: DashConfig,
    scorer: RiskScorer,
}

impl DashEngine {
    pub fn new(config: DashConfig) -> Self {
        let scorer = RiskScorer::new(config.scoring.clone(), config.thresholds.clone());
        Self { config, scorer }
    }

    /// Build from the data/ directory, falling back to the built-in rule.
    pub fn build(data_dir: &str) -> anyhow::Result<Self> {
        let config = DashConfig::load(data_dir)?;
        log::info!(
            "engine ready: base={:.2} cap={:.2} thresholds={:.2}/{:.2}",
            config.scoring.base_risk,
            config.scoring.probability_cap,
            config.thresholds.medium,
            config.thresholds.high,
        );
        Ok(Self::new(config))
    }

    /// Engine with the production rule and no file access. Used by tests.
    pub fn build_default() -> Self {
        Self::new(DashConfig::default())
    }

    pub fn config(&self) -> &DashConfig {
        &self.config
    }

    pub fn execute(&self, command: DashCommand) -> DashResult<DashView> {
        log::debug!("command: {}", command.name());
        match command {
            DashCommand::Predict { profile } => self.predict(profile).map(DashView::Prediction),
            DashCommand::Strategies { region } => {
                let region: Region = region.parse()?;
                Ok(DashView::Strategies(self.strategies(region)))
            }
            DashCommand::Compare => Ok(DashView::Comparison { rows: self.compare() }),
            DashCommand::Analysis => Ok(DashView::Analysis(self.analysis())),
        }
    }

    /// Score a profile. No view decoration.
    pub fn assess(&self, profile: &CustomerProfile) -> RiskAssessment {
        self.scorer.score(profile)
    }

    pub fn predict(&self, input: ProfileInput) -> DashResult<PredictionView> {
        let profile = input.into_profile()?;
        let assessment = self.assess(&profile);

        log::info!(
            "predict: region={:?} p={:.3} level={:?} factors={}",
            profile.region(),
            assessment.probability,
            assessment.risk_level,
            assessment.contributing_factors.len(),
        );

        Ok(PredictionView::new(assessment, profile.region(), &self.config.thresholds))
    }

    pub fn strategies(&self, region: Region) -> StrategyView {
        StrategyView::new(region)
    }

    pub fn compare(&self) -> Vec<RegionComparison> {
        strategy::compare_regions()
    }

    pub fn analysis(&self) -> AnalysisView {
        AnalysisView::new()
    }
}

impl Default for DashEngine {
    fn default() -> Self {
        Self::build_default()
    }
}
