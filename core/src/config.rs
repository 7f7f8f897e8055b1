use crate::{
    error::{DashError, DashResult},
    types::{Months, Probability},
};
use serde::{Deserialize, Serialize};

// ── Scoring rule ──────────────────────────────────────────────────

/// Additive churn rule. `Default` is the production rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub base_risk: f64,
    pub month_to_month_weight: f64,
    pub electronic_check_weight: f64,
    pub no_online_security_weight: f64,
    pub low_tenure_weight: f64,
    /// Tenure strictly below this many months counts as a new customer.
    pub low_tenure_months: Months,
    pub multiple_lines_weight: f64,
    /// Upper clamp for the reported probability.
    pub probability_cap: Probability,
    /// How many contributing factors an assessment lists.
    pub max_factors: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_risk:                 0.30,
            month_to_month_weight:     0.25,
            electronic_check_weight:   0.20,
            no_online_security_weight: 0.15,
            low_tenure_weight:         0.10,
            low_tenure_months:         6,
            multiple_lines_weight:     0.05,
            probability_cap:           0.95,
            max_factors:               3,
        }
    }
}

impl ScoringRules {
    pub fn validate(&self) -> DashResult<()> {
        let weights = [
            ("base_risk",                 self.base_risk),
            ("month_to_month_weight",     self.month_to_month_weight),
            ("electronic_check_weight",   self.electronic_check_weight),
            ("no_online_security_weight", self.no_online_security_weight),
            ("low_tenure_weight",         self.low_tenure_weight),
            ("multiple_lines_weight",     self.multiple_lines_weight),
        ];
        for (name, w) in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(DashError::InvalidConfig {
                    reason: format!("{name} must be a non-negative number, got {w}"),
                });
            }
        }
        if !(self.probability_cap > 0.0 && self.probability_cap <= 1.0) {
            return Err(DashError::InvalidConfig {
                reason: format!("probability_cap must be in (0, 1], got {}", self.probability_cap),
            });
        }
        Ok(())
    }
}

// ── Risk buckets ──────────────────────────────────────────────────

/// Bucket edges. Comparisons are strict: p < medium is low, p < high is medium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub medium: Probability,
    pub high:   Probability,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self { medium: 0.30, high: 0.70 }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> DashResult<()> {
        if !(0.0..=1.0).contains(&self.medium)
            || !(0.0..=1.0).contains(&self.high)
            || self.medium > self.high
        {
            return Err(DashError::InvalidConfig {
                reason: format!(
                    "thresholds must satisfy 0 <= medium <= high <= 1, got medium={} high={}",
                    self.medium, self.high,
                ),
            });
        }
        Ok(())
    }
}

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashConfig {
    #[serde(default)]
    pub scoring:    ScoringRules,
    #[serde(default)]
    pub thresholds: RiskThresholds,
}

impl DashConfig {
    pub const RULES_FILE: &'static str = "scoring/scoring_rules.json";

    /// Load from the data/ directory.
    /// A missing rules file means the built-in rule; a malformed one is an error.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/{}", Self::RULES_FILE);
        if !std::path::Path::new(&path).exists() {
            log::info!("no rules file at {path}; using built-in scoring rule");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Invalid {path}: {e}"))?;

        log::info!("loaded scoring rules from {path}");
        Ok(config)
    }

    pub fn from_json(content: &str) -> DashResult<Self> {
        let config: DashConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashResult<()> {
        self.scoring.validate()?;
        self.thresholds.validate()
    }
}
