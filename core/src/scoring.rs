//! Risk scorer — the fixed additive churn rule.
//!
//! Starting from a base risk, each triggered factor adds its weight:
//!
//!   base                     0.30
//!   month-to-month contract  +0.25
//!   electronic check payment +0.20
//!   no online security       +0.15
//!   tenure < 6 months        +0.10
//!   multiple phone lines     +0.05
//!
//! The sum is capped at 0.95. Every weight is non-negative, so the base is
//! also the floor. Factors are reported in the order above, at most three.

use crate::{
    config::{RiskThresholds, ScoringRules},
    profile::{Choice, ContractType, CustomerProfile, MultipleLines, OnlineSecurity, PaymentMethod},
    types::Probability,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Risk factors ─────────────────────────────────────────────────────────────

/// A boolean condition on the profile that raises churn risk by a fixed weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    MonthToMonthContract,
    ElectronicCheckPayment,
    NoOnlineSecurity,
    LowTenure,
    MultipleLines,
}

impl RiskFactor {
    /// Evaluation and reporting order.
    pub const PRIORITY: [RiskFactor; 5] = [
        RiskFactor::MonthToMonthContract,
        RiskFactor::ElectronicCheckPayment,
        RiskFactor::NoOnlineSecurity,
        RiskFactor::LowTenure,
        RiskFactor::MultipleLines,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::MonthToMonthContract   => "Month-to-month contract",
            RiskFactor::ElectronicCheckPayment => "Electronic check payment",
            RiskFactor::NoOnlineSecurity       => "No online security",
            RiskFactor::LowTenure              => "New customer (low tenure)",
            RiskFactor::MultipleLines          => "Multiple phone lines",
        }
    }

    pub fn applies(&self, profile: &CustomerProfile, rules: &ScoringRules) -> bool {
        match self {
            RiskFactor::MonthToMonthContract   => profile.contract() == ContractType::MonthToMonth,
            RiskFactor::ElectronicCheckPayment => profile.payment_method() == PaymentMethod::ElectronicCheck,
            RiskFactor::NoOnlineSecurity       => profile.online_security() == OnlineSecurity::No,
            RiskFactor::LowTenure              => profile.tenure() < rules.low_tenure_months,
            RiskFactor::MultipleLines          => profile.multiple_lines() == MultipleLines::Yes,
        }
    }

    pub fn weight(&self, rules: &ScoringRules) -> f64 {
        match self {
            RiskFactor::MonthToMonthContract   => rules.month_to_month_weight,
            RiskFactor::ElectronicCheckPayment => rules.electronic_check_weight,
            RiskFactor::NoOnlineSecurity       => rules.no_online_security_weight,
            RiskFactor::LowTenure              => rules.low_tenure_weight,
            RiskFactor::MultipleLines          => rules.multiple_lines_weight,
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Risk level ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Strict comparisons: a probability sitting on an edge lands in the upper bucket.
    pub fn from_probability(p: Probability, thresholds: &RiskThresholds) -> Self {
        if p < thresholds.medium {
            RiskLevel::Low
        } else if p < thresholds.high {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low    => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High   => "High Risk",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::Low    => "Standard service - monitor periodically",
            RiskLevel::Medium => "Proactive outreach recommended",
            RiskLevel::High   => "Immediate retention action required",
        }
    }

    /// Traffic-light colour for the risk meter and status badge.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low    => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::High   => "red",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Assessment ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Unclamped additive sum; can exceed 1.0.
    pub raw_score:            f64,
    pub probability:          Probability,
    pub risk_level:           RiskLevel,
    pub recommendation:       String,
    pub contributing_factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    /// "95.0%" style, one decimal.
    pub fn probability_display(&self) -> String {
        format_percent(self.probability)
    }

    pub fn factor_labels(&self) -> Vec<&'static str> {
        self.contributing_factors.iter().map(|f| f.label()).collect()
    }
}

pub fn format_percent(p: Probability) -> String {
    format!("{:.1}%", p * 100.0)
}

// ── Scorer ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    rules:      ScoringRules,
    thresholds: RiskThresholds,
}

impl RiskScorer {
    pub fn new(rules: ScoringRules, thresholds: RiskThresholds) -> Self {
        Self { rules, thresholds }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn score(&self, profile: &CustomerProfile) -> RiskAssessment {
        let triggered: Vec<RiskFactor> = RiskFactor::PRIORITY
            .iter()
            .copied()
            .filter(|f| f.applies(profile, &self.rules))
            .collect();

        let raw_score = triggered
            .iter()
            .fold(self.rules.base_risk, |acc, f| acc + f.weight(&self.rules));

        let probability = raw_score.min(self.rules.probability_cap);
        let risk_level = RiskLevel::from_probability(probability, &self.thresholds);

        let mut contributing_factors = triggered;
        contributing_factors.truncate(self.rules.max_factors);

        log::debug!(
            "score: tenure={} contract={} payment={} raw={raw_score:.2} p={probability:.2} level={}",
            profile.tenure(),
            profile.contract().key(),
            profile.payment_method().key(),
            risk_level.label(),
        );

        RiskAssessment {
            raw_score,
            probability,
            risk_level,
            recommendation: risk_level.recommendation().to_string(),
            contributing_factors,
        }
    }
}

/// Score with the production rule.
pub fn score(profile: &CustomerProfile) -> RiskAssessment {
    RiskScorer::default().score(profile)
}
