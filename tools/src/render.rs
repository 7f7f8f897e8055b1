//! Plain-text rendering of dashboard views.

use churnwatch_core::{
    profile::Choice,
    view::{AnalysisView, DashView, PredictionView, RiskMeter, StrategyView},
    strategy::RegionComparison,
};
use std::io::{self, Write};

const METER_WIDTH: usize = 50;

pub fn write_view(out: &mut impl Write, view: &DashView) -> io::Result<()> {
    match view {
        DashView::Prediction(p) => write_prediction(out, p),
        DashView::Strategies(s) => write_strategies(out, s),
        DashView::Analysis(a)   => write_analysis(out, a),
        DashView::Comparison { rows } => write_comparison(out, rows),
    }
}

fn write_prediction(out: &mut impl Write, p: &PredictionView) -> io::Result<()> {
    writeln!(out, "=== PREDICTION RESULTS ===")?;
    writeln!(out, "  Churn Probability: {}", p.probability_display)?;
    writeln!(out, "  Risk Level:        {}", p.risk_level_label)?;
    writeln!(out, "  Recommendation:    {}", p.assessment.recommendation)?;
    writeln!(out)?;

    writeln!(out, "Key Risk Factors:")?;
    if p.assessment.contributing_factors.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for factor in &p.assessment.contributing_factors {
        writeln!(out, "  • {factor}")?;
    }
    writeln!(out)?;

    writeln!(out, "=== {} - SPECIFIC RETENTION STRATEGIES ===", p.region_label)?;
    writeln!(out, "Recommended Actions:")?;
    for (i, action) in p.recommended_actions.iter().enumerate() {
        writeln!(out, "  {}. {action}", i + 1)?;
    }
    writeln!(out, "Localized Offers:")?;
    for offer in p.local_offers {
        writeln!(out, "  • {offer}")?;
    }
    writeln!(out)?;

    write_meter(out, &p.risk_meter)
}

/// `[gggggggggggggggyyyyyyyyyyyyyyyyyyyy|rrrrrrrrrrrrrrr]` with the bar at the marker.
fn write_meter(out: &mut impl Write, meter: &RiskMeter) -> io::Result<()> {
    let marker_at = ((meter.marker * METER_WIDTH as f64).round() as usize).min(METER_WIDTH - 1);
    let bar: String = (0..METER_WIDTH)
        .map(|i| {
            if i == marker_at {
                return '|';
            }
            let x = (i as f64 + 0.5) / METER_WIDTH as f64;
            meter
                .bands
                .iter()
                .find(|b| x >= b.start && x < b.end)
                .and_then(|b| b.color.chars().next())
                .unwrap_or(' ')
        })
        .collect();

    writeln!(out, "Churn Risk Meter:")?;
    writeln!(out, "  [{bar}]")?;
    let legend: Vec<String> = meter
        .bands
        .iter()
        .map(|b| format!("{}={}", b.color, b.label))
        .collect();
    writeln!(out, "  {}  {}", legend.join("  "), meter.marker_label)
}

fn write_strategies(out: &mut impl Write, s: &StrategyView) -> io::Result<()> {
    writeln!(out, "=== REGIONAL CHURN REDUCTION STRATEGIES: {} ===", s.region_label)?;

    writeln!(out, "Common Churn Factors:")?;
    for factor in s.strategy.high_churn_factors {
        writeln!(out, "  • {factor}")?;
    }
    writeln!(out, "Strategic Recommendations:")?;
    for (i, suggestion) in s.strategy.suggestions.iter().enumerate() {
        writeln!(out, "  {}. {suggestion}", i + 1)?;
    }
    writeln!(out, "Localized Offers:")?;
    for offer in s.strategy.local_offers {
        writeln!(out, "  • {offer}")?;
    }
    writeln!(out, "Implementation Tips:")?;
    for tip in s.implementation_tips {
        writeln!(out, "  - {tip}")?;
    }
    writeln!(out)?;

    write_comparison(out, &s.comparison)
}

fn write_comparison(out: &mut impl Write, rows: &[RegionComparison]) -> io::Result<()> {
    writeln!(out, "=== QUICK REGIONAL COMPARISON ===")?;
    writeln!(out, "  {:<22} | {:<28} | {:<64} | Local Offers", "Region", "Primary Focus", "Key Strategy")?;
    for row in rows {
        writeln!(
            out,
            "  {:<22} | {:<28} | {:<64} | {}",
            row.region.label(),
            row.primary_focus,
            row.key_strategy,
            row.offer_count,
        )?;
    }
    Ok(())
}

fn write_analysis(out: &mut impl Write, a: &AnalysisView) -> io::Result<()> {
    writeln!(out, "=== MODEL PERFORMANCE ANALYSIS ===")?;
    writeln!(out, "Model Metrics:")?;
    for m in &a.model_metrics {
        writeln!(out, "  {:<22} {}", m.label, m.value)?;
    }
    writeln!(out, "Business Impact:")?;
    for m in &a.business_impact {
        writeln!(out, "  {:<22} {}", m.label, m.value)?;
    }
    writeln!(out)?;
    writeln!(out, "Key Insights:")?;
    for insight in a.key_insights {
        writeln!(out, "  - {insight}")?;
    }
    Ok(())
}
