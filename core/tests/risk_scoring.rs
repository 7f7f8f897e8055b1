//! Risk scorer: the additive rule, the clamp, bucket edges and factor ordering.

use churnwatch_core::{
    config::{RiskThresholds, ScoringRules},
    profile::{
        Choice, ContractType, CustomerProfile, MultipleLines, OnlineSecurity, PaymentMethod,
        Region, TENURE_RANGE,
    },
    scoring::{score, RiskFactor, RiskLevel, RiskScorer},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn profile(
    tenure: i64,
    contract: ContractType,
    payment: PaymentMethod,
    security: OnlineSecurity,
    lines: MultipleLines,
) -> CustomerProfile {
    CustomerProfile::builder()
        .tenure(tenure)
        .contract(contract)
        .payment_method(payment)
        .online_security(security)
        .multiple_lines(lines)
        .build()
        .unwrap()
}

/// Every valid combination of the inputs the rule reads.
fn all_profiles() -> Vec<CustomerProfile> {
    let mut out = Vec::new();
    for tenure in TENURE_RANGE {
        for &c in ContractType::all() {
            for &p in PaymentMethod::all() {
                for &s in OnlineSecurity::all() {
                    for &l in MultipleLines::all() {
                        out.push(profile(tenure as i64, c, p, s, l));
                    }
                }
            }
        }
    }
    out
}

// ── Scenarios ────────────────────────────────────────────────────────────────

/// New month-to-month customer paying by e-check without security: raw 1.00, capped.
#[test]
fn new_unsecured_echeck_customer_is_high_risk() {
    let p = profile(
        3,
        ContractType::MonthToMonth,
        PaymentMethod::ElectronicCheck,
        OnlineSecurity::No,
        MultipleLines::No,
    );
    let a = score(&p);

    assert!((a.raw_score - 1.00).abs() < EPS, "raw={}", a.raw_score);
    assert_eq!(a.probability, 0.95);
    assert_eq!(a.risk_level, RiskLevel::High);
    assert_eq!(a.recommendation, "Immediate retention action required");
    assert_eq!(
        a.factor_labels(),
        vec!["Month-to-month contract", "Electronic check payment", "No online security"],
    );
    assert_eq!(a.probability_display(), "95.0%");
}

/// Two-year autopay customer with security triggers nothing: base only.
/// The base sits exactly on the medium edge, so it reads as medium.
#[test]
fn loyal_autopay_customer_scores_base_only() {
    let p = profile(
        24,
        ContractType::TwoYear,
        PaymentMethod::AutomaticCreditCard,
        OnlineSecurity::Yes,
        MultipleLines::No,
    );
    let a = score(&p);

    assert_eq!(a.raw_score, 0.30);
    assert_eq!(a.probability, 0.30);
    assert!(a.contributing_factors.is_empty());
    assert_eq!(a.risk_level, RiskLevel::Medium);
    assert_eq!(a.recommendation, "Proactive outreach recommended");
    assert_eq!(a.probability_display(), "30.0%");
}

#[test]
fn all_five_factors_clamp_to_cap() {
    let p = profile(
        0,
        ContractType::MonthToMonth,
        PaymentMethod::ElectronicCheck,
        OnlineSecurity::No,
        MultipleLines::Yes,
    );
    let a = score(&p);

    assert!((a.raw_score - 1.05).abs() < EPS, "raw={}", a.raw_score);
    assert_eq!(a.probability, 0.95, "sum above cap must clamp to exactly 0.95");
    assert_eq!(a.contributing_factors.len(), 3, "factor list truncates to three");
}

#[test]
fn single_factor_weights_match_rule() {
    let safe = (
        24,
        ContractType::TwoYear,
        PaymentMethod::MailedCheck,
        OnlineSecurity::Yes,
        MultipleLines::No,
    );
    let cases = [
        (profile(safe.0, ContractType::MonthToMonth, safe.2, safe.3, safe.4), 0.55, RiskFactor::MonthToMonthContract),
        (profile(safe.0, safe.1, PaymentMethod::ElectronicCheck, safe.3, safe.4), 0.50, RiskFactor::ElectronicCheckPayment),
        (profile(safe.0, safe.1, safe.2, OnlineSecurity::No, safe.4), 0.45, RiskFactor::NoOnlineSecurity),
        (profile(5, safe.1, safe.2, safe.3, safe.4), 0.40, RiskFactor::LowTenure),
        (profile(safe.0, safe.1, safe.2, safe.3, MultipleLines::Yes), 0.35, RiskFactor::MultipleLines),
    ];

    for (p, expected, factor) in cases {
        let a = score(&p);
        assert!(
            (a.probability - expected).abs() < EPS,
            "{factor}: expected {expected}, got {}", a.probability
        );
        assert_eq!(a.contributing_factors, vec![factor]);
    }
}

#[test]
fn low_tenure_cutoff_is_strict() {
    let at = |t| profile(t, ContractType::TwoYear, PaymentMethod::MailedCheck, OnlineSecurity::Yes, MultipleLines::No);
    assert!(score(&at(5)).contributing_factors.contains(&RiskFactor::LowTenure));
    assert!(!score(&at(6)).contributing_factors.contains(&RiskFactor::LowTenure));
}

/// "No internet service" and "No phone service" are not risk factors.
#[test]
fn service_absence_is_not_a_risk_factor() {
    let p = profile(
        24,
        ContractType::OneYear,
        PaymentMethod::AutomaticBankTransfer,
        OnlineSecurity::NoInternetService,
        MultipleLines::NoPhoneService,
    );
    assert!(score(&p).contributing_factors.is_empty());
}

// ── Properties over the whole input domain ───────────────────────────────────

#[test]
fn probability_stays_between_base_and_cap() {
    for p in all_profiles() {
        let a = score(&p);
        assert!(
            (0.30..=0.95).contains(&a.probability),
            "p={} out of range for {p:?}", a.probability
        );
    }
}

#[test]
fn factors_are_capped_and_in_priority_order() {
    for p in all_profiles() {
        let a = score(&p);
        assert!(a.contributing_factors.len() <= 3);

        let positions: Vec<usize> = a
            .contributing_factors
            .iter()
            .map(|f| RiskFactor::PRIORITY.iter().position(|x| x == f).unwrap())
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "factors out of order: {:?}", a.contributing_factors
        );
    }
}

/// Flipping any single factor from safe to risky never lowers the probability.
#[test]
fn risky_flips_never_decrease_probability() {
    for p in all_profiles() {
        let base = score(&p).probability;
        let b = || {
            CustomerProfile::builder()
                .tenure(p.tenure() as i64)
                .contract(p.contract())
                .payment_method(p.payment_method())
                .online_security(p.online_security())
                .multiple_lines(p.multiple_lines())
        };

        let mut flips = vec![
            b().contract(ContractType::MonthToMonth),
            b().payment_method(PaymentMethod::ElectronicCheck),
            b().online_security(OnlineSecurity::No),
            b().multiple_lines(MultipleLines::Yes),
        ];
        if p.tenure() >= 6 {
            flips.push(b().tenure(5));
        }

        for flipped in flips {
            let risky = score(&flipped.build().unwrap()).probability;
            assert!(risky >= base, "flip lowered risk: {base} -> {risky} from {p:?}");
        }
    }
}

/// Charges, partner, dependents and region are collected but not scored.
#[test]
fn unscored_inputs_do_not_move_probability() {
    let reference = score(&CustomerProfile::builder().build().unwrap());

    for &region in Region::all() {
        for charges in [18.0, 65.0, 120.0] {
            for partner in [true, false] {
                for dependents in [true, false] {
                    let p = CustomerProfile::builder()
                        .region(region)
                        .monthly_charges(charges)
                        .has_partner(partner)
                        .has_dependents(dependents)
                        .build()
                        .unwrap();
                    assert_eq!(score(&p), reference);
                }
            }
        }
    }
}

// ── Buckets ──────────────────────────────────────────────────────────────────

#[test]
fn bucket_edges_belong_to_upper_bucket() {
    let t = RiskThresholds::default();
    assert_eq!(RiskLevel::from_probability(0.2999, &t), RiskLevel::Low);
    assert_eq!(RiskLevel::from_probability(0.30, &t), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_probability(0.6999, &t), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_probability(0.70, &t), RiskLevel::High);
    assert_eq!(RiskLevel::from_probability(0.95, &t), RiskLevel::High);
}

#[test]
fn risk_level_labels_and_recommendations() {
    assert_eq!(RiskLevel::Low.label(), "Low Risk");
    assert_eq!(RiskLevel::Low.recommendation(), "Standard service - monitor periodically");
    assert_eq!(RiskLevel::Medium.label(), "Medium Risk");
    assert_eq!(RiskLevel::High.label(), "High Risk");
    assert_eq!(RiskLevel::High.color(), "red");
}

// ── Configured rules ─────────────────────────────────────────────────────────

#[test]
fn configured_scorer_honours_factor_limit_and_base() {
    let rules = ScoringRules { base_risk: 0.10, max_factors: 5, ..ScoringRules::default() };
    let scorer = RiskScorer::new(rules, RiskThresholds::default());

    let p = profile(
        1,
        ContractType::MonthToMonth,
        PaymentMethod::ElectronicCheck,
        OnlineSecurity::No,
        MultipleLines::Yes,
    );
    let a = scorer.score(&p);

    assert_eq!(a.contributing_factors, RiskFactor::PRIORITY.to_vec());
    assert!((a.raw_score - 0.85).abs() < EPS, "raw={}", a.raw_score);
    assert!((a.probability - 0.85).abs() < EPS);
    assert_eq!(a.risk_level, RiskLevel::High);

    let quiet = profile(24, ContractType::TwoYear, PaymentMethod::MailedCheck, OnlineSecurity::Yes, MultipleLines::No);
    assert_eq!(scorer.score(&quiet).risk_level, RiskLevel::Low, "base below the medium edge is low");
}
