//! Regional retention playbooks.
//!
//! A compile-time table keyed by `Region`, declared in display order.
//! Nothing here mutates; `lookup` hands out references into the static.

use crate::profile::Region;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RegionStrategy {
    pub high_churn_factors: &'static [&'static str],
    pub suggestions:        &'static [&'static str],
    pub local_offers:       &'static [&'static str],
}

impl RegionStrategy {
    /// First `n` suggestions, the short list shown next to a prediction.
    pub fn top_suggestions(&self, n: usize) -> &'static [&'static str] {
        &self.suggestions[..n.min(self.suggestions.len())]
    }
}

/// One row of the regional comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionComparison {
    pub region:        Region,
    pub primary_focus: &'static str,
    pub key_strategy:  &'static str,
    pub offer_count:   usize,
}

pub static REGION_STRATEGIES: [(Region, RegionStrategy); 5] = [
    (Region::NorthAmerica, RegionStrategy {
        high_churn_factors: &[
            "Month-to-month contracts",
            "Electronic check payments",
            "No loyalty discounts",
        ],
        suggestions: &[
            "Offer 12-month contract discounts (save 15-20%)",
            "Promote automatic credit card payments with $5 monthly discount",
            "Introduce referral program: $50 credit for both parties",
            "Bundle services: Internet + TV + Phone packages",
        ],
        local_offers: &[
            "Free premium channel for 3 months",
            "Waived installation fees for contract renewal",
            "Mobile data boost promotions",
        ],
    }),
    (Region::Europe, RegionStrategy {
        high_churn_factors: &[
            "High monthly charges",
            "Lack of service bundles",
            "Contract flexibility",
        ],
        suggestions: &[
            "Introduce flexible 6-month contracts",
            "Create family bundles with multiple device support",
            "Offer EU-wide roaming packages",
            "Data rollover plans for unused bandwidth",
        ],
        local_offers: &[
            "Local sports channel packages",
            "Multi-language customer support",
            "Cultural content streaming add-ons",
        ],
    }),
    (Region::AsiaPacific, RegionStrategy {
        high_churn_factors: &[
            "Competitive pricing pressure",
            "Mobile-first preferences",
            "Service reliability",
        ],
        suggestions: &[
            "Mobile app exclusive discounts",
            "Pay-as-you-go data top-ups",
            "Free social media data packages",
            "Gamified loyalty rewards program",
        ],
        local_offers: &[
            "Free popular streaming service subscriptions",
            "Mobile gaming data packs",
            "Local festival special offers",
        ],
    }),
    (Region::LatinAmerica, RegionStrategy {
        high_churn_factors: &[
            "Payment flexibility",
            "Family plans",
            "Mobile data needs",
        ],
        suggestions: &[
            "Flexible payment plans (weekly/monthly options)",
            "Family shared data pools",
            "Mobile hotspot included in plans",
            "Local content streaming bundles",
        ],
        local_offers: &[
            "Free WhatsApp/Facebook data",
            "Local music streaming services",
            "Soccer match streaming packages",
        ],
    }),
    (Region::MiddleEastAfrica, RegionStrategy {
        high_churn_factors: &[
            "Network reliability",
            "Device affordability",
            "Data costs",
        ],
        suggestions: &[
            "Device installment plans with service",
            "Off-peak data discounts",
            "Community WiFi hotspot access",
            "Data-saving mode optimizations",
        ],
        local_offers: &[
            "Free educational content access",
            "Local news and entertainment packages",
            "Ramadan/Eid special data offers",
        ],
    }),
];

/// General advice shown beside every regional playbook.
pub const IMPLEMENTATION_TIPS: [&str; 6] = [
    "Train local teams on regional preferences",
    "Customize marketing for cultural relevance",
    "Monitor local competitor pricing",
    "Adapt to regional payment preferences",
    "Consider local holidays in promotions",
    "Localize customer support languages",
];

/// Playbook for a region. Total over `Region`.
pub fn lookup(region: Region) -> &'static RegionStrategy {
    // Table rows are declared in `Region` discriminant order.
    let (key, strategy) = &REGION_STRATEGIES[region as usize];
    debug_assert_eq!(*key, region, "strategy table out of order");
    strategy
}

/// One row per region, in table order.
pub fn compare_regions() -> Vec<RegionComparison> {
    REGION_STRATEGIES
        .iter()
        .map(|(region, s)| RegionComparison {
            region:        *region,
            primary_focus: s.high_churn_factors.first().copied().unwrap_or_default(),
            key_strategy:  s.suggestions.first().copied().unwrap_or_default(),
            offer_count:   s.local_offers.len(),
        })
        .collect()
}
