//! Model performance panel.
//!
//! These figures describe an offline logistic regression fit on the
//! 7,043-customer telecom dataset. They are published constants; nothing in
//! this crate recomputes them, and the live score comes from `scoring`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelPerformance {
    pub accuracy:             f64,
    pub precision:            f64,
    pub recall:               f64,
    pub auc:                  f64,
    pub detection_rate:       f64,
    pub false_positive_rate:  f64,
    pub customers_analyzed:   u32,
    pub model_type:           &'static str,
}

pub const MODEL_PERFORMANCE: ModelPerformance = ModelPerformance {
    accuracy:            0.797,
    precision:           0.633,
    recall:              0.562,
    auc:                 0.845,
    detection_rate:      0.562,
    false_positive_rate: 0.118,
    customers_analyzed:  7043,
    model_type:          "Logistic Regression",
};

pub const KEY_INSIGHTS: [&str; 6] = [
    "Payment Method is the strongest predictor of churn",
    "Month-to-month contracts have significantly higher churn risk",
    "Customers without Online Security are more likely to churn",
    "The model identifies 56% of churning customers with only 12% false alarms",
    "Location-based strategies can improve retention by 15-25%",
    "New customers (low tenure) are highest risk category",
];

/// A labelled value as the panel shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl ModelPerformance {
    /// "Model Metrics" column.
    pub fn model_metrics(&self) -> Vec<Metric> {
        vec![
            metric("Accuracy",          percent(self.accuracy)),
            metric("Precision (Churn)", percent(self.precision)),
            metric("Recall (Churn)",    percent(self.recall)),
            metric("AUC Score",         percent(self.auc)),
        ]
    }

    /// "Business Impact" column.
    pub fn business_impact(&self) -> Vec<Metric> {
        vec![
            metric("Churn Detection Rate", percent(self.detection_rate)),
            metric("False Positive Rate",  percent(self.false_positive_rate)),
            metric("Customers Analyzed",   thousands(self.customers_analyzed)),
            metric("Model Type",           self.model_type.to_string()),
        ]
    }
}

fn metric(label: &'static str, value: String) -> Metric {
    Metric { label, value }
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
