//! Shared primitive types used across the dashboard core.

/// Customer tenure in whole months.
pub type Months = u32;

/// A churn probability in [0, 1].
pub type Probability = f64;

/// Monthly charges in dollars.
pub type Dollars = f64;
