//! Customer profile — the account attributes a churn evaluation runs on.
//!
//! Two shapes:
//!   - `ProfileInput`:    raw selector values as the UI hands them over
//!   - `CustomerProfile`: validated, immutable, typed
//!
//! Monthly charges, partner and dependents are collected but the scoring
//! rule does not read them.

use crate::{
    error::{DashError, DashResult},
    types::{Dollars, Months},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const TENURE_RANGE: RangeInclusive<Months> = 0..=72;
pub const MONTHLY_CHARGES_RANGE: RangeInclusive<Dollars> = 18.0..=120.0;

pub const DEFAULT_TENURE: Months = 12;
pub const DEFAULT_MONTHLY_CHARGES: Dollars = 65.0;

// ── Selector choices ─────────────────────────────────────────────────────────

/// A closed set of options offered by one selector widget.
pub trait Choice: Copy + Sized + 'static {
    /// Field name used in error messages.
    const FIELD: &'static str;

    /// Every option, in the order the selector lists them.
    fn all() -> &'static [Self];

    /// Human-facing label.
    fn label(&self) -> &'static str;

    /// Stable snake_case key (matches the serde form).
    fn key(&self) -> &'static str;
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}

/// Resolve a label or key (case-insensitive, `-`/space/`_` interchangeable).
pub fn parse_choice<T: Choice>(value: &str) -> Option<T> {
    let wanted = normalize(value);
    T::all()
        .iter()
        .copied()
        .find(|c| c.key() == wanted || normalize(c.label()) == wanted)
}

fn parse_field<T: Choice>(value: &str) -> DashResult<T> {
    parse_choice(value).ok_or_else(|| DashError::UnknownOption {
        field: T::FIELD,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
    MiddleEastAfrica,
}

impl Choice for Region {
    const FIELD: &'static str = "region";

    fn all() -> &'static [Self] {
        &[
            Region::NorthAmerica,
            Region::Europe,
            Region::AsiaPacific,
            Region::LatinAmerica,
            Region::MiddleEastAfrica,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica     => "North America",
            Region::Europe           => "Europe",
            Region::AsiaPacific      => "Asia Pacific",
            Region::LatinAmerica     => "Latin America",
            Region::MiddleEastAfrica => "Middle East & Africa",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Region::NorthAmerica     => "north_america",
            Region::Europe           => "europe",
            Region::AsiaPacific      => "asia_pacific",
            Region::LatinAmerica     => "latin_america",
            Region::MiddleEastAfrica => "middle_east_africa",
        }
    }
}

impl FromStr for Region {
    type Err = DashError;

    fn from_str(s: &str) -> DashResult<Self> {
        parse_choice(s).ok_or_else(|| DashError::UnknownRegion { name: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    MonthToMonth,
    OneYear,
    TwoYear,
}

impl Choice for ContractType {
    const FIELD: &'static str = "contract";

    fn all() -> &'static [Self] {
        &[ContractType::MonthToMonth, ContractType::OneYear, ContractType::TwoYear]
    }

    fn label(&self) -> &'static str {
        match self {
            ContractType::MonthToMonth => "Month-to-month",
            ContractType::OneYear      => "One year",
            ContractType::TwoYear      => "Two year",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ContractType::MonthToMonth => "month_to_month",
            ContractType::OneYear      => "one_year",
            ContractType::TwoYear      => "two_year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    ElectronicCheck,
    MailedCheck,
    AutomaticBankTransfer,
    AutomaticCreditCard,
}

impl Choice for PaymentMethod {
    const FIELD: &'static str = "payment_method";

    fn all() -> &'static [Self] {
        &[
            PaymentMethod::ElectronicCheck,
            PaymentMethod::MailedCheck,
            PaymentMethod::AutomaticBankTransfer,
            PaymentMethod::AutomaticCreditCard,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            PaymentMethod::ElectronicCheck       => "Electronic check",
            PaymentMethod::MailedCheck           => "Mailed check",
            PaymentMethod::AutomaticBankTransfer => "Bank transfer (automatic)",
            PaymentMethod::AutomaticCreditCard   => "Credit card (automatic)",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            PaymentMethod::ElectronicCheck       => "electronic_check",
            PaymentMethod::MailedCheck           => "mailed_check",
            PaymentMethod::AutomaticBankTransfer => "automatic_bank_transfer",
            PaymentMethod::AutomaticCreditCard   => "automatic_credit_card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnlineSecurity {
    No,
    Yes,
    NoInternetService,
}

impl Choice for OnlineSecurity {
    const FIELD: &'static str = "online_security";

    fn all() -> &'static [Self] {
        &[OnlineSecurity::No, OnlineSecurity::Yes, OnlineSecurity::NoInternetService]
    }

    fn label(&self) -> &'static str {
        match self {
            OnlineSecurity::No                => "No",
            OnlineSecurity::Yes               => "Yes",
            OnlineSecurity::NoInternetService => "No internet service",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            OnlineSecurity::No                => "no",
            OnlineSecurity::Yes               => "yes",
            OnlineSecurity::NoInternetService => "no_internet_service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleLines {
    No,
    Yes,
    NoPhoneService,
}

impl Choice for MultipleLines {
    const FIELD: &'static str = "multiple_lines";

    fn all() -> &'static [Self] {
        &[MultipleLines::No, MultipleLines::Yes, MultipleLines::NoPhoneService]
    }

    fn label(&self) -> &'static str {
        match self {
            MultipleLines::No             => "No",
            MultipleLines::Yes            => "Yes",
            MultipleLines::NoPhoneService => "No phone service",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            MultipleLines::No             => "no",
            MultipleLines::Yes            => "yes",
            MultipleLines::NoPhoneService => "no_phone_service",
        }
    }
}

macro_rules! display_via_label {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Region, ContractType, PaymentMethod, OnlineSecurity, MultipleLines);

// ── Validated profile ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerProfile {
    tenure:          Months,
    monthly_charges: Dollars,
    region:          Region,
    contract:        ContractType,
    payment_method:  PaymentMethod,
    online_security: OnlineSecurity,
    multiple_lines:  MultipleLines,
    has_partner:     bool,
    has_dependents:  bool,
}

impl CustomerProfile {
    /// Start from the selector defaults.
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    pub fn tenure(&self) -> Months                  { self.tenure }
    pub fn monthly_charges(&self) -> Dollars        { self.monthly_charges }
    pub fn region(&self) -> Region                  { self.region }
    pub fn contract(&self) -> ContractType          { self.contract }
    pub fn payment_method(&self) -> PaymentMethod   { self.payment_method }
    pub fn online_security(&self) -> OnlineSecurity { self.online_security }
    pub fn multiple_lines(&self) -> MultipleLines   { self.multiple_lines }
    pub fn has_partner(&self) -> bool               { self.has_partner }
    pub fn has_dependents(&self) -> bool            { self.has_dependents }
}

/// Typed construction path. `build()` is where range checks happen.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    tenure:          i64,
    monthly_charges: Dollars,
    region:          Region,
    contract:        ContractType,
    payment_method:  PaymentMethod,
    online_security: OnlineSecurity,
    multiple_lines:  MultipleLines,
    has_partner:     bool,
    has_dependents:  bool,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self {
            tenure:          DEFAULT_TENURE as i64,
            monthly_charges: DEFAULT_MONTHLY_CHARGES,
            region:          Region::NorthAmerica,
            contract:        ContractType::MonthToMonth,
            payment_method:  PaymentMethod::ElectronicCheck,
            online_security: OnlineSecurity::No,
            multiple_lines:  MultipleLines::No,
            has_partner:     true,
            has_dependents:  true,
        }
    }
}

impl ProfileBuilder {
    pub fn tenure(mut self, months: i64) -> Self {
        self.tenure = months;
        self
    }

    pub fn monthly_charges(mut self, dollars: Dollars) -> Self {
        self.monthly_charges = dollars;
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn contract(mut self, contract: ContractType) -> Self {
        self.contract = contract;
        self
    }

    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    pub fn online_security(mut self, security: OnlineSecurity) -> Self {
        self.online_security = security;
        self
    }

    pub fn multiple_lines(mut self, lines: MultipleLines) -> Self {
        self.multiple_lines = lines;
        self
    }

    pub fn has_partner(mut self, yes: bool) -> Self {
        self.has_partner = yes;
        self
    }

    pub fn has_dependents(mut self, yes: bool) -> Self {
        self.has_dependents = yes;
        self
    }

    pub fn build(self) -> DashResult<CustomerProfile> {
        let tenure = Months::try_from(self.tenure)
            .ok()
            .filter(|t| TENURE_RANGE.contains(t))
            .ok_or(DashError::InvalidTenure {
                value: self.tenure,
                min:   *TENURE_RANGE.start(),
                max:   *TENURE_RANGE.end(),
            })?;

        // NaN fails `contains`, so it is rejected here too.
        if !MONTHLY_CHARGES_RANGE.contains(&self.monthly_charges) {
            return Err(DashError::InvalidMonthlyCharges {
                value: self.monthly_charges,
                min:   *MONTHLY_CHARGES_RANGE.start(),
                max:   *MONTHLY_CHARGES_RANGE.end(),
            });
        }

        Ok(CustomerProfile {
            tenure,
            monthly_charges: self.monthly_charges,
            region:          self.region,
            contract:        self.contract,
            payment_method:  self.payment_method,
            online_security: self.online_security,
            multiple_lines:  self.multiple_lines,
            has_partner:     self.has_partner,
            has_dependents:  self.has_dependents,
        })
    }
}

// ── Raw selector input ───────────────────────────────────────────────────────

/// A yes/no selector value; accepts JSON booleans or "Yes"/"No" strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YesNo {
    Bool(bool),
    Text(String),
}

impl YesNo {
    fn resolve(&self, field: &'static str) -> DashResult<bool> {
        match self {
            YesNo::Bool(b) => Ok(*b),
            YesNo::Text(s) => match normalize(s).as_str() {
                "yes" | "true" | "y" => Ok(true),
                "no" | "false" | "n" => Ok(false),
                _ => Err(DashError::UnknownOption { field, value: s.clone() }),
            },
        }
    }
}

/// Selector values exactly as received. Missing fields take the widget defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub tenure:          Option<i64>,
    pub monthly_charges: Option<Dollars>,
    pub region:          Option<String>,
    pub contract:        Option<String>,
    pub payment_method:  Option<String>,
    pub online_security: Option<String>,
    pub multiple_lines:  Option<String>,
    pub partner:         Option<YesNo>,
    pub dependents:      Option<YesNo>,
}

impl ProfileInput {
    pub fn into_profile(self) -> DashResult<CustomerProfile> {
        let mut b = CustomerProfile::builder();

        if let Some(t) = self.tenure {
            b = b.tenure(t);
        }
        if let Some(m) = self.monthly_charges {
            b = b.monthly_charges(m);
        }
        if let Some(r) = self.region.as_deref() {
            b = b.region(r.parse()?);
        }
        if let Some(c) = self.contract.as_deref() {
            b = b.contract(parse_field(c)?);
        }
        if let Some(p) = self.payment_method.as_deref() {
            b = b.payment_method(parse_field(p)?);
        }
        if let Some(s) = self.online_security.as_deref() {
            b = b.online_security(parse_field(s)?);
        }
        if let Some(l) = self.multiple_lines.as_deref() {
            b = b.multiple_lines(parse_field(l)?);
        }
        if let Some(p) = &self.partner {
            b = b.has_partner(p.resolve("partner")?);
        }
        if let Some(d) = &self.dependents {
            b = b.has_dependents(d.resolve("dependents")?);
        }

        b.build()
    }
}

impl TryFrom<ProfileInput> for CustomerProfile {
    type Error = DashError;

    fn try_from(input: ProfileInput) -> DashResult<Self> {
        input.into_profile()
    }
}
