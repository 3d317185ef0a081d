//! Turns raw field text into valid [`CalculationInputs`].
//!
//! Bad input is never rejected. Each field is parsed; when the text is
//! missing, empty, not a number, or outside the field's domain, a default is
//! substituted and the substitution is reported in the [`InputEcho`] so the
//! caller can write the value back into the form.
//!
//! | Field             | Entered as       | Default on failure                      |
//! |-------------------|------------------|-----------------------------------------|
//! | loan amount       | whole currency   | previous loan amount                    |
//! | down payment      | percent          | profile minimum down payment            |
//! | interest rate     | percent          | profile interest rate estimate          |
//! | term              | whole years      | [`InputDefaults::term_years`]           |
//! | annual taxes      | whole currency   | [`InputDefaults::annual_taxes`]         |
//! | insurance rate    | percent          | [`InputDefaults::insurance_rate`]       |
//!
//! Parsing reads the leading number and ignores whatever follows it, so
//! `"3.5%"` is 3.5 and `"30 years"` is 30. Whole-number fields truncate a
//! fractional entry toward zero. A negative entry is a parse failure for
//! every field except the term, where anything below one year is raised to
//! one. Configured fallbacks are pulled into range before use.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{clamp_non_negative, fraction_to_percent, percent_to_fraction};
use crate::{CalculationInputs, InputDefaults, LoanProfile};

/// Identifies one of the six editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    LoanAmount,
    DownPaymentRate,
    InterestRate,
    TermYears,
    AnnualTaxes,
    InsuranceRate,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoanAmount => "loan_amount",
            Self::DownPaymentRate => "down_payment_rate",
            Self::InterestRate => "interest_rate",
            Self::TermYears => "term_years",
            Self::AnnualTaxes => "annual_taxes",
            Self::InsuranceRate => "insurance_rate",
        }
    }
}

/// Field text exactly as the user entered it; `None` means the field was
/// left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    pub loan_amount: Option<String>,
    /// Percent, e.g. `"3.5"`.
    pub down_payment: Option<String>,
    /// Percent, e.g. `"3.5"`.
    pub interest_rate: Option<String>,
    pub term_years: Option<String>,
    pub annual_taxes: Option<String>,
    /// Percent, e.g. `"0.5"`.
    pub insurance_rate: Option<String>,
}

impl RawInputs {
    /// Renders valid inputs the way a user would type them.
    pub fn from_inputs(inputs: &CalculationInputs) -> Self {
        Self {
            loan_amount: Some(inputs.loan_amount.normalize().to_string()),
            down_payment: Some(fraction_to_percent(inputs.down_payment_rate).to_string()),
            interest_rate: Some(fraction_to_percent(inputs.interest_rate).to_string()),
            term_years: Some(inputs.term_years.to_string()),
            annual_taxes: Some(inputs.annual_taxes.normalize().to_string()),
            insurance_rate: Some(fraction_to_percent(inputs.insurance_rate).to_string()),
        }
    }
}

/// A normalized field value and whether it replaced the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    pub substituted: bool,
}

impl<T> Normalized<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            substituted: false,
        }
    }

    fn defaulted(value: T) -> Self {
        Self {
            value,
            substituted: true,
        }
    }
}

/// Values to write back into the editable fields after normalization.
///
/// Rates are expressed as percentages, matching how they are entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEcho {
    pub loan_amount: Decimal,
    pub down_payment_percent: Decimal,
    pub interest_rate_percent: Decimal,
    pub term_years: u32,
    pub annual_taxes: Decimal,
    pub insurance_rate_percent: Decimal,

    /// Fields whose raw text was replaced by a default, in field order.
    pub substituted: Vec<InputField>,
}

impl InputEcho {
    /// Echo for `inputs` with no substitutions recorded.
    pub fn from_inputs(inputs: &CalculationInputs) -> Self {
        Self {
            loan_amount: inputs.loan_amount,
            down_payment_percent: fraction_to_percent(inputs.down_payment_rate),
            interest_rate_percent: fraction_to_percent(inputs.interest_rate),
            term_years: inputs.term_years,
            annual_taxes: inputs.annual_taxes,
            insurance_rate_percent: fraction_to_percent(inputs.insurance_rate),
            substituted: Vec::new(),
        }
    }

    pub fn was_substituted(
        &self,
        field: InputField,
    ) -> bool {
        self.substituted.contains(&field)
    }
}

/// Applies the per-field rules for the selected loan profile.
#[derive(Debug, Clone)]
pub struct InputNormalizer<'a> {
    profile: &'a LoanProfile,
    defaults: InputDefaults,
}

impl<'a> InputNormalizer<'a> {
    pub fn new(
        profile: &'a LoanProfile,
        defaults: &InputDefaults,
    ) -> Self {
        Self {
            profile,
            defaults: defaults.clamped(),
        }
    }

    /// Normalizes every field of `raw` into `inputs` in place.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use mortgage_core::normalization::InputNormalizer;
    /// use mortgage_core::{
    ///     CalculationInputs, InputDefaults, InputField, LoanProfileCatalog, LoanType, RawInputs,
    /// };
    ///
    /// let catalog = LoanProfileCatalog::new();
    /// let profile = catalog.get(LoanType::Fha);
    /// let defaults = InputDefaults::default();
    /// let mut inputs = CalculationInputs::from_defaults(&defaults, profile);
    ///
    /// let raw = RawInputs {
    ///     loan_amount: Some("300,000".to_string()),
    ///     interest_rate: Some("abc".to_string()),
    ///     ..RawInputs::default()
    /// };
    /// let echo = InputNormalizer::new(profile, &defaults).normalize(&mut inputs, &raw);
    ///
    /// assert_eq!(inputs.loan_amount, dec!(300000));
    /// assert_eq!(inputs.interest_rate, dec!(0.035));
    /// assert!(echo.was_substituted(InputField::InterestRate));
    /// assert!(!echo.was_substituted(InputField::LoanAmount));
    /// ```
    pub fn normalize(
        &self,
        inputs: &mut CalculationInputs,
        raw: &RawInputs,
    ) -> InputEcho {
        let mut substituted = Vec::new();
        let mut track = |field: InputField, substitution: bool| {
            if substitution {
                substituted.push(field);
            }
        };

        let loan_amount = self.loan_amount(raw.loan_amount.as_deref(), inputs.loan_amount);
        track(InputField::LoanAmount, loan_amount.substituted);
        inputs.loan_amount = loan_amount.value;

        let down_payment_rate = self.down_payment_rate(raw.down_payment.as_deref());
        track(InputField::DownPaymentRate, down_payment_rate.substituted);
        inputs.down_payment_rate = down_payment_rate.value;

        let interest_rate = self.interest_rate(raw.interest_rate.as_deref());
        track(InputField::InterestRate, interest_rate.substituted);
        inputs.interest_rate = interest_rate.value;

        let term_years = self.term_years(raw.term_years.as_deref());
        track(InputField::TermYears, term_years.substituted);
        inputs.term_years = term_years.value;

        let annual_taxes = self.annual_taxes(raw.annual_taxes.as_deref());
        track(InputField::AnnualTaxes, annual_taxes.substituted);
        inputs.annual_taxes = annual_taxes.value;

        let insurance_rate = self.insurance_rate(raw.insurance_rate.as_deref());
        track(InputField::InsuranceRate, insurance_rate.substituted);
        inputs.insurance_rate = insurance_rate.value;

        InputEcho {
            substituted,
            ..InputEcho::from_inputs(inputs)
        }
    }

    /// Whole currency units; falls back to `previous`.
    pub fn loan_amount(
        &self,
        raw: Option<&str>,
        previous: Decimal,
    ) -> Normalized<Decimal> {
        let max = Decimal::from(CalculationInputs::MAX_LOAN_AMOUNT);
        match parse_non_negative_whole(raw) {
            Some(amount) if amount <= max => Normalized::parsed(amount),
            _ => substitute(
                InputField::LoanAmount,
                raw,
                clamp_non_negative(previous).min(max),
            ),
        }
    }

    /// Percent of the loan amount; falls back to the profile minimum.
    pub fn down_payment_rate(
        &self,
        raw: Option<&str>,
    ) -> Normalized<Decimal> {
        parse_rate(raw).map_or_else(
            || {
                substitute(
                    InputField::DownPaymentRate,
                    raw,
                    self.profile.minimum_down_payment_rate,
                )
            },
            Normalized::parsed,
        )
    }

    /// Annual percent; falls back to the profile estimate.
    pub fn interest_rate(
        &self,
        raw: Option<&str>,
    ) -> Normalized<Decimal> {
        parse_rate(raw).map_or_else(
            || {
                substitute(
                    InputField::InterestRate,
                    raw,
                    self.profile.fixed_interest_rate_estimate,
                )
            },
            Normalized::parsed,
        )
    }

    /// Whole years, at least one.
    pub fn term_years(
        &self,
        raw: Option<&str>,
    ) -> Normalized<u32> {
        let Some(years) = parse_whole(raw) else {
            return substitute(InputField::TermYears, raw, self.defaults.term_years);
        };

        if years < Decimal::ONE {
            return substitute(InputField::TermYears, raw, 1);
        }

        years.to_u32().map_or_else(
            || substitute(InputField::TermYears, raw, self.defaults.term_years),
            Normalized::parsed,
        )
    }

    /// Whole currency units per year.
    pub fn annual_taxes(
        &self,
        raw: Option<&str>,
    ) -> Normalized<Decimal> {
        parse_non_negative_whole(raw).map_or_else(
            || substitute(InputField::AnnualTaxes, raw, self.defaults.annual_taxes),
            Normalized::parsed,
        )
    }

    /// Annual percent of the loan amount.
    pub fn insurance_rate(
        &self,
        raw: Option<&str>,
    ) -> Normalized<Decimal> {
        parse_rate(raw).map_or_else(
            || substitute(InputField::InsuranceRate, raw, self.defaults.insurance_rate),
            Normalized::parsed,
        )
    }
}

fn substitute<T: std::fmt::Display>(
    field: InputField,
    raw: Option<&str>,
    default: T,
) -> Normalized<T> {
    debug!(
        field = field.as_str(),
        raw = raw.unwrap_or(""),
        %default,
        "substituted default for input"
    );
    Normalized::defaulted(default)
}

/// Trims whitespace and removes commas (thousands separator).
fn normalize_numeric_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Leading `[+-]digits[.digits]` of `s`, rewritten so it always has an
/// integer part. `None` when `s` does not start with a number.
fn numeric_prefix(s: &str) -> Option<String> {
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, tail) = rest.split_at(int_len);
    let frac_part = tail.strip_prefix('.').map_or("", |frac| {
        let frac_len = frac.bytes().take_while(u8::is_ascii_digit).count();
        &frac[..frac_len]
    });

    match (int_part.is_empty(), frac_part.is_empty()) {
        (true, true) => None,
        (true, false) => Some(format!("{sign}0.{frac_part}")),
        (false, true) => Some(format!("{sign}{int_part}")),
        (false, false) => Some(format!("{sign}{int_part}.{frac_part}")),
    }
}

/// `None` when the text holds no leading number or the number does not fit
/// a decimal.
fn parse_number(raw: Option<&str>) -> Option<Decimal> {
    numeric_prefix(&normalize_numeric_input(raw?))?.parse().ok()
}

fn parse_whole(raw: Option<&str>) -> Option<Decimal> {
    parse_number(raw).map(|value| {
        // "-0.5" truncates to a signed zero
        let whole = value.trunc();
        if whole.is_zero() {
            Decimal::ZERO
        } else {
            whole
        }
    })
}

/// Whole number for fields that cannot be negative; a negative entry fails
/// before truncation so `"-0.5"` is not read as zero.
fn parse_non_negative_whole(raw: Option<&str>) -> Option<Decimal> {
    parse_number(raw)
        .filter(|value| !value.is_sign_negative())
        .map(|value| value.trunc())
}

/// Parses a percentage into a fraction within `[0, 1]`.
fn parse_rate(raw: Option<&str>) -> Option<Decimal> {
    parse_number(raw)
        .filter(|value| !value.is_sign_negative())
        .map(percent_to_fraction)
        .filter(|rate| *rate <= CalculationInputs::MAX_RATE)
}
