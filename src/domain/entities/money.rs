//! Money value object embedded into a book's price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Largest number of integer digits an amount may carry.
pub const MAX_INTEGER_DIGITS: u32 = 10;

/// Largest number of fraction digits an amount may carry.
pub const MAX_FRACTION_DIGITS: u32 = 2;

/// Supported currencies.
///
/// Serialized by variant name (`"CAD"`, `"EUR"`, `"USD"`). `USD` is the
/// default when a price omits its currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Currency {
    #[serde(rename = "CAD")]
    Cad,
    #[serde(rename = "EUR")]
    Eur,
    #[default]
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a currency code is not one of the supported ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency '{0}', expected one of CAD, EUR, USD")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAD" => Ok(Currency::Cad),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(UnknownCurrency(other.to_string())),
        }
    }
}

/// An amount of money in a given currency.
///
/// Has no identity of its own: it is stored in the columns of the owning
/// book and goes away with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Money {
    /// Strictly positive, at most 10 integer and 2 fraction digits.
    #[validate(custom(function = "validate_amount"))]
    #[schema(value_type = String, example = "45.83")]
    pub amount: Decimal,

    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    pub fn new(currency: Currency, amount: Decimal) -> Self {
        Self { amount, currency }
    }

    /// Creates an amount in the default currency.
    pub fn usd(amount: Decimal) -> Self {
        Self::new(Currency::Usd, amount)
    }

    /// Same value with exactly [`MAX_FRACTION_DIGITS`] fraction digits.
    ///
    /// Only meaningful once the amount passed [`validate_amount`]; extra
    /// digits are rounded away.
    pub fn rescaled(mut self) -> Self {
        self.amount.rescale(MAX_FRACTION_DIGITS);
        self
    }
}

/// Checks sign and digit limits of a price amount.
pub fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(ValidationError::new("positive").with_message("amount must be greater than 0".into()));
    }

    if amount.normalize().scale() > MAX_FRACTION_DIGITS {
        return Err(ValidationError::new("digits")
            .with_message(format!("amount allows at most {MAX_FRACTION_DIGITS} fraction digits").into()));
    }

    let integer_limit = Decimal::from(10_i64.pow(MAX_INTEGER_DIGITS));
    if amount.trunc() >= integer_limit {
        return Err(ValidationError::new("digits")
            .with_message(format!("amount allows at most {MAX_INTEGER_DIGITS} integer digits").into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_defaults_to_usd() {
        let money: Money = serde_json::from_str(r#"{"amount": "9.99"}"#).unwrap();
        assert_eq!(money.currency, Currency::Usd);
        assert_eq!(money.amount, Decimal::new(999, 2));
    }

    #[test]
    fn test_amount_accepts_json_number() {
        let money: Money = serde_json::from_str(r#"{"amount": 42.74, "currency": "EUR"}"#).unwrap();
        assert_eq!(money.amount, Decimal::new(4274, 2));
        assert_eq!(money.currency, Currency::Eur);
    }

    #[test]
    fn test_currency_round_trips_through_str() {
        for currency in [Currency::Cad, Currency::Eur, Currency::Usd] {
            assert_eq!(currency.as_str().parse::<Currency>().unwrap(), currency);
        }
        assert!("GBP".parse::<Currency>().is_err());
        assert!("usd".parse::<Currency>().is_err());
    }

    #[test]
    fn test_zero_amount_is_invalid() {
        let money = Money::usd(Decimal::ZERO);
        let errors = money.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("amount"));
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        assert!(validate_amount(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_fraction_digits_limit() {
        assert!(validate_amount(&Decimal::new(9999, 3)).is_err());
        // trailing zeros do not count
        assert!(validate_amount(&Decimal::new(9990, 3)).is_ok());
        assert!(validate_amount(&Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn test_rescaled_pads_and_trims_to_two_digits() {
        let padded = Money::usd(Decimal::new(15, 1)).rescaled();
        assert_eq!(padded.amount.to_string(), "1.50");

        let trimmed = Money::usd(Decimal::new(9990, 3)).rescaled();
        assert_eq!(trimmed.amount.to_string(), "9.99");

        let whole = Money::new(Currency::Cad, Decimal::new(11, 0)).rescaled();
        assert_eq!(whole.amount.to_string(), "11.00");
        assert_eq!(whole.currency, Currency::Cad);
    }

    #[test]
    fn test_integer_digits_limit() {
        assert!(validate_amount(&Decimal::new(9_999_999_999, 0)).is_ok());
        assert!(validate_amount(&Decimal::new(10_000_000_000, 0)).is_err());
    }
}
