use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on integer digits of an absolute amount.
pub const ABS_AMOUNT_INTEGER_DIGITS: u32 = 16;
/// Upper bound on fraction digits of an absolute amount.
pub const ABS_AMOUNT_FRACTION_DIGITS: u32 = 4;

/// A single failed constraint on an inbound payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Explicit validation pass from a raw payload to its checked form.
///
/// Implementations report every failed constraint, not only the first.
pub trait Validate: Sized {
    type Output;

    fn validate(self) -> Result<Self::Output, Vec<Violation>>;
}

/// An ISO-4217 style currency code: exactly three upper-case ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Result<Self, Violation> {
        let code = code.into();
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code))
        } else {
            Err(Violation::new(
                "currency",
                "must be a 3-letter upper-case code",
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Currency {
    type Error = Violation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

/// A strictly positive monetary magnitude.
///
/// Limited to 16 integer digits and 4 fraction digits once trailing zeros
/// are stripped, so `100.00` and `100` are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct AbsAmount(Decimal);

impl AbsAmount {
    pub fn new(value: Decimal) -> Result<Self, Violation> {
        if value <= Decimal::ZERO {
            return Err(Violation::new("absAmount", "must be positive"));
        }
        let normalized = value.normalize();
        if normalized.scale() > ABS_AMOUNT_FRACTION_DIGITS
            || integer_digits(normalized) > ABS_AMOUNT_INTEGER_DIGITS
        {
            return Err(Violation::new(
                "absAmount",
                format!(
                    "must have at most {ABS_AMOUNT_INTEGER_DIGITS} integer and {ABS_AMOUNT_FRACTION_DIGITS} fraction digits"
                ),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

fn integer_digits(value: Decimal) -> u32 {
    let integer = value.trunc().abs();
    if integer.is_zero() {
        0
    } else {
        integer.to_string().len() as u32
    }
}

impl TryFrom<Decimal> for AbsAmount {
    type Error = Violation;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AbsAmount> for Decimal {
    fn from(amount: AbsAmount) -> Self {
        amount.0
    }
}
