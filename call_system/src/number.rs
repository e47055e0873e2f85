//! Numeric widening and narrowing
//!
//! Conversions follow the usual primitive cast rules: integral narrowing
//! keeps the low-order bits, floating to integral truncates toward zero and
//! saturates (NaN becomes 0), and narrowing to 16 bits from a floating value
//! goes through 32 bits first. Decimals drop their fraction and then behave
//! like an integral value.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use type_mapping::SqlValue;

/// A numeric output value in its most precise stored representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integral(i64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
}

impl Number {
    /// Numeric view of a stored value, `None` for non-numeric values
    pub fn from_value(value: &SqlValue) -> Option<Self> {
        let number = match value {
            SqlValue::TinyInt(n) => Number::Integral(i64::from(*n)),
            SqlValue::SmallInt(n) => Number::Integral(i64::from(*n)),
            SqlValue::Integer(n) => Number::Integral(i64::from(*n)),
            SqlValue::BigInt(n) => Number::Integral(*n),
            SqlValue::Real(n) => Number::Float(*n),
            SqlValue::Double(n) => Number::Double(*n),
            SqlValue::Decimal(n) => Number::Decimal(*n),
            _ => return None,
        };
        Some(number)
    }

    pub fn int_value(self) -> i32 {
        match self {
            Number::Integral(n) => n as i32,
            Number::Float(n) => n as i32,
            Number::Double(n) => n as i32,
            Number::Decimal(n) => decimal_integral(n) as i32,
        }
    }

    pub fn long_value(self) -> i64 {
        match self {
            Number::Integral(n) => n,
            Number::Float(n) => n as i64,
            Number::Double(n) => n as i64,
            Number::Decimal(n) => decimal_integral(n) as i64,
        }
    }

    pub fn short_value(self) -> i16 {
        match self {
            Number::Integral(n) => n as i16,
            Number::Float(n) => n as i32 as i16,
            Number::Double(n) => n as i32 as i16,
            Number::Decimal(n) => decimal_integral(n) as i16,
        }
    }

    pub fn double_value(self) -> f64 {
        match self {
            Number::Integral(n) => n as f64,
            Number::Float(n) => f64::from(n),
            Number::Double(n) => n,
            Number::Decimal(n) => n.to_f64().unwrap_or(f64::NAN),
        }
    }

    pub fn float_value(self) -> f32 {
        match self {
            Number::Integral(n) => n as f32,
            Number::Float(n) => n,
            Number::Double(n) => n as f32,
            Number::Decimal(n) => n.to_f32().unwrap_or(f32::NAN),
        }
    }
}

/// Integral part of a decimal; always fits, decimals stay below 2^96
fn decimal_integral(value: Decimal) -> i128 {
    value.trunc().to_i128().unwrap_or_default()
}
