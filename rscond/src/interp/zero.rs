use chrono::Duration;
use num_traits::Zero;

use crate::CondValue;

/// Decides whether a resolved value stands for the false case.
///
/// Only numbers, durations and strings can ever be zero. Collections,
/// timestamps, callables and anything else are truthy no matter their content.
/// Booleans are deliberately absent; the operators check them before they
/// ever ask about zero.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

macro_rules! numeric_is_zero {
    ($($t:ty),*) => {
        $(impl IsZero for $t {
            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }
        })*
    };
}

numeric_is_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl IsZero for str {
    fn is_zero(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let float_zero = match self.parse::<f64>() {
            Ok(f) => Some(f == 0.0),
            Err(_) => hex_float_is_zero(self),
        };
        if float_zero == Some(true) {
            return true;
        }

        parse_bool_literal(self) == Some(false)
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.as_str().is_zero()
    }
}

impl IsZero for CondValue {
    fn is_zero(&self) -> bool {
        match self {
            CondValue::Int(i) => IsZero::is_zero(i),
            CondValue::UInt(u) => IsZero::is_zero(u),
            CondValue::Float(f) => IsZero::is_zero(f),
            CondValue::String(s) => s.is_zero(),
            CondValue::Duration(d) => *d == Duration::zero(),
            CondValue::Dyn(obj) => obj.is_zero(),
            _ => false,
        }
    }
}

// Hex floats such as `0x1.8p3`. The binary exponent is mandatory, and a
// valid literal is zero exactly when every mantissa digit is zero.
fn hex_float_is_zero(s: &str) -> Option<bool> {
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let body = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    let (mantissa, exponent) = body.split_once(&['p', 'P'][..])?;

    let exponent = exponent.strip_prefix(&['+', '-'][..]).unwrap_or(exponent);
    if exponent.is_empty() || !exponent.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = || int.bytes().chain(frac.bytes());
    if int.len() + frac.len() == 0 || !digits().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    Some(digits().all(|b| b == b'0'))
}

/// Free standing form of [`IsZero::is_zero`] for `CondValue`.
pub fn is_zero(value: &CondValue) -> bool {
    value.is_zero()
}

/// Boolean literal spellings accepted in strings. Anything else is not a
/// boolean at all.
pub fn parse_bool_literal(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
