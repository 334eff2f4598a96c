//! String and number coercion following the ECMAScript `ToString`,
//! `ToNumber` and `ToLength` abstract operations.

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;

use crate::error::CookError;
use crate::error::Result;
use crate::value::Symbol;
use crate::value::Value;

/// Largest integer a template `length` can take (2^53 - 1).
pub const MAX_LENGTH: u64 = 9_007_199_254_740_991;

/// A value with a string form. Symbols are the only values that refuse.
pub trait Coerce {
    /// Appends the string form of `self` to `out`.
    fn append_to(&self, out: &mut String) -> Result<()>;

    /// Whether this is the `undefined` value, which may not stand in for a
    /// literal segment.
    fn is_undefined(&self) -> bool {
        false
    }

    fn to_cooked_string(&self) -> Result<String> {
        let mut out = String::new();
        self.append_to(&mut out)?;
        Ok(out)
    }
}

impl<T: Coerce + ?Sized> Coerce for &T {
    fn append_to(&self, out: &mut String) -> Result<()> {
        (**self).append_to(out)
    }

    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
}

impl<T: Coerce + ?Sized> Coerce for Box<T> {
    fn append_to(&self, out: &mut String) -> Result<()> {
        (**self).append_to(out)
    }

    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
}

impl<B> Coerce for Cow<'_, B>
where
    B: Coerce + ToOwned + ?Sized,
{
    fn append_to(&self, out: &mut String) -> Result<()> {
        (**self).append_to(out)
    }

    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
}

impl Coerce for str {
    fn append_to(&self, out: &mut String) -> Result<()> {
        out.push_str(self);
        Ok(())
    }
}

impl Coerce for String {
    fn append_to(&self, out: &mut String) -> Result<()> {
        out.push_str(self);
        Ok(())
    }
}

impl Coerce for char {
    fn append_to(&self, out: &mut String) -> Result<()> {
        out.push(*self);
        Ok(())
    }
}

impl Coerce for bool {
    fn append_to(&self, out: &mut String) -> Result<()> {
        out.push_str(if *self { "true" } else { "false" });
        Ok(())
    }
}

macro_rules! impl_coerce_for_integer {
    ($($ty:ty),*) => {
        $(
            impl Coerce for $ty {
                fn append_to(&self, out: &mut String) -> Result<()> {
                    let _ = write!(out, "{self}");
                    Ok(())
                }
            }
        )*
    };
}

impl_coerce_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Coerce for f64 {
    fn append_to(&self, out: &mut String) -> Result<()> {
        push_number(*self, out);
        Ok(())
    }
}

impl Coerce for f32 {
    fn append_to(&self, out: &mut String) -> Result<()> {
        // Widen through the shortest f32 decimal so 0.1f32 prints as "0.1".
        let widened = self.to_string().parse::<f64>().unwrap_or(f64::from(*self));
        push_number(widened, out);
        Ok(())
    }
}

impl Coerce for Symbol {
    fn append_to(&self, _out: &mut String) -> Result<()> {
        Err(CookError::symbol_to_string())
    }
}

impl Coerce for Value {
    fn append_to(&self, out: &mut String) -> Result<()> {
        match self {
            Value::Undefined => out.push_str("undefined"),
            Value::Null => out.push_str("null"),
            Value::Bool(b) => b.append_to(out)?,
            Value::Number(n) => push_number(*n, out),
            Value::String(s) => out.push_str(s),
            Value::Symbol(_) => return Err(CookError::symbol_to_string()),
            Value::Array(items) => {
                // Array.prototype.join: nullish elements render as "".
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    if !item.is_nullish() {
                        item.append_to(out)?;
                    }
                }
            }
            Value::Object(_) => out.push_str("[object Object]"),
        }
        Ok(())
    }

    fn is_undefined(&self) -> bool {
        Value::is_undefined(self)
    }
}

/// Coerces any [`fmt::Display`] value through its `Display` output.
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Coerce for Displayed<T> {
    fn append_to(&self, out: &mut String) -> Result<()> {
        let _ = write!(out, "{}", self.0);
        Ok(())
    }
}

/// `Number::toString(x)` with radix 10.
pub fn format_number(value: f64) -> String {
    let mut out = String::new();
    push_number(value, &mut out);
    out
}

fn push_number(value: f64, out: &mut String) {
    if value.is_nan() {
        out.push_str("NaN");
        return;
    }
    if value == 0.0 {
        // Covers -0 as well.
        out.push('0');
        return;
    }
    if value.is_infinite() {
        out.push_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        return;
    }
    if value < 0.0 {
        out.push('-');
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (integer, fraction) = digits.split_at(n as usize);
        out.push_str(integer);
        out.push('.');
        out.push_str(fraction);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-n) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = n - 1;
        out.push('e');
        out.push(if e >= 0 { '+' } else { '-' });
        let _ = write!(out, "{}", e.abs());
    }
}

/// `ToNumber`. Compound values go through their string form first.
pub fn to_number(value: &Value) -> Result<f64> {
    match value {
        Value::Undefined => Ok(f64::NAN),
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Ok(*n),
        Value::String(s) => Ok(string_to_number(s)),
        Value::Symbol(_) => Err(CookError::symbol_to_number()),
        Value::Array(_) | Value::Object(_) => {
            let primitive = value.to_cooked_string()?;
            Ok(string_to_number(&primitive))
        }
    }
}

/// `StringToNumber`: whitespace-trimmed decimal, `Infinity` or a
/// `0x`/`0o`/`0b` literal. Everything else is NaN.
pub fn string_to_number(input: &str) -> f64 {
    let trimmed = input.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&trimmed[2..], radix);
    }

    // Rust's float parser also takes "inf" and "nan"; the standard does not.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return f64::NAN;
        };
        value = value * f64::from(radix) + f64::from(digit);
    }
    value
}

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `ToLength` over an already converted number.
pub fn to_length(number: f64) -> u64 {
    if number.is_nan() || number <= 0.0 {
        0
    } else if number >= MAX_LENGTH as f64 {
        MAX_LENGTH
    } else {
        number.trunc() as u64
    }
}
