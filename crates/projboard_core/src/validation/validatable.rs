//! Constraint descriptor and validator.

use std::fmt::{Display, Formatter};

/// Value under test: raw text or an already coerced number.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Constraint set for one field value.
///
/// Built fresh for every validation call and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    /// Value must be non-empty after trimming its text rendering.
    pub required: bool,
    /// Text only. Length must be strictly greater.
    pub min_length: Option<usize>,
    /// Text only. Length must be strictly smaller.
    pub max_length: Option<usize>,
    /// Numbers only. Value must be strictly greater.
    pub min: Option<f64>,
    /// Numbers only. Value must be strictly smaller.
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns `true` iff every present, type-applicable constraint passes.
///
/// Text length counts UTF-16 code units, so one emoji outside the BMP counts
/// as two. A `NaN` number fails any `min`/`max` bound because every
/// comparison with it is false.
pub fn validate(input: &Validatable) -> bool {
    let value = &input.value;
    let mut is_valid = true;
    if input.required {
        is_valid &= !trim_blank(&value.to_string()).is_empty();
    }

    match value {
        FieldValue::Text(text) => {
            let length = text.encode_utf16().count();
            if let Some(min_length) = input.min_length {
                is_valid &= length > min_length;
            }
            if let Some(max_length) = input.max_length {
                is_valid &= length < max_length;
            }
        }
        FieldValue::Number(number) => {
            if let Some(min) = input.min {
                is_valid &= *number > min;
            }
            if let Some(max) = input.max {
                is_valid &= *number < max;
            }
        }
    }

    is_valid
}

/// Converts raw numeric field text into a number.
///
/// Rules:
/// - blank text becomes `0.0`
/// - unsigned `0x`/`0o`/`0b` prefixes select hex, octal or binary digits
/// - `Infinity` (case-sensitive, optionally signed) is the only infinity
///   spelling; `inf`, `nan` and other words become `NaN`
/// - anything else unparseable becomes `NaN`
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = trim_blank(raw);
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Trims whitespace plus the byte-order mark `U+FEFF`.
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn parse_radix_literal(value: &str) -> Option<f64> {
    let mut chars = value.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next() {
        Some('x' | 'X') => 16,
        Some('o' | 'O') => 8,
        Some('b' | 'B') => 2,
        _ => return None,
    };

    let digits = &value[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    let parsed = u128::from_str_radix(digits, radix)
        .map(|number| number as f64)
        .unwrap_or(f64::INFINITY);
    Some(parsed)
}
