use crate::errors::{DimensionParseError, GenGridError, Result};
use gengrid_core_types::schema::{
    FIELD_ARGUMENT, FIELD_OP, FIELD_RAW_VALUE, FIELD_RESOLVED, OP_RESOLVE_DIMENSION,
};

/// Loose integer conversion
///
/// Skips leading C `isspace` characters (ASCII whitespace plus vertical
/// tab), accepts one optional sign and reads the
/// longest run of ASCII digits that follows. Anything after the digits is
/// ignored. Text without a leading number yields `0`. Saturates instead of
/// overflowing.
pub fn parse_leading_int(text: &str) -> i64 {
    let mut rest = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');

    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Strict dimension conversion
///
/// The whole text must be an optional `+` followed by ASCII digits whose
/// value fits in a `u32`.
///
/// # Errors
/// * `Empty` - no digits at all
/// * `Negative` - a leading `-` followed by digits
/// * `NotANumber` - any other non-digit content
/// * `Overflow` - digits exceed `u32::MAX`
pub fn parse_dimension(text: &str) -> std::result::Result<u32, DimensionParseError> {
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() {
        return Err(DimensionParseError::Empty);
    }
    if let Some(magnitude) = digits.strip_prefix('-') {
        if !magnitude.is_empty() && magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DimensionParseError::Negative);
        }
        return Err(DimensionParseError::NotANumber);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DimensionParseError::NotANumber);
    }

    digits
        .bytes()
        .try_fold(0u32, |acc, b| {
            acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
        })
        .ok_or(DimensionParseError::Overflow)
}

/// How width and height text is turned into loop counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionPolicy {
    /// Loose `atoi` semantics, clamped into `0..=u32::MAX`. Never fails.
    #[default]
    Lenient,
    /// Reject anything that is not a plain non-negative decimal.
    Strict,
}

impl DimensionPolicy {
    /// Resolve the named argument's text into a dimension
    ///
    /// # Errors
    /// * `InvalidNumericArgument` - only under [`DimensionPolicy::Strict`]
    pub fn resolve(&self, name: &str, text: &str) -> Result<u32> {
        match self {
            DimensionPolicy::Lenient => {
                let loose = parse_leading_int(text);
                let clamped = u32::try_from(loose.max(0)).unwrap_or(u32::MAX);
                if parse_dimension(text) != Ok(clamped) {
                    tracing::warn!(
                        { FIELD_OP } = OP_RESOLVE_DIMENSION,
                        { FIELD_ARGUMENT } = name,
                        { FIELD_RAW_VALUE } = text,
                        { FIELD_RESOLVED } = clamped,
                        "dimension coerced by lenient parsing"
                    );
                }
                Ok(clamped)
            }
            DimensionPolicy::Strict => {
                parse_dimension(text).map_err(|reason| GenGridError::InvalidNumericArgument {
                    name: name.to_string(),
                    value: text.to_string(),
                    reason,
                })
            }
        }
    }
}
