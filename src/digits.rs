//! Decimal digit strings.
//!
//! Bounds arrive as text (`"0099"`, `"+1 (425) 555-0100"`, `"tel:+14255550100;ext=12"`)
//! and are compared as integers of arbitrary length. [`Decimal`] is the
//! canonical form used for all arithmetic: a digit string with no leading
//! zeros, ordered by length first and digits second.
//!
//! ```text
//! "0099" ──parse──▶ Decimal("99") ──to_padded(4)──▶ "0099"
//! "9"    ──succ───▶ "10"          "100" ──pred──▶ "99"
//! ```

use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Reject empty strings and anything that is not an ASCII decimal digit.
pub(crate) fn validate_digits(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::InvalidArgument("empty digit string".to_string()));
    }
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_digit()) {
        return Err(Error::InvalidArgument(format!("'{text}' contains non-digit character '{bad}'")));
    }
    Ok(())
}

/// Pull the dialable digits out of a formatted telephone number.
///
/// Accepts an optional `tel:` scheme, a leading `+`, the usual separators
/// (spaces, dashes, dots, parentheses) and drops an `;ext=`, `ext.` or `x`
/// extension suffix.
///
/// ```
/// use dialrange::extract_digits;
///
/// assert_eq!(extract_digits("tel:+1 (425) 555-0100;ext=12").unwrap(), "14255550100");
/// assert_eq!(extract_digits("0100").unwrap(), "0100");
/// ```
pub fn extract_digits(raw: &str) -> Result<String> {
    let re = regex!(r"(?i)^\s*(?:tel:)?\s*\+?([0-9().\-\s]+?)\s*(?:(?:;ext=|ext\.?|x)\s*[0-9]+)?\s*$");
    let caps = re
        .captures(raw)
        .ok_or_else(|| Error::InvalidArgument(format!("'{raw}' is not a telephone number or digit string")))?;
    let body = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let digits: String = body.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(Error::InvalidArgument(format!("'{raw}' contains no digits")));
    }
    Ok(digits)
}

/// Unsigned decimal integer of arbitrary length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    digits: String,
}

impl Decimal {
    /// Parse a digit string, dropping leading zeros.
    pub fn parse(text: &str) -> Result<Self> {
        validate_digits(text)?;
        Ok(Self::canonical(text))
    }

    fn canonical(text: &str) -> Self {
        let trimmed = text.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
        Decimal { digits }
    }

    pub fn zero() -> Self {
        Decimal { digits: "0".to_string() }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of digits in the canonical form (`1` for zero).
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    /// The next integer.
    pub fn succ(&self) -> Decimal {
        let mut bytes = self.digits.as_bytes().to_vec();
        let mut carry = true;
        for b in bytes.iter_mut().rev() {
            if *b == b'9' {
                *b = b'0';
            } else {
                *b += 1;
                carry = false;
                break;
            }
        }
        if carry {
            bytes.insert(0, b'1');
        }
        Decimal { digits: bytes.into_iter().map(char::from).collect() }
    }

    /// The previous integer, or `None` for zero.
    pub fn pred(&self) -> Option<Decimal> {
        if self.is_zero() {
            return None;
        }
        let mut bytes = self.digits.as_bytes().to_vec();
        for b in bytes.iter_mut().rev() {
            if *b == b'0' {
                *b = b'9';
            } else {
                *b -= 1;
                break;
            }
        }
        let text: String = bytes.into_iter().map(char::from).collect();
        Some(Self::canonical(&text))
    }

    /// Left-pad with zeros to `width` digits. Longer values are returned as is.
    pub fn to_padded(&self, width: usize) -> String {
        format!("{:0>width$}", self.digits, width = width)
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits.len().cmp(&other.digits.len()).then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Decimal::parse(s)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn parse_strips_leading_zeros() {
        assert_eq!(dec("0099").as_str(), "99");
        assert_eq!(dec("0000").as_str(), "0");
        assert!(dec("000").is_zero());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(Decimal::parse(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(Decimal::parse("12a4"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Decimal::parse("-5"), Err(Error::InvalidArgument(_))));
        assert!(matches!(Decimal::parse("١٢"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn ordering_is_numeric_not_lexical() {
        assert!(dec("9") < dec("10"));
        assert!(dec("0099") < dec("100"));
        assert_eq!(dec("007").cmp(&dec("7")), Ordering::Equal);
        assert!(dec("123456789012345678901234567890") > dec("99999999999999999999999999999"));
    }

    #[test]
    fn succ_and_pred_carry() {
        assert_eq!(dec("9").succ().as_str(), "10");
        assert_eq!(dec("1999").succ().as_str(), "2000");
        assert_eq!(dec("0").succ().as_str(), "1");
        assert_eq!(dec("100").pred().unwrap().as_str(), "99");
        assert_eq!(dec("1").pred().unwrap().as_str(), "0");
        assert_eq!(dec("2500").pred().unwrap().as_str(), "2499");
        assert!(dec("0").pred().is_none());
    }

    #[test]
    fn padding_keeps_fixed_width() {
        assert_eq!(dec("99").to_padded(4), "0099");
        assert_eq!(dec("12345").to_padded(4), "12345");
        assert_eq!(dec("7").to_padded(0), "7");
    }

    #[test]
    fn extract_digits_handles_common_formats() {
        assert_eq!(extract_digits("+14255550100").unwrap(), "14255550100");
        assert_eq!(extract_digits("+1 (425) 555-0100").unwrap(), "14255550100");
        assert_eq!(extract_digits("tel:+14255550100;ext=100").unwrap(), "14255550100");
        assert_eq!(extract_digits("425.555.0100 x12").unwrap(), "4255550100");
        assert_eq!(extract_digits("0099").unwrap(), "0099");
    }

    #[test]
    fn extract_digits_rejects_garbage() {
        assert!(extract_digits("").is_err());
        assert!(extract_digits("()").is_err());
        assert!(extract_digits("sip:alice@example.com").is_err());
    }
}
