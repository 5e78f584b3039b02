//! Amount formatting rules.
//!
//! Amounts travel as integers of minor units. The currency decides how many
//! of those digits sit after the decimal point and which symbol follows.

use crate::error::AmountError;
use serde::{Deserialize, Serialize};

/// How a currency renders minor-unit integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountFormat {
    /// Digits after the decimal point.
    pub decimal_places: u8,
    /// Ticker appended after the number; empty for none.
    pub symbol: String,
    /// Thousands separator for the integer part.
    pub grouping: Option<char>,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            decimal_places: 6,
            symbol: "CCX".to_string(),
            grouping: None,
        }
    }
}

impl AmountFormat {
    pub fn new(decimal_places: u8, symbol: impl Into<String>) -> Self {
        Self {
            decimal_places,
            symbol: symbol.into(),
            grouping: None,
        }
    }

    pub fn with_grouping(mut self, separator: char) -> Self {
        self.grouping = Some(separator);
        self
    }

    /// Format an unsigned amount, e.g. `250000` → `2.50000 CCX` at 5 places.
    pub fn format_unsigned(&self, raw: u64) -> String {
        self.format_parts(false, raw)
    }

    /// Format a signed amount; negative values carry a leading `-`.
    pub fn format_signed(&self, raw: i64) -> String {
        self.format_parts(raw < 0, raw.unsigned_abs())
    }

    fn format_parts(&self, negative: bool, magnitude: u64) -> String {
        let places = self.decimal_places as usize;
        let digits = magnitude.to_string();
        let padded = if digits.len() <= places {
            format!("{:0>width$}", digits, width = places + 1)
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - places);

        let mut out = String::with_capacity(padded.len() + self.symbol.len() + 8);
        if negative {
            out.push('-');
        }
        self.push_grouped(&mut out, int_part);
        if places > 0 {
            out.push('.');
            out.push_str(frac_part);
        }
        if !self.symbol.is_empty() {
            out.push(' ');
            out.push_str(&self.symbol);
        }
        out
    }

    fn push_grouped(&self, out: &mut String, int_part: &str) {
        let Some(separator) = self.grouping else {
            out.push_str(int_part);
            return;
        };
        let len = int_part.len();
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(c);
        }
    }

    /// Parse a decimal string such as `2.5`, `2.50000 CCX` or `1,000` into
    /// minor units. The currency symbol and grouping separators are optional.
    pub fn parse(&self, text: &str) -> Result<u64, AmountError> {
        let mut text = text.trim();
        if !self.symbol.is_empty() {
            if let Some(stripped) = text.strip_suffix(self.symbol.as_str()) {
                text = stripped.trim_end();
            }
        }
        let (grouped_int, frac_part) = text.split_once('.').unwrap_or((text, ""));
        let int_part = self.strip_grouping(grouped_int)?;
        let int_part = int_part.as_str();
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(AmountError::Empty);
        }
        if let Some(bad) = int_part
            .chars()
            .chain(frac_part.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(AmountError::InvalidCharacter(bad));
        }
        let places = self.decimal_places as usize;
        if frac_part.len() > places {
            return Err(AmountError::TooManyDecimals {
                max: self.decimal_places,
            });
        }

        let mut value: u64 = 0;
        let fraction_padding = places - frac_part.len();
        let all_digits = int_part
            .bytes()
            .chain(frac_part.bytes())
            .chain(std::iter::repeat(b'0').take(fraction_padding));
        for digit in all_digits {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit - b'0')))
                .ok_or(AmountError::Overflow)?;
        }
        Ok(value)
    }

    /// Remove grouping separators from the integer part. Separators are only
    /// accepted every three digits counted from the right, as
    /// [`format_unsigned`](Self::format_unsigned) writes them.
    fn strip_grouping(&self, int_text: &str) -> Result<String, AmountError> {
        let Some(separator) = self.grouping else {
            return Ok(int_text.to_owned());
        };
        let mut groups = int_text.split(separator);
        let leading = groups.next().unwrap_or_default();
        let mut out = leading.to_owned();
        for group in groups {
            if group.chars().count() != 3 || !(1..=3).contains(&leading.chars().count()) {
                return Err(AmountError::MisplacedSeparator(separator));
            }
            out.push_str(group);
        }
        Ok(out)
    }
}
