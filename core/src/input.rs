use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of elements in a round, always within [`RoundSize::MIN`]..=[`RoundSize::MAX`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RoundSize(u8);

impl RoundSize {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 7;

    pub fn new(count: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&count) {
            Ok(Self(count as u8))
        } else {
            Err(GameError::OutOfRange(count))
        }
    }

    /// Parses free text the way a browser `parseInt` without a radix does: leading whitespace and
    /// an optional sign are skipped, a `0x`/`0X` prefix switches to hexadecimal, then the longest
    /// run of digits is read and anything after it ignored.
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(parse_leading_int(input)?)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn len(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for RoundSize {
    type Error = GameError;

    fn try_from(count: i64) -> Result<Self> {
        Self::new(count)
    }
}

impl From<RoundSize> for u8 {
    fn from(size: RoundSize) -> u8 {
        size.0
    }
}

impl fmt::Display for RoundSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn parse_leading_int(input: &str) -> Result<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        _ => (10, digits),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return Err(GameError::NotANumber);
    }
    Ok(if negative { -value } else { value })
}
