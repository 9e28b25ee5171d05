//! Ring sizing configuration.
//!
//! Capacities are usually supplied by an outer cache layer, often straight
//! from a configuration file or a command line flag. [`parse_capacity`]
//! accepts plain byte counts as well as sizes such as `64M`, `1.5GiB` or
//! `512KB`. A single-letter suffix and the `iB` form are powers of 1024; the
//! `B` form is powers of 1000.

use std::num::NonZeroUsize;
use std::str::FromStr;

use memchr::memchr2;
use thiserror::Error;

use crate::buffer::RingBuf;

/// Errors returned when parsing a ring capacity fails.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CapacityParseError {
    /// The text did not follow the recognised size syntax.
    #[error("invalid ring capacity syntax")]
    Invalid,
    /// The size evaluated to zero bytes.
    #[error("ring capacity must be non-zero")]
    Zero,
    /// The size does not fit in the platform's address space.
    #[error("ring capacity exceeds the addressable range")]
    TooLarge,
}

/// Initial parameters of a [`RingBuf`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingBufConfig {
    capacity: NonZeroUsize,
    #[cfg_attr(feature = "serde", serde(default))]
    begin: u64,
}

impl RingBufConfig {
    /// Constructs a configuration for a ring of `capacity` bytes whose stream
    /// starts at offset zero.
    #[must_use]
    pub const fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity, begin: 0 }
    }

    /// Sets the logical offset at which the stream starts.
    #[must_use]
    pub const fn with_begin(mut self, begin: u64) -> Self {
        self.begin = begin;
        self
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the configured starting offset.
    #[must_use]
    pub const fn begin(&self) -> u64 {
        self.begin
    }

    /// Allocates an empty ring with this configuration.
    #[must_use]
    pub fn build(&self) -> RingBuf {
        RingBuf::starting_at(self.capacity.get(), self.begin)
    }
}

impl FromStr for RingBufConfig {
    type Err = CapacityParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_capacity(text).map(Self::new)
    }
}

/// Parses a ring capacity such as `4096`, `64K`, `1.5M` or `2GiB`.
///
/// Leading and trailing ASCII whitespace is ignored, as is whitespace between
/// the number and its unit. Fractional sizes are floored to whole bytes.
pub fn parse_capacity(text: &str) -> Result<NonZeroUsize, CapacityParseError> {
    let trimmed = text.trim_matches(|ch: char| ch.is_ascii_whitespace());

    let numeric_end = trimmed
        .find(|ch: char| !(ch.is_ascii_digit() || ch == '.' || ch == ','))
        .unwrap_or(trimmed.len());
    let (numeric_part, remainder) = trimmed.split_at(numeric_end);

    let (integer, fraction, denominator) = parse_decimal(numeric_part)?;
    let scale = unit_scale(remainder.trim_start_matches(|ch: char| ch.is_ascii_whitespace()))?;

    let numerator = integer
        .checked_mul(denominator)
        .and_then(|value| value.checked_add(fraction))
        .ok_or(CapacityParseError::TooLarge)?;
    let bytes = numerator
        .checked_mul(scale)
        .ok_or(CapacityParseError::TooLarge)?
        / denominator;

    let bytes = usize::try_from(bytes).map_err(|_| CapacityParseError::TooLarge)?;
    NonZeroUsize::new(bytes).ok_or(CapacityParseError::Zero)
}

/// Splits `text` into integer part, fractional numerator and its denominator.
fn parse_decimal(text: &str) -> Result<(u128, u128, u128), CapacityParseError> {
    let bytes = text.as_bytes();
    let (integer_bytes, fraction_bytes) = memchr2(b'.', b',', bytes).map_or_else(
        || (bytes, &[][..]),
        |position| (&bytes[..position], &bytes[position + 1..]),
    );

    if integer_bytes.is_empty() && fraction_bytes.is_empty() {
        return Err(CapacityParseError::Invalid);
    }
    if memchr2(b'.', b',', fraction_bytes).is_some() {
        return Err(CapacityParseError::Invalid);
    }

    let integer = accumulate_digits(integer_bytes)?;
    let mut denominator = 1u128;
    for _ in fraction_bytes {
        denominator = denominator
            .checked_mul(10)
            .ok_or(CapacityParseError::TooLarge)?;
    }
    let fraction = accumulate_digits(fraction_bytes)?;

    Ok((integer, fraction, denominator))
}

fn accumulate_digits(digits: &[u8]) -> Result<u128, CapacityParseError> {
    digits.iter().try_fold(0u128, |value, &byte| {
        if !byte.is_ascii_digit() {
            return Err(CapacityParseError::Invalid);
        }
        value
            .checked_mul(10)
            .and_then(|value| value.checked_add(u128::from(byte - b'0')))
            .ok_or(CapacityParseError::TooLarge)
    })
}

fn unit_scale(unit: &str) -> Result<u128, CapacityParseError> {
    let mut chars = unit.chars();
    let Some(prefix) = chars.next() else {
        return Ok(1);
    };

    let exponent = match prefix.to_ascii_lowercase() {
        'b' => 0,
        'k' => 1,
        'm' => 2,
        'g' => 3,
        't' => 4,
        _ => return Err(CapacityParseError::Invalid),
    };

    let base: u128 = match chars.as_str() {
        "" => 1024,
        rest if exponent > 0 && rest.eq_ignore_ascii_case("ib") => 1024,
        rest if exponent > 0 && rest.eq_ignore_ascii_case("b") => 1000,
        _ => return Err(CapacityParseError::Invalid),
    };

    Ok(base.pow(exponent))
}
