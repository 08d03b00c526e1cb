use crate::ParseError;
use crate::consts::{
    CHECKSUM_MODULUS, HYPHEN_SEPARATOR, MAX_BIRTH_YEAR, MAX_CHECK_DIGIT, MAX_SEQUENCE,
    MIN_BIRTH_YEAR, MIN_SEQUENCE, PLUS_SEPARATOR,
};
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// A birth date whose year is in the range `MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR`
/// (0..=9999), so it always formats as the eight digits `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Creates a new `BirthDate`, validating that the year fits four digits
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the year is outside
    /// `MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR`.
    pub fn new(date: NaiveDate) -> Result<Self, ParseError> {
        let year = date.year();
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        Ok(Self(date))
    }

    /// Creates a `BirthDate` from calendar components
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the components are not a calendar
    /// date, or `ParseError::InvalidYear` if the year does not fit four digits.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ParseError::InvalidDate { year, month, day })
            .and_then(Self::new)
    }

    /// Returns the underlying calendar date
    #[inline]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Returns the year, always in `0..=9999`
    #[allow(clippy::cast_sign_loss)]
    pub fn year(self) -> u32 {
        self.0.year() as u32
    }

    /// Returns the month (1..=12)
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month
    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.0
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }
}

/// The two gender categories the sequence number encodes through its parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Even sequence numbers
    #[display(fmt = "female")]
    Female,
    /// Odd sequence numbers
    #[display(fmt = "male")]
    Male,
}

impl Gender {
    /// Returns the gender a sequence number of this value encodes
    pub const fn from_parity(value: u16) -> Self {
        if value % 2 == 0 { Self::Female } else { Self::Male }
    }

    /// Returns true if `value` has the parity required for this gender
    pub const fn accepts(self, value: u16) -> bool {
        matches!(
            (self, value % 2),
            (Self::Female, 0) | (Self::Male, 1)
        )
    }
}

/// A sequence ("birth") number guaranteed to be in the range
/// `MIN_SEQUENCE..=MAX_SEQUENCE` (1..=999).
/// Uses `NonZeroU16` internally, so 0 is not a valid sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct SequenceNumber(NonZeroU16);

impl SequenceNumber {
    /// Creates a new `SequenceNumber`, validating that it's non-zero and <= `MAX_SEQUENCE`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSequence` if the value is 0 or > `MAX_SEQUENCE`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidSequence(value))?;
        if value > MAX_SEQUENCE {
            return Err(ParseError::InvalidSequence(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds a sequence number as `MIN_SEQUENCE + offset`.
    /// Callers keep `offset` below `MAX_SEQUENCE`.
    pub(crate) const fn from_offset(offset: u16) -> Self {
        debug_assert!(offset < MAX_SEQUENCE);
        Self(NonZeroU16::MIN.saturating_add(offset))
    }

    /// Returns the sequence number as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the gender encoded by this sequence number's parity
    pub const fn gender(self) -> Gender {
        Gender::from_parity(self.get())
    }

    /// Returns the three zero-padded decimal digits, most significant first
    #[allow(clippy::cast_possible_truncation)]
    pub const fn digits(self) -> [u8; 3] {
        let value = self.get();
        [
            (value / 100 % 10) as u8,
            (value / 10 % 10) as u8,
            (value % 10) as u8,
        ]
    }
}

impl TryFrom<u16> for SequenceNumber {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SequenceNumber> for u16 {
    fn from(sequence: SequenceNumber) -> Self {
        sequence.0.get()
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.get())
    }
}

// MIN_SEQUENCE is what NonZeroU16::MIN encodes
const _: () = assert!(NonZeroU16::MIN.get() == MIN_SEQUENCE);

/// The century marker between the date and the sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Separator {
    /// Subject is younger than 100 years
    #[display(fmt = "-")]
    Hyphen,
    /// Subject is 100 years or older
    #[display(fmt = "+")]
    Plus,
}

impl Separator {
    /// Returns the separator as a char
    pub const fn as_char(self) -> char {
        match self {
            Self::Hyphen => HYPHEN_SEPARATOR,
            Self::Plus => PLUS_SEPARATOR,
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            HYPHEN_SEPARATOR => Ok(Self::Hyphen),
            PLUS_SEPARATOR => Ok(Self::Plus),
            other => Err(ParseError::InvalidSeparator(other)),
        }
    }
}

impl From<Separator> for char {
    fn from(separator: Separator) -> Self {
        separator.as_char()
    }
}

/// A check digit guaranteed to be in the range `0..=MAX_CHECK_DIGIT` (0..=9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CheckDigit(u8);

impl CheckDigit {
    /// Creates a new `CheckDigit`, validating that it's <= `MAX_CHECK_DIGIT`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidCheckDigit` if the value is > `MAX_CHECK_DIGIT`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_CHECK_DIGIT {
            return Err(ParseError::InvalidCheckDigit(value));
        }
        Ok(Self(value))
    }

    /// Wraps a checksum remainder, which is always below `CHECKSUM_MODULUS`
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_remainder(remainder: u16) -> Self {
        debug_assert!(remainder < CHECKSUM_MODULUS);
        Self((remainder % CHECKSUM_MODULUS) as u8)
    }

    /// Returns the check digit as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CheckDigit {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for CheckDigit {
    type Error = ParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or_else(|| ParseError::InvalidFormat(format!("check digit '{value}' is not a decimal digit")))
            .and_then(Self::new)
    }
}

impl From<CheckDigit> for u8 {
    fn from(check: CheckDigit) -> Self {
        check.0
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
