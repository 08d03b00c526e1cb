//! Swedish national identity numbers (personnummer).
//!
//! A personnummer has the form `YYYYMMDD±SSSC`: the full birth date, a
//! century marker that turns from `-` to `+` at age 100, a three-digit
//! sequence number whose parity encodes gender, and a Luhn-style check digit.
//!
//! ```
//! use chrono::NaiveDate;
//! use personnummer::{BirthDate, Gender, Personnummer, Separator};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let birth = BirthDate::from_ymd(2012, 1, 6).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//!
//! let pnr = Personnummer::generate(birth, Gender::Male, &mut rng, today);
//! assert_eq!(pnr.separator(), Separator::Hyphen);
//! assert_eq!(pnr.to_string().len(), 13);
//! assert_eq!(pnr.to_string().parse::<Personnummer>().unwrap(), pnr);
//! ```

mod cache;
mod checksum;
mod consts;
mod generator;
mod prelude;
mod separator;
mod sequence;
mod types;

pub use cache::PersonnummerCache;
pub use checksum::{check_digit, check_digit_for, date_digits};
pub use consts::*;
pub use generator::{Generator, ReferenceDate};
pub use types::{BirthDate, CheckDigit, Gender, Separator, SequenceNumber};

use crate::prelude::*;
use chrono::{Local, NaiveDate};
use rand::Rng;
use std::str::FromStr;

/// A generated or parsed personnummer.
///
/// Fields are kept typed; [`Display`](std::fmt::Display) is the only place
/// they are assembled into the 13-character form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}{}{}{}", "birth_date", "separator", "sequence", "check_digit")]
pub struct Personnummer {
    birth_date:  BirthDate,
    separator:   Separator,
    sequence:    SequenceNumber,
    check_digit: CheckDigit,
}

/// Error type for parsing and validating personnummer components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was empty or whitespace.
    #[error("Empty personnummer string")]
    EmptyInput,

    /// Input does not have `PERSONNUMMER_LEN` characters.
    #[error("Invalid personnummer length: {0} (expected {len})", len = PERSONNUMMER_LEN)]
    InvalidLength(usize),

    /// A field contains something other than decimal digits.
    #[error("Invalid personnummer format: {0}")]
    InvalidFormat(String),

    /// Birth year does not fit the four-digit `YYYY` field.
    #[error("Invalid birth year: {0} (must be {min}-{max})", min = MIN_BIRTH_YEAR, max = MAX_BIRTH_YEAR)]
    InvalidYear(i32),

    /// The date field is not a calendar date.
    #[error("Invalid birth date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The century marker is neither `-` nor `+`.
    #[error("Invalid separator '{0}' (expected '{hyphen}' or '{plus}')", hyphen = HYPHEN_SEPARATOR, plus = PLUS_SEPARATOR)]
    InvalidSeparator(char),

    /// Sequence number outside `MIN_SEQUENCE..=MAX_SEQUENCE`.
    #[error("Invalid sequence number: {0} (must be {min}-{max})", min = MIN_SEQUENCE, max = MAX_SEQUENCE)]
    InvalidSequence(u16),

    /// Check digit above `MAX_CHECK_DIGIT`.
    #[error("Invalid check digit: {0} (must be 0-{max})", max = MAX_CHECK_DIGIT)]
    InvalidCheckDigit(u8),

    /// Checksum input digit above 9.
    #[error("Invalid checksum input digit: {0}")]
    InvalidDigit(u8),

    /// The trailing digit does not match the computed checksum.
    #[error("Checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: CheckDigit, found: CheckDigit },
}

impl Personnummer {
    /// Assembles a personnummer from its parts, computing the check digit
    pub fn new(birth_date: BirthDate, separator: Separator, sequence: SequenceNumber) -> Self {
        Self {
            birth_date,
            separator,
            sequence,
            check_digit: check_digit_for(birth_date, sequence),
        }
    }

    /// Generates a personnummer for `birth_date` with a random sequence
    /// number matching `gender`. `today` decides the separator.
    pub fn generate<R: Rng + ?Sized>(
        birth_date: BirthDate,
        gender: Gender,
        rng: &mut R,
        today: NaiveDate,
    ) -> Self {
        let sequence = SequenceNumber::generate(gender, rng);
        let separator = Separator::for_birth_date(birth_date.date(), today);
        tracing::debug!(%birth_date, %gender, %separator, "generated personnummer");
        Self::new(birth_date, separator, sequence)
    }

    /// Returns the birth date
    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    /// Returns the century marker
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Returns the sequence number
    pub const fn sequence(&self) -> SequenceNumber {
        self.sequence
    }

    /// Returns the check digit
    pub const fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// Returns the gender encoded by the sequence number
    pub const fn gender(&self) -> Gender {
        self.sequence.gender()
    }

    /// Re-derives the check digit from the date and sequence number
    pub fn verify_checksum(&self) -> bool {
        check_digit_for(self.birth_date, self.sequence) == self.check_digit
    }

    /// Checks the century marker against the subject's age at `reference`
    pub fn is_separator_valid_at(&self, reference: NaiveDate) -> bool {
        Separator::for_birth_date(self.birth_date.date(), reference) == self.separator
    }

    /// Returns true if `s` parses as a well-formed personnummer
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }
}

/// Generates a personnummer string. See [`Personnummer::generate`].
pub fn personnummer<R: Rng + ?Sized>(
    birth_date: BirthDate,
    gender: Gender,
    rng: &mut R,
    today: NaiveDate,
) -> String {
    Personnummer::generate(birth_date, gender, rng, today).to_string()
}

/// Generates a personnummer string using the local date as "today".
pub fn personnummer_today<R: Rng + ?Sized>(
    birth_date: BirthDate,
    gender: Gender,
    rng: &mut R,
) -> String {
    personnummer(birth_date, gender, rng, today())
}

/// The local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl FromStr for Personnummer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if !trimmed.is_ascii() {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        if trimmed.len() != PERSONNUMMER_LEN {
            return Err(ParseError::InvalidLength(trimmed.len()));
        }

        // ASCII and exactly PERSONNUMMER_LEN bytes, so the splits land on char boundaries
        let (date_field, rest) = trimmed.split_at(DATE_FIELD_LEN);
        let mut rest_chars = rest.chars();
        let separator = rest_chars
            .next()
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))
            .and_then(Separator::try_from)?;
        let (sequence_field, check_field) = rest_chars.as_str().split_at(SEQUENCE_FIELD_LEN);

        let birth_date = Self::parse_birth_date(date_field)?;
        let sequence = Self::parse_sequence(sequence_field)?;
        let found = check_field
            .chars()
            .next()
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))
            .and_then(CheckDigit::try_from)?;

        let parsed = Self::new(birth_date, separator, sequence);
        if parsed.check_digit != found {
            tracing::debug!(expected = %parsed.check_digit, %found, "rejected personnummer checksum");
            return Err(ParseError::ChecksumMismatch {
                expected: parsed.check_digit,
                found,
            });
        }
        Ok(parsed)
    }
}

impl Personnummer {
    /// Parses an all-digit field
    fn parse_digits(field: &str) -> Result<u32, ParseError> {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(field.to_owned()));
        }
        Ok(field.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
    }

    /// Parses `YYYYMMDD` into a birth date
    fn parse_birth_date(field: &str) -> Result<BirthDate, ParseError> {
        let (year_field, month_day) = field.split_at(4);
        let (month_field, day_field) = month_day.split_at(2);

        let year = i32::try_from(Self::parse_digits(year_field)?)
            .map_err(|_| ParseError::InvalidFormat(year_field.to_owned()))?;
        let month = Self::parse_digits(month_field)?;
        let day = Self::parse_digits(day_field)?;

        BirthDate::from_ymd(year, month, day)
    }

    /// Parses the zero-padded `SSS` field
    fn parse_sequence(field: &str) -> Result<SequenceNumber, ParseError> {
        let value = u16::try_from(Self::parse_digits(field)?)
            .map_err(|_| ParseError::InvalidFormat(field.to_owned()))?;
        SequenceNumber::new(value)
    }
}

impl serde::Serialize for Personnummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Personnummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
