//! Luhn-style check digit over the `YYMMDD` date digits and the three
//! sequence digits.

use crate::consts::{
    CENTURY, CHECKSUM_DATE_DIGITS, CHECKSUM_MODULUS, CHECKSUM_SEQUENCE_DIGITS, CHECKSUM_WEIGHTS,
    MAX_CHECK_DIGIT,
};
use crate::{BirthDate, CheckDigit, ParseError, SequenceNumber};

/// Computes the check digit for six date digits (`YYMMDD`) followed by
/// three sequence digits.
///
/// Each digit is multiplied by its weight from `CHECKSUM_WEIGHTS`; products
/// above 9 are replaced by the sum of their two digits. The check digit is
/// whatever brings the total up to the next multiple of 10.
///
/// # Errors
/// Returns `ParseError::InvalidDigit` if any input is not a decimal digit.
pub fn check_digit(
    date_digits: &[u8; CHECKSUM_DATE_DIGITS],
    sequence_digits: &[u8; CHECKSUM_SEQUENCE_DIGITS],
) -> Result<CheckDigit, ParseError> {
    if let Some(&bad) = date_digits
        .iter()
        .chain(sequence_digits)
        .find(|&&d| d > MAX_CHECK_DIGIT)
    {
        return Err(ParseError::InvalidDigit(bad));
    }
    Ok(weighted_check_digit(date_digits, sequence_digits))
}

/// Check digit for a birth date and sequence number. Infallible since both
/// inputs only ever yield decimal digits.
pub fn check_digit_for(birth_date: BirthDate, sequence: SequenceNumber) -> CheckDigit {
    weighted_check_digit(&date_digits(birth_date), &sequence.digits())
}

/// Extracts the `YYMMDD` digits of a birth date.
/// Only the last two digits of the year take part in the checksum.
pub fn date_digits(birth_date: BirthDate) -> [u8; CHECKSUM_DATE_DIGITS] {
    let [y1, y2] = two_digits(birth_date.year() % CENTURY);
    let [m1, m2] = two_digits(birth_date.month());
    let [d1, d2] = two_digits(birth_date.day());
    [y1, y2, m1, m2, d1, d2]
}

#[allow(clippy::cast_possible_truncation)]
const fn two_digits(value: u32) -> [u8; 2] {
    [(value / 10 % 10) as u8, (value % 10) as u8]
}

/// Replaces a two-digit product with the sum of its digits (14 => 1 + 4)
const fn digit_sum(product: u16) -> u16 {
    if product > 9 { product / 10 + product % 10 } else { product }
}

fn weighted_check_digit(
    date_digits: &[u8; CHECKSUM_DATE_DIGITS],
    sequence_digits: &[u8; CHECKSUM_SEQUENCE_DIGITS],
) -> CheckDigit {
    let total: u16 = date_digits
        .iter()
        .chain(sequence_digits)
        .zip(CHECKSUM_WEIGHTS)
        .map(|(&digit, weight)| digit_sum(u16::from(digit) * u16::from(weight)))
        .sum();

    let check = total.div_ceil(CHECKSUM_MODULUS) * CHECKSUM_MODULUS - total;
    tracing::trace!(?date_digits, ?sequence_digits, total, check, "computed check digit");

    CheckDigit::from_remainder(check)
}
