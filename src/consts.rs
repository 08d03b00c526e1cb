/// Total length of a formatted personnummer: `YYYYMMDD` + separator + `SSS` + check digit
pub const PERSONNUMMER_LEN: usize = 13;

/// Width of the full birth date field (`YYYYMMDD`)
pub const DATE_FIELD_LEN: usize = 8;

/// Width of the zero-padded sequence number field
pub const SEQUENCE_FIELD_LEN: usize = 3;

/// Earliest birth year that fits the four-digit `YYYY` field
pub const MIN_BIRTH_YEAR: i32 = 0;

/// Latest birth year that fits the four-digit `YYYY` field
pub const MAX_BIRTH_YEAR: i32 = 9999;

/// Smallest sequence number ("birth number")
pub const MIN_SEQUENCE: u16 = 1;

/// Largest sequence number ("birth number")
pub const MAX_SEQUENCE: u16 = 999;

/// Largest value a check digit can take
pub const MAX_CHECK_DIGIT: u8 = 9;

/// Age in years at which the separator switches from `-` to `+`
pub const CENTENARIAN_YEARS: u32 = 100;

/// Months in a year, used to shift reference dates by whole years
pub(crate) const MONTHS_PER_YEAR: u32 = 12;

/// Separator used while the subject is younger than `CENTENARIAN_YEARS`
pub const HYPHEN_SEPARATOR: char = '-';

/// Separator used once the subject has reached `CENTENARIAN_YEARS`
pub const PLUS_SEPARATOR: char = '+';

/// Number of date digits (`YYMMDD`) fed to the checksum
pub const CHECKSUM_DATE_DIGITS: usize = 6;

/// Number of sequence digits fed to the checksum
pub const CHECKSUM_SEQUENCE_DIGITS: usize = 3;

/// Alternating Luhn weights, starting at 2 for the first digit
pub const CHECKSUM_WEIGHTS: [u8; CHECKSUM_DATE_DIGITS + CHECKSUM_SEQUENCE_DIGITS] =
    [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Checksum totals are rounded up to the next multiple of this
pub(crate) const CHECKSUM_MODULUS: u16 = 10;

/// Two-digit year window for the `YY` part of the checksum input
pub(crate) const CENTURY: u32 = 100;
