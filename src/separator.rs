use chrono::{Months, NaiveDate};

use crate::Separator;
use crate::consts::{CENTENARIAN_YEARS, MONTHS_PER_YEAR};

impl Separator {
    /// Returns [`Separator::Plus`] if `reference` is at least 100 years after
    /// `birth_date` (exactly 100 years counts), otherwise [`Separator::Hyphen`].
    ///
    /// Subtracting whole years from 29 February lands on 28 February.
    pub fn for_birth_date(birth_date: NaiveDate, reference: NaiveDate) -> Self {
        let centenary = reference.checked_sub_months(Months::new(CENTENARIAN_YEARS * MONTHS_PER_YEAR));
        match centenary {
            Some(threshold) if birth_date <= threshold => Self::Plus,
            _ => Self::Hyphen,
        }
    }

    /// Same as [`Separator::for_birth_date`] with the local date as reference.
    pub fn today(birth_date: NaiveDate) -> Self {
        Self::for_birth_date(birth_date, crate::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_separator_cases() {
        struct TestCase {
            birth:       NaiveDate,
            reference:   NaiveDate,
            expected:    Separator,
            description: &'static str,
        }

        let cases = [
            TestCase {
                birth:       date(1924, 5, 10),
                reference:   date(2024, 5, 10),
                expected:    Separator::Plus,
                description: "exactly 100 years",
            },
            TestCase {
                birth:       date(1924, 5, 9),
                reference:   date(2024, 5, 10),
                expected:    Separator::Plus,
                description: "100 years and one day",
            },
            TestCase {
                birth:       date(1924, 5, 11),
                reference:   date(2024, 5, 10),
                expected:    Separator::Hyphen,
                description: "one day short of 100 years",
            },
            TestCase {
                birth:       date(2012, 1, 6),
                reference:   date(2024, 5, 10),
                expected:    Separator::Hyphen,
                description: "child",
            },
            TestCase {
                birth:       date(1850, 1, 1),
                reference:   date(2024, 5, 10),
                expected:    Separator::Plus,
                description: "far past",
            },
            TestCase {
                birth:       date(1924, 2, 28),
                reference:   date(2024, 2, 29),
                expected:    Separator::Plus,
                description: "leap reference day",
            },
            TestCase {
                birth:       date(1924, 2, 29),
                reference:   date(2024, 2, 28),
                expected:    Separator::Hyphen,
                description: "leap birth day, reference a day early",
            },
            TestCase {
                birth:       date(1920, 2, 29),
                reference:   date(2021, 2, 28),
                expected:    Separator::Plus,
                description: "leap birth day, non-leap reference year",
            },
        ];

        for case in &cases {
            assert_eq!(
                Separator::for_birth_date(case.birth, case.reference),
                case.expected,
                "{} -> {} ({})",
                case.birth,
                case.reference,
                case.description
            );
        }
    }

    #[test]
    fn test_separator_centenarian_minus_one_day_from_today() {
        let reference = crate::today();
        let birth = reference
            .checked_sub_months(Months::new(1200))
            .and_then(|d| d.pred_opt())
            .unwrap();
        assert_eq!(Separator::for_birth_date(birth, reference), Separator::Plus);
    }

    #[test]
    fn test_separator_today_for_recent_birth() {
        assert_eq!(Separator::today(date(2012, 1, 6)), Separator::Hyphen);
    }
}
