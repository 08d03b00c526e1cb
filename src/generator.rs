use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{BirthDate, Gender, Personnummer};

/// Which date counts as "today" when choosing the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceDate {
    /// The local date at generation time
    #[default]
    Today,
    /// A pinned date, for reproducible output
    Fixed(NaiveDate),
}

impl ReferenceDate {
    /// Resolves the policy to a concrete date
    pub fn resolve(self) -> NaiveDate {
        match self {
            Self::Today => crate::today(),
            Self::Fixed(date) => date,
        }
    }
}

/// Generation settings, deserializable from a host's configuration.
///
/// ```
/// use personnummer::{Generator, ReferenceDate};
///
/// let generator: Generator = serde_json::from_str(r#"{"reference_date":{"fixed":"2024-05-10"}}"#).unwrap();
/// assert!(matches!(generator.reference_date(), ReferenceDate::Fixed(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Generator {
    reference_date: ReferenceDate,
}

impl Generator {
    /// Creates a generator with the given reference date policy
    pub const fn new(reference_date: ReferenceDate) -> Self {
        Self { reference_date }
    }

    /// Creates a generator pinned to `date`
    pub const fn fixed(date: NaiveDate) -> Self {
        Self::new(ReferenceDate::Fixed(date))
    }

    /// Returns the reference date policy
    pub const fn reference_date(&self) -> ReferenceDate {
        self.reference_date
    }

    /// Generates a personnummer, resolving "today" from the configured policy
    pub fn generate<R: Rng + ?Sized>(
        &self,
        birth_date: BirthDate,
        gender: Gender,
        rng: &mut R,
    ) -> Personnummer {
        Personnummer::generate(birth_date, gender, rng, self.reference_date.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Separator;
    use crate::test_utils::{birth, date, seeded_rng};

    #[test]
    fn test_default_is_today() {
        assert_eq!(Generator::default().reference_date(), ReferenceDate::Today);
        assert_eq!(ReferenceDate::Today.resolve(), crate::today());
    }

    #[test]
    fn test_fixed_reference_drives_separator() {
        let generator = Generator::fixed(date(2024, 5, 10));
        let mut rng = seeded_rng(5);

        let centenarian = generator.generate(birth(1924, 5, 10), Gender::Male, &mut rng);
        assert_eq!(centenarian.separator(), Separator::Plus);

        let younger = generator.generate(birth(1924, 5, 11), Gender::Male, &mut rng);
        assert_eq!(younger.separator(), Separator::Hyphen);
    }

    #[test]
    fn test_serde_fixed() {
        let generator = Generator::fixed(date(2024, 5, 10));
        let json = serde_json::to_string(&generator).unwrap();
        assert_eq!(json, r#"{"reference_date":{"fixed":"2024-05-10"}}"#);

        let parsed: Generator = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, generator);
    }

    #[test]
    fn test_serde_today_and_defaults() {
        let parsed: Generator = serde_json::from_str(r#"{"reference_date":"today"}"#).unwrap();
        assert_eq!(parsed.reference_date(), ReferenceDate::Today);

        let parsed: Generator = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Generator::default());
    }

    #[test]
    fn test_serde_rejects_bad_date() {
        let result: Result<Generator, _> =
            serde_json::from_str(r#"{"reference_date":{"fixed":"2023-02-29"}}"#);
        assert!(result.is_err());
    }
}
