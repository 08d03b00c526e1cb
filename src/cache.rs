//! Per-entity memoization of generated numbers.
//!
//! A synthetic person should keep the same personnummer no matter how many
//! times it is asked for. The cache is owned by the caller and keyed by
//! whatever identifies the entity; the generation functions stay pure.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::Personnummer;

/// Previously generated numbers, keyed by entity identity.
#[derive(Debug, Clone)]
pub struct PersonnummerCache<K> {
    entries: HashMap<K, Personnummer>,
}

impl<K> Default for PersonnummerCache<K> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<K: Eq + Hash> PersonnummerCache<K> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number stored for `key`, if any
    pub fn get(&self, key: &K) -> Option<&Personnummer> {
        self.entries.get(key)
    }

    /// Returns the number stored for `key`, calling `generate` only the
    /// first time the key is seen.
    pub fn get_or_generate<F>(&mut self, key: K, generate: F) -> &Personnummer
    where
        F: FnOnce() -> Personnummer,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                tracing::debug!("personnummer cache hit");
                entry.into_mut()
            },
            Entry::Vacant(entry) => {
                tracing::debug!("personnummer cache miss, generating");
                entry.insert(generate())
            },
        }
    }

    /// Stores `value` for `key`, returning the value it replaced
    pub fn insert(&mut self, key: K, value: Personnummer) -> Option<Personnummer> {
        self.entries.insert(key, value)
    }

    /// Forgets the number stored for `key`
    pub fn remove(&mut self, key: &K) -> Option<Personnummer> {
        self.entries.remove(key)
    }

    /// Number of cached entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gender;
    use crate::test_utils::{birth, date, seeded_rng};
    use std::cell::Cell;

    #[test]
    fn test_repeat_calls_return_same_value() {
        let mut cache = PersonnummerCache::new();
        let mut rng = seeded_rng(11);
        let today = date(2024, 5, 10);

        let first = *cache.get_or_generate("person-1", || {
            Personnummer::generate(birth(1963, 8, 4), Gender::Female, &mut rng, today)
        });
        let second = *cache.get_or_generate("person-1", || {
            Personnummer::generate(birth(1963, 8, 4), Gender::Female, &mut rng, today)
        });

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_generate_called_once_per_key() {
        let calls = Cell::new(0);
        let mut cache = PersonnummerCache::new();
        let mut rng = seeded_rng(12);
        let today = date(2024, 5, 10);

        for _ in 0..5 {
            cache.get_or_generate(7_u64, || {
                calls.set(calls.get() + 1);
                Personnummer::generate(birth(1990, 1, 1), Gender::Male, &mut rng, today)
            });
        }

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_distinct_keys_are_independent() {
        let mut cache = PersonnummerCache::new();
        let mut rng = seeded_rng(13);
        let today = date(2024, 5, 10);

        let a = *cache.get_or_generate(1, || {
            Personnummer::generate(birth(1990, 1, 1), Gender::Male, &mut rng, today)
        });
        let b = *cache.get_or_generate(2, || {
            Personnummer::generate(birth(1985, 6, 15), Gender::Female, &mut rng, today)
        });

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), Some(&a));
        assert_eq!(cache.get(&2), Some(&b));
        assert_ne!(a.birth_date(), b.birth_date());
    }

    #[test]
    fn test_insert_remove_clear() {
        let mut cache = PersonnummerCache::new();
        let fixture: Personnummer = "19630804-5621".parse().unwrap();

        assert!(cache.is_empty());
        assert_eq!(cache.insert("a", fixture), None);
        assert_eq!(cache.insert("a", fixture), Some(fixture));
        assert_eq!(cache.remove(&"a"), Some(fixture));
        assert!(cache.get(&"a").is_none());

        cache.insert("b", fixture);
        cache.clear();
        assert!(cache.is_empty());
    }
}
