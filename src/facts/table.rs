//! Generic fact table keyed by (function, key)

use super::{Symbol, TrigFunction};
use crate::error::{QuizError, Result};
use ahash::AHashMap;

/// One table row: the key followed by its sin, cos and tan answers
pub type FactRow<K, V> = (K, V, V, V);

/// Immutable lookup from (function, key) to the exact answer
#[derive(Debug)]
pub struct FactTable<K: Symbol, V: Symbol> {
    name: &'static str,
    /// Keys in declaration order
    keys: Vec<K>,
    entries: AHashMap<(TrigFunction, K), V>,
}

impl<K: Symbol, V: Symbol> FactTable<K, V> {
    /// Build a table from rows of `(key, sin, cos, tan)`
    pub fn from_rows(name: &'static str, rows: &[FactRow<K, V>]) -> Self {
        let mut keys = Vec::with_capacity(rows.len());
        let mut entries = AHashMap::with_capacity(rows.len() * TrigFunction::ALL.len());

        for &(key, sin, cos, tan) in rows {
            keys.push(key);
            entries.insert((TrigFunction::Sin, key), sin);
            entries.insert((TrigFunction::Cos, key), cos);
            entries.insert((TrigFunction::Tan, key), tan);
        }

        Self { name, keys, entries }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the correct answer for `function` at `key`
    #[inline]
    pub fn lookup(&self, function: TrigFunction, key: K) -> Result<V> {
        self.entries.get(&(function, key)).copied().ok_or_else(|| {
            log::error!(
                "{} table has no entry for {}({})",
                self.name,
                function,
                key.id()
            );
            QuizError::KeyNotFound {
                function: function.name().to_string(),
                key: key.id().into_owned(),
            }
        })
    }

    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.entries.contains_key(&(TrigFunction::Sin, key))
    }

    /// Keys in declaration order
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Number of (function, key) pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate every (function, key, answer) triple, keys in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (TrigFunction, K, V)> + '_ {
        self.keys.iter().flat_map(move |&key| {
            TrigFunction::ALL.into_iter().filter_map(move |function| {
                self.entries
                    .get(&(function, key))
                    .map(|&value| (function, key, value))
            })
        })
    }

    /// Resolve a key from its wire id, requiring it to be in this table
    pub fn key_from_id(&self, id: &str) -> Option<K> {
        K::parse_id(id).filter(|key| self.contains(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{Cofunction, Offset, TRANSFORMATION_TABLE};

    #[test]
    fn test_lookup_hit() {
        let value = TRANSFORMATION_TABLE
            .lookup(TrigFunction::Sin, Offset::Minus90)
            .unwrap();
        assert_eq!(value, Cofunction::Cos);
    }

    #[test]
    fn test_iter_covers_every_pair() {
        let pairs: Vec<_> = TRANSFORMATION_TABLE.iter().collect();
        assert_eq!(pairs.len(), TRANSFORMATION_TABLE.len());
        assert_eq!(pairs.len(), 45);
        assert_eq!(pairs[0].0, TrigFunction::Sin);
        assert_eq!(pairs[0].1, TRANSFORMATION_TABLE.keys()[0]);
    }

    #[test]
    fn test_key_from_id() {
        assert_eq!(
            TRANSFORMATION_TABLE.key_from_id("p270_t"),
            Some(Offset::Plus270)
        );
        assert_eq!(TRANSFORMATION_TABLE.key_from_id("p45_t"), None);
    }
}
