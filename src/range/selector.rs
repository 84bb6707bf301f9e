//! Range selector: range tag -> ordered, non-empty key subset

use super::RangeTag;
use crate::error::{QuizError, Result};
use crate::facts::{FactTable, Symbol};

/// Fixed mapping from each range tag to the keys eligible for sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSelector<K: Symbol> {
    /// Indexed by `RangeTag::index`
    ranges: [Vec<K>; 4],
}

impl<K: Symbol> RangeSelector<K> {
    /// Build from the three bounded subsets; `ALL` takes every key of `table`
    pub fn from_table<V: Symbol>(
        table: &FactTable<K, V>,
        zero_to_180: &[K],
        zero_to_360: &[K],
        neg180_to_180: &[K],
    ) -> Result<Self> {
        let selector = Self {
            ranges: [
                zero_to_180.to_vec(),
                zero_to_360.to_vec(),
                neg180_to_180.to_vec(),
                table.keys().to_vec(),
            ],
        };
        for tag in RangeTag::ALL {
            selector.validate(table, tag)?;
        }
        Ok(selector)
    }

    /// Replace one tag's subset with keys given by id
    pub fn with_override<V: Symbol, S: AsRef<str>>(
        mut self,
        table: &FactTable<K, V>,
        tag: RangeTag,
        ids: &[S],
    ) -> Result<Self> {
        let mut keys = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            let key = table.key_from_id(id).ok_or_else(|| {
                QuizError::InvalidConfig(format!(
                    "range {} lists {:?}, which is not a {} key",
                    tag,
                    id,
                    table.name()
                ))
            })?;
            keys.push(key);
        }
        self.ranges[tag.index()] = keys;
        self.validate(table, tag)?;
        log::debug!(
            "{} range {} overridden with {} keys",
            table.name(),
            tag,
            self.ranges[tag.index()].len()
        );
        Ok(self)
    }

    fn validate<V: Symbol>(&self, table: &FactTable<K, V>, tag: RangeTag) -> Result<()> {
        let keys = &self.ranges[tag.index()];
        if keys.is_empty() {
            return Err(QuizError::InvalidConfig(format!(
                "{} range {} has no keys",
                table.name(),
                tag
            )));
        }
        if let Some(missing) = keys.iter().find(|key| !table.contains(**key)) {
            return Err(QuizError::InvalidConfig(format!(
                "{} range {} contains unknown key {}",
                table.name(),
                tag,
                missing.id()
            )));
        }
        Ok(())
    }

    /// Keys eligible under `tag`, in declaration order
    #[inline]
    pub fn keys_for(&self, tag: RangeTag) -> &[K] {
        &self.ranges[tag.index()]
    }

    /// Like `keys_for`, parsing the tag first
    pub fn keys_for_tag(&self, tag: &str) -> Result<&[K]> {
        let tag: RangeTag = tag.parse()?;
        Ok(self.keys_for(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{Offset, TRANSFORMATION_TABLE};

    fn selector() -> RangeSelector<Offset> {
        RangeSelector::from_table(
            &TRANSFORMATION_TABLE,
            &[Offset::Minus90],
            &[Offset::Minus90, Offset::Plus90],
            &[Offset::Negate],
        )
        .unwrap()
    }

    #[test]
    fn test_all_takes_every_key() {
        let selector = selector();
        assert_eq!(selector.keys_for(RangeTag::All), TRANSFORMATION_TABLE.keys());
    }

    #[test]
    fn test_keys_for_tag_string() {
        let selector = selector();
        assert_eq!(
            selector.keys_for_tag("0~360").unwrap(),
            &[Offset::Minus90, Offset::Plus90]
        );
        assert_eq!(
            selector.keys_for_tag("0~720").unwrap_err(),
            QuizError::InvalidRange("0~720".to_string())
        );
    }

    #[test]
    fn test_empty_subset_rejected() {
        let result = RangeSelector::from_table(
            &TRANSFORMATION_TABLE,
            &[],
            &[Offset::Negate],
            &[Offset::Negate],
        );
        assert!(matches!(result, Err(QuizError::InvalidConfig(_))));
    }

    #[test]
    fn test_override() {
        let selector = selector()
            .with_override(&TRANSFORMATION_TABLE, RangeTag::ZeroTo180, &["p180_t", "m180_t"])
            .unwrap();
        assert_eq!(
            selector.keys_for(RangeTag::ZeroTo180),
            &[Offset::Plus180, Offset::Minus180]
        );

        let err = selector
            .clone()
            .with_override(&TRANSFORMATION_TABLE, RangeTag::All, &["p45_t"])
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidConfig(_)));

        let empty: [&str; 0] = [];
        assert!(selector
            .with_override(&TRANSFORMATION_TABLE, RangeTag::All, &empty)
            .is_err());
    }
}
