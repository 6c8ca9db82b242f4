use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Series;

/// Identity a series is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackKey {
    /// Named stack shared by every series carrying the id.
    Stack(String),
    /// Unstacked series, keyed by its input position.
    Single(usize),
}

/// Series drawn on top of one another at each category index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackGroup {
    pub key: StackKey,
    /// Input indices of the members, in input order.
    pub series: Vec<usize>,
}

impl StackGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        matches!(self.key, StackKey::Stack(_))
    }
}

/// Groups series by stack id in a single left-to-right pass.
///
/// Group order is first-seen order; members keep their input order. Series
/// without a stack id form singleton groups at their own position.
#[must_use]
pub fn group_by_stack(series: &[Series]) -> Vec<StackGroup> {
    let mut groups: IndexMap<StackKey, Vec<usize>> = IndexMap::with_capacity(series.len());
    for (index, item) in series.iter().enumerate() {
        let key = match item.stack_id() {
            Some(id) => StackKey::Stack(id.to_owned()),
            None => StackKey::Single(index),
        };
        groups.entry(key).or_default().push(index);
    }

    groups
        .into_iter()
        .map(|(key, series)| StackGroup { key, series })
        .collect()
}
