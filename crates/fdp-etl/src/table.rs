//! Table algebra primitives
//!
//! The three operations every builder is made of: stable group-collect,
//! first-occurrence dedup, and left join. Implemented as explicit typed
//! operations over in-memory row slices; the domain needs only these
//! shapes, not a general dataframe abstraction.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// One group produced by [`group_collect`]: a key and the projected items
/// in source row order.
///
/// A slice of groups is itself joinable as the right side of
/// [`left_join`].
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, V> {
    pub key: K,
    pub items: Vec<V>,
}

/// Group rows by key, projecting each row into a sub-record.
///
/// Groups appear in first-seen key order and items within a group preserve
/// the source row order (stable grouping). Empty input yields no groups.
pub fn group_collect<R, K, V>(
    rows: &[R],
    key: impl Fn(&R) -> K,
    project: impl Fn(&R) -> V,
) -> Vec<Group<K, V>>
where
    K: Hash + Eq + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, V>> = Vec::new();

    for row in rows {
        let k = key(row);
        let v = project(row);
        match index.get(&k) {
            Some(&at) => groups[at].items.push(v),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push(Group {
                    key: k,
                    items: vec![v],
                });
            },
        }
    }

    groups
}

/// Remove rows with duplicate keys, keeping the first occurrence and the
/// original order.
pub fn distinct_by<R, K>(rows: &[R], key: impl Fn(&R) -> K) -> Vec<R>
where
    R: Clone,
    K: Hash + Eq,
{
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(key(row)))
        .cloned()
        .collect()
}

/// Left join: every left row is preserved in order, paired with the first
/// right row sharing its key, if any.
///
/// The right side is indexed up front with first occurrence winning, so a
/// duplicated right key never fans out the left side.
pub fn left_join<'l, 'r, L, R, K>(
    left: &'l [L],
    right: &'r [R],
    left_key: impl Fn(&L) -> K,
    right_key: impl Fn(&R) -> K,
) -> Vec<(&'l L, Option<&'r R>)>
where
    K: Hash + Eq,
{
    let mut index: HashMap<K, &R> = HashMap::with_capacity(right.len());
    for row in right {
        index.entry(right_key(row)).or_insert(row);
    }

    left.iter()
        .map(|row| (row, index.get(&left_key(row)).copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_collect_is_stable() {
        let rows = [(1, "a"), (2, "x"), (1, "b"), (1, "c"), (2, "y")];
        let groups = group_collect(&rows, |r| r.0, |r| r.1);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, 1);
        assert_eq!(groups[0].items, vec!["a", "b", "c"]);
        assert_eq!(groups[1].key, 2);
        assert_eq!(groups[1].items, vec!["x", "y"]);
    }

    #[test]
    fn test_group_collect_empty_input() {
        let rows: [(i64, &str); 0] = [];
        assert!(group_collect(&rows, |r| r.0, |r| r.1).is_empty());
    }

    #[test]
    fn test_distinct_by_keeps_first_occurrence() {
        let rows = ["a", "b", "a", "c", "b"];
        assert_eq!(distinct_by(&rows, |r| *r), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_left_join_preserves_all_left_rows() {
        let left = [1, 2, 3];
        let right = [(1, "one"), (3, "three")];
        let joined = left_join(&left, &right, |l| *l, |r| r.0);

        assert_eq!(joined.len(), 3);
        assert_eq!(joined[0].1, Some(&(1, "one")));
        assert_eq!(joined[1].1, None);
        assert_eq!(joined[2].1, Some(&(3, "three")));
    }

    #[test]
    fn test_left_join_does_not_fan_out_on_duplicate_right_keys() {
        let left = [1];
        let right = [(1, "first"), (1, "second")];
        let joined = left_join(&left, &right, |l| *l, |r| r.0);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].1, Some(&(1, "first")));
    }

    #[test]
    fn test_left_join_empty_right_side() {
        let left = [1, 2];
        let right: [(i64, &str); 0] = [];
        let joined = left_join(&left, &right, |l| *l, |r| r.0);
        assert!(joined.iter().all(|(_, r)| r.is_none()));
    }
}
