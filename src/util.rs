use std::cmp::Ordering;

/// Which child slot an ordered descent picks for a key.
pub(crate) enum Side {
    /// Keys strictly less than the node's key descend left.
    Left,
    /// Equal and greater keys descend right, keeping duplicates right-biased.
    Right,
}

impl Side {
    /// Picks the slot for `key` relative to `pivot`.
    pub(crate) fn of<K: Ord>(key: &K, pivot: &K) -> Self {
        match key.cmp(pivot) {
            Ordering::Less => Side::Left,
            Ordering::Equal | Ordering::Greater => Side::Right,
        }
    }
}
