//! Legacy kind table
//!
//! Maps the numeric ids older data uses for built-in component kinds to
//! their type names. Seeded once per process from the first discovery
//! result and never cleared.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

static TABLE: RwLock<BTreeMap<i32, String>> = RwLock::new(BTreeMap::new());

/// Seed the table unless it already holds entries
///
/// Returns whether this call seeded it.
pub fn seed_if_empty<'a>(entries: impl IntoIterator<Item = (i32, &'a str)>) -> bool {
    let mut table = TABLE.write().unwrap_or_else(PoisonError::into_inner);
    if !table.is_empty() {
        return false;
    }
    table.extend(entries.into_iter().map(|(id, name)| (id, name.to_string())));
    !table.is_empty()
}

/// Type name registered for `id`
pub fn lookup(id: i32) -> Option<String> {
    TABLE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .cloned()
}

/// Number of entries
pub fn len() -> usize {
    TABLE.read().unwrap_or_else(PoisonError::into_inner).len()
}

/// Whether the table has been seeded
pub fn is_seeded() -> bool {
    len() > 0
}
