//! Session flags
//!
//! "First test in session" is process-wide and flips once, after the first
//! test's tear-down. The per-fixture counterpart lives on the harness.

use std::sync::atomic::{AtomicBool, Ordering};

static FIRST_IN_SESSION: AtomicBool = AtomicBool::new(true);

/// Whether no test has completed tear-down in this process yet
pub fn is_first_test_in_session() -> bool {
    FIRST_IN_SESSION.load(Ordering::Acquire)
}

pub(crate) fn complete_test() {
    FIRST_IN_SESSION.store(false, Ordering::Release);
}
