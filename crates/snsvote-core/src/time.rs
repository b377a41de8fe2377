//!
//! Wall-clock helpers for callers. The engines never read the clock; they
//! take `now` explicitly so identical inputs give identical answers.
//!

use std::time::SystemTime;

fn time_nanos() -> u128 {
    match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
        Ok(d) => d.as_nanos(),
        Err(_) => 0,
    }
}

/// Returns the current UNIX epoch time in seconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_secs() -> u64 {
    (time_nanos() / 1_000_000_000) as u64
}

///
/// TESTS
///
