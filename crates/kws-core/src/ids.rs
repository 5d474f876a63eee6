//! Timestamp-based record identifiers.
//!
//! Ids are the current Unix time in milliseconds. Two records created in the
//! same millisecond would collide, so the generator remembers the last id it
//! handed out and never returns a value at or below it.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Prefix of submission ids (`sub_1718000000000`).
pub const SUBMISSION_ID_PREFIX: &str = "sub_";

/// Hands out strictly increasing millisecond-timestamp ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next numeric id: now in milliseconds, bumped past the previous id if
    /// the clock has not advanced.
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    /// Next submission id: `sub_<millis>`.
    pub fn next_submission_id(&self) -> String {
        format!("{SUBMISSION_ID_PREFIX}{}", self.next_id())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn ids_are_strictly_increasing_within_one_millisecond() {
        let ids = IdGenerator::new();
        let batch: Vec<i64> = (0..1000).map(|_| ids.next_id()).collect();
        assert!(batch.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ids_track_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let id = IdGenerator::new().next_id();
        assert!(id >= before);
    }

    #[test]
    fn submission_ids_carry_prefix() {
        let id = IdGenerator::new().next_submission_id();
        assert!(id.starts_with("sub_"));
        assert!(id["sub_".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn concurrent_callers_never_share_an_id() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap_or_default() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
