//! Identifier generator collaborator.
//!
//! # Responsibility
//! - Supply a globally unique `TaskId` for every created task.

use crate::model::task::TaskId;
use std::cell::Cell;
use uuid::Uuid;

/// Source of fresh task identifiers.
pub trait IdGenerator {
    /// Returns a new unique identifier.
    fn next_id(&self) -> TaskId;
}

/// Production generator backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> TaskId {
        Uuid::new_v4()
    }
}

/// Deterministic generator for tests: yields fixed-prefix UUIDs with an
/// incrementing low word.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> TaskId {
        let n = self.next.get();
        self.next.set(n + 1);
        Uuid::from_u64_pair(0x4000_8000_0000_0000, n)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, SequentialIds, UuidGenerator};

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn sequential_ids_are_stable_and_distinct() {
        let ids = SequentialIds::new();
        let first = ids.next_id();
        let second = ids.next_id();

        assert_ne!(first, second);
        assert_eq!(SequentialIds::new().next_id(), first);
    }
}
