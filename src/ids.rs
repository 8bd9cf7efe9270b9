//! Item Id Generation

#[cfg(test)]
use std::cell::Cell;

/// Source of globally unique item ids
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
/// Predictable ids ("item-1", "item-2", ...) for tests
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

#[cfg(test)]
impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("item-{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_distinct() {
        let ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "item-1");
        assert_eq!(ids.next_id(), "item-2");
    }
}
