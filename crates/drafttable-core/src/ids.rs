//! Element identifier sources.

use crate::shapes::ElementId;
use uuid::Uuid;

/// Produces fresh element identifiers. Every id handed out is distinct.
pub trait IdSource {
    fn next_id(&mut self) -> ElementId;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> ElementId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-<n>` identifiers, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ElementId {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
