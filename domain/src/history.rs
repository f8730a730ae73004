use crate::classification::ClassificationResult;

/// Append-only record of every successful classification this session.
///
/// The store exclusively owns the sequence; readers get a shared slice, so
/// no consumer can reorder or mutate past entries. Created empty at session
/// start and dropped with the process.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<ClassificationResult>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one result at the end. Never fails, O(1) amortized.
    pub fn append(&mut self, result: ClassificationResult) {
        self.entries.push(result);
    }

    /// Full ordered sequence, oldest first, for aggregation.
    pub fn all(&self) -> &[ClassificationResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
