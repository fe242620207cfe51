use crate::error::{MerkleLinesError, Result};

/// Ordered, append-only container of leaf strings.
///
/// One element per input line, in insertion order. Duplicate values are
/// permitted. The container never shrinks; the only mutation besides
/// [`append`](Self::append) is [`duplicate_last`](Self::duplicate_last),
/// which the reducer uses to force an even element count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafSequence {
    leaves: Vec<String>,
}

impl LeafSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` as the new last element.
    pub fn append(&mut self, value: impl Into<String>) {
        self.leaves.push(value.into());
    }

    /// Current element count.
    pub fn count(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Element at `index` (0-based).
    pub fn at(&self, index: usize) -> Result<&str> {
        self.leaves
            .get(index)
            .map(String::as_str)
            .ok_or(MerkleLinesError::IndexOutOfRange {
                index,
                len: self.leaves.len(),
            })
    }

    /// Append a copy of the current last element, growing the sequence by
    /// exactly one. Fails on an empty sequence.
    pub fn duplicate_last(&mut self) -> Result<()> {
        let last = self
            .leaves
            .last()
            .cloned()
            .ok_or(MerkleLinesError::EmptyContainer)?;
        self.leaves.push(last);
        Ok(())
    }

    /// Snapshot view of all elements in insertion order.
    pub fn all(&self) -> &[String] {
        &self.leaves
    }
}

impl FromIterator<String> for LeafSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            leaves: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for LeafSequence {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.leaves.extend(iter);
    }
}
