//! Per-kind sequence allocator.

/// First value handed out by a fresh or reset [`Sequence`].
pub const SEQUENCE_START: u64 = 1;

/// Monotonic counter used to derive unique default identifiers.
///
/// Mutation goes through `&mut self`, so callers sharing one sequence across
/// threads have to bring their own synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    next: u64,
}

impl Sequence {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: SEQUENCE_START,
        }
    }

    /// Return the current value and advance the counter.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// The value the next call to [`Sequence::next`] will return.
    #[must_use]
    pub const fn peek(&self) -> u64 {
        self.next
    }

    /// Rewind to [`SEQUENCE_START`].
    pub fn reset(&mut self) {
        self.next = SEQUENCE_START;
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
