use std::fmt;

/// A `DepthTracker` bounds how deeply the parser may recurse while keeping a
/// high-water mark of how close to the limit a parse came.
///
/// The tracker starts at depth 1, accounting for the document itself; every
/// grammar routine that builds a node brackets itself with
/// [`check_and_increment`][Self::check_and_increment] and
/// [`decrement`][Self::decrement], so the counter is back to 1 once the
/// document completes.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct DepthTracker {
    current: usize,
    /// High-water mark of depth reached during the parse.
    pub high: usize,
    /// The configured limit.
    pub limit: usize,
}

impl DepthTracker {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            current: 1,
            high: 1,
            limit,
        }
    }

    /// Record one level of nesting. Returns `true` if the limit is now
    /// exceeded.
    pub(crate) fn check_and_increment(&mut self) -> bool {
        self.current += 1;
        if self.current > self.high {
            self.high = self.current;
        }
        self.current > self.limit
    }

    pub(crate) fn decrement(&mut self) {
        self.current -= 1;
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }
}

impl fmt::Debug for DepthTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth limit: {}, high: {}", self.limit, self.high)
    }
}
