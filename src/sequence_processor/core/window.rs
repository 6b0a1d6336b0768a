/// Inclusive, 1-based range of read positions to sample.
///
/// An `end` of 0 means "to the end of the file". A `start` of 0 behaves
/// like 1 since positions start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadWindow {
    pub start: u64,
    pub end: u64,
}

impl Default for ReadWindow {
    fn default() -> Self {
        Self {
            start: 1,
            end: 3000,
        }
    }
}

impl ReadWindow {
    /// Builds a window, swapping the bounds when both are set and reversed.
    pub fn new(start: u64, end: u64) -> Self {
        if start != 0 && end != 0 && end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Covers every record in the file.
    pub fn unbounded() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn is_past_end(&self, position: u64) -> bool {
        self.end != 0 && position > self.end
    }

    pub fn is_before_start(&self, position: u64) -> bool {
        position < self.start
    }
}
