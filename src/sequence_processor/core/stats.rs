/// Record counts for one pass over a source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Records pulled from the source, including skipped ones
    pub read: u64,
    /// Records inside the window without quality, or before the window
    pub skipped: u64,
    /// Records handed to the processor
    pub processed: u64,
}
