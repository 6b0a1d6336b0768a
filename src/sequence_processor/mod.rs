pub mod core;
pub mod readers;

// Re-export commonly used items
pub use core::{ProcessingStats, ReadWindow, RecordSource, Sequence, SequenceProcessor};
pub use readers::FastqReader;
