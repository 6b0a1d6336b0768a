pub(crate) mod processor;
pub(crate) mod sequence;
pub(crate) mod stats;
pub(crate) mod window;
mod reader;

pub use processor::SequenceProcessor;
pub use reader::RecordSource;
pub use sequence::Sequence;
pub use stats::ProcessingStats;
pub use window::ReadWindow;
