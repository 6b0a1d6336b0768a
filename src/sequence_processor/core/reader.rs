use super::processor::SequenceProcessor;
use super::sequence::Sequence;
use super::stats::ProcessingStats;
use super::window::ReadWindow;
use crate::error::Result;

/// Lazy, forward-only stream of records.
///
/// Returns `None` at end of stream. A source is consumed once and cannot be
/// rewound.
pub trait RecordSource {
    fn next_record(&mut self) -> Option<Result<Sequence>>;

    /// Feeds the records inside `window` to `processor`.
    ///
    /// Stops pulling records as soon as the position passes the end of the
    /// window. Records without quality scores still advance the position.
    fn read_window<P: SequenceProcessor>(
        &mut self,
        window: ReadWindow,
        processor: &mut P,
    ) -> Result<ProcessingStats>
    where
        Self: Sized,
    {
        let mut stats = ProcessingStats::default();

        while let Some(record) = self.next_record() {
            let sequence = record?;
            stats.read += 1;
            let position = stats.read;

            if window.is_past_end(position) {
                break;
            }
            if sequence.quality.is_empty() || window.is_before_start(position) {
                stats.skipped += 1;
                continue;
            }

            processor.process_sequence(&sequence)?;
            stats.processed += 1;
        }

        processor.finalize()?;
        Ok(stats)
    }
}

impl RecordSource for std::vec::IntoIter<Sequence> {
    fn next_record(&mut self) -> Option<Result<Sequence>> {
        self.next().map(Ok)
    }
}
