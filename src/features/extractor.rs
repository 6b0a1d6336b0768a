use super::collector::QualityFeatureCollector;
use super::FeatureVector;
use crate::error::{FeatureError, Result};
use crate::sequence_processor::{FastqReader, ProcessingStats, ReadWindow, RecordSource};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionOptions {
    pub window: ReadWindow,
    pub debug: bool,
}

impl ExtractionOptions {
    pub fn new(window: ReadWindow, debug: bool) -> Self {
        Self { window, debug }
    }
}

/// Features of one file and the counts behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFeatures {
    pub features: FeatureVector,
    pub stats: ProcessingStats,
}

impl FileFeatures {
    /// Number of reads that contributed to the features
    pub fn read_count(&self) -> u64 {
        self.stats.processed
    }
}

/// Extracts the feature vector from the records of `source` inside the window.
pub fn extract_features<S: RecordSource>(
    source: &mut S,
    options: &ExtractionOptions,
) -> Result<FileFeatures> {
    let window = options.window;
    let mut collector = QualityFeatureCollector::new(options.debug);
    let stats = source.read_window(window, &mut collector)?;

    if stats.processed == 0 {
        return Err(FeatureError::EmptyWindow {
            start: window.start,
            end: window.end,
        });
    }
    if options.debug {
        eprintln!("{:?}", stats);
    }

    Ok(FileFeatures {
        features: collector.features()?,
        stats,
    })
}

/// Opens `path` and extracts its features. The file is closed before
/// returning, whether or not extraction succeeded.
pub fn extract_file_features(path: &Path, options: &ExtractionOptions) -> Result<FileFeatures> {
    let mut reader = FastqReader::new(path)?;
    extract_features(&mut reader, options)
}
