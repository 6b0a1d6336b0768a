//! Error types for feature extraction

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for feature extraction
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors raised while reading FASTQ input and summarising it
#[derive(Debug, Error)]
pub enum FeatureError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be decompressed or sniffed
    #[error("Could not open compressed input: {0}")]
    Decompression(#[from] niffler::Error),

    /// FASTQ record could not be parsed
    #[error("Invalid FASTQ record: {0}")]
    InvalidFastq(#[from] bio::io::fastq::Error),

    /// Quality byte outside every standard Phred range
    #[error("Quality byte 0x{byte:02X} is not valid in any standard Phred encoding")]
    InvalidQualityByte {
        /// Offending byte
        byte: u8,
    },

    /// Quality byte decodes to a negative Phred score
    #[error("Quality byte 0x{byte:02X} decodes to a negative Phred score with offset {offset}")]
    NegativePhredScore {
        /// Offending byte
        byte: u8,
        /// Offset in use for the file
        offset: u8,
    },

    /// Offset inference or decoding on an empty quality string
    #[error("Quality string is empty")]
    EmptyQuality,

    /// No read fell inside the requested window
    #[error("No reads with quality scores in read window {start}..={end}")]
    EmptyWindow {
        /// First read position (1-based)
        start: u64,
        /// Last read position, 0 for unbounded
        end: u64,
    },

    /// A statistic was requested from an empty accumulator
    #[error("Cannot compute {0} of zero reads")]
    EmptyAccumulator(&'static str),

    /// Too few reads for the sample standard deviation
    #[error("Sample standard deviation needs at least 2 reads, found {found}")]
    InsufficientReads {
        /// Number of contributing reads
        found: usize,
    },

    /// Filename does not follow `<accession>.<platform>.<extension>`
    #[error("File name {name:?} does not match <accession>.<platform>.<extension>: {reason}")]
    InvalidFileName {
        /// File name as found in the directory
        name: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Failure while processing a specific file
    #[error("Failed to extract features from {}", .path.display())]
    InFile {
        /// Path of the file being processed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: Box<FeatureError>,
    },
}

impl FeatureError {
    /// Attach the path of the file being processed
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        FeatureError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
