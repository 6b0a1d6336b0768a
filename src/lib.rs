pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod features;
pub mod phred;
pub mod sequence_processor;
pub mod utils;

// Re-export main API
pub use aggregate::{AggregatorOptions, DirectoryAggregator, FeatureRow, FileLabels};
pub use error::{FeatureError, Result};
pub use features::{
    extract_features, extract_file_features, ExtractionOptions, FeatureVector, FileFeatures,
};
pub use phred::{infer_offset, to_error_probability, PhredEncoding};
pub use sequence_processor::{FastqReader, ReadWindow, RecordSource};
