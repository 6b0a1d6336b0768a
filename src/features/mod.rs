//! Per-file feature extraction.
//!
//! A [`QualityFeatureCollector`] consumes the reads inside a
//! [`ReadWindow`](crate::sequence_processor::ReadWindow) and summarises their
//! lengths and Phred error probabilities into a [`FeatureVector`].

mod accumulator;
mod collector;
mod extractor;

pub use accumulator::{LengthAccumulator, QualityAccumulator, QualityAverages, ReadQuality};
pub use collector::QualityFeatureCollector;
pub use extractor::{extract_features, extract_file_features, ExtractionOptions, FileFeatures};

/// Column names of a [`FeatureVector`], in output order.
pub const HEADER: [&str; 9] = [
    "avg_length",
    "min_length",
    "max_length",
    "median_length",
    "stddev_length",
    "skew_length",
    "avg_avg_phred",
    "avg_min_phred",
    "avg_max_phred",
];

/// Summary of one file. Quality columns are mean error probabilities in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub avg_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub median_length: f64,
    pub stddev_length: f64,
    pub skew_length: f64,
    pub avg_avg_phred: f64,
    pub avg_min_phred: f64,
    pub avg_max_phred: f64,
}

impl FeatureVector {
    /// Formatted values in [`HEADER`] order. Floating-point columns always
    /// carry a decimal point (`120.0`), lengths are integers.
    pub fn to_fields(&self) -> [String; 9] {
        [
            format!("{:?}", self.avg_length),
            self.min_length.to_string(),
            self.max_length.to_string(),
            format!("{:?}", self.median_length),
            format!("{:?}", self.stddev_length),
            format!("{:?}", self.skew_length),
            format!("{:?}", self.avg_avg_phred),
            format!("{:?}", self.avg_min_phred),
            format!("{:?}", self.avg_max_phred),
        ]
    }
}
