//! Directory-wide feature matrix.

mod labels;

use crate::error::Result;
use crate::features::{extract_file_features, ExtractionOptions, FeatureVector, HEADER};
use indicatif::ProgressBar;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use labels::FileLabels;

const DELIMITER: &str = "\t";

#[derive(Debug, Clone)]
pub struct AggregatorOptions {
    pub extraction: ExtractionOptions,
    pub header: bool,
    pub accession_column: bool,
    /// File name suffixes eligible for extraction, without the leading dot
    pub extensions: Vec<String>,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            extraction: ExtractionOptions::default(),
            header: false,
            accession_column: false,
            extensions: vec!["fastq".to_string()],
        }
    }
}

/// One output line: a file's features and its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub features: FeatureVector,
    pub labels: FileLabels,
}

impl FeatureRow {
    pub fn write_to<W: Write>(&self, out: &mut W, accession_column: bool) -> io::Result<()> {
        let mut fields: Vec<String> = self.features.to_fields().to_vec();
        fields.push(self.labels.platform.clone());
        if accession_column {
            fields.push(self.labels.accession.clone());
        }
        writeln!(out, "{}", fields.join(DELIMITER))
    }
}

pub struct DirectoryAggregator {
    options: AggregatorOptions,
}

impl DirectoryAggregator {
    pub fn new(options: AggregatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AggregatorOptions {
        &self.options
    }

    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut columns: Vec<&str> = HEADER.to_vec();
        columns.push("label");
        if self.options.accession_column {
            columns.push("accession_number");
        }
        writeln!(out, "{}", columns.join(DELIMITER))
    }

    pub fn is_eligible(&self, file_name: &str) -> bool {
        self.options
            .extensions
            .iter()
            .any(|ext| file_name.ends_with(&format!(".{}", ext)))
    }

    /// Extracts features from every eligible file in `directory` and writes
    /// one row per file to `out`. Returns the number of files processed.
    ///
    /// Files are visited in `read_dir` order, which depends on the platform
    /// and file system. The first failing file aborts the scan.
    pub fn run<W: Write>(
        &self,
        directory: &Path,
        out: &mut W,
        progress: &ProgressBar,
    ) -> Result<usize> {
        if self.options.header {
            self.write_header(out)?;
        }

        let mut count = 0;
        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            if !self.is_eligible(&file_name) || !path.is_file() {
                continue;
            }

            progress.set_message(format!("Processing {}", file_name));
            let labels = FileLabels::parse(&file_name)?;
            let file_features = extract_file_features(&path, &self.options.extraction)
                .map_err(|e| e.in_file(&path))?;
            if self.options.extraction.debug {
                eprintln!(
                    "{}: {} reads contributed",
                    file_name,
                    file_features.read_count()
                );
            }

            let row = FeatureRow {
                features: file_features.features,
                labels,
            };
            row.write_to(out, self.options.accession_column)?;
            progress.inc(1);
            count += 1;
        }

        Ok(count)
    }
}
