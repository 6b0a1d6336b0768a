use super::accumulator::{LengthAccumulator, QualityAccumulator, ReadQuality};
use super::FeatureVector;
use crate::error::Result;
use crate::phred::{infer_offset, PhredEncoding};
use crate::sequence_processor::{Sequence, SequenceProcessor};

/// Accumulates length and quality statistics for one file.
///
/// The Phred encoding is inferred from the first read it sees and reused for
/// every later read. A file that mixes encodings is decoded with whichever
/// one the first read implied.
#[derive(Debug, Default)]
pub struct QualityFeatureCollector {
    encoding: Option<PhredEncoding>,
    lengths: LengthAccumulator,
    quality: QualityAccumulator,
    debug: bool,
}

impl QualityFeatureCollector {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Default::default()
        }
    }

    pub fn encoding(&self) -> Option<PhredEncoding> {
        self.encoding
    }

    pub fn read_count(&self) -> usize {
        self.lengths.len()
    }

    fn encoding_for(&mut self, quality: &[u8]) -> Result<PhredEncoding> {
        match self.encoding {
            Some(encoding) => Ok(encoding),
            None => {
                let encoding = infer_offset(quality)?;
                self.encoding = Some(encoding);
                Ok(encoding)
            }
        }
    }

    /// Computes the feature vector from everything collected so far.
    pub fn features(&self) -> Result<FeatureVector> {
        let quality = self.quality.averages()?;
        Ok(FeatureVector {
            avg_length: self.lengths.mean()?,
            min_length: self.lengths.min()?,
            max_length: self.lengths.max()?,
            median_length: self.lengths.median()?,
            stddev_length: self.lengths.std_dev()?,
            skew_length: self.lengths.skewness()?,
            avg_avg_phred: quality.avg_avg_phred,
            avg_min_phred: quality.avg_min_phred,
            avg_max_phred: quality.avg_max_phred,
        })
    }
}

impl SequenceProcessor for QualityFeatureCollector {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        let encoding = self.encoding_for(&sequence.quality)?;
        let read = ReadQuality::from_quality(&sequence.quality, encoding)?;
        if self.debug {
            eprintln!("{}: {:?}", sequence.id, read);
        }

        self.lengths.push(sequence.len());
        self.quality.push(read);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if self.debug {
            eprintln!("Encoding: {:?}", self.encoding);
            eprintln!("Read lengths: {:?}", self.lengths.as_slice());
            eprintln!("Quality: {:?}", self.quality);
            if let Ok(averages) = self.quality.averages() {
                eprintln!("Quality averages: {:?}", averages);
            }
        }
        Ok(())
    }
}
