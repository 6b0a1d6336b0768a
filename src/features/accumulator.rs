use crate::error::{FeatureError, Result};
use crate::phred::{to_error_probability, PhredEncoding};

/// Decimal resolution of `f64`, below which a variance is treated as zero
const FLOAT_RESOLUTION: f64 = 1e-15;

/// Sequence lengths of the contributing reads, in file order.
#[derive(Debug, Default, Clone)]
pub struct LengthAccumulator {
    lengths: Vec<usize>,
}

impl LengthAccumulator {
    pub fn push(&mut self, length: usize) {
        self.lengths.push(length);
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.lengths
    }

    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(FeatureError::EmptyAccumulator("mean length"));
        }
        let total: f64 = self.lengths.iter().map(|&l| l as f64).sum();
        Ok(total / self.len() as f64)
    }

    pub fn min(&self) -> Result<usize> {
        self.lengths
            .iter()
            .copied()
            .min()
            .ok_or(FeatureError::EmptyAccumulator("minimum length"))
    }

    pub fn max(&self) -> Result<usize> {
        self.lengths
            .iter()
            .copied()
            .max()
            .ok_or(FeatureError::EmptyAccumulator("maximum length"))
    }

    /// Middle value, or the mean of the two middle values for an even count.
    pub fn median(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(FeatureError::EmptyAccumulator("median length"));
        }
        let mut sorted = self.lengths.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(sorted[mid] as f64)
        } else {
            Ok((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
        }
    }

    /// Sample standard deviation (divisor n - 1).
    pub fn std_dev(&self) -> Result<f64> {
        let n = self.len();
        if n < 2 {
            return Err(FeatureError::InsufficientReads { found: n });
        }
        let mean = self.mean()?;
        let sum_sq: f64 = self
            .lengths
            .iter()
            .map(|&l| (l as f64 - mean).powi(2))
            .sum();
        Ok((sum_sq / (n - 1) as f64).sqrt())
    }

    /// Fisher-Pearson coefficient of skewness, `m3 / m2^1.5`, from the biased
    /// central moments.
    ///
    /// A variance at or below `(1e-15 * mean)^2` counts as constant lengths.
    /// SciPy returns NaN there; this returns 0 so the row stays numeric.
    pub fn skewness(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(FeatureError::EmptyAccumulator("length skewness"));
        }
        let n = self.len() as f64;
        let mean = self.mean()?;
        let (m2, m3) = self
            .lengths
            .iter()
            .map(|&l| l as f64 - mean)
            .fold((0.0, 0.0), |(m2, m3), d| (m2 + d * d, m3 + d * d * d));
        let (m2, m3) = (m2 / n, m3 / n);

        if m2 <= (FLOAT_RESOLUTION * mean).powi(2) {
            return Ok(0.0);
        }
        Ok(m3 / m2.powf(1.5))
    }
}

/// Error-probability summary of one read, as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadQuality {
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
}

impl ReadQuality {
    pub fn from_quality(quality: &[u8], encoding: PhredEncoding) -> Result<Self> {
        if quality.is_empty() {
            return Err(FeatureError::EmptyQuality);
        }

        let mut sum = 0.0;
        let mut minimum = f64::INFINITY;
        let mut maximum = f64::NEG_INFINITY;
        for &byte in quality {
            let percent = to_error_probability(byte, encoding)? * 100.0;
            sum += percent;
            minimum = minimum.min(percent);
            maximum = maximum.max(percent);
        }

        Ok(Self {
            average: sum / quality.len() as f64,
            minimum,
            maximum,
        })
    }
}

/// Mean of each read-level quality summary across the contributing reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityAverages {
    pub avg_avg_phred: f64,
    pub avg_min_phred: f64,
    pub avg_max_phred: f64,
}

#[derive(Debug, Default, Clone)]
pub struct QualityAccumulator {
    pub averages: Vec<f64>,
    pub minimums: Vec<f64>,
    pub maximums: Vec<f64>,
}

impl QualityAccumulator {
    pub fn push(&mut self, read: ReadQuality) {
        self.averages.push(read.average);
        self.minimums.push(read.minimum);
        self.maximums.push(read.maximum);
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    pub fn averages(&self) -> Result<QualityAverages> {
        if self.is_empty() {
            return Err(FeatureError::EmptyAccumulator("mean quality"));
        }
        Ok(QualityAverages {
            avg_avg_phred: mean(&self.averages),
            avg_min_phred: mean(&self.minimums),
            avg_max_phred: mean(&self.maximums),
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
