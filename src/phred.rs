//! Phred quality decoding.
//!
//! Quality bytes are decoded against one of the two standard offsets:
//! Phred+33 (Sanger, Illumina 1.8+) or Phred+64 (Illumina 1.3 to 1.7).

use crate::error::{FeatureError, Result};

/// Lowest printable quality byte (`!`)
const MIN_QUALITY_BYTE: u8 = b'!';
/// Highest printable quality byte (`~`)
const MAX_QUALITY_BYTE: u8 = b'~';
/// Highest Phred+33 byte in Illumina 1.8+ output (`J`, Q41)
const MAX_PHRED33_BYTE: u8 = b'J';

/// Quality score encoding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhredEncoding {
    /// Phred+33
    Phred33,
    /// Phred+64
    Phred64,
}

impl PhredEncoding {
    /// ASCII baseline for this encoding
    pub fn offset(self) -> u8 {
        match self {
            PhredEncoding::Phred33 => 33,
            PhredEncoding::Phred64 => 64,
        }
    }
}

/// Infer the smallest standard offset consistent with every byte in `quality`.
///
/// Phred+33 is preferred whenever it fits. Its ceiling is `J` (Q41,
/// Illumina 1.8+), so Phred+64 is only chosen when no byte is below `@` and
/// at least one byte is above `J`. A byte below `@` always means Phred+33.
pub fn infer_offset(quality: &[u8]) -> Result<PhredEncoding> {
    let (&min, &max) = match (quality.iter().min(), quality.iter().max()) {
        (Some(min), Some(max)) => (min, max),
        _ => return Err(FeatureError::EmptyQuality),
    };

    if min < MIN_QUALITY_BYTE {
        return Err(FeatureError::InvalidQualityByte { byte: min });
    }
    if max > MAX_QUALITY_BYTE {
        return Err(FeatureError::InvalidQualityByte { byte: max });
    }

    if min >= PhredEncoding::Phred64.offset() && max > MAX_PHRED33_BYTE {
        Ok(PhredEncoding::Phred64)
    } else {
        Ok(PhredEncoding::Phred33)
    }
}

/// Phred score of a single quality byte.
pub fn phred_score(byte: u8, encoding: PhredEncoding) -> Result<u8> {
    let offset = encoding.offset();
    byte.checked_sub(offset)
        .ok_or(FeatureError::NegativePhredScore { byte, offset })
}

/// Base-call error probability, `10^(-Q/10)`, in `(0, 1]`.
pub fn to_error_probability(byte: u8, encoding: PhredEncoding) -> Result<f64> {
    let score = phred_score(byte, encoding)?;
    Ok(10f64.powf(-f64::from(score) / 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_offset_phred33() {
        // Full Sanger range, and strings that only dip below '@' once
        let full: Vec<u8> = (33..=126).collect();
        assert_eq!(infer_offset(&full).unwrap(), PhredEncoding::Phred33);
        assert_eq!(infer_offset(b"IIIIIIIII5").unwrap(), PhredEncoding::Phred33);
        assert_eq!(infer_offset(b"!").unwrap(), PhredEncoding::Phred33);
        for low in 33..64u8 {
            let quality = [b'J', low, b'F'];
            assert_eq!(infer_offset(&quality).unwrap(), PhredEncoding::Phred33);
        }
    }

    #[test]
    fn test_infer_offset_high_quality_phred33() {
        // Illumina 1.8+ reads without low-quality bases fit both offsets
        assert_eq!(infer_offset(b"IIIIIIII").unwrap(), PhredEncoding::Phred33);
        assert_eq!(infer_offset(b"JJJFFFF@").unwrap(), PhredEncoding::Phred33);
        for byte in 64..=74u8 {
            assert_eq!(infer_offset(&[byte, byte]).unwrap(), PhredEncoding::Phred33);
        }
    }

    #[test]
    fn test_infer_offset_phred64() {
        let full: Vec<u8> = (64..=126).collect();
        assert_eq!(infer_offset(&full).unwrap(), PhredEncoding::Phred64);
        for byte in 75..=126u8 {
            assert_eq!(infer_offset(&[b'@', byte]).unwrap(), PhredEncoding::Phred64);
        }
        assert_eq!(infer_offset(b"hhhhBBB@").unwrap(), PhredEncoding::Phred64);
    }

    #[test]
    fn test_high_bytes_with_low_bytes_stay_phred33() {
        // Long-read Phred+33 data reaches past 'J' but also goes below '@'
        assert_eq!(infer_offset(b"~~~~5~~").unwrap(), PhredEncoding::Phred33);
    }

    #[test]
    fn test_infer_offset_rejects_invalid_bytes() {
        assert!(matches!(
            infer_offset(b"II I"),
            Err(FeatureError::InvalidQualityByte { byte: b' ' })
        ));
        assert!(matches!(
            infer_offset(&[b'I', 127]),
            Err(FeatureError::InvalidQualityByte { byte: 127 })
        ));
        assert!(matches!(infer_offset(b""), Err(FeatureError::EmptyQuality)));
    }

    #[test]
    fn test_error_probability() {
        let p = to_error_probability(b'!', PhredEncoding::Phred33).unwrap();
        assert!((p - 1.0).abs() < 1e-12);
        let p = to_error_probability(b'+', PhredEncoding::Phred33).unwrap();
        assert!((p - 0.1).abs() < 1e-12);
        let p = to_error_probability(b'5', PhredEncoding::Phred33).unwrap();
        assert!((p - 0.01).abs() < 1e-12);
        let p = to_error_probability(b'h', PhredEncoding::Phred64).unwrap();
        assert!((p - 1e-4).abs() < 1e-15);
    }

    #[test]
    fn test_negative_score_is_an_error() {
        let err = to_error_probability(b'5', PhredEncoding::Phred64).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::NegativePhredScore { byte: b'5', offset: 64 }
        ));
    }
}
