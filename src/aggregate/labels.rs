use crate::error::{FeatureError, Result};
use std::str::FromStr;

/// Labels carried by a file named `<accession>.<platform>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLabels {
    pub accession: String,
    pub platform: String,
}

impl FileLabels {
    /// Splits `file_name` on `.`; the first field is the accession and the
    /// second the platform label.
    pub fn parse(file_name: &str) -> Result<Self> {
        let invalid = |reason| FeatureError::InvalidFileName {
            name: file_name.to_string(),
            reason,
        };

        let fields: Vec<&str> = file_name.split('.').collect();
        if fields.len() < 3 {
            return Err(invalid("expected at least three '.'-separated fields"));
        }
        if fields[0].is_empty() {
            return Err(invalid("accession field is empty"));
        }
        if fields[1].is_empty() {
            return Err(invalid("platform field is empty"));
        }

        Ok(Self {
            accession: fields[0].to_string(),
            platform: fields[1].to_string(),
        })
    }
}

impl FromStr for FileLabels {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
