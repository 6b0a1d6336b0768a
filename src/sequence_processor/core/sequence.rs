/// One FASTQ record as handed to a processor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub data: Vec<u8>,
    pub quality: Vec<u8>,
    pub description: Option<String>,
}

impl Sequence {
    pub fn new(id: impl Into<String>, data: &[u8], quality: &[u8]) -> Self {
        Self {
            id: id.into(),
            data: data.to_vec(),
            quality: quality.to_vec(),
            description: None,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
