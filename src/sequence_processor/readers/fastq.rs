use crate::error::Result;
use crate::sequence_processor::core::{RecordSource, Sequence};
use bio::io::fastq::{self, FastqRead};
use niffler::get_reader;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// FASTQ record source backed by `bio`.
///
/// Opening a path goes through `niffler`, so gzip, bzip2 and xz input are
/// decoded transparently. The file handle is released when the reader drops.
pub struct FastqReader<B: BufRead> {
    reader: fastq::Reader<B>,
    record: fastq::Record,
}

impl FastqReader<BufReader<Box<dyn Read>>> {
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let (inner_reader, _compression) = get_reader(Box::new(file))?;
        Ok(Self::from_bufread(BufReader::with_capacity(
            1024 * 1024,
            inner_reader,
        )))
    }
}

impl<B: BufRead> FastqReader<B> {
    pub fn from_bufread(bufread: B) -> Self {
        Self {
            reader: fastq::Reader::from_bufread(bufread),
            record: fastq::Record::new(),
        }
    }

    fn create_sequence_from_record(&self) -> Sequence {
        Sequence {
            id: self.record.id().to_string(),
            data: self.record.seq().to_vec(),
            quality: self.record.qual().to_vec(),
            description: self.record.desc().map(str::to_string),
        }
    }
}

impl<B: BufRead> RecordSource for FastqReader<B> {
    fn next_record(&mut self) -> Option<Result<Sequence>> {
        if let Err(e) = self.reader.read(&mut self.record) {
            return Some(Err(e.into()));
        }
        if self.record.is_empty() {
            return None;
        }
        Some(Ok(self.create_sequence_from_record()))
    }
}
