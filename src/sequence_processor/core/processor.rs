use super::sequence::Sequence;
use crate::error::Result;

pub trait SequenceProcessor {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()>;
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }
}
