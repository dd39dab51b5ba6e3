use std::ops::RangeBounds;

use crate::iter::*;

pub struct LengthInBoundsRecords<R: Records, B: RangeBounds<usize>> {
    records: R,
    bounds: B,
}

impl<R: Records, B: RangeBounds<usize>> LengthInBoundsRecords<R, B> {
    pub fn new(records: R, bounds: B) -> Self {
        Self { records, bounds }
    }
}

impl<R: Records, B: RangeBounds<usize>> Records for LengthInBoundsRecords<R, B> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;
        records.retain(|r| self.bounds.contains(&r.seq_len()));
        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()
    }
}
