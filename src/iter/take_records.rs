use std::ops::RangeBounds;

use crate::iter::*;

pub struct TakeRecords<R: Records, B: RangeBounds<usize>> {
    records: R,
    bounds: B,
    idx: usize,
}

impl<R: Records, B: RangeBounds<usize>> TakeRecords<R, B> {
    pub fn new(records: R, bounds: B) -> Self {
        Self {
            records,
            bounds,
            idx: 0,
        }
    }
}

impl<R: Records, B: RangeBounds<usize>> Records for TakeRecords<R, B> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;

        records.retain(|_| {
            let keep = self.bounds.contains(&self.idx);
            self.idx += 1;
            keep
        });

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()
    }
}
