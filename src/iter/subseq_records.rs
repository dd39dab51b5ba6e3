use crate::iter::*;

pub struct SubseqRecords<R: Records> {
    records: R,
    start: usize,
    length: Option<usize>,
}

impl<R: Records> SubseqRecords<R> {
    pub fn new(records: R, start: usize, length: Option<usize>) -> Self {
        Self {
            records,
            start,
            length,
        }
    }
}

impl<R: Records> Records for SubseqRecords<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;

        for record in records.iter_mut() {
            record.subseq(self.start, self.length);
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_subseq_applies_to_all_records() {
        let input = b">a\nACGTACGT\n>b\nTTTT\n";
        let records = FastaRecords::from_reader(Cursor::new(input.to_vec()), 16)
            .subseq(2, Some(3))
            .run_collect_records()
            .unwrap();
        assert_eq!(records[0].seq(), b"GTA");
        assert_eq!(records[1].seq(), b"TT");
    }

    #[test]
    fn test_start_past_end_yields_empty() {
        let input = b">a\nACGT\n";
        let records = FastaRecords::from_reader(Cursor::new(input.to_vec()), 16)
            .subseq(10, None)
            .run_collect_records()
            .unwrap();
        assert_eq!(records[0].seq(), b"");
    }
}
