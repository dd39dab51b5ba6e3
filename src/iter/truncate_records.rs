use crate::iter::*;

pub struct TruncateRecords<R: Records> {
    records: R,
    max_size: usize,
}

impl<R: Records> TruncateRecords<R> {
    pub fn new(records: R, max_size: usize) -> Self {
        Self { records, max_size }
    }
}

impl<R: Records> Records for TruncateRecords<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;

        for record in records.iter_mut() {
            record.truncate(self.max_size);
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
    fn test_truncate_keeps_line_boundaries() {
        let input = b">a\nACGT\nACGT\nACGT\n";
        let records = FastaRecords::from_reader(Cursor::new(input.to_vec()), 16)
            .truncate(6)
            .run_collect_records()
            .unwrap();
        assert_eq!(records[0].lines(), &[b"ACGT".to_vec(), b"AC".to_vec()]);
        assert_eq!(records[0].seq(), b"ACGTAC");
    }
}
