use crate::iter::*;

pub struct FilterRecords<R: Records> {
    records: R,
    patterns: Patterns,
    invert: bool,
}

impl<R: Records> FilterRecords<R> {
    pub fn new(records: R, patterns: Patterns, invert: bool) -> Self {
        Self {
            records,
            patterns,
            invert,
        }
    }
}

impl<R: Records> Records for FilterRecords<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;
        records.retain(|r| self.patterns.matches(r.header()) != self.invert);
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

    fn source(input: &[u8]) -> FastaRecords<Cursor<Vec<u8>>> {
        FastaRecords::from_reader(Cursor::new(input.to_vec()), 16)
    }

    #[test]
    fn test_any_pattern_matches() {
        let records = source(b">seq1\nAC\n>seq2\nGT\n>other\nTT\n")
            .filter_header(Patterns::fixed([&b"seq1"[..], &b"other"[..]]), false)
            .run_collect_records()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), b"seq1");
        assert_eq!(records[1].header(), b"other");
    }

    #[test]
    fn test_invert_flips_selection() {
        let records = source(b">seq1\nAC\n>seq2\nGT\n")
            .filter_header(Patterns::fixed([&b"seq1"[..]]), true)
            .run_collect_records()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header(), b"seq2");
    }
}
