use std::io::Write;

use crate::iter::*;

#[derive(Copy, Clone, Debug)]
pub struct SummaryConfig {
    /// Emit the fixed column-header row before the first record.
    pub with_header: bool,
    /// Sort the histogram by symbol instead of first-occurrence order.
    pub sorted: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            with_header: true,
            sorted: false,
        }
    }
}

/// Emits one `header \t length \t symbol:count|...` row per record
/// instead of sequence content.
pub struct SummaryRecords<R: Records, W: Write> {
    records: R,
    writer: W,
    config: SummaryConfig,
    wrote_header: bool,
}

impl<R: Records, W: Write> SummaryRecords<R, W> {
    pub fn new(records: R, writer: W, config: SummaryConfig) -> Self {
        Self {
            records,
            writer,
            config,
            wrote_header: false,
        }
    }
}

impl<R: Records, W: Write> Records for SummaryRecords<R, W> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        if !self.wrote_header {
            if self.config.with_header {
                self.writer.write_all(b"Header\tSeq.length\tAlphabet\n")?;
            }
            self.wrote_header = true;
        }

        let records = self.records.next_chunk()?;

        for record in &records {
            let hist = if self.config.sorted {
                record.alphabet_sorted()
            } else {
                record.alphabet()
            };

            self.writer.write_all(record.header())?;
            write!(self.writer, "\t{}\t", record.seq_len())?;

            for (i, (symbol, count)) in hist.iter().enumerate() {
                if i > 0 {
                    self.writer.write_all(b"|")?;
                }
                write!(self.writer, "{}:{}", *symbol as char, count)?;
            }

            self.writer.write_all(b"\n")?;
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn summarize(input: &[u8], config: SummaryConfig) -> String {
        let mut out = Vec::new();
        FastaRecords::from_reader(Cursor::new(input.to_vec()), 16)
            .summary(&mut out, config)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_rows_with_header() {
        let out = summarize(b">seq1\nGGAT\n", SummaryConfig::default());
        assert_eq!(out, "Header\tSeq.length\tAlphabet\nseq1\t4\tG:2|A:1|T:1\n");
    }

    #[test]
    fn test_summary_without_header_row() {
        let out = summarize(
            b">seq1\nACGT\n>seq2\nGG\n",
            SummaryConfig {
                with_header: false,
                sorted: false,
            },
        );
        assert_eq!(out, "seq1\t4\tA:1|C:1|G:1|T:1\nseq2\t2\tG:2\n");
    }

    #[test]
    fn test_summary_sorted_histogram() {
        let out = summarize(
            b">seq1\nGGAT\n",
            SummaryConfig {
                with_header: false,
                sorted: true,
            },
        );
        assert_eq!(out, "seq1\t4\tA:1|G:2|T:1\n");
    }
}
