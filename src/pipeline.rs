use std::io::Write;

use crate::errors::*;
use crate::fasta::Wrap;
use crate::iter::collect_fasta_records::{SplitConfig, SplitSinks};
use crate::iter::revcomp_records::Alphabet;
use crate::iter::summary_records::SummaryConfig;
use crate::iter::Records;
use crate::patterns::Patterns;

/// Clamped sub-sequence bounds; `length` of `None` extends to the end.
#[derive(Copy, Clone, Debug, Default)]
pub struct SubSeq {
    pub start: usize,
    pub length: Option<usize>,
}

/// All options of one filter/transform run.
///
/// The stages always apply in one fixed order, regardless of the order
/// the options were set: duplicate removal, header pattern matching
/// (with inversion), sub-sequencing, length filtering, truncation,
/// reverse-complement, then the terminal output stage. Rejected records
/// are skipped entirely and cause no side effects.
#[derive(Default)]
pub struct PipelineConfig {
    /// Header patterns; a record is kept if any pattern matches.
    pub patterns: Option<Patterns>,
    pub invert_match: bool,
    pub rm_duplicates: bool,
    pub subseq: Option<SubSeq>,
    /// Minimum sequence length to keep; 0 disables.
    pub min_length: usize,
    /// Maximum sequence length to keep; 0 disables.
    pub max_length: usize,
    /// Cut sequences to at most this many characters.
    pub max_size: Option<usize>,
    pub revcomp: Option<Alphabet>,
    pub strict_alphabet: bool,
    pub wrap: Wrap,
    /// Emit summary rows instead of record content.
    pub summary: Option<SummaryConfig>,
    /// Rotate output across multiple sinks.
    pub split: Option<SplitConfig>,
}

impl PipelineConfig {
    /// Check for option combinations that could never produce output.
    /// Runs before any record flows, so misconfiguration is not
    /// discovered mid-stream.
    pub fn validate(&self) -> Result<()> {
        if self.min_length > 0 && self.max_length > 0 && self.min_length > self.max_length {
            return Err(Error::Config(format!(
                "min_length ({}) exceeds max_length ({}); no sequence can satisfy both",
                self.min_length, self.max_length
            )));
        }

        if self.invert_match && self.patterns.is_none() {
            return Err(Error::Config(
                "invert_match requires at least one pattern".to_owned(),
            ));
        }

        if let Wrap::Width(0) = self.wrap {
            return Err(Error::Config(
                "line wrap width must be greater than zero".to_owned(),
            ));
        }

        if self.summary.is_some() && self.split.is_some() {
            return Err(Error::Config(
                "summary mode and split output are mutually exclusive".to_owned(),
            ));
        }

        if let Some(split) = &self.split {
            if !split.dir.is_dir() {
                return Err(Error::Path {
                    path: split.dir.display().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Assemble the full chain over `source`, ending in the configured
    /// terminal stage. `writer` receives single-sink or summary output
    /// and is unused in split mode.
    pub fn build(
        self,
        source: impl Records + 'static,
        writer: Box<dyn Write>,
    ) -> Result<Box<dyn Records>> {
        self.validate()?;

        let mut chain: Box<dyn Records> = source.boxed();

        if self.rm_duplicates {
            chain = chain.dedup().boxed();
        }

        if let Some(patterns) = self.patterns {
            chain = chain.filter_header(patterns, self.invert_match).boxed();
        }

        if let Some(subseq) = self.subseq {
            chain = chain.subseq(subseq.start, subseq.length).boxed();
        }

        match (self.min_length, self.max_length) {
            (0, 0) => {}
            (min, 0) => chain = chain.length_in_bounds(min..).boxed(),
            (0, max) => chain = chain.length_in_bounds(..=max).boxed(),
            (min, max) => chain = chain.length_in_bounds(min..=max).boxed(),
        }

        if let Some(max_size) = self.max_size {
            chain = chain.truncate(max_size).boxed();
        }

        if let Some(alphabet) = self.revcomp {
            chain = chain.revcomp(alphabet, self.strict_alphabet).boxed();
        }

        let chain = if let Some(summary) = self.summary {
            chain.summary(writer, summary).boxed()
        } else if let Some(split) = self.split {
            let sinks = SplitSinks::new(split)?;
            chain.split_fasta(sinks, self.wrap).boxed()
        } else {
            chain.collect_fasta(writer, self.wrap).boxed()
        };

        Ok(chain)
    }

    /// Build and drive the pipeline to completion.
    pub fn run(self, source: impl Records + 'static, writer: Box<dyn Write>) -> Result<()> {
        self.build(source, writer)?.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fasta::FastaRecords;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn source(input: &[u8]) -> FastaRecords<Cursor<Vec<u8>>> {
        FastaRecords::from_reader(Cursor::new(input.to_vec()), 16)
    }

    // owned handle to an in-memory sink, since the chain requires a
    // 'static writer
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn run_to_string(config: PipelineConfig, input: &[u8]) -> String {
        let buf = SharedBuf::default();
        config.run(source(input), Box::new(buf.clone())).unwrap();
        let out = buf.0.borrow().clone();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_min_over_max_is_rejected_before_processing() {
        let config = PipelineConfig {
            min_length: 10,
            max_length: 5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_invert_without_patterns_is_rejected() {
        let config = PipelineConfig {
            invert_match: true,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_summary_and_split_are_exclusive() {
        let config = PipelineConfig {
            summary: Some(SummaryConfig::default()),
            split: Some(SplitConfig {
                dir: PathBuf::from("."),
                prefix: "out".to_owned(),
                extension: ".fa".to_owned(),
                max_records: 1,
                max_len: 0,
            }),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_pattern_scenario() {
        let out = run_to_string(
            PipelineConfig {
                patterns: Some(Patterns::fixed([&b"seq2"[..]])),
                ..Default::default()
            },
            b">seq1\nACGT\n>seq2\n12345678901234567890\n",
        );
        assert_eq!(out, ">seq2\n12345678901234567890\n");
    }

    #[test]
    fn test_no_filters_roundtrip() {
        let input = b">seq1\nAC\nGT\n>seq2\nTTTT\n";
        let out = run_to_string(PipelineConfig::default(), input);
        assert_eq!(out.as_bytes(), input);
    }

    #[test]
    fn test_fixed_stage_order_subseq_before_length_filter() {
        // the sub-sequence shortens seq1 below min_length, so it is
        // dropped by the later stage even though the raw record passes
        let out = run_to_string(
            PipelineConfig {
                subseq: Some(SubSeq {
                    start: 6,
                    length: None,
                }),
                min_length: 3,
                ..Default::default()
            },
            b">seq1\nACGTACGT\n>seq2\nACGTACGTACGT\n",
        );
        assert_eq!(out, ">seq2\nACGTAC\n");
    }
}
