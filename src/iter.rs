use std::io::Write;
use std::ops::RangeBounds;

use crate::errors::*;
use crate::fasta::*;
use crate::patterns::*;
use crate::record::*;

pub mod filter_records;
use filter_records::*;

pub mod dedup_records;
use dedup_records::*;

pub mod subseq_records;
use subseq_records::*;

pub mod length_records;
use length_records::*;

pub mod truncate_records;
use truncate_records::*;

pub mod revcomp_records;
use revcomp_records::*;

pub mod take_records;
use take_records::*;

pub mod for_each_records;
use for_each_records::*;

pub mod collect_fasta_records;
use collect_fasta_records::*;

pub mod summary_records;
use summary_records::*;

/// A pull-based stage in a record pipeline.
///
/// Stages are chained with the builder methods below and driven by
/// [`run()`](Records::run). Each stage owns its state (counters, writers,
/// duplicate sets) exclusively, so independent pipeline runs cannot
/// interfere with each other. The whole chain is single-threaded and
/// synchronous; nothing is buffered beyond the records of the current
/// chunk.
pub trait Records {
    fn next_chunk(&mut self) -> Result<Vec<Record>>;

    fn finish(&mut self) -> Result<()>;

    /// Drive the chain to completion, then release all resources held by
    /// any stage (output sinks are flushed and closed).
    fn run(mut self) -> Result<()>
    where
        Self: Sized,
    {
        while !self.next_chunk()?.is_empty() {}
        self.finish()
    }

    fn run_collect_records(mut self) -> Result<Vec<Record>>
    where
        Self: Sized,
    {
        let mut res = Vec::new();

        loop {
            let records = self.next_chunk()?;

            if records.is_empty() {
                break;
            }

            res.extend(records);
        }

        self.finish()?;
        Ok(res)
    }

    /// Keep records whose header matches any of the patterns; `invert`
    /// flips the decision.
    #[must_use]
    fn filter_header(self, patterns: Patterns, invert: bool) -> FilterRecords<Self>
    where
        Self: Sized,
    {
        FilterRecords::new(self, patterns, invert)
    }

    /// Drop records whose header was already seen in this run.
    #[must_use]
    fn dedup(self) -> DedupRecords<Self>
    where
        Self: Sized,
    {
        DedupRecords::new(self)
    }

    /// Replace each record's content with a clamped sub-sequence.
    #[must_use]
    fn subseq(self, start: usize, length: Option<usize>) -> SubseqRecords<Self>
    where
        Self: Sized,
    {
        SubseqRecords::new(self, start, length)
    }

    /// Keep records whose sequence length lies within the bounds.
    #[must_use]
    fn length_in_bounds<B>(self, bounds: B) -> LengthInBoundsRecords<Self, B>
    where
        B: RangeBounds<usize>,
        Self: Sized,
    {
        LengthInBoundsRecords::new(self, bounds)
    }

    /// Cut each record's sequence to at most `max_size` characters.
    #[must_use]
    fn truncate(self, max_size: usize) -> TruncateRecords<Self>
    where
        Self: Sized,
    {
        TruncateRecords::new(self, max_size)
    }

    /// Replace each record's sequence with its reverse-complement.
    #[must_use]
    fn revcomp(self, alphabet: Alphabet, strict: bool) -> RevCompRecords<Self>
    where
        Self: Sized,
    {
        RevCompRecords::new(self, alphabet, strict)
    }

    /// Keep only records whose position in the stream lies within the
    /// bounds.
    #[must_use]
    fn take<B>(self, bounds: B) -> TakeRecords<Self, B>
    where
        B: RangeBounds<usize>,
        Self: Sized,
    {
        TakeRecords::new(self, bounds)
    }

    #[must_use]
    fn for_each<F>(self, func: F) -> ForEachRecords<Self, F>
    where
        F: FnMut(&mut Record),
        Self: Sized,
    {
        ForEachRecords::new(self, func)
    }

    #[must_use]
    fn dbg(self) -> ForEachRecords<Self, fn(&mut Record)>
    where
        Self: Sized,
    {
        ForEachRecords::new(self, |record| eprintln!("{}", record))
    }

    /// Write every record to one sink.
    #[must_use]
    fn collect_fasta<W>(self, writer: W, wrap: Wrap) -> CollectFastaRecords<Self, W>
    where
        W: Write,
        Self: Sized,
    {
        CollectFastaRecords::new(self, writer, wrap)
    }

    /// Route records across rotating sinks governed by the split
    /// thresholds.
    #[must_use]
    fn split_fasta(self, sinks: SplitSinks, wrap: Wrap) -> SplitFastaRecords<Self>
    where
        Self: Sized,
    {
        SplitFastaRecords::new(self, sinks, wrap)
    }

    /// Emit per-record summary rows instead of sequence content.
    #[must_use]
    fn summary<W>(self, writer: W, config: SummaryConfig) -> SummaryRecords<Self, W>
    where
        W: Write,
        Self: Sized,
    {
        SummaryRecords::new(self, writer, config)
    }

    #[must_use]
    fn boxed(self) -> Box<dyn Records>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<R: Records + ?Sized> Records for Box<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        (**self).next_chunk()
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
