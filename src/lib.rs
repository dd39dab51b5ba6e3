//! Rust library for streaming manipulation of multi-FASTA files.
//!
//! # Overview
//! fastasieve provides composable operations for parsing, filtering,
//! transforming, splitting, and indexing FASTA records.
//!
//! This is useful for:
//! * Extracting records whose headers match a set of patterns
//! * Splitting large multi-FASTA files across size- or count-bounded files
//! * Sub-sequencing, truncating, and reverse-complementing sequences
//! * Random access into large files without re-scanning them
//!
//! ## Iterator-like API
//! The main API is similar to Rust iterators, but it uses custom
//! operations that work on whole FASTA records. You specify operations
//! (read records, filter by header, truncate, write to a file, etc.) in a
//! chain, and these are executed in order when you call
//! [`run()`](Records::run).
//!
//! ```no_run
//! use fastasieve::*;
//!
//! # fn main() -> fastasieve::Result<()> {
//! iter_fasta("genome.fa", 256)?
//!     .filter_header(Patterns::fixed(["chr1"]), false)
//!     .truncate(1000)
//!     .collect_fasta(create_sink("chr1.fa")?, Wrap::Width(70))
//!     .run()?;
//! # Ok(())
//! # }
//! ```
//!
//! The chain is single-threaded and pull-based: the source yields records
//! lazily, each stage owns its own state (counters, duplicate sets,
//! sinks), and nothing is buffered beyond the current chunk. Independent
//! runs never share state.
//!
//! ## Record structure
//! Here's an example FASTA record:
//! ```text
//! >chr1 assembled
//! GATTACAGATTACA
//! TGCATGCA
//! ```
//! The header line content (without the `>` marker) and the content lines
//! are stored as read, so a record can be re-serialized with its original
//! line wrap. The concatenated, whitespace-stripped sequence is derived
//! lazily. See [`Record`].
//!
//! ## Fixed-order pipelines
//! [`PipelineConfig`] bundles every option of a filter/transform run and
//! assembles the stages in one fixed order (duplicate removal, header
//! matching, sub-sequencing, length filtering, truncation,
//! reverse-complement, output), validating the configuration before any
//! record flows.
//!
//! ## Random access
//! [`FastaIndex`] scans a file once and records byte-offset spans for
//! every header, so single records can be extracted later by direct
//! seeks. Duplicate headers are kept in file order and queries resolve to
//! the first occurrence.

pub mod errors;
pub mod fasta;
pub mod index;
pub mod iter;
pub mod patterns;
pub mod pipeline;
pub mod record;

mod parse_utils;

// commonly used functions and types

pub use crate::errors::*;
pub use crate::fasta::*;
pub use crate::index::*;
pub use crate::iter::collect_fasta_records::{SplitConfig, SplitFastaRecords, SplitSinks};
pub use crate::iter::dedup_records::DuplicateTracker;
pub use crate::iter::revcomp_records::Alphabet;
pub use crate::iter::summary_records::SummaryConfig;
pub use crate::iter::*;
pub use crate::patterns::*;
pub use crate::pipeline::*;
pub use crate::record::*;
