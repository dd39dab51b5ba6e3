use flate2::read::MultiGzDecoder;
use flate2::{write::GzEncoder, Compression};
use log::debug;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::*;
use crate::iter::*;
use crate::parse_utils::*;
use crate::patterns::HeaderPredicate;
use crate::record::Record;

pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Streaming FASTA record source.
///
/// Reads lines from the input, detects record boundaries with a
/// [`HeaderPredicate`], and yields finished [`Record`]s in chunks. The
/// scan is lazy, finite, and single-pass. In the default lenient mode,
/// lines before the first header are skipped silently; in strict mode
/// they fail with [`Error::Format`].
pub struct FastaRecords<R: BufRead> {
    reader: R,
    file: String,
    predicate: HeaderPredicate,
    strict: bool,
    chunk_size: usize,
    line_no: usize,
    open: Option<Record>,
    seen_header: bool,
    done: bool,
    buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn from_reader(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            file: "<reader>".to_owned(),
            predicate: HeaderPredicate::default(),
            strict: false,
            chunk_size: chunk_size.max(1),
            line_no: 0,
            open: None,
            seen_header: false,
            done: false,
            buf: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: HeaderPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// In strict mode, content before the first header and empty header
    /// lines fail with [`Error::Format`] instead of being skipped.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn format_err(&self, reason: &'static str) -> Error {
        Error::Format {
            file: self.file.clone(),
            line: self.line_no,
            reason,
        }
    }
}

impl<R: BufRead> Records for FastaRecords<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut res = Vec::with_capacity(self.chunk_size);

        if self.done {
            return Ok(res);
        }

        while res.len() < self.chunk_size {
            self.buf.clear();
            let n = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .map_err(|e| Error::FileIo {
                    file: self.file.clone(),
                    source: e,
                })?;

            if n == 0 {
                self.done = true;
                if let Some(record) = self.open.take() {
                    res.push(record);
                }
                break;
            }

            self.line_no += 1;
            let line = trim_end_ascii_whitespace(&self.buf);

            if line.is_empty() {
                continue;
            }

            if self.predicate.is_header(line) {
                if let Some(record) = self.open.take() {
                    res.push(record);
                }
                self.seen_header = true;

                let record = Record::new(self.predicate.strip(line));
                if record.header().is_empty() {
                    if self.strict {
                        self.done = true;
                        return Err(self.format_err("empty header line"));
                    }
                    // lenient: drop the record and its content entirely
                } else {
                    self.open = Some(record);
                }
            } else {
                match &mut self.open {
                    Some(record) => record.push_line(line),
                    None => {
                        if self.strict && !self.seen_header {
                            self.done = true;
                            return Err(self.format_err("content before the first header"));
                        }
                    }
                }
            }
        }

        Ok(res)
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Open a FASTA file as a record source. Files ending in `.gz` are
/// decompressed transparently.
pub fn iter_fasta(
    file: impl AsRef<str>,
    chunk_size: usize,
) -> Result<FastaRecords<Box<dyn BufRead>>> {
    let file = file.as_ref();
    let f = File::open(file).map_err(|e| Error::FileIo {
        file: file.to_owned(),
        source: e,
    })?;

    let reader: Box<dyn BufRead> = if file.ends_with(".gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };

    debug!("reading fasta records from {}", file);

    let mut records = FastaRecords::from_reader(reader, chunk_size);
    records.file = file.to_owned();
    Ok(records)
}

/// How record content is laid out when writing.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Wrap {
    /// Re-emit the stored content lines, preserving the original wrap.
    #[default]
    Keep,
    /// The whole sequence on a single line.
    Single,
    /// Re-wrap the sequence at a fixed width.
    Width(usize),
}

pub fn write_fasta_record(writer: &mut dyn Write, record: &Record, wrap: Wrap) -> Result<()> {
    writer.write_all(b">")?;
    writer.write_all(record.header())?;
    writer.write_all(b"\n")?;

    match wrap {
        Wrap::Keep => {
            for line in record.lines() {
                writer.write_all(line)?;
                writer.write_all(b"\n")?;
            }
        }
        Wrap::Single => {
            let seq = record.seq();
            if !seq.is_empty() {
                writer.write_all(seq)?;
                writer.write_all(b"\n")?;
            }
        }
        Wrap::Width(w) => {
            for chunk in record.seq().chunks(w.max(1)) {
                writer.write_all(chunk)?;
                writer.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

/// Create a buffered output sink. Paths ending in `.gz` are compressed.
pub fn create_sink(path: impl AsRef<Path>) -> Result<Box<dyn Write>> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::FileIo {
        file: path.display().to_string(),
        source: e,
    })?;

    let writer: Box<dyn Write> = if path.extension().is_some_and(|e| e == "gz") {
        Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
    } else {
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}
