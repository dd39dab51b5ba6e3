use log::warn;

use std::io::Write;
use std::path::PathBuf;

use crate::iter::*;

pub struct CollectFastaRecords<R: Records, W: Write> {
    records: R,
    writer: W,
    wrap: Wrap,
}

impl<R: Records, W: Write> CollectFastaRecords<R, W> {
    pub fn new(records: R, writer: W, wrap: Wrap) -> Self {
        Self {
            records,
            writer,
            wrap,
        }
    }
}

impl<R: Records, W: Write> Records for CollectFastaRecords<R, W> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let records = self.records.next_chunk()?;

        for record in &records {
            write_fasta_record(&mut self.writer, record, self.wrap)?;
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Thresholds and naming for split output.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Destination directory; must already exist.
    pub dir: PathBuf,
    pub prefix: String,
    /// Appended verbatim after the file index, typically the input file's
    /// extension (including the dot).
    pub extension: String,
    /// Maximum records per file; 0 disables the count threshold.
    pub max_records: usize,
    /// Maximum cumulative sequence length per file; 0 disables the length
    /// threshold.
    pub max_len: usize,
}

/// A rotating sequence of output sinks named
/// `<prefix><fileIndex><extension>`, with the file index starting at 0.
///
/// Rotation happens before a write when the active sink's record count or
/// cumulative sequence length would exceed its threshold. The previous
/// sink is flushed and closed before its replacement is opened. A record
/// longer than the length threshold by itself still goes into its own
/// file; that condition is reported as a warning, not an error.
pub struct SplitSinks {
    config: SplitConfig,
    writer: Option<Box<dyn Write>>,
    file_index: usize,
    records_in_file: usize,
    len_in_file: usize,
}

impl std::fmt::Debug for SplitSinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitSinks")
            .field("config", &self.config)
            .field("writer", &self.writer.as_ref().map(|_| "<writer>"))
            .field("file_index", &self.file_index)
            .field("records_in_file", &self.records_in_file)
            .field("len_in_file", &self.len_in_file)
            .finish()
    }
}

impl SplitSinks {
    pub fn new(config: SplitConfig) -> Result<Self> {
        if !config.dir.is_dir() {
            return Err(Error::Path {
                path: config.dir.display().to_string(),
            });
        }

        Ok(Self {
            config,
            writer: None,
            file_index: 0,
            records_in_file: 0,
            len_in_file: 0,
        })
    }

    fn rotate(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }

        let name = format!(
            "{}{}{}",
            self.config.prefix, self.file_index, self.config.extension
        );
        self.writer = Some(create_sink(self.config.dir.join(name))?);
        self.file_index += 1;
        self.records_in_file = 0;
        self.len_in_file = 0;
        Ok(())
    }

    pub fn write(&mut self, record: &Record, wrap: Wrap) -> Result<()> {
        let len = record.seq_len();
        let over_count =
            self.config.max_records > 0 && self.records_in_file >= self.config.max_records;
        let over_len = self.config.max_len > 0 && self.len_in_file + len > self.config.max_len;

        if self.writer.is_none() || over_count || over_len {
            self.rotate()?;
        }

        if self.config.max_len > 0 && len > self.config.max_len {
            warn!(
                "record \"{}\" alone exceeds the per-file length limit ({} > {}); writing it to its own file",
                utf8(record.header()),
                len,
                self.config.max_len
            );
        }

        let writer = self.writer.as_mut().unwrap();
        write_fasta_record(writer, record, wrap)?;
        self.records_in_file += 1;
        self.len_in_file += len;
        Ok(())
    }

    /// Number of sinks opened so far.
    pub fn files_created(&self) -> usize {
        self.file_index
    }

    pub fn finish(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

pub struct SplitFastaRecords<R: Records> {
    records: R,
    sinks: SplitSinks,
    wrap: Wrap,
}

impl<R: Records> SplitFastaRecords<R> {
    pub fn new(records: R, sinks: SplitSinks, wrap: Wrap) -> Self {
        Self {
            records,
            sinks,
            wrap,
        }
    }
}

impl<R: Records> Records for SplitFastaRecords<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let records = self.records.next_chunk()?;

        for record in &records {
            self.sinks.write(record, self.wrap)?;
        }

        Ok(records)
    }

    fn finish(&mut self) -> Result<()> {
        self.records.finish()?;
        self.sinks.finish()
    }
}
