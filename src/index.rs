use rustc_hash::FxHashMap;

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::errors::*;
use crate::parse_utils::*;

/// Byte offsets of one physical record occurrence.
///
/// `start` is the offset of the `>` marker, `header_end` the offset just
/// past the header line's newline, and `end` the offset of the next
/// record's start (or end of file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpan {
    pub start: u64,
    pub header_end: u64,
    pub end: u64,
}

/// Byte-offset index over a FASTA file for random access without
/// re-scanning.
///
/// Built by a single forward scan that records a span per header line;
/// no sequence content is materialized. A header may repeat, so each key
/// maps to the list of its physical occurrences in file order. Queries
/// resolve to the first occurrence.
#[derive(Debug, Default)]
pub struct FastaIndex {
    spans: FxHashMap<Vec<u8>, Vec<IndexSpan>>,
}

impl FastaIndex {
    pub fn build(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::FileIo {
            file: path.display().to_string(),
            source: e,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut spans: FxHashMap<Vec<u8>, Vec<IndexSpan>> = FxHashMap::default();
        let mut open: Option<(Vec<u8>, IndexSpan)> = None;
        let mut offset = 0u64;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let n = reader.read_until(b'\n', &mut buf)? as u64;
            if n == 0 {
                break;
            }

            if buf.first() == Some(&b'>') {
                if let Some((header, mut span)) = open.take() {
                    span.end = offset;
                    spans.entry(header).or_default().push(span);
                }

                let header = trim_end_ascii_whitespace(&buf[1..]).to_vec();
                open = Some((
                    header,
                    IndexSpan {
                        start: offset,
                        header_end: offset + n,
                        end: 0,
                    },
                ));
            }

            offset += n;
        }

        if let Some((header, mut span)) = open.take() {
            span.end = offset;
            spans.entry(header).or_default().push(span);
        }

        Ok(Self { spans })
    }

    /// All recorded occurrences for a header, in file order.
    pub fn get(&self, header: &[u8]) -> Option<&[IndexSpan]> {
        self.spans.get(header).map(|v| v.as_slice())
    }

    pub fn contains(&self, header: &[u8]) -> bool {
        self.spans.contains_key(header)
    }

    /// Number of distinct headers in the index.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Extract the raw bytes of the first recorded occurrence of a header
    /// by seeking directly to its span. The `&mut` borrow makes the shared
    /// seek position exclusive for the duration of the call.
    pub fn fetch<R: Read + Seek>(&self, reader: &mut R, header: &[u8]) -> Result<Vec<u8>> {
        let span = self
            .get(header)
            .and_then(|spans| spans.first())
            .ok_or_else(|| Error::HeaderNotFound(utf8(header)))?;

        reader.seek(SeekFrom::Start(span.start))?;
        let mut bytes = vec![0u8; (span.end - span.start) as usize];
        reader.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn fetch_path(&self, path: impl AsRef<Path>, header: &[u8]) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| Error::FileIo {
            file: path.display().to_string(),
            source: e,
        })?;
        self.fetch(&mut file, header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn index(input: &[u8]) -> FastaIndex {
        FastaIndex::from_reader(Cursor::new(input.to_vec())).unwrap()
    }

    #[test]
    fn test_spans_are_byte_accurate() {
        let idx = index(b">a\nACGT\n>b\nGG\n");
        assert_eq!(idx.len(), 2);
        assert_eq!(
            idx.get(b"a").unwrap(),
            &[IndexSpan {
                start: 0,
                header_end: 3,
                end: 8,
            }][..]
        );
        assert_eq!(
            idx.get(b"b").unwrap(),
            &[IndexSpan {
                start: 8,
                header_end: 11,
                end: 14,
            }][..]
        );
    }

    #[test]
    fn test_duplicate_headers_accumulate() {
        let idx = index(b">a\nAC\n>a\nGG\n");
        let spans = idx.get(b"a").unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, 6);
        assert_eq!(spans[1].start, 6);
        assert_eq!(spans[1].end, 12);
    }

    #[test]
    fn test_header_immediately_before_eof() {
        let idx = index(b">a\nACGT\n>b");
        let span = idx.get(b"b").unwrap()[0];
        assert_eq!(span.start, 8);
        assert_eq!(span.header_end, 10);
        assert_eq!(span.end, 10);
    }

    #[test]
    fn test_crlf_headers_are_trimmed_keys() {
        let idx = index(b">a\r\nAC\r\n");
        let span = idx.get(b"a").unwrap()[0];
        assert_eq!(span.start, 0);
        assert_eq!(span.header_end, 4);
        assert_eq!(span.end, 8);
    }

    #[test]
    fn test_fetch_returns_raw_record_bytes() {
        let input = b">a\nACGT\n>b\nGG\n";
        let idx = index(input);
        let mut reader = Cursor::new(input.to_vec());
        assert_eq!(idx.fetch(&mut reader, b"a").unwrap(), b">a\nACGT\n");
        assert_eq!(idx.fetch(&mut reader, b"b").unwrap(), b">b\nGG\n");
    }

    #[test]
    fn test_fetch_first_occurrence_wins() {
        let input = b">a\nAC\n>a\nGG\n";
        let idx = index(input);
        let mut reader = Cursor::new(input.to_vec());
        assert_eq!(idx.fetch(&mut reader, b"a").unwrap(), b">a\nAC\n");
    }

    #[test]
    fn test_fetch_unknown_header() {
        let idx = index(b">a\nAC\n");
        let mut reader = Cursor::new(b">a\nAC\n".to_vec());
        let err = idx.fetch(&mut reader, b"missing").unwrap_err();
        assert!(matches!(err, Error::HeaderNotFound(_)));
    }

    #[test]
    fn test_empty_input() {
        let idx = index(b"");
        assert!(idx.is_empty());
    }
}
