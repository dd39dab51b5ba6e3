use rustc_hash::{FxHashSet, FxHasher};

use std::hash::Hasher;

use crate::iter::*;

/// Content-addressable set of header fingerprints.
///
/// Fingerprints are 64-bit `FxHasher` digests of the header bytes;
/// collisions are a negligible-probability risk that is accepted rather
/// than handled. The set grows monotonically during one pipeline run and
/// is never shared across runs.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    seen: FxHashSet<u64>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this header was already tracked; otherwise tracks
    /// it and returns false.
    pub fn is_duplicate(&mut self, header: &[u8]) -> bool {
        let mut hasher = FxHasher::default();
        hasher.write(header);
        !self.seen.insert(hasher.finish())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

pub struct DedupRecords<R: Records> {
    records: R,
    tracker: DuplicateTracker,
}

impl<R: Records> DedupRecords<R> {
    pub fn new(records: R) -> Self {
        Self {
            records,
            tracker: DuplicateTracker::new(),
        }
    }
}

impl<R: Records> Records for DedupRecords<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;
        records.retain(|r| !self.tracker.is_duplicate(r.header()));
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
    fn test_is_duplicate_ordering() {
        let mut tracker = DuplicateTracker::new();
        assert!(!tracker.is_duplicate(b"seq1"));
        assert!(tracker.is_duplicate(b"seq1"));
        assert!(tracker.is_duplicate(b"seq1"));
        assert!(!tracker.is_duplicate(b"seq2"));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_fresh_trackers_are_independent() {
        let mut a = DuplicateTracker::new();
        assert!(!a.is_duplicate(b"seq1"));

        let mut b = DuplicateTracker::new();
        assert!(!b.is_duplicate(b"seq1"));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let input = b">a\nAC\n>a\nGG\n>b\nTT\n>a\nNN\n";
        let records = FastaRecords::from_reader(Cursor::new(input.to_vec()), 16)
            .dedup()
            .run_collect_records()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), b"a");
        assert_eq!(records[0].seq(), b"AC");
        assert_eq!(records[1].header(), b"b");
    }
}
