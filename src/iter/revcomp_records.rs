use lazy_static::lazy_static;

use crate::iter::*;

pub use Alphabet::*;

/// Target alphabet for reverse-complement transformation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Alphabet {
    Dna,
    Rna,
}

lazy_static! {
    static ref DNA_COMPLEMENT: [u8; 256] =
        complement_table(b"AGCTYRWSKMDVHBN", b"TCGARYWSMKHBDVN");
    static ref RNA_COMPLEMENT: [u8; 256] =
        complement_table(b"AGCUYRWSKMDVHBN", b"UCGARYWSMKHBDVN");
    static ref DNA_RECOGNIZED: [bool; 256] = recognized_table(b"AGCTYRWSKMDVHBN");
    static ref RNA_RECOGNIZED: [bool; 256] = recognized_table(b"AGCUYRWSKMDVHBN");
}

// IUPAC alphabet, including ambiguity codes
fn complement_table(from: &[u8], to: &[u8]) -> [u8; 256] {
    let mut comp = [0; 256];

    for (v, a) in comp.iter_mut().enumerate() {
        *a = v as u8;
    }

    for (&a, &b) in from.iter().zip(to.iter()) {
        comp[a as usize] = b; // upper case
        comp[a as usize + 32] = b + 32; // lower case
    }

    comp
}

fn recognized_table(symbols: &[u8]) -> [bool; 256] {
    let mut recognized = [false; 256];

    for &s in symbols {
        recognized[s as usize] = true;
        recognized[s as usize + 32] = true;
    }

    recognized
}

impl Alphabet {
    fn complement(&self) -> &'static [u8; 256] {
        match self {
            Dna => &DNA_COMPLEMENT,
            Rna => &RNA_COMPLEMENT,
        }
    }

    fn recognized(&self) -> &'static [bool; 256] {
        match self {
            Dna => &DNA_RECOGNIZED,
            Rna => &RNA_RECOGNIZED,
        }
    }
}

pub struct RevCompRecords<R: Records> {
    records: R,
    alphabet: Alphabet,
    strict: bool,
}

impl<R: Records> RevCompRecords<R> {
    pub fn new(records: R, alphabet: Alphabet, strict: bool) -> Self {
        Self {
            records,
            alphabet,
            strict,
        }
    }
}

impl<R: Records> Records for RevCompRecords<R> {
    fn next_chunk(&mut self) -> Result<Vec<Record>> {
        let mut records = self.records.next_chunk()?;
        let comp = self.alphabet.complement();
        let recognized = self.alphabet.recognized();

        for record in records.iter_mut() {
            if self.strict {
                if let Some(pos) = record.seq().iter().position(|&c| !recognized[c as usize]) {
                    return Err(Error::Alphabet {
                        symbol: record.seq()[pos] as char,
                        pos,
                        header: utf8(record.header()),
                    });
                }
            }

            let revcomp: Vec<u8> = record
                .seq()
                .iter()
                .rev()
                .map(|&c| comp[c as usize])
                .collect();
            record.set_seq(revcomp);
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

    fn revcomp(seq: &[u8], alphabet: Alphabet, strict: bool) -> Result<Vec<u8>> {
        let input = [&b">s\n"[..], seq, &b"\n"[..]].concat();
        let records = FastaRecords::from_reader(Cursor::new(input), 16)
            .revcomp(alphabet, strict)
            .run_collect_records()?;
        Ok(records[0].seq().to_vec())
    }

    #[test]
    fn test_dna_revcomp() {
        assert_eq!(revcomp(b"ACGT", Dna, true).unwrap(), b"ACGT");
        assert_eq!(revcomp(b"AACG", Dna, true).unwrap(), b"CGTT");
        assert_eq!(revcomp(b"aacg", Dna, true).unwrap(), b"cgtt");
    }

    #[test]
    fn test_rna_revcomp() {
        assert_eq!(revcomp(b"AACG", Rna, true).unwrap(), b"CGUU");
        assert_eq!(revcomp(b"ACGU", Rna, true).unwrap(), b"ACGU");
    }

    #[test]
    fn test_ambiguity_codes_are_complemented() {
        assert_eq!(revcomp(b"RYN", Dna, true).unwrap(), b"NRY");
    }

    #[test]
    fn test_strict_rejects_unrecognized_symbols() {
        let err = revcomp(b"ACXGT", Dna, true).unwrap_err();
        assert!(matches!(
            err,
            Error::Alphabet {
                symbol: 'X',
                pos: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_lenient_passes_unrecognized_through() {
        assert_eq!(revcomp(b"AAXG", Dna, false).unwrap(), b"CXTT");
    }
}
