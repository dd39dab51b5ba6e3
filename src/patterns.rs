use memchr::memmem;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::*;

/// Rule identifying a line as a record boundary marker.
///
/// The default is the FASTA convention: the line starts with `>`. A
/// caller-compiled regex can be substituted for inputs that mark headers
/// differently; the crate never compiles header patterns itself.
#[derive(Debug, Clone)]
pub enum HeaderPredicate {
    Marker(u8),
    Regex(Regex),
}

impl Default for HeaderPredicate {
    fn default() -> Self {
        HeaderPredicate::Marker(b'>')
    }
}

impl HeaderPredicate {
    pub fn is_header(&self, line: &[u8]) -> bool {
        match self {
            HeaderPredicate::Marker(m) => line.first() == Some(m),
            HeaderPredicate::Regex(re) => re.is_match(line),
        }
    }

    /// The header text of a matched line: the line without its marker.
    /// For regex predicates the conventional `>` is stripped when present.
    pub fn strip<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        match self {
            HeaderPredicate::Marker(m) => match line.first() {
                Some(c) if c == m => &line[1..],
                _ => line,
            },
            HeaderPredicate::Regex(_) => match line.first() {
                Some(b'>') => &line[1..],
                _ => line,
            },
        }
    }
}

/// One header-match pattern: fixed-string containment or a pre-compiled
/// regex search.
#[derive(Debug, Clone)]
pub enum Pattern {
    Fixed(Vec<u8>),
    Regex(Regex),
}

impl Pattern {
    pub fn matches(&self, header: &[u8]) -> bool {
        match self {
            Pattern::Fixed(s) => memmem::find(header, s).is_some(),
            Pattern::Regex(re) => re.is_match(header),
        }
    }
}

/// Serialized form of a pattern set, loadable from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternsSpec {
    #[serde(default)]
    pub fixed_strings: bool,
    pub patterns: Vec<String>,
}

/// A set of header patterns with ANY-match semantics: a header matches if
/// any pattern matches, tested in order with short-circuiting.
#[derive(Debug, Clone, Default)]
pub struct Patterns {
    patterns: Vec<Pattern>,
}

impl Patterns {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Fixed-string patterns; never fails since nothing is compiled.
    pub fn fixed(strings: impl IntoIterator<Item = impl AsRef<[u8]>>) -> Self {
        Self {
            patterns: strings
                .into_iter()
                .map(|s| Pattern::Fixed(s.as_ref().to_vec()))
                .collect(),
        }
    }

    /// Compile regex patterns. Errors come straight from the regex crate.
    pub fn regex(patterns: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Self> {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref().trim();
                Regex::new(p)
                    .map(Pattern::Regex)
                    .map_err(|e| Error::Pattern {
                        pattern: p.to_owned(),
                        source: Box::new(e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn from_spec(spec: PatternsSpec) -> Result<Self> {
        if spec.fixed_strings {
            Ok(Self::fixed(spec.patterns.iter().map(|p| p.trim().as_bytes())))
        } else {
            Self::regex(spec.patterns)
        }
    }

    pub fn from_yaml(yaml: &[u8]) -> Result<Self> {
        let spec: PatternsSpec =
            serde_yaml::from_slice(yaml).map_err(|e| Error::ParsePatterns {
                patterns: utf8(yaml),
                source: Box::new(e),
            })?;
        Self::from_spec(spec)
    }

    /// One pattern per line, the layout of a pattern list file.
    pub fn from_list(text: &[u8], fixed_strings: bool) -> Result<Self> {
        let lines = text
            .split(|&c| c == b'\n')
            .map(|l| String::from_utf8_lossy(l).trim().to_owned())
            .filter(|l| !l.is_empty());
        if fixed_strings {
            Ok(Self::fixed(lines.map(String::into_bytes)))
        } else {
            Self::regex(lines)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, header: &[u8]) -> bool {
        self.patterns.iter().any(|p| p.matches(header))
    }
}
