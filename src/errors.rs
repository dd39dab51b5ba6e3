use thiserror;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error reading or writing \"{file}\": {source}")]
    FileIo {
        file: String,
        source: std::io::Error,
    },

    #[error("Error reading or writing bytes: {0}")]
    BytesIo(#[from] std::io::Error),

    #[error("Malformed record on line {line} in {file}: {reason}")]
    Format {
        file: String,
        line: usize,
        reason: &'static str,
    },

    #[error("Output path \"{path}\" does not exist")]
    Path { path: String },

    #[error("Unrecognized symbol '{symbol}' at position {pos} in the sequence of \"{header}\"")]
    Alphabet {
        symbol: char,
        pos: usize,
        header: String,
    },

    #[error("Error compiling pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        source: Box<dyn std::error::Error>,
    },

    #[error("Error parsing patterns:\n\"{patterns}\"\n{source}")]
    ParsePatterns {
        patterns: String,
        source: Box<dyn std::error::Error>,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Header not found in index: \"{0}\"")]
    HeaderNotFound(String),
}

pub fn utf8(b: &[u8]) -> String {
    String::from_utf8_lossy(b).into_owned()
}
