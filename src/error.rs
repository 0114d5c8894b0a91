//! Error types for Huffman code construction and statistics.

use thiserror::Error;

/// Error variants for huffstat operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The frequency table has no symbols, so there is no tree to build.
    #[error("empty alphabet: no symbols to build a tree from")]
    EmptyAlphabet,

    /// A symbol was supplied with a count of zero.
    #[error("zero count for symbol {0}")]
    ZeroCount(String),

    /// A symbol was supplied more than once.
    #[error("duplicate symbol {0}")]
    DuplicateSymbol(String),

    /// A symbol in the frequency table has no code in the code map.
    #[error("no code for symbol {0}")]
    MissingCode(String),

    /// A statistic was requested over a total of zero symbols.
    #[error("total symbol count is zero")]
    EmptyTotal,

    /// A count, total or bit length does not fit in a `u64`.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Compression was requested against a baseline of zero bits.
    #[error("baseline length is zero")]
    ZeroBaseline,

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// An I/O error occurred while reading input or config.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for huffstat operations.
pub type Result<T> = std::result::Result<T, Error>;
