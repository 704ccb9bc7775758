use thiserror::Error;

/// Errors raised while decoding a `.aco` buffer.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unsupported version tag: {version}")]
    UnsupportedVersion { version: u16 },
    #[error("truncated buffer: need {needed} bytes, got {actual}")]
    TruncatedBuffer { needed: usize, actual: usize },
    #[error("section swatch counts disagree: {base} unnamed, {named} named")]
    BlockCountMismatch { base: u16, named: u16 },
}

/// Errors raised while serializing an in-memory model. These only occur
/// for models a decoder never produces (corrupted-model misuse).
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("too many swatches for one file: {count}")]
    TooManySwatches { count: usize },
    #[error("swatch name too long for the length field: {units} UTF-16 code units")]
    NameTooLong { units: usize },
}
