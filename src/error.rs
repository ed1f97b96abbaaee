//! RandHex-specific errors
use thiserror::Error;

/// An error that RandHex could end up producing.
///
/// All of them are related to the shape of the data, either when building a
/// fixture, when splitting it into rows or when reading rows back.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RandHexError {
    #[error("expected exactly {expected} bytes, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("Row width is zero")]
    ZeroRowWidth,
    #[error("{len} bytes cannot be split into rows of {row_width}")]
    RaggedRows { len: usize, row_width: usize },
    /// `token` is the offending token, without its trailing comma.
    #[error("invalid hexadecimal literal: {token:?}")]
    InvalidToken { token: String },
    #[error("row does not end with a comma")]
    MissingTrailingComma,
}
