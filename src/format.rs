//! render bytes as rows of C-style hexadecimal literals and read them back
use std::fmt;
use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::{error::RandHexError, fixture::Fixture, BYTES_PER_ROW, NB_ROWS};

/// formats a single byte as `0x` followed by its uppercase hexadecimal digits
///
/// there is no padding: `0` is `0x0`, `16` is `0x10` and `255` is `0xFF`.
pub fn hex_literal(byte: u8) -> String {
    format!("0x{:X}", byte)
}

/// formats bytes as comma-terminated literals, with no other separator
///
/// # Example
/// ```
/// # use randhex::format::format_row;
/// assert_eq!(format_row(&[0, 255, 16]), "0x0,0xFF,0x10,");
/// ```
pub fn format_row(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| hex_literal(b) + ",").collect()
}

/// splits bytes into rows of `row_width` literals
///
/// # Errors
/// - [`RandHexError::ZeroRowWidth`] if `row_width` is zero
/// - [`RandHexError::RaggedRows`] if the last row would be shorter than the
///   others
pub fn format_rows(bytes: &[u8], row_width: usize) -> Result<Vec<String>, RandHexError> {
    if row_width == 0 {
        return Err(RandHexError::ZeroRowWidth);
    }
    if bytes.len() % row_width != 0 {
        return Err(RandHexError::RaggedRows {
            len: bytes.len(),
            row_width,
        });
    }

    Ok(bytes.chunks(row_width).map(format_row).collect())
}

/// reads back a row produced by [`format_row`]
///
/// every token has to match `0x[0-9A-F]{1,2},`.
pub fn parse_row(line: &str) -> Result<Vec<u8>, RandHexError> {
    let body = line
        .strip_suffix(',')
        .ok_or(RandHexError::MissingTrailingComma)?;

    body.split(',').map(parse_literal).collect()
}

fn parse_literal(token: &str) -> Result<u8, RandHexError> {
    let invalid = || RandHexError::InvalidToken {
        token: token.to_string(),
    };

    let digits = token.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.is_empty()
        || digits.len() > 2
        || !digits
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    {
        return Err(invalid());
    }

    u8::from_str_radix(digits, 16).map_err(|_| invalid())
}

impl Fixture {
    /// the [`NB_ROWS`] rows of [`BYTES_PER_ROW`] literals
    pub fn rows(&self) -> Vec<String> {
        self.as_bytes().chunks(BYTES_PER_ROW).map(format_row).collect()
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

/// writes the rows of a fixture, one per line, and flushes the writer
pub fn write_fixture(fixture: &Fixture, writer: &mut impl Write) -> Result<()> {
    info!("writing {} rows of {} bytes", NB_ROWS, BYTES_PER_ROW);
    for row in fixture.rows() {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()?;

    Ok(())
}
