//! RandHex: random bytes as C-style hexadecimal literals
//!
//! Generates a [`fixture::Fixture`] of [`NB_BYTES`] random bytes and renders
//! it as [`NB_ROWS`] lines of [`BYTES_PER_ROW`] literals such as `0x4,0xFB,`,
//! ready to be pasted into a `uint8_t` array.
pub mod error;
pub mod fixture;
pub mod format;

/// number of random bytes in a fixture
pub const NB_BYTES: usize = 512;
/// number of hexadecimal literals on a single line of output
pub const BYTES_PER_ROW: usize = 16;
/// number of lines of output
pub const NB_ROWS: usize = NB_BYTES / BYTES_PER_ROW;
