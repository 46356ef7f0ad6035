//! Columnar transposition: key ordering, encoding, decoding of ragged grids,
//! and exhaustive key search.
//!
//! This is a teaching cipher. It offers no confidentiality: the key space is
//! tiny and the brute-force search in [`search`] recovers short keys quickly.

pub mod analysis;
pub mod api;
pub mod cipher;
pub mod config;
pub mod error;
pub mod grid;
pub mod key;
pub mod padded;
pub mod search;
// cmd and reports are binary modules (declared in main.rs).
