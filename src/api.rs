//! Pure entry points for presentation layers.
//!
//! Keys arrive as plain rank slices and results leave as serializable
//! values; nothing here keeps state between calls.

use crate::cipher::{self, Encoding};
use crate::config::Config;
use crate::error::TrResult;
use crate::key::{self, ColumnOrder, Key};
use crate::search::{BruteForce, CandidateResult, KeyLengthRange};

/// Service: Column read order for any comparable ranks.
pub fn derive_column_order<R: Ord>(key: &[R]) -> TrResult<ColumnOrder> {
    key::derive_column_order(key)
}

/// Service: Encode whitespace-stripped plaintext.
pub fn encode(plaintext: &str, key: &[i64]) -> TrResult<Encoding> {
    let key = Key::new(key.to_vec())?;
    Ok(cipher::encode(plaintext, &key))
}

/// Service: Decode with any non-empty key.
pub fn decode(cipher_text: &str, key: &[i64]) -> TrResult<String> {
    let key = Key::new(key.to_vec())?;
    Ok(cipher::decode(cipher_text, &key))
}

/// Service: Try every key with a length in `min..=max`, using the default cap.
pub fn brute_force(
    cipher_text: &str,
    key_lengths: (usize, usize),
) -> TrResult<Vec<CandidateResult>> {
    brute_force_with(cipher_text, key_lengths, &Config::default())
}

pub fn brute_force_with(
    cipher_text: &str,
    (min, max): (usize, usize),
    config: &Config,
) -> TrResult<Vec<CandidateResult>> {
    let range = KeyLengthRange::new(min, max)?;
    BruteForce::from(config).run(cipher_text, range)
}
