//! Canonical columnar transposition.
//!
//! Plaintext is written row-major into a grid with one column per key rank
//! and read back column by column in key order. The last row may be partial;
//! its empty cells are skipped on both sides, so no filler character is ever
//! introduced.

use crate::grid::Grid;
use crate::key::{ColumnOrder, Key};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    pub cipher_text: String,
    pub column_order: ColumnOrder,
    pub plaintext_grid: Grid,
    /// The plaintext grid with its columns rearranged into read order.
    pub cipher_grid: Grid,
}

/// Encodes `plaintext` after stripping whitespace.
pub fn encode(plaintext: &str, key: &Key) -> Encoding {
    encode_with_order(plaintext, &key.column_order())
}

pub fn encode_with_order(plaintext: &str, order: &ColumnOrder) -> Encoding {
    let clean: Vec<char> = plaintext.chars().filter(|c| !c.is_whitespace()).collect();
    let columns = order.len();

    let plaintext_grid = Grid::from_chars(&clean, columns);
    let mut cipher_grid = Grid::empty(plaintext_grid.rows(), columns);
    let mut cipher_text = String::with_capacity(plaintext.len());

    for (position, col) in order.iter().enumerate() {
        for row in 0..plaintext_grid.rows() {
            if let Some(c) = plaintext_grid.cell(row, col) {
                cipher_text.push(c);
                cipher_grid.set(row, position, c);
            }
        }
    }

    Encoding {
        cipher_text,
        column_order: order.clone(),
        plaintext_grid,
        cipher_grid,
    }
}

/// Decodes `cipher_text` with `key`.
///
/// Any key works, including one of the wrong length or order; the result is
/// then simply a different arrangement of the same characters.
pub fn decode(cipher_text: &str, key: &Key) -> String {
    decode_with_order(cipher_text, &key.column_order())
}

pub fn decode_with_order(cipher_text: &str, order: &ColumnOrder) -> String {
    let chars: Vec<char> = cipher_text.chars().collect();
    decode_chars(&chars, order)
}

/// Column `col` holds `full_rows + 1` characters when `col < len % n`,
/// otherwise `full_rows`. Columns are consumed from the ciphertext in read
/// order with a single cursor.
pub(crate) fn decode_chars(cipher: &[char], order: &ColumnOrder) -> String {
    let columns = order.len();
    let len = cipher.len();
    if columns == 0 || len == 0 {
        return String::new();
    }

    let full_rows = len / columns;
    let remainder = len % columns;

    // Empty cells only trail the last row, so (row, col) reads back at row * columns + col.
    let mut plain = vec!['\0'; len];
    let mut cursor = 0;
    for col in order.iter() {
        let height = full_rows + usize::from(col < remainder);
        for row in 0..height {
            plain[row * columns + col] = cipher[cursor];
            cursor += 1;
        }
    }

    plain.into_iter().collect()
}
