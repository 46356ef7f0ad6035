//! Filler-padded transposition.
//!
//! Fills the grid's trailing cells with a filler character so every column
//! has the same height, and strips trailing fillers after decoding. This only
//! round-trips when the filler never occurs in the plaintext, so plaintext
//! containing it is rejected. Kept separate from [`crate::cipher`]: the two
//! produce different ciphertexts for the same key whenever the text does not
//! fill the grid exactly.

use crate::cipher::{encode_with_order, Encoding};
use crate::error::{TrResult, TranspositionError};
use crate::grid::Grid;
use crate::key::Key;
use strum_macros::{Display, EnumIter, EnumString};

/// How the final grid row is treated.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "snake_case")]
pub enum GridFill {
    /// Empty trailing cells, no filler.
    #[default]
    Ragged,
    /// Trailing cells hold a filler character.
    Padded,
}

pub const DEFAULT_FILLER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedCipher {
    filler: char,
}

impl Default for PaddedCipher {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
        }
    }
}

impl PaddedCipher {
    pub fn new(filler: char) -> TrResult<Self> {
        if filler.is_whitespace() {
            return Err(TranspositionError::InvalidFiller(filler));
        }
        Ok(Self { filler })
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn encode(&self, plaintext: &str, key: &Key) -> TrResult<Encoding> {
        let mut chars: Vec<char> = plaintext.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.contains(&self.filler) {
            return Err(TranspositionError::FillerInInput(self.filler));
        }

        let columns = key.len();
        let cells = chars.len().div_ceil(columns) * columns;
        chars.resize(cells, self.filler);

        let padded: String = chars.into_iter().collect();
        Ok(encode_with_order(&padded, &key.column_order()))
    }

    /// Every column is read back at full height. A ciphertext whose length
    /// is not a multiple of the key length leaves the last cells empty.
    pub fn decode(&self, cipher_text: &str, key: &Key) -> String {
        let chars: Vec<char> = cipher_text.chars().collect();
        let columns = key.len();
        let rows = chars.len().div_ceil(columns);

        let mut grid = Grid::empty(rows, columns);
        let mut remaining = chars.into_iter();
        'columns: for col in key.column_order().iter() {
            for row in 0..rows {
                match remaining.next() {
                    Some(c) => grid.set(row, col, c),
                    None => break 'columns,
                }
            }
        }

        grid.read_rows().trim_end_matches(self.filler).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_encoding_reads_fillers() {
        let key = Key::new(vec![3, 1, 2]).unwrap();
        let enc = PaddedCipher::default().encode("HELLOWORLD", &key).unwrap();
        assert_eq!(enc.cipher_text, "EOR_LWL_HLOD");
        assert_eq!(enc.plaintext_grid.filled(), 12);
    }

    #[test]
    fn test_padded_round_trip() {
        let key = Key::from_keyword("HACK").unwrap();
        let cipher = PaddedCipher::default();
        let enc = cipher.encode("jamal ardi", &key).unwrap();
        assert_eq!(cipher.decode(&enc.cipher_text, &key), "jamalardi");
    }

    #[test]
    fn test_filler_in_plaintext_rejected() {
        let key = Key::new(vec![2, 1]).unwrap();
        let res = PaddedCipher::default().encode("snake_case", &key);
        assert!(matches!(res, Err(TranspositionError::FillerInInput('_'))));
    }

    #[test]
    fn test_whitespace_filler_rejected() {
        assert!(matches!(
            PaddedCipher::new(' '),
            Err(TranspositionError::InvalidFiller(' '))
        ));
    }

    #[test]
    fn test_ragged_ciphertext_does_not_decode_padded() {
        let key = Key::new(vec![3, 1, 2]).unwrap();
        let ragged = crate::cipher::encode("HELLOWORLD", &key).cipher_text;
        let decoded = PaddedCipher::default().decode(&ragged, &key);
        assert_ne!(decoded, "HELLOWORLD");
        assert_eq!(decoded.chars().count(), 10);
    }

    #[test]
    fn test_grid_fill_names() {
        assert_eq!(GridFill::Padded.to_string(), "padded");
        assert_eq!("ragged".parse::<GridFill>().unwrap(), GridFill::Ragged);
    }
}
