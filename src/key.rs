use crate::error::{TrResult, TranspositionError};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transposition key: one rank per grid column.
///
/// Ranks only need to be comparable. `[1, 2, 3, 5, 4]` and `[10, 20, 30, 50, 40]`
/// describe the same column order. A `Key` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Key(Vec<i64>);

impl Key {
    pub fn new(ranks: Vec<i64>) -> TrResult<Self> {
        if ranks.is_empty() {
            return Err(TranspositionError::InvalidKey(
                "key must contain at least one rank".to_string(),
            ));
        }
        Ok(Self(ranks))
    }

    /// Parses a list like `"3, 1, 2"`. Entries that are not integers are dropped.
    pub fn parse(input: &str) -> TrResult<Self> {
        let ranks: Vec<i64> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter_map(|token| token.trim().parse().ok())
            .collect();

        if ranks.is_empty() {
            return Err(TranspositionError::InvalidKey(format!(
                "no numeric ranks in '{}'",
                input
            )));
        }
        Ok(Self(ranks))
    }

    /// Keyword key: each character ranks by its code point, so `"HACK"`
    /// reads column A, then C, then H, then K.
    pub fn from_keyword(word: &str) -> TrResult<Self> {
        let ranks: Vec<i64> = word
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c as i64)
            .collect();

        if ranks.is_empty() {
            return Err(TranspositionError::InvalidKey(
                "keyword is empty".to_string(),
            ));
        }
        Ok(Self(ranks))
    }

    /// `[1, 2, ..., n]`.
    pub fn identity(n: usize) -> TrResult<Self> {
        Self::new((1..=n as i64).collect())
    }

    /// A shuffled `[1..=n]`.
    pub fn random(rng: &mut Rng, n: usize) -> TrResult<Self> {
        let mut ranks: Vec<i64> = (1..=n as i64).collect();
        rng.shuffle(&mut ranks);
        Self::new(ranks)
    }

    pub fn ranks(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn column_order(&self) -> ColumnOrder {
        ColumnOrder(stable_rank_order(&self.0))
    }
}

impl TryFrom<Vec<i64>> for Key {
    type Error = TranspositionError;

    fn try_from(ranks: Vec<i64>) -> TrResult<Self> {
        Self::new(ranks)
    }
}

impl From<Key> for Vec<i64> {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl FromStr for Key {
    type Err = TranspositionError;

    fn from_str(s: &str) -> TrResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Read order of grid columns. `order[i]` is the original column index
/// consumed i-th. Always a permutation of `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColumnOrder(Vec<usize>);

impl ColumnOrder {
    /// Callers guarantee `ranks` is non-empty.
    pub(crate) fn of_ranks<R: Ord>(ranks: &[R]) -> Self {
        ColumnOrder(stable_rank_order(ranks))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Read position of each original column (the inverse permutation).
    pub fn positions(&self) -> Vec<usize> {
        let mut pos = vec![0; self.0.len()];
        for (i, &col) in self.0.iter().enumerate() {
            pos[col] = i;
        }
        pos
    }
}

impl std::ops::Index<usize> for ColumnOrder {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.0[i]
    }
}

/// Derives the column read order for any comparable ranks.
///
/// Equal ranks keep their original left-to-right order.
pub fn derive_column_order<R: Ord>(ranks: &[R]) -> TrResult<ColumnOrder> {
    if ranks.is_empty() {
        return Err(TranspositionError::InvalidKey(
            "key must contain at least one rank".to_string(),
        ));
    }
    Ok(ColumnOrder(stable_rank_order(ranks)))
}

fn stable_rank_order<R: Ord>(ranks: &[R]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..ranks.len()).collect();
    // slice::sort_by is stable
    indices.sort_by(|&a, &b| ranks[a].cmp(&ranks[b]));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_follows_ranks() {
        let key = Key::new(vec![3, 1, 2]).unwrap();
        assert_eq!(key.column_order().as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn test_non_contiguous_ranks() {
        let order = derive_column_order(&[10, 50, 30, 20]).unwrap();
        assert_eq!(order.as_slice(), &[0, 3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let order = derive_column_order(&[2, 1, 2, 1]).unwrap();
        assert_eq!(order.as_slice(), &[1, 3, 0, 2]);
    }

    #[test]
    fn test_empty_ranks_rejected() {
        let empty: [i64; 0] = [];
        assert!(matches!(
            derive_column_order(&empty),
            Err(TranspositionError::InvalidKey(_))
        ));
        assert!(Key::new(vec![]).is_err());
    }

    #[test]
    fn test_parse_drops_garbage() {
        let key = Key::parse("3, x, 1,,2 foo").unwrap();
        assert_eq!(key.ranks(), &[3, 1, 2]);
    }

    #[test]
    fn test_parse_all_garbage_is_invalid() {
        assert!(matches!(
            Key::parse("a, b, c"),
            Err(TranspositionError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_keyword_ranks() {
        let key = Key::from_keyword("HACK").unwrap();
        assert_eq!(key.column_order().as_slice(), &[1, 2, 0, 3]);
    }

    #[test]
    fn test_positions_inverts_order() {
        let order = derive_column_order(&[3, 1, 2]).unwrap();
        assert_eq!(order.positions(), vec![2, 0, 1]);
    }

    #[test]
    fn test_random_key_is_permutation() {
        let mut rng = Rng::with_seed(7);
        let key = Key::random(&mut rng, 6).unwrap();
        let mut sorted = key.ranks().to_vec();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_display() {
        let key = Key::new(vec![1, 2, 3, 5, 4]).unwrap();
        assert_eq!(key.to_string(), "1, 2, 3, 5, 4");
    }
}
