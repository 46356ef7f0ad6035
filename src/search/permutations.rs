//! Lexicographic permutations of `1..=n`, generated lazily.
//!
//! [`nth_permutation`] unranks an index through the factorial number system,
//! so enumeration can start anywhere and be split into independent chunks.

/// `n!`, or `None` on overflow.
pub fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// The permutation of `1..=n` at lexicographic position `index`.
pub fn nth_permutation(n: usize, index: usize) -> Option<Vec<i64>> {
    if index >= factorial(n)? {
        return None;
    }

    let mut pool: Vec<i64> = (1..=n as i64).collect();
    let mut perm = Vec::with_capacity(n);
    let mut rest = index;
    for remaining in (1..=n).rev() {
        let block = factorial(remaining - 1)?;
        perm.push(pool.remove(rest / block));
        rest %= block;
    }
    Some(perm)
}

/// Advances `v` to its lexicographic successor. Returns false (leaving `v`
/// untouched) when `v` is already the last permutation.
pub fn next_permutation(v: &mut [i64]) -> bool {
    if v.len() < 2 {
        return false;
    }

    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] >= v[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = v.len() - 1;
    while v[j] <= v[i - 1] {
        j -= 1;
    }
    v.swap(i - 1, j);
    v[i..].reverse();
    true
}

/// Iterator over permutations of `1..=n` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Vec<i64>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: Some((1..=n as i64).collect()),
        }
    }

    /// Starts at lexicographic position `index`; empty if out of range.
    pub fn starting_at(n: usize, index: usize) -> Self {
        Self {
            current: nth_permutation(n, index),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        let current = self.current.take()?;
        let mut successor = current.clone();
        if next_permutation(&mut successor) {
            self.current = Some(successor);
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(100), None);
    }

    #[test]
    fn test_three_in_order() {
        let all: Vec<Vec<i64>> = Permutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_count_and_uniqueness() {
        let all: HashSet<Vec<i64>> = Permutations::new(6).collect();
        assert_eq!(all.len(), 720);
    }

    #[test]
    fn test_unranking_matches_iteration() {
        for (i, perm) in Permutations::new(5).enumerate() {
            assert_eq!(nth_permutation(5, i), Some(perm));
        }
        assert_eq!(nth_permutation(5, 120), None);
    }

    #[test]
    fn test_starting_at_resumes() {
        let tail: Vec<Vec<i64>> = Permutations::starting_at(4, 20).collect();
        assert_eq!(tail.len(), 4);
        assert_eq!(tail[0], vec![4, 2, 1, 3]);
        assert_eq!(tail[3], vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_single_element() {
        let all: Vec<Vec<i64>> = Permutations::new(1).collect();
        assert_eq!(all, vec![vec![1]]);
    }
}
