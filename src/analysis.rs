use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharFrequency {
    pub ch: char,
    pub count: usize,
    pub percent: f32,
}

/// Character histogram of `text` with whitespace removed, most frequent first.
/// Ties sort by character.
pub fn char_frequencies(text: &str) -> Vec<CharFrequency> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }

    let mut freqs: Vec<CharFrequency> = counts
        .into_iter()
        .map(|(ch, count)| CharFrequency {
            ch,
            count,
            percent: count as f32 / total as f32 * 100.0,
        })
        .collect();

    freqs.sort_by(|a, b| b.count.cmp(&a.count).then(a.ch.cmp(&b.ch)));
    freqs
}
