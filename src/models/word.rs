//! Reading-word helpers.
//!
//! A tableau's reading word is a plain sequence of positive integers;
//! these functions cover the word-level operations the tableau
//! conversions need: standardization, evaluation, and the permutation
//! test.

/// The standard permutation of a word: all occurrences of the smallest
/// letter are replaced by `1, 2, ..., k_1` from left to right, the next
/// letter by `k_1 + 1, ...`, and so on.
pub fn standard_permutation(word: &[u32]) -> Vec<u32> {
    let mut letters: Vec<u32> = word.to_vec();
    letters.sort_unstable();
    letters.dedup();

    let mut result = vec![0u32; word.len()];
    let mut next = 1u32;
    for letter in letters {
        for (j, &w) in word.iter().enumerate() {
            if w == letter {
                result[j] = next;
                next += 1;
            }
        }
    }
    result
}

/// Multiplicity of each value `1..=max(word)`; empty for the empty word.
pub fn evaluation(word: &[u32]) -> Vec<usize> {
    let max = match word.iter().max() {
        Some(&m) => m,
        None => return Vec::new(),
    };
    let mut counts = vec![0usize; max as usize];
    for &w in word {
        counts[(w - 1) as usize] += 1;
    }
    counts
}

/// Whether the word is a permutation of `1..=len`.
pub fn is_permutation(word: &[u32]) -> bool {
    let mut sorted: Vec<u32> = word.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(i, &w)| w == (i + 1) as u32)
}
