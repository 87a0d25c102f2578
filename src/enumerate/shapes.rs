//! Enumeration of skew partitions with a given number of cells.
//!
//! Only *reduced* skew partitions are produced: every row and every
//! column of the diagram contains at least one cell. This keeps the
//! class finite; the shapes are exactly those a skew tableau of that
//! size can have once empty rows are trimmed.

use crate::models::{Partition, SkewPartition};

/// All reduced skew partitions with `n` cells, in a deterministic
/// order: by row count, then by the composition of per-row cell
/// counts (first count descending), then by row offsets bottom-up.
pub fn skew_partitions(n: usize) -> Vec<SkewPartition> {
    if n == 0 {
        return vec![SkewPartition::empty()];
    }
    let mut res = Vec::new();
    for row_count in 1..=n {
        for counts in compositions(n, row_count) {
            collect_offsets(&counts, &mut res);
        }
    }
    res
}

/// Compositions of `n` into exactly `parts` positive parts, first part
/// descending.
fn compositions(n: usize, parts: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut cur = Vec::with_capacity(parts);
    compositions_rec(n, parts, &mut cur, &mut out);
    out
}

fn compositions_rec(n: usize, parts: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if parts == 0 {
        if n == 0 {
            out.push(cur.clone());
        }
        return;
    }
    // each remaining part needs at least one cell
    for first in (1..=n + 1 - parts).rev() {
        cur.push(first);
        compositions_rec(n - first, parts - 1, cur, out);
        cur.pop();
    }
}

/// Given per-row cell counts (top to bottom), enumerates the valid row
/// offsets and emits the resulting skew partitions.
///
/// Row `i` occupies columns `[s_i, s_i + c_i)`. Validity:
/// - `s_i >= s_{i+1}` (inner shape is a partition),
/// - `s_i + c_i >= s_{i+1} + c_{i+1}` (outer shape is a partition),
/// - `s_i <= s_{i+1} + c_{i+1}` (no empty column),
/// - the bottom row starts at column 0 (column 0 is occupied).
fn collect_offsets(counts: &[usize], out: &mut Vec<SkewPartition>) {
    let rows = counts.len();
    let mut offsets = vec![0usize; rows];
    offsets_rec(counts, rows - 1, &mut offsets, out);
}

fn offsets_rec(
    counts: &[usize],
    row: usize,
    offsets: &mut Vec<usize>,
    out: &mut Vec<SkewPartition>,
) {
    if row == 0 {
        let outer: Vec<usize> = offsets.iter().zip(counts).map(|(s, c)| s + c).collect();
        let inner: Vec<usize> = offsets.clone();
        let shape = SkewPartition::new(
            Partition::from_valid(outer),
            Partition::from_valid(inner),
        )
        .unwrap_or_else(|_| unreachable!("offset constraints guarantee containment"));
        out.push(shape);
        return;
    }
    let below_start = offsets[row];
    let below_end = below_start + counts[row];
    let lo = below_start.max(below_end.saturating_sub(counts[row - 1]));
    for s in lo..=below_end {
        offsets[row - 1] = s;
        offsets_rec(counts, row - 1, offsets, out);
    }
}
