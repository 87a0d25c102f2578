//! Linear extensions of a skew shape's cell order.
//!
//! A standard filling of a skew shape is exactly a linear extension of
//! the partial order "a cell comes after the cells above it and to its
//! left within the shape". Extensions are produced in lexicographic
//! order of the cell sequence under row-major cell ranking, which is
//! the order the standard enumeration lists tableaux in.

use crate::models::SkewPartition;

/// All linear extensions of `shape`'s cell poset, each as a sequence of
/// cell coordinates, in lexicographic order.
pub fn linear_extensions(shape: &SkewPartition) -> Vec<Vec<(usize, usize)>> {
    let cells = shape.cells();
    let n = cells.len();

    // predecessor indices (left and up neighbors inside the shape)
    let rank = |i: usize, j: usize| cells.iter().position(|&c| c == (i, j));
    let preds: Vec<Vec<usize>> = cells
        .iter()
        .map(|&(i, j)| {
            let mut p = Vec::new();
            if j > 0 && shape.contains_cell(i, j - 1) {
                p.extend(rank(i, j - 1));
            }
            if i > 0 && shape.contains_cell(i - 1, j) {
                p.extend(rank(i - 1, j));
            }
            p
        })
        .collect();

    let mut used = vec![false; n];
    let mut seq = Vec::with_capacity(n);
    let mut out = Vec::new();
    extend(&cells, &preds, &mut used, &mut seq, &mut out);
    out
}

fn extend(
    cells: &[(usize, usize)],
    preds: &[Vec<usize>],
    used: &mut Vec<bool>,
    seq: &mut Vec<usize>,
    out: &mut Vec<Vec<(usize, usize)>>,
) {
    if seq.len() == cells.len() {
        out.push(seq.iter().map(|&idx| cells[idx]).collect());
        return;
    }
    for idx in 0..cells.len() {
        if used[idx] || !preds[idx].iter().all(|&p| used[p]) {
            continue;
        }
        used[idx] = true;
        seq.push(idx);
        extend(cells, preds, used, seq, out);
        seq.pop();
        used[idx] = false;
    }
}
