//! Enumeration of semistandard skew tableaux.
//!
//! The class can be restricted by shape, by size, by weight, or not at
//! all. Entries of size- and shape-restricted listings are bounded by
//! the number of cells, so those classes are finite; the unrestricted
//! class is infinite and enumerated by increasing size.
//!
//! Listings are grouped by weight in lexicographically descending
//! order; within one weight, tableaux appear in lexicographically
//! ascending order of their row-major readings.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::enumerate::{integer_vectors, skew_partitions, Cardinality};
use crate::error::{Result, TableauError};
use crate::models::{SkewPartition, SkewTableau};

/// The combinatorial class of semistandard skew tableaux under an
/// optional shape, size, or weight restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemistandardSkewTableaux {
    sel: Selection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    All,
    Size(usize),
    SizeWeight(usize, Vec<usize>),
    Shape(SkewPartition),
    ShapeWeight(SkewPartition, Vec<usize>),
}

impl SemistandardSkewTableaux {
    /// All semistandard skew tableaux, ordered by increasing size.
    pub fn all() -> Self {
        Self {
            sel: Selection::All,
        }
    }

    /// Semistandard skew tableaux with `n` cells and entries at most `n`.
    pub fn of_size(n: usize) -> Self {
        Self {
            sel: Selection::Size(n),
        }
    }

    /// Semistandard skew tableaux of a fixed shape with entries at most
    /// the number of cells.
    pub fn of_shape(shape: SkewPartition) -> Self {
        Self {
            sel: Selection::Shape(shape),
        }
    }

    /// Semistandard skew tableaux with `n` cells and the given weight.
    ///
    /// Fails when the weight does not sum to `n`.
    pub fn of_size_and_weight(n: usize, weight: Vec<usize>) -> Result<Self> {
        if weight.iter().sum::<usize>() != n {
            return Err(TableauError::InvalidArgument(format!(
                "weight {weight:?} does not sum to the size {n}"
            )));
        }
        Ok(Self {
            sel: Selection::SizeWeight(n, weight),
        })
    }

    /// Semistandard skew tableaux of a fixed shape and weight.
    ///
    /// Fails when the weight does not sum to the number of cells.
    pub fn of_shape_and_weight(shape: SkewPartition, weight: Vec<usize>) -> Result<Self> {
        if weight.iter().sum::<usize>() != shape.size() {
            return Err(TableauError::InvalidArgument(format!(
                "weight {weight:?} does not sum to the number of cells {}",
                shape.size()
            )));
        }
        Ok(Self {
            sel: Selection::ShapeWeight(shape, weight),
        })
    }

    /// Lazily enumerates the class; infinite for [`all`](Self::all).
    pub fn iter(&self) -> Box<dyn Iterator<Item = SkewTableau>> {
        match &self.sel {
            Selection::ShapeWeight(shape, weight) => {
                Box::new(fillings(shape, weight).into_iter())
            }
            Selection::Shape(shape) => Box::new(shape_iter(shape.clone())),
            Selection::SizeWeight(n, weight) => {
                let weight = weight.clone();
                Box::new(
                    skew_partitions(*n)
                        .into_iter()
                        .flat_map(move |shape| fillings(&shape, &weight)),
                )
            }
            Selection::Size(n) => Box::new(size_iter(*n)),
            Selection::All => Box::new((0usize..).flat_map(size_iter)),
        }
    }

    /// Number of tableaux in the class, by enumeration.
    pub fn cardinality(&self) -> Cardinality {
        match &self.sel {
            Selection::All => Cardinality::Infinite,
            _ => {
                let mut total = BigUint::zero();
                for _ in self.iter() {
                    total += 1u32;
                }
                Cardinality::Finite(total)
            }
        }
    }

    /// Membership test; never materializes the listing.
    pub fn contains(&self, t: &SkewTableau) -> bool {
        t.is_semistandard()
            && match &self.sel {
                Selection::All => true,
                Selection::Size(n) => t.size() == *n && max_entry_at_most(t, *n),
                Selection::SizeWeight(n, weight) => {
                    t.size() == *n && weight_matches(t, weight)
                }
                Selection::Shape(shape) => {
                    &t.shape() == shape && max_entry_at_most(t, shape.size())
                }
                Selection::ShapeWeight(shape, weight) => {
                    &t.shape() == shape && weight_matches(t, weight)
                }
            }
    }
}

fn shape_iter(shape: SkewPartition) -> impl Iterator<Item = SkewTableau> {
    let n = shape.size();
    integer_vectors(n, n)
        .into_iter()
        .flat_map(move |weight| fillings(&shape, &weight))
}

fn size_iter(n: usize) -> impl Iterator<Item = SkewTableau> {
    skew_partitions(n).into_iter().flat_map(shape_iter)
}

fn max_entry_at_most(t: &SkewTableau, bound: usize) -> bool {
    t.rows()
        .iter()
        .flatten()
        .flatten()
        .all(|&v| v as usize <= bound)
}

/// Weights compare equal up to trailing zeros.
fn weight_matches(t: &SkewTableau, weight: &[usize]) -> bool {
    let eval = t.evaluation();
    let trimmed = weight
        .iter()
        .rposition(|&w| w != 0)
        .map_or(&weight[..0], |p| &weight[..=p]);
    eval == trimmed
}

/// All semistandard fillings of the shape with the given weight, in
/// lexicographically ascending row-major order.
fn fillings(shape: &SkewPartition, weight: &[usize]) -> Vec<SkewTableau> {
    let cells = shape.cells();
    if cells.len() != weight.iter().sum::<usize>() {
        return Vec::new();
    }
    let mut grid: Vec<Vec<u32>> = (0..shape.rows())
        .map(|i| vec![0; shape.outer().part(i)])
        .collect();
    let mut remaining = weight.to_vec();
    let mut out = Vec::new();
    fill_from(shape, &cells, 0, &mut grid, &mut remaining, &mut out);
    out
}

fn fill_from(
    shape: &SkewPartition,
    cells: &[(usize, usize)],
    idx: usize,
    grid: &mut Vec<Vec<u32>>,
    remaining: &mut [usize],
    out: &mut Vec<SkewTableau>,
) {
    if idx == cells.len() {
        let rows = grid
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let (start, _) = shape.column_bounds(i);
                row.iter()
                    .enumerate()
                    .map(|(j, &v)| if j < start { None } else { Some(v) })
                    .collect()
            })
            .collect();
        out.push(SkewTableau::from_valid_rows(rows));
        return;
    }
    // row-major cell order guarantees the left and upper neighbors are
    // already filled
    let (i, j) = cells[idx];
    let mut lo = 1u32;
    if j > 0 && shape.contains_cell(i, j - 1) {
        lo = lo.max(grid[i][j - 1]);
    }
    if i > 0 && shape.contains_cell(i - 1, j) {
        lo = lo.max(grid[i - 1][j] + 1);
    }
    for v in lo..=remaining.len() as u32 {
        let slot = (v - 1) as usize;
        if remaining[slot] == 0 {
            continue;
        }
        remaining[slot] -= 1;
        grid[i][j] = v;
        fill_from(shape, cells, idx + 1, grid, remaining, out);
        remaining[slot] += 1;
    }
    grid[i][j] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Partition;
    use crate::test_util::tab;

    fn skew(outer: Vec<usize>, inner: Vec<usize>) -> SkewPartition {
        SkewPartition::new(
            Partition::new(outer).unwrap(),
            Partition::new(inner).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_shape_listing() {
        let class = SemistandardSkewTableaux::of_shape(skew(vec![2, 1], vec![]));
        let listed: Vec<_> = class.iter().collect();
        assert_eq!(
            listed,
            vec![
                tab(&[&[1, 1], &[2]]),
                tab(&[&[1, 1], &[3]]),
                tab(&[&[1, 2], &[2]]),
                tab(&[&[1, 2], &[3]]),
                tab(&[&[1, 3], &[2]]),
                tab(&[&[1, 3], &[3]]),
                tab(&[&[2, 2], &[3]]),
                tab(&[&[2, 3], &[3]]),
            ]
        );
        assert_eq!(class.cardinality(), Cardinality::finite(8u32));
    }

    #[test]
    fn test_shape_and_weight() {
        let class =
            SemistandardSkewTableaux::of_shape_and_weight(skew(vec![2, 1], vec![]), vec![2, 1])
                .unwrap();
        let listed: Vec<_> = class.iter().collect();
        assert_eq!(listed, vec![tab(&[&[1, 1], &[2]])]);
    }

    #[test]
    fn test_size_listing() {
        let class = SemistandardSkewTableaux::of_size(2);
        let listed: Vec<_> = class.iter().collect();
        assert_eq!(listed.len(), 8);
        assert_eq!(class.cardinality(), Cardinality::finite(8u32));
        for t in &listed {
            assert!(t.is_semistandard());
            assert_eq!(t.size(), 2);
        }
    }

    #[test]
    fn test_size_and_weight() {
        let class = SemistandardSkewTableaux::of_size_and_weight(2, vec![1, 1]).unwrap();
        let listed: Vec<_> = class.iter().collect();
        assert_eq!(listed.len(), 4);
        assert_eq!(class.cardinality(), Cardinality::finite(4u32));
        for t in &listed {
            assert_eq!(t.evaluation(), vec![1, 1]);
        }
    }

    #[test]
    fn test_weight_sum_mismatch() {
        assert!(SemistandardSkewTableaux::of_size_and_weight(3, vec![1, 1]).is_err());
        assert!(
            SemistandardSkewTableaux::of_shape_and_weight(skew(vec![2, 1], vec![]), vec![2, 2])
                .is_err()
        );
    }

    #[test]
    fn test_all_is_ordered_by_size() {
        let first: Vec<_> = SemistandardSkewTableaux::all().iter().take(4).collect();
        assert_eq!(first[0], SkewTableau::empty());
        assert_eq!(first[1], tab(&[&[1]]));
        assert_eq!(first[2].size(), 2);
        assert_eq!(
            SemistandardSkewTableaux::all().cardinality(),
            Cardinality::Infinite
        );
    }

    #[test]
    fn test_contains() {
        let t = tab(&[&[1, 1], &[2]]);
        assert!(SemistandardSkewTableaux::all().contains(&t));
        assert!(SemistandardSkewTableaux::of_size(3).contains(&t));
        assert!(!SemistandardSkewTableaux::of_size(2).contains(&t));
        assert!(SemistandardSkewTableaux::of_shape(skew(vec![2, 1], vec![])).contains(&t));
        assert!(
            SemistandardSkewTableaux::of_shape_and_weight(skew(vec![2, 1], vec![]), vec![2, 1])
                .unwrap()
                .contains(&t)
        );
        assert!(
            !SemistandardSkewTableaux::of_shape_and_weight(skew(vec![2, 1], vec![]), vec![1, 1, 1])
                .unwrap()
                .contains(&t)
        );
        // weights match up to trailing zeros
        assert!(
            SemistandardSkewTableaux::of_size_and_weight(3, vec![2, 1, 0, 0])
                .unwrap()
                .contains(&t)
        );
        // column-strictness violated
        assert!(!SemistandardSkewTableaux::all().contains(&tab(&[&[1, 1], &[1]])));
        // size classes bound the entries by the number of cells
        assert!(!SemistandardSkewTableaux::of_size(2).contains(&tab(&[&[1, 3]])));
    }

    #[test]
    fn test_standard_tableaux_are_semistandard_members() {
        let shape = skew(vec![3, 2, 1], vec![1, 1]);
        let class = SemistandardSkewTableaux::of_shape_and_weight(
            shape.clone(),
            vec![1, 1, 1, 1],
        )
        .unwrap();
        for t in class.iter() {
            assert!(t.is_standard());
        }
        assert_eq!(class.cardinality(), Cardinality::finite(8u32));
    }
}
