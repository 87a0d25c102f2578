//! Enumeration of standard skew tableaux.
//!
//! One tagged class covers the by-shape, by-size, and unconstrained
//! variants. Shape-level listings realize linear extensions of the
//! cell poset; counts come from Aitken's determinant formula instead
//! of enumeration.
//!
//! # Reference
//! Stanley (1999), "Enumerative Combinatorics" vol. 2, Cor. 7.16.3

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::enumerate::{linear_extensions, skew_partitions, Cardinality};
use crate::models::{SkewPartition, SkewTableau};

/// The combinatorial class of standard skew tableaux, restricted by
/// shape, by size, or not at all.
///
/// Listings are lazy and restartable: each call to [`iter`](Self::iter)
/// starts the enumeration over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardSkewTableaux {
    sel: Selection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    All,
    Size(usize),
    Shape(SkewPartition),
}

impl StandardSkewTableaux {
    /// All standard skew tableaux, ordered by increasing size.
    pub fn all() -> Self {
        Self {
            sel: Selection::All,
        }
    }

    /// Standard skew tableaux with `n` cells.
    pub fn of_size(n: usize) -> Self {
        Self {
            sel: Selection::Size(n),
        }
    }

    /// Standard skew tableaux of a fixed skew shape, ordered
    /// lexicographically by the linearization of the cell poset.
    pub fn of_shape(shape: SkewPartition) -> Self {
        Self {
            sel: Selection::Shape(shape),
        }
    }

    /// Lazily enumerates the class; infinite for [`all`](Self::all).
    pub fn iter(&self) -> Box<dyn Iterator<Item = SkewTableau>> {
        match &self.sel {
            Selection::Shape(shape) => Box::new(shape_iter(shape.clone())),
            Selection::Size(n) => Box::new(size_iter(*n)),
            Selection::All => Box::new((0usize..).flat_map(size_iter)),
        }
    }

    /// Number of tableaux in the class. Shape- and size-level counts
    /// use the determinant formula, not enumeration.
    pub fn cardinality(&self) -> Cardinality {
        match &self.sel {
            Selection::Shape(shape) => Cardinality::Finite(aitken(shape)),
            Selection::Size(n) => {
                let mut total = BigUint::zero();
                for shape in skew_partitions(*n) {
                    total += aitken(&shape);
                }
                Cardinality::Finite(total)
            }
            Selection::All => Cardinality::Infinite,
        }
    }

    /// Membership test; never materializes the listing.
    pub fn contains(&self, t: &SkewTableau) -> bool {
        t.is_standard()
            && match &self.sel {
                Selection::All => true,
                Selection::Size(n) => t.size() == *n,
                Selection::Shape(shape) => &t.shape() == shape,
            }
    }

    /// A random element of a shape- or size-restricted class, built by
    /// repeatedly picking a uniformly random currently-fillable cell
    /// (a random linear extension; not uniform over the class). `None`
    /// for the unrestricted class and for empty classes.
    pub fn random_element<R: Rng>(&self, rng: &mut R) -> Option<SkewTableau> {
        let shape = match &self.sel {
            Selection::Shape(shape) => shape.clone(),
            Selection::Size(n) => skew_partitions(*n).choose(rng)?.clone(),
            Selection::All => return None,
        };
        Some(random_filling(&shape, rng))
    }
}

fn shape_iter(shape: SkewPartition) -> impl Iterator<Item = SkewTableau> {
    linear_extensions(&shape)
        .into_iter()
        .map(move |order| label_cells(&shape, &order))
}

fn size_iter(n: usize) -> impl Iterator<Item = SkewTableau> {
    skew_partitions(n).into_iter().flat_map(shape_iter)
}

/// Fills the shape's cells with `1..=n` in the given order.
fn label_cells(shape: &SkewPartition, order: &[(usize, usize)]) -> SkewTableau {
    let mut rows: Vec<Vec<Option<u32>>> = (0..shape.rows())
        .map(|i| vec![None; shape.outer().part(i)])
        .collect();
    for (value, &(i, j)) in order.iter().enumerate() {
        rows[i][j] = Some((value + 1) as u32);
    }
    SkewTableau::from_valid_rows(rows)
}

fn random_filling<R: Rng>(shape: &SkewPartition, rng: &mut R) -> SkewTableau {
    let mut rows: Vec<Vec<Option<u32>>> = (0..shape.rows())
        .map(|i| vec![None; shape.outer().part(i)])
        .collect();
    let cells = shape.cells();
    for next in 1..=cells.len() as u32 {
        // a cell is fillable once its left and upper neighbors (when
        // part of the shape) already hold an entry
        let ready: Vec<(usize, usize)> = cells
            .iter()
            .copied()
            .filter(|&(i, j)| {
                rows[i][j].is_none()
                    && (j == 0 || !shape.contains_cell(i, j - 1) || rows[i][j - 1].is_some())
                    && (i == 0 || !shape.contains_cell(i - 1, j) || rows[i - 1][j].is_some())
            })
            .collect();
        match ready.choose(rng) {
            Some(&(i, j)) => rows[i][j] = Some(next),
            None => break,
        }
    }
    SkewTableau::from_valid_rows(rows)
}

/// Aitken's formula: the number of standard fillings of outer/inner
/// shapes `λ/μ` with `m` rows is `n! · det(A)` where
/// `A[i][j] = 1/(λ_i - μ_j - i + j)!` (zero when the argument is
/// negative). Computed exactly over rationals; the result is always a
/// non-negative integer.
fn aitken(shape: &SkewPartition) -> BigUint {
    let m = shape.outer().len();
    let n = shape.size();

    let mut a = vec![vec![BigRational::zero(); m]; m];
    for i in 0..m {
        for j in 0..m {
            let v = shape.outer().part(i) as i64 - shape.inner().part(j) as i64 - i as i64
                + j as i64;
            if v >= 0 {
                a[i][j] = BigRational::new(BigInt::one(), factorial(v as usize).into());
            }
        }
    }

    let count = BigRational::from_integer(BigInt::from(factorial(n))) * determinant(a);
    assert!(
        count.is_integer() && !count.is_negative(),
        "Aitken's determinant must produce a non-negative integer, got {count}"
    );
    count
        .to_integer()
        .to_biguint()
        .unwrap_or_else(|| unreachable!())
}

fn factorial(n: usize) -> BigUint {
    (1..=n as u64).map(BigUint::from).product()
}

/// Determinant by fraction-exact Gaussian elimination.
fn determinant(mut m: Vec<Vec<BigRational>>) -> BigRational {
    let n = m.len();
    let mut det = BigRational::one();
    for col in 0..n {
        let pivot = match (col..n).find(|&r| !m[r][col].is_zero()) {
            Some(p) => p,
            None => return BigRational::zero(),
        };
        if pivot != col {
            m.swap(pivot, col);
            det = -det;
        }
        let pivot_val = m[col][col].clone();
        det *= &pivot_val;
        for r in col + 1..n {
            if m[r][col].is_zero() {
                continue;
            }
            let factor = &m[r][col] / &pivot_val;
            for c in col..n {
                let sub = &factor * &m[col][c];
                m[r][c] = &m[r][c] - &sub;
            }
        }
    }
    det
}
