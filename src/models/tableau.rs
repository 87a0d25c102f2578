//! Skew tableau grid model.
//!
//! A skew tableau is stored as rows of cells, top to bottom in English
//! convention. A cell is either a positive entry or a hole (`None`)
//! belonging to the inner shape. Construction validates the shape
//! invariants once; every transformation returns a new tableau and
//! never mutates its input.
//!
//! # Reference
//! Fulton (1997), "Young Tableaux", Part I

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableauError};
use crate::models::{word, Partition, Ribbon, SkewPartition};

/// An immutable skew tableau.
///
/// Invariants held by every constructed value:
/// - no row is empty;
/// - row lengths weakly decrease from top to bottom;
/// - holes form a prefix of each row, and the per-row hole counts
///   weakly decrease (the inner shape is a partition);
/// - all entries are positive.
///
/// The nested-row representation doubles as the serde interchange
/// format: rows top-to-bottom with `null` as the hole sentinel.
/// Deserialization re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<u32>>>", into = "Vec<Vec<Option<u32>>>")]
pub struct SkewTableau {
    rows: Vec<Vec<Option<u32>>>,
}

impl SkewTableau {
    /// Creates a skew tableau from nested rows, validating the shape
    /// invariants.
    pub fn new(rows: Vec<Vec<Option<u32>>>) -> Result<Self> {
        for row in &rows {
            if row.is_empty() {
                return Err(TableauError::MalformedInput(
                    "a skew tableau cannot have an empty row".to_string(),
                ));
            }
            let holes = row.iter().take_while(|c| c.is_none()).count();
            if row[holes..].iter().any(Option::is_none) {
                return Err(TableauError::MalformedInput(
                    "holes must form a prefix of each row".to_string(),
                ));
            }
            if row.iter().flatten().any(|&v| v == 0) {
                return Err(TableauError::MalformedInput(
                    "entries must be positive".to_string(),
                ));
            }
        }
        for w in rows.windows(2) {
            if w[1].len() > w[0].len() {
                return Err(TableauError::MalformedInput(
                    "row lengths must be weakly decreasing".to_string(),
                ));
            }
            let holes0 = w[0].iter().take_while(|c| c.is_none()).count();
            let holes1 = w[1].iter().take_while(|c| c.is_none()).count();
            if holes1 > holes0 {
                return Err(TableauError::MalformedInput(
                    "the inner shape must be a partition".to_string(),
                ));
            }
        }
        Ok(Self { rows })
    }

    /// The empty tableau.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Internal constructor for rows already known to satisfy the
    /// invariants (slide results, conjugates, relabelings).
    pub(crate) fn from_valid_rows(rows: Vec<Vec<Option<u32>>>) -> Self {
        debug_assert!(Self::new(rows.clone()).is_ok());
        Self { rows }
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Option<u32>>] {
        &self.rows
    }

    /// The non-hole entries per row.
    pub fn filling(&self) -> Vec<Vec<u32>> {
        self.rows
            .iter()
            .map(|row| row.iter().flatten().copied().collect())
            .collect()
    }

    /// Row lengths as a partition.
    pub fn outer_shape(&self) -> Partition {
        Partition::from_valid(self.rows.iter().map(Vec::len).collect())
    }

    /// Per-row hole counts as a partition.
    pub fn inner_shape(&self) -> Partition {
        Partition::from_valid(
            self.rows
                .iter()
                .map(|row| row.iter().take_while(|c| c.is_none()).count())
                .collect(),
        )
    }

    /// The skew shape of the tableau.
    pub fn shape(&self) -> SkewPartition {
        SkewPartition::new(self.outer_shape(), self.inner_shape())
            .unwrap_or_else(|_| unreachable!("tableau invariants guarantee containment"))
    }

    /// Number of cells of the outer shape.
    pub fn outer_size(&self) -> usize {
        self.outer_shape().size()
    }

    /// Number of holes.
    pub fn inner_size(&self) -> usize {
        self.inner_shape().size()
    }

    /// Number of non-hole cells.
    pub fn size(&self) -> usize {
        self.outer_size() - self.inner_size()
    }

    /// The conjugate tableau (transposed along the main diagonal).
    pub fn conjugate(&self) -> SkewTableau {
        let conj_shape = self.outer_shape().conjugate();
        let rows = (0..conj_shape.len())
            .map(|i| (0..conj_shape.part(i)).map(|j| self.rows[j][i]).collect())
            .collect();
        Self::from_valid_rows(rows)
    }

    /// Row-reading word: rows concatenated bottom to top, holes
    /// dropped.
    pub fn to_word_by_row(&self) -> Vec<u32> {
        self.rows
            .iter()
            .rev()
            .flat_map(|row| row.iter().flatten().copied())
            .collect()
    }

    /// Alias for [`to_word_by_row`](Self::to_word_by_row).
    pub fn to_word(&self) -> Vec<u32> {
        self.to_word_by_row()
    }

    /// Column-reading word, implemented as conjugate-then-row-read.
    pub fn to_word_by_column(&self) -> Vec<u32> {
        self.conjugate().to_word_by_row()
    }

    /// The row-reading word as a permutation of `1..=size`.
    pub fn to_permutation(&self) -> Result<Vec<u32>> {
        let w = self.to_word();
        if !word::is_permutation(&w) {
            return Err(TableauError::InvalidState(
                "the reading word is not a permutation".to_string(),
            ));
        }
        Ok(w)
    }

    /// Multiplicity of each value `1..=max` in the reading word.
    pub fn evaluation(&self) -> Vec<usize> {
        word::evaluation(&self.to_word())
    }

    /// Alias for [`evaluation`](Self::evaluation).
    pub fn weight(&self) -> Vec<usize> {
        self.evaluation()
    }

    /// Whether entries weakly increase along rows and strictly
    /// increase down columns.
    pub fn is_semistandard(&self) -> bool {
        for row in &self.rows {
            for pair in row.windows(2) {
                if let (Some(a), Some(b)) = (pair[0], pair[1]) {
                    if b < a {
                        return false;
                    }
                }
            }
        }
        for i in 1..self.rows.len() {
            for j in 0..self.rows[i].len() {
                if let (Some(above), Some(cur)) = (self.rows[i - 1][j], self.rows[i][j]) {
                    if cur <= above {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Whether the tableau is semistandard and its entries are exactly
    /// `1..=size`, each used once.
    pub fn is_standard(&self) -> bool {
        word::is_permutation(&self.to_word()) && self.is_semistandard()
    }

    /// The filling as a straight tableau; fails unless the inner shape
    /// is empty.
    pub fn to_tableau(&self) -> Result<Vec<Vec<u32>>> {
        if self.inner_size() != 0 {
            return Err(TableauError::InvalidState(
                "the inner shape must be empty".to_string(),
            ));
        }
        Ok(self.filling())
    }

    /// Restriction to entries `<= n`: larger entries are removed,
    /// holes kept, emptied rows dropped.
    ///
    /// Defined for (semi)standard tableaux; on other inputs the
    /// restriction may not be a valid skew shape, which is reported as
    /// `InvalidState`.
    pub fn restrict(&self, n: u32) -> Result<SkewTableau> {
        let rows: Vec<Vec<Option<u32>>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|c| match c {
                        None => true,
                        Some(v) => *v <= n,
                    })
                    .copied()
                    .collect::<Vec<_>>()
            })
            .filter(|row: &Vec<Option<u32>>| !row.is_empty())
            .collect();
        Self::new(rows).map_err(|_| {
            TableauError::InvalidState(format!(
                "restriction to {n} is not a valid skew tableau"
            ))
        })
    }

    /// The saturated chain of partitions from the inner to the outer
    /// shape, one step per distinct value (the value-0 restriction,
    /// i.e. the inner shape, comes first).
    pub fn to_chain(&self) -> Result<Vec<Partition>> {
        let mut values: Vec<u32> = self.to_word();
        values.sort_unstable();
        values.dedup();

        let mut chain = vec![self.restrict(0)?.outer_shape()];
        for v in values {
            chain.push(self.restrict(v)?.outer_shape());
        }
        Ok(chain)
    }

    /// The expr interchange pair: inner-shape row lengths and the
    /// filling rows bottom to top.
    pub fn to_expr(&self) -> (Vec<usize>, Vec<Vec<u32>>) {
        let mut rows = self.filling();
        rows.reverse();
        (self.inner_shape().parts().to_vec(), rows)
    }

    /// Rebuilds a tableau from an expr pair.
    pub fn from_expr(inner: &[usize], rows_bottom_up: &[Vec<u32>]) -> Result<SkewTableau> {
        let n = rows_bottom_up.len();
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let holes = inner.get(i).copied().unwrap_or(0);
            let mut row: Vec<Option<u32>> = vec![None; holes];
            row.extend(rows_bottom_up[n - 1 - i].iter().map(|&v| Some(v)));
            rows.push(row);
        }
        Self::new(rows)
    }

    /// Inverse of the row reading: fills the outer shape's rows bottom
    /// to top, skipping inner-shape holes, consuming the word left to
    /// right per row.
    ///
    /// The word length must equal the shape's cell count.
    pub fn from_shape_and_word(shape: &SkewPartition, w: &[u32]) -> Result<SkewTableau> {
        if w.len() != shape.size() {
            return Err(TableauError::InvalidArgument(format!(
                "word length {} does not match shape size {}",
                w.len(),
                shape.size()
            )));
        }
        let mut rows: Vec<Vec<Option<u32>>> = (0..shape.rows())
            .map(|i| vec![None; shape.outer().part(i)])
            .collect();
        let mut next = 0;
        for i in (0..shape.rows()).rev() {
            let (lo, hi) = shape.column_bounds(i);
            for j in lo..hi {
                rows[i][j] = Some(w[next]);
                next += 1;
            }
        }
        Self::new(rows)
    }

    /// Whether the skew shape is a ribbon (contains no 2x2 block).
    pub fn is_ribbon(&self) -> bool {
        let outer = self.outer_shape();
        let inner = self.inner_shape();
        (1..outer.len()).all(|i| outer.part(i) <= inner.part(i - 1) + 1)
    }

    /// Hands the hole-stripped rows to the ribbon type; fails on a
    /// non-ribbon shape.
    pub fn to_ribbon(&self) -> Result<Ribbon> {
        if !self.is_ribbon() {
            return Err(TableauError::InvalidState(
                "the skew shape is not a ribbon".to_string(),
            ));
        }
        Ok(Ribbon::from_rows(self.filling()))
    }

    /// Coordinates of the non-hole cells, row-major.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut res = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    res.push((i, j));
                }
            }
        }
        res
    }

    /// Coordinates of the non-hole cells on diagonal `j - i == c`.
    pub fn cells_by_content(&self, c: i64) -> Vec<(usize, usize)> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        let (mut i, mut j) = if c >= 0 {
            if c as usize >= self.rows[0].len() {
                return Vec::new();
            }
            (0usize, c as usize)
        } else {
            let r = (-c) as usize;
            if r >= self.rows.len() {
                return Vec::new();
            }
            (r, 0usize)
        };

        let mut res = Vec::new();
        loop {
            if self.rows[i][j].is_some() {
                res.push((i, j));
            }
            i += 1;
            j += 1;
            if i >= self.rows.len() || j >= self.rows[i].len() {
                break;
            }
        }
        res
    }

    /// Entries on diagonal `j - i == c`.
    pub fn entries_by_content(&self, c: i64) -> Vec<u32> {
        self.cells_by_content(c)
            .into_iter()
            .map(|(i, j)| self.rows[i][j].unwrap_or_else(|| unreachable!()))
            .collect()
    }

    /// ASCII diagram, one row per line, `.` for holes.
    pub fn pretty(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        None => "  .".to_string(),
                        Some(v) => format!("{v:>3}"),
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<Vec<Vec<Option<u32>>>> for SkewTableau {
    type Error = TableauError;

    fn try_from(rows: Vec<Vec<Option<u32>>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<SkewTableau> for Vec<Vec<Option<u32>>> {
    fn from(t: SkewTableau) -> Self {
        t.rows
    }
}
