//! Skew partition model.
//!
//! A skew partition is an outer partition with an inner partition
//! removed from its top-left corner. A row of the skew diagram may be
//! empty of cells (the inner row equals the outer row).

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableauError};
use crate::models::Partition;

/// A pair of partitions `inner ⊆ outer`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Partition, Partition)", into = "(Partition, Partition)")]
pub struct SkewPartition {
    outer: Partition,
    inner: Partition,
}

impl SkewPartition {
    /// Creates a skew partition, checking containment.
    pub fn new(outer: Partition, inner: Partition) -> Result<Self> {
        if !outer.contains(&inner) {
            return Err(TableauError::MalformedInput(format!(
                "inner shape {:?} is not contained in outer shape {:?}",
                inner.parts(),
                outer.parts()
            )));
        }
        Ok(Self { outer, inner })
    }

    /// The empty skew partition.
    pub fn empty() -> Self {
        Self {
            outer: Partition::empty(),
            inner: Partition::empty(),
        }
    }

    /// The outer partition.
    pub fn outer(&self) -> &Partition {
        &self.outer
    }

    /// The inner partition.
    pub fn inner(&self) -> &Partition {
        &self.inner
    }

    /// Number of cells of the skew diagram.
    pub fn size(&self) -> usize {
        self.outer.size() - self.inner.size()
    }

    /// Number of rows of the outer shape.
    pub fn rows(&self) -> usize {
        self.outer.len()
    }

    /// Column range `(start, end)` of the cells in row `i`
    /// (half-open; empty when the row holds no cells).
    pub fn column_bounds(&self, i: usize) -> (usize, usize) {
        (self.inner.part(i), self.outer.part(i))
    }

    /// Cell coordinates in row-major order.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut res = Vec::with_capacity(self.size());
        for i in 0..self.rows() {
            let (lo, hi) = self.column_bounds(i);
            for j in lo..hi {
                res.push((i, j));
            }
        }
        res
    }

    /// Whether `(i, j)` is a cell of the skew diagram.
    pub fn contains_cell(&self, i: usize, j: usize) -> bool {
        let (lo, hi) = self.column_bounds(i);
        (lo..hi).contains(&j)
    }

    /// Corners of the inner shape (cells removable from it).
    pub fn inner_corners(&self) -> Vec<(usize, usize)> {
        self.inner.corners()
    }

    /// Corners of the outer shape.
    pub fn outer_corners(&self) -> Vec<(usize, usize)> {
        self.outer.corners()
    }

    /// The conjugate skew partition (both shapes transposed).
    pub fn conjugate(&self) -> SkewPartition {
        Self {
            outer: self.outer.conjugate(),
            inner: self.inner.conjugate(),
        }
    }
}

impl TryFrom<(Partition, Partition)> for SkewPartition {
    type Error = TableauError;

    fn try_from((outer, inner): (Partition, Partition)) -> Result<Self> {
        Self::new(outer, inner)
    }
}

impl From<SkewPartition> for (Partition, Partition) {
    fn from(sp: SkewPartition) -> Self {
        (sp.outer, sp.inner)
    }
}
