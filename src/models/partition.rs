//! Integer partition model.
//!
//! A partition is a weakly decreasing sequence of positive integers,
//! read as row lengths of a Young diagram in English convention (row 0
//! on top, rows left-justified).
//!
//! # Reference
//! Stanley (1999), "Enumerative Combinatorics" vol. 2, Ch. 7

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableauError};

/// A partition: weakly decreasing positive parts.
///
/// Trailing zeros in the input are trimmed; zeros elsewhere (or any
/// increase) are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Partition {
    parts: Vec<usize>,
}

impl Partition {
    /// Creates a partition from row lengths.
    pub fn new(mut parts: Vec<usize>) -> Result<Self> {
        while parts.last() == Some(&0) {
            parts.pop();
        }
        for w in parts.windows(2) {
            if w[1] > w[0] {
                return Err(TableauError::MalformedInput(format!(
                    "partition parts must be weakly decreasing, got {parts:?}"
                )));
            }
        }
        if parts.contains(&0) {
            return Err(TableauError::MalformedInput(
                "partition parts must be positive".to_string(),
            ));
        }
        Ok(Self { parts })
    }

    /// The empty partition.
    pub fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// Internal constructor for parts already known to be valid.
    pub(crate) fn from_valid(mut parts: Vec<usize>) -> Self {
        while parts.last() == Some(&0) {
            parts.pop();
        }
        debug_assert!(parts.windows(2).all(|w| w[0] >= w[1]));
        debug_assert!(!parts.contains(&0));
        Self { parts }
    }

    /// The parts as a slice.
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether this is the empty partition.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.parts.iter().sum()
    }

    /// Length of row `i`, zero beyond the last row.
    pub fn part(&self, i: usize) -> usize {
        self.parts.get(i).copied().unwrap_or(0)
    }

    /// The conjugate partition (diagram transposed along the main
    /// diagonal).
    pub fn conjugate(&self) -> Partition {
        let cols = self.part(0);
        let parts = (0..cols)
            .map(|j| self.parts.iter().take_while(|&&p| p > j).count())
            .collect();
        Self::from_valid(parts)
    }

    /// Removable corner cells: `(i, j)` such that deleting the cell
    /// leaves a partition.
    pub fn corners(&self) -> Vec<(usize, usize)> {
        let mut res = Vec::new();
        for i in 0..self.parts.len() {
            if self.parts[i] > self.part(i + 1) {
                res.push((i, self.parts[i] - 1));
            }
        }
        res
    }

    /// Whether `other` fits inside `self` cell-wise.
    pub fn contains(&self, other: &Partition) -> bool {
        other.len() <= self.len()
            && other
                .parts
                .iter()
                .enumerate()
                .all(|(i, &p)| p <= self.parts[i])
    }
}

impl TryFrom<Vec<usize>> for Partition {
    type Error = TableauError;

    fn try_from(parts: Vec<usize>) -> Result<Self> {
        Self::new(parts)
    }
}

impl From<Partition> for Vec<usize> {
    fn from(p: Partition) -> Self {
        p.parts
    }
}
