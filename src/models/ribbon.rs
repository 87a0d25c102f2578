//! Ribbon (border strip) data carrier.
//!
//! A ribbon is a skew shape containing no 2x2 block of cells. The
//! ribbon machinery itself lives outside this crate; this type only
//! carries the hole-stripped rows handed over by
//! [`SkewTableau::to_ribbon`](crate::SkewTableau::to_ribbon).

use serde::{Deserialize, Serialize};

/// Rows of a ribbon-shaped tableau, top to bottom, holes removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ribbon {
    rows: Vec<Vec<u32>>,
}

impl Ribbon {
    pub(crate) fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    /// The rows of the ribbon.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
