//! Shared test fixtures.

use crate::models::SkewTableau;

/// Builds a tableau from rows where negative values mark holes.
pub(crate) fn tab(rows: &[&[i32]]) -> SkewTableau {
    SkewTableau::new(
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v < 0 { None } else { Some(v as u32) })
                    .collect()
            })
            .collect(),
    )
    .unwrap()
}
