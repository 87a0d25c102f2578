//! Standardization and Bender-Knuth involutions.
//!
//! Standardization relabels a semistandard tableau into the standard
//! tableau whose reading word is the standard permutation of the
//! original reading word. The Bender-Knuth involutions are the
//! row-local switches of the values `k` and `k + 1` used to prove the
//! symmetry of Schur functions.
//!
//! # Reference
//! Bender & Knuth (1972), "Enumeration of plane partitions"

use crate::error::{Result, TableauError};
use crate::models::{word, SkewTableau};

/// Which rows a Bender-Knuth switch applies to. Rows are 1-indexed;
/// indices beyond the tableau are silently skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelection {
    /// Every row (the full involution).
    All,
    /// A single row.
    Single(usize),
    /// An explicit list of rows.
    Multiple(Vec<usize>),
}

impl From<usize> for RowSelection {
    fn from(row: usize) -> Self {
        RowSelection::Single(row)
    }
}

impl From<Vec<usize>> for RowSelection {
    fn from(rows: Vec<usize>) -> Self {
        RowSelection::Multiple(rows)
    }
}

impl RowSelection {
    /// Resolves to 0-based row indices.
    fn indices(&self, row_count: usize) -> Result<Vec<usize>> {
        let one_based = match self {
            RowSelection::All => return Ok((0..row_count).collect()),
            RowSelection::Single(r) => vec![*r],
            RowSelection::Multiple(rs) => rs.clone(),
        };
        one_based
            .into_iter()
            .map(|r| {
                if r == 0 {
                    Err(TableauError::InvalidArgument(
                        "rows are indexed from 1".to_string(),
                    ))
                } else {
                    Ok(r - 1)
                }
            })
            .collect()
    }
}

impl SkewTableau {
    /// Returns the standardization of a semistandard tableau: repeated
    /// values are replaced by consecutive integers, preserving the
    /// left-to-right order of the reading word within each value class.
    ///
    /// Idempotent on standard tableaux. Set `check` to `false` to skip
    /// the semistandardness verification.
    pub fn standardization(&self, check: bool) -> Result<SkewTableau> {
        if check && !self.is_semistandard() {
            return Err(TableauError::InvalidState(
                "the skew tableau must be semistandard".to_string(),
            ));
        }
        let w = self.to_word_by_row();
        SkewTableau::from_shape_and_word(&self.shape(), &word::standard_permutation(&w))
    }

    /// Applies the `k`-th Bender-Knuth switch to the selected rows.
    ///
    /// In each selected row, the *free* `k`s (no `k + 1` directly
    /// below) and *free* `k + 1`s (no `k` directly above) form one
    /// contiguous run; a run with `a` free `k`s and `b` free `k + 1`s
    /// is rewritten to hold `b` copies of `k` followed by `a` copies of
    /// `k + 1`. Applying the same switch twice is the identity.
    ///
    /// Set `check` to `false` to skip the semistandardness
    /// verification.
    pub fn bender_knuth_involution(
        &self,
        k: u32,
        rows: RowSelection,
        check: bool,
    ) -> Result<SkewTableau> {
        if k == 0 {
            return Err(TableauError::InvalidArgument(
                "k must be positive".to_string(),
            ));
        }
        if check && !self.is_semistandard() {
            return Err(TableauError::InvalidState(
                "the skew tableau must be semistandard".to_string(),
            ));
        }

        let row_count = self.rows().len();
        let mut result = self.rows().to_vec();

        for i in rows.indices(row_count)? {
            if i >= row_count {
                continue;
            }
            let row_len = result[i].len();
            // Neighbor values by column; out-of-range and holes read as
            // "no neighbor".
            let prev: Vec<Option<u32>> = if i == 0 {
                vec![None; row_len]
            } else {
                result[i - 1][..row_len].to_vec()
            };
            let next: Vec<Option<u32>> = (0..row_len)
                .map(|j| {
                    if i + 1 < row_count {
                        result[i + 1].get(j).copied().flatten()
                    } else {
                        None
                    }
                })
                .collect();

            let mut a = 0usize; // free k's
            let mut b = 0usize; // free (k+1)'s
            let mut first_free_k = None;
            let mut first_free_k1 = None;
            for (j, &val) in result[i].iter().enumerate() {
                if val == Some(k) && next[j] != Some(k + 1) {
                    if first_free_k.is_none() {
                        first_free_k = Some(j);
                    }
                    a += 1;
                } else if val == Some(k + 1) && prev[j] != Some(k) {
                    if first_free_k1.is_none() {
                        first_free_k1 = Some(j);
                    }
                    b += 1;
                }
            }

            // Only the overhang of the majority value flips.
            if let Some(s1) = first_free_k1 {
                if a > b {
                    for cell in &mut result[i][s1 - (a - b)..s1] {
                        *cell = Some(k + 1);
                    }
                } else if a < b {
                    for cell in &mut result[i][s1..s1 + (b - a)] {
                        *cell = Some(k);
                    }
                }
            } else if let Some(s) = first_free_k {
                for cell in &mut result[i][s..s + a] {
                    *cell = Some(k + 1);
                }
            }
        }

        Ok(SkewTableau::from_valid_rows(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::tab;

    #[test]
    fn test_standardization_reference_example() {
        let t = tab(&[
            &[-1, -1, 3, 4, 7, 19],
            &[-1, 4, 4, 8],
            &[-1, 5, 16, 17],
            &[-1],
            &[2],
            &[3],
        ]);
        assert_eq!(
            t.standardization(true).unwrap(),
            tab(&[
                &[-1, -1, 3, 6, 8, 12],
                &[-1, 4, 5, 9],
                &[-1, 7, 10, 11],
                &[-1],
                &[1],
                &[2],
            ])
        );
    }

    #[test]
    fn test_standardization_idempotent_on_standard() {
        let t = tab(&[&[-1, 1, 3], &[-1, 2], &[4]]);
        assert!(t.is_standard());
        assert_eq!(t.standardization(true).unwrap(), t);
    }

    #[test]
    fn test_standardization_word_property() {
        let t = tab(&[&[-1, 3, 4, 4], &[-1, 6, 10], &[7, 7, 11], &[18]]);
        let std = t.standardization(true).unwrap();
        assert_eq!(
            std.to_permutation().unwrap(),
            word::standard_permutation(&t.to_word())
        );
    }

    #[test]
    fn test_standardization_corner_cases() {
        let t = tab(&[&[-1, -1], &[-1]]);
        assert_eq!(t.standardization(true).unwrap(), t);
        let empty = SkewTableau::empty();
        assert_eq!(empty.standardization(true).unwrap(), empty);
    }

    #[test]
    fn test_standardization_requires_semistandard() {
        let t = tab(&[&[2, 1]]);
        assert!(matches!(
            t.standardization(true),
            Err(TableauError::InvalidState(_))
        ));
        // the check can be skipped explicitly
        assert!(t.standardization(false).is_ok());
    }

    fn bk_fixture() -> SkewTableau {
        tab(&[
            &[-1, -1, -1, 4, 4, 5, 6, 7],
            &[-1, 2, 4, 6, 7, 7, 7],
            &[-1, 4, 5, 8, 8, 9],
            &[-1, 6, 7, 10],
            &[-1, 8, 8, 11],
            &[-1],
            &[4],
        ])
    }

    #[test]
    fn test_bender_knuth_reference_examples() {
        let t = bk_fixture();
        assert_eq!(
            t.bender_knuth_involution(1, RowSelection::All, true).unwrap(),
            tab(&[
                &[-1, -1, -1, 4, 4, 5, 6, 7],
                &[-1, 1, 4, 6, 7, 7, 7],
                &[-1, 4, 5, 8, 8, 9],
                &[-1, 6, 7, 10],
                &[-1, 8, 8, 11],
                &[-1],
                &[4],
            ])
        );
        assert_eq!(
            t.bender_knuth_involution(4, RowSelection::All, true).unwrap(),
            tab(&[
                &[-1, -1, -1, 4, 5, 5, 6, 7],
                &[-1, 2, 4, 6, 7, 7, 7],
                &[-1, 5, 5, 8, 8, 9],
                &[-1, 6, 7, 10],
                &[-1, 8, 8, 11],
                &[-1],
                &[5],
            ])
        );
        assert_eq!(
            t.bender_knuth_involution(5, RowSelection::All, true).unwrap(),
            tab(&[
                &[-1, -1, -1, 4, 4, 5, 6, 7],
                &[-1, 2, 4, 5, 7, 7, 7],
                &[-1, 4, 6, 8, 8, 9],
                &[-1, 5, 7, 10],
                &[-1, 8, 8, 11],
                &[-1],
                &[4],
            ])
        );
        assert_eq!(
            t.bender_knuth_involution(6, RowSelection::All, true).unwrap(),
            tab(&[
                &[-1, -1, -1, 4, 4, 5, 6, 6],
                &[-1, 2, 4, 6, 6, 7, 7],
                &[-1, 4, 5, 8, 8, 9],
                &[-1, 6, 7, 10],
                &[-1, 8, 8, 11],
                &[-1],
                &[4],
            ])
        );
        // a value absent from the tableau changes nothing
        assert_eq!(
            t.bender_knuth_involution(666, RowSelection::All, true).unwrap(),
            t
        );
    }

    #[test]
    fn test_bender_knuth_single_row() {
        let t = bk_fixture();
        assert_eq!(
            t.bender_knuth_involution(4, 2.into(), true).unwrap(),
            t
        );
        assert_eq!(
            t.bender_knuth_involution(4, 3.into(), true).unwrap(),
            tab(&[
                &[-1, -1, -1, 4, 4, 5, 6, 7],
                &[-1, 2, 4, 6, 7, 7, 7],
                &[-1, 5, 5, 8, 8, 9],
                &[-1, 6, 7, 10],
                &[-1, 8, 8, 11],
                &[-1],
                &[4],
            ])
        );
    }

    #[test]
    fn test_bender_knuth_is_involution() {
        let t = tab(&[&[-1, 3, 4, 4], &[-1, 6, 10], &[7, 7, 11], &[18]]);
        for k in 1..=12 {
            let once = t.bender_knuth_involution(k, RowSelection::All, true).unwrap();
            let twice = once.bender_knuth_involution(k, RowSelection::All, true).unwrap();
            assert_eq!(twice, t, "bk({k}) applied twice must be the identity");
        }
    }

    #[test]
    fn test_bender_knuth_single_switches_are_involutions() {
        let t = tab(&[&[-1, 3, 4, 4], &[-1, 6, 10], &[7, 7, 11], &[18]]);
        for k in 1..5 {
            for row in 1..5usize {
                let once = t.bender_knuth_involution(k, row.into(), true).unwrap();
                let twice = once.bender_knuth_involution(k, row.into(), true).unwrap();
                assert_eq!(twice, t);
            }
        }
    }

    #[test]
    fn test_bender_knuth_commutation() {
        let t = tab(&[&[-1, 3, 4, 4], &[-1, 6, 10], &[7, 7, 11], &[18]]);
        for k in 1..5u32 {
            for l in 1..5u32 {
                if k.abs_diff(l) > 1 {
                    let kl = t
                        .bender_knuth_involution(k, RowSelection::All, true)
                        .unwrap()
                        .bender_knuth_involution(l, RowSelection::All, true)
                        .unwrap();
                    let lk = t
                        .bender_knuth_involution(l, RowSelection::All, true)
                        .unwrap()
                        .bender_knuth_involution(k, RowSelection::All, true)
                        .unwrap();
                    assert_eq!(kl, lk, "bk({k}) and bk({l}) must commute");
                }
            }
        }
    }

    #[test]
    fn test_bender_knuth_braid_relation() {
        // (bk(k) . bk(k+1))^6 = id
        let t = tab(&[&[-1, 3, 4, 4], &[-1, 6, 10], &[7, 7, 11], &[18]]);
        for k in 1..5u32 {
            let mut cur = t.clone();
            for _ in 0..6 {
                cur = cur
                    .bender_knuth_involution(k, RowSelection::All, true)
                    .unwrap()
                    .bender_knuth_involution(k + 1, RowSelection::All, true)
                    .unwrap();
            }
            assert_eq!(cur, t);
        }
    }

    #[test]
    fn test_bender_knuth_rows_beyond_tableau_skipped() {
        let t = tab(&[&[-1, 1], &[2, 3]]);
        assert_eq!(
            t.bender_knuth_involution(2, 99.into(), true).unwrap(),
            t
        );
    }

    #[test]
    fn test_bender_knuth_row_zero_rejected() {
        let t = tab(&[&[-1, 1], &[2, 3]]);
        assert!(matches!(
            t.bender_knuth_involution(1, 0.into(), true),
            Err(TableauError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bender_knuth_corner_cases() {
        let empty = SkewTableau::empty();
        assert_eq!(
            empty.bender_knuth_involution(3, RowSelection::All, true).unwrap(),
            empty
        );
        let holes = tab(&[&[-1, -1], &[-1]]);
        assert_eq!(
            holes.bender_knuth_involution(3, RowSelection::All, true).unwrap(),
            holes
        );
    }
}
