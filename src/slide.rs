//! Jeu-de-taquin slides and rectification.
//!
//! A slide turns a chosen inner corner into a moving hole that swaps
//! with the smaller of its below/right neighbors until it reaches an
//! outer corner, which is then trimmed off. The work happens in an
//! owned row buffer; only the before and after tableaux are ever
//! visible.
//!
//! # Reference
//! Fulton (1997), "Young Tableaux", pp. 12-15

use crate::error::{Result, TableauError};
use crate::models::SkewTableau;

impl SkewTableau {
    /// Performs one jeu-de-taquin slide.
    ///
    /// With no corner given, the first inner corner is used; with an
    /// empty inner shape the tableau is returned unchanged. A supplied
    /// coordinate that is not a current inner corner is rejected.
    ///
    /// The tie-break is part of the contract: when the below and right
    /// neighbors are equal, the hole moves down.
    pub fn slide(&self, corner: Option<(usize, usize)>) -> Result<SkewTableau> {
        let inner_corners = self.inner_shape().corners();
        let outer_corners = self.outer_shape().corners();

        let (mut i, mut j) = match corner {
            Some(c) => {
                if !inner_corners.contains(&c) {
                    return Err(TableauError::InvalidArgument(format!(
                        "({}, {}) is not an inner corner",
                        c.0, c.1
                    )));
                }
                c
            }
            None => match inner_corners.first() {
                Some(&c) => c,
                None => return Ok(self.clone()),
            },
        };

        let mut rows = self.rows().to_vec();
        while !outer_corners.contains(&(i, j)) {
            if j == rows[i].len() - 1 {
                // Nothing to the right: the cell below moves up.
                rows[i][j] = rows[i + 1][j];
                rows[i + 1][j] = None;
                i += 1;
            } else if i == rows.len() - 1 || rows[i + 1].len() <= j {
                // Nothing below: the cell to the right moves left.
                rows[i][j] = rows[i][j + 1];
                rows[i][j + 1] = None;
                j += 1;
            } else {
                let below = rows[i + 1][j];
                let right = rows[i][j + 1];
                if below <= right {
                    rows[i][j] = below;
                    rows[i + 1][j] = None;
                    i += 1;
                } else {
                    rows[i][j] = right;
                    rows[i][j + 1] = None;
                    j += 1;
                }
            }
        }

        // The hole now sits at an outer corner; trim it, and the row if
        // it was the row's only cell.
        rows[i].pop();
        if rows[i].is_empty() {
            rows.pop();
        }

        Ok(SkewTableau::from_valid_rows(rows))
    }

    /// Rectifies the tableau: slides until the inner shape is empty and
    /// returns the straight filling.
    pub fn rectify(&self) -> Result<Vec<Vec<u32>>> {
        let mut cur = self.clone();
        while cur.inner_size() > 0 {
            cur = cur.slide(None)?;
        }
        cur.to_tableau()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::tab;

    #[test]
    fn test_slide_reference_example() {
        let t = tab(&[
            &[-1, -1, -1, -1, 2],
            &[-1, -1, -1, -1, 6],
            &[-1, 2, 4, 4],
            &[2, 3, 6],
            &[5, 5],
        ]);
        let slid = t.slide(Some((2, 0))).unwrap();
        assert_eq!(
            slid,
            tab(&[
                &[-1, -1, -1, -1, 2],
                &[-1, -1, -1, -1, 6],
                &[2, 2, 4, 4],
                &[3, 5, 6],
                &[5],
            ])
        );
        // the input is untouched
        assert_eq!(t.inner_size(), 9);
    }

    #[test]
    fn test_slide_empty_inner_is_identity() {
        let t = tab(&[&[1, 2], &[3, 4]]);
        assert_eq!(t.slide(None).unwrap(), t);
    }

    #[test]
    fn test_slide_rejects_non_corner() {
        let t = tab(&[&[-1, 1], &[2, 3]]);
        let err = t.slide(Some((1, 0))).unwrap_err();
        assert!(matches!(err, TableauError::InvalidArgument(_)));
    }

    #[test]
    fn test_slide_shrinks_inner_by_one() {
        let t = tab(&[&[-1, -1, 1], &[-1, 2], &[3]]);
        let slid = t.slide(None).unwrap();
        assert_eq!(slid.inner_size(), t.inner_size() - 1);
        assert_eq!(slid.size(), t.size());
    }

    #[test]
    fn test_slide_preserves_semistandardness() {
        let t = tab(&[&[-1, 2, 2], &[1, 3], &[2]]);
        assert!(t.is_semistandard());
        let mut cur = t;
        while cur.inner_size() > 0 {
            cur = cur.slide(None).unwrap();
            assert!(cur.is_semistandard());
        }
    }

    #[test]
    fn test_slide_tie_break_moves_down() {
        // below == right == 2: the hole must take the cell below
        let t = tab(&[&[-1, 2], &[2, 3]]);
        let slid = t.slide(None).unwrap();
        assert_eq!(slid, tab(&[&[2, 2], &[3]]));
    }

    #[test]
    fn test_rectify() {
        let t = tab(&[&[-1, 1], &[2, 3]]);
        assert_eq!(t.rectify().unwrap(), vec![vec![1, 3], vec![2]]);

        let t = tab(&[&[-1, -1, -1, 4], &[-1, -1, 1, 6], &[-1, -1, 5], &[2, 3]]);
        assert_eq!(t.rectify().unwrap(), vec![vec![1, 3, 4, 6], vec![2, 5]]);
    }

    #[test]
    fn test_rectify_preserves_cell_count() {
        let t = tab(&[&[-1, -1, 2], &[-1, 3], &[1]]);
        let rect = t.rectify().unwrap();
        let cells: usize = rect.iter().map(Vec::len).sum();
        assert_eq!(cells, t.size());
    }

    #[test]
    fn test_rectify_of_straight_tableau() {
        let t = tab(&[&[1, 2], &[3]]);
        assert_eq!(t.rectify().unwrap(), vec![vec![1, 2], vec![3]]);
    }
}
