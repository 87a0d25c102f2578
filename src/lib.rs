//! Skew tableaux and the combinatorics built on them.
//!
//! A skew tableau is a filling of a skew Young diagram (an outer
//! partition shape with an inner partition shape removed) whose rows
//! weakly increase and, in the semistandard case, whose columns
//! strictly increase. This crate provides the skew tableau type with
//! its structural operations, the jeu de taquin machinery, and
//! enumeration of the standard and semistandard classes.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Partition`, `SkewPartition`,
//!   `SkewTableau`, `Ribbon` — plus word-level helpers
//! - **`enumerate`**: Combinatorial classes `StandardSkewTableaux` and
//!   `SemistandardSkewTableaux` with lazy listings, exact counts, and
//!   the supporting enumerators
//! - **`error`**: The crate-wide error and result types
//!
//! Jeu de taquin (`SkewTableau::slide`, `SkewTableau::rectify`) and the
//! symmetric-group actions (`SkewTableau::standardization`,
//! `SkewTableau::bender_knuth_involution`) live as inherent methods on
//! the tableau type.
//!
//! # References
//!
//! - Fulton (1997), "Young Tableaux", chapter 1
//! - Stanley (1999), "Enumerative Combinatorics" vol. 2, chapter 7
//! - Sagan (2001), "The Symmetric Group", chapter 3

pub mod enumerate;
pub mod error;
pub mod models;

mod slide;
mod standardize;
#[cfg(test)]
mod test_util;

pub use enumerate::{Cardinality, SemistandardSkewTableaux, StandardSkewTableaux};
pub use error::{Result, TableauError};
pub use models::{Partition, Ribbon, SkewPartition, SkewTableau};
pub use standardize::RowSelection;
