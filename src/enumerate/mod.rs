//! Combinatorial classes of skew tableaux and their supporting
//! enumerators: reduced skew shapes of a given size, linear extensions
//! of a cell poset, and integer vectors with fixed sum.

use std::fmt;

use num_bigint::BigUint;

mod integer_vectors;
mod linear_extension;
mod semistandard;
mod shapes;
mod standard;

pub use integer_vectors::integer_vectors;
pub use linear_extension::linear_extensions;
pub use semistandard::SemistandardSkewTableaux;
pub use shapes::skew_partitions;
pub use standard::StandardSkewTableaux;

/// The size of a combinatorial class.
///
/// Counts are exact big integers so that determinant-based formulas
/// never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cardinality {
    Finite(BigUint),
    Infinite,
}

impl Cardinality {
    /// Convenience constructor from any primitive unsigned integer.
    pub fn finite<T: Into<BigUint>>(n: T) -> Self {
        Cardinality::Finite(n.into())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Cardinality::Finite(_))
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Finite(n) => write!(f, "{n}"),
            Cardinality::Infinite => write!(f, "+Infinity"),
        }
    }
}
