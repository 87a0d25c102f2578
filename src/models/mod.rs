//! Domain models for skew tableaux.
//!
//! The types here are immutable values: every transformation builds a
//! new object, so there is no shared mutable state between tableaux.
//!
//! - [`Partition`] — weakly decreasing row lengths
//! - [`SkewPartition`] — outer/inner pair of partitions
//! - [`SkewTableau`] — the filled grid all engines operate on
//! - [`Ribbon`] — hole-stripped rows of a border strip
//! - [`word`] — reading-word helpers

mod partition;
mod ribbon;
mod skew_partition;
mod tableau;
pub mod word;

pub use partition::Partition;
pub use ribbon::Ribbon;
pub use skew_partition::SkewPartition;
pub use tableau::SkewTableau;
