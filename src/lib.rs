//! Algorithms for the string range matching problem: given a text `X`
//! and bound strings `Y <= Z`, find the suffixes of `X` that lie
//! lexicographically in `[Y, Z)`, either as a count, as a stream of
//! positions, or as a boolean table indexed by position.
//!
//! The counting, reporting and table algorithms follow the paper
//! J. Kärkkäinen, D. Kempa, S. Puglisi: String Range Matching.
//! In Proc. CPM 2014, pages 232-241, Springer, 2014.
//! The exact-matching and period primitives they are built on follow
//! M. Crochemore: String-matching on ordered alphabets. Theoretical
//! Computer Science, 92:33-47, 1992.
//!
//! Inputs are plain slices over any `Ord` symbol type; the algorithms
//! use only `<` and `==` on symbols and never allocate beyond what the
//! chosen output modality requires.

use thiserror::Error;

mod common;
pub mod counting;
pub mod crochemore;
pub mod naive;
pub mod reporting;
pub mod tables;

pub use counting::{LessThanCounter, RangeCounter, MIN_K};
pub use crochemore::{exact_positions, smallest_period};
pub use reporting::{range_positions, restricted_positions, Side};
pub use tables::{less_than_table, less_than_table_into, range_table_into, SliceSink, TableSink};

/// Precondition violations detected at the public boundary. The
/// algorithms themselves cannot fail on valid inputs, and no partial
/// output is produced when a precondition is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PreconditionError {
  /// The scan parameter of a counter must be at least 3.
  #[error("scan parameter k = {k} is below the minimum of 3")]
  ParameterTooSmall { k: usize },
  /// A range `[Y, Z)` requires `Y <= Z`.
  #[error("lower bound is lexicographically greater than upper bound")]
  BoundsOutOfOrder,
  /// The restricted prefix length must satisfy `1 <= r <= |Y|`.
  #[error("restricted prefix length {r} is outside 1..={max}")]
  PrefixOutOfRange { r: usize, max: usize },
  /// An output table must have exactly one slot per text position.
  #[error("output table length {got} does not match text length {want}")]
  TableLength { got: usize, want: usize },
}
