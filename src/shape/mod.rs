//! Shape and stride algebra.
//!
//! Pure functions over dimension slices: broadcasting, canonical stride
//! computation, reduced-shape bookkeeping, and axis normalization. All
//! validation lives here so the graph store can stay a thin arena.

mod algebra;

pub use algebra::{broadcast, canonical_strides, element_count, normalize_axis, reduce_shape};

pub(crate) use algebra::check_dims;

use smallvec::SmallVec;

/// Scalar dimension: wide enough for element counts and signed axis indices.
pub type Dim = i64;

/// An ordered list of dimensions. Empty means scalar.
///
/// Shapes are small in practice, so they live inline up to rank 4.
pub type Shape = SmallVec<[Dim; 4]>;
