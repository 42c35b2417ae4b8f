//! # Tensir
//!
//! Shape-checked computation graph builder for tensor expression compilers.
//!
//! ## Features
//!
//! - Closed node algebra: inputs, immediates, unary/binary ops, reductions, views
//! - NumPy-style broadcasting with canonical strides resolved at construction
//! - Reshape with one inferred dimension, permute, transpose
//! - Matmul decomposed into reshape, broadcast multiply, and sum
//! - Append-only arena: index order is topological order
//!
//! ## Example
//!
//! ```
//! use tensir::Graph;
//!
//! let mut g = Graph::new();
//! let x = g.input(&[8, 3, 4])?;
//! let w = g.weight(&[4, 5])?;
//! let h = g.matmul(x, w)?;
//! let y = g.sigmoid(h)?;
//! assert_eq!(g.shape(y), &[8, 3, 5]);
//! # Ok::<(), tensir::GraphError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod graph;
pub mod ops;
pub mod shape;

pub use error::{GraphError, GraphResult, ShapeError};
pub use graph::{
    Axes, BinaryKind, BufferId, Graph, Node, NodeId, NodeRef, Op, ReduceKind, UnaryKind,
};
pub use ops::Operand;
pub use shape::{
    broadcast, canonical_strides, element_count, normalize_axis, reduce_shape, Dim, Shape,
};
