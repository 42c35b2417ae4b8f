//! Error types for graph construction.

use crate::shape::{Dim, Shape};

/// Structured cause of a shape validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ShapeError {
    /// Two shapes cannot be broadcast together.
    #[cfg_attr(feature = "std", error("cannot broadcast {lhs:?} with {rhs:?}"))]
    Broadcast { lhs: Shape, rhs: Shape },

    /// Axis outside the valid range for a tensor of this rank.
    #[cfg_attr(feature = "std", error("axis {axis} out of range for rank {rank}"))]
    AxisOutOfRange { axis: Dim, rank: usize },

    /// The same axis was listed twice.
    #[cfg_attr(feature = "std", error("axis {axis} listed more than once"))]
    DuplicateAxis { axis: usize },

    /// More axes than the tensor has dimensions.
    #[cfg_attr(feature = "std", error("{given} axes given, tensor has rank {rank}"))]
    TooManyAxes { given: usize, rank: usize },

    /// Element counts of the source and target shapes differ.
    #[cfg_attr(feature = "std", error("element count mismatch: have {have}, want {want}"))]
    ElementCount { have: Dim, want: Dim },

    /// More than one `-1` placeholder in a reshape target.
    #[cfg_attr(feature = "std", error("at most one dimension may be -1"))]
    MultipleInferredDims,

    /// The known dimensions do not divide the element count evenly.
    #[cfg_attr(
        feature = "std",
        error("cannot infer dimension: {elements} elements not divisible by {known}")
    )]
    IndivisibleInference { elements: Dim, known: Dim },

    /// Permutation length does not match the tensor rank.
    #[cfg_attr(feature = "std", error("permutation has {given} entries, tensor has rank {rank}"))]
    PermutationLength { given: usize, rank: usize },

    /// Matmul inner dimensions disagree.
    #[cfg_attr(feature = "std", error("inner dimension mismatch: {lhs} vs {rhs}"))]
    InnerDimMismatch { lhs: Dim, rhs: Dim },

    /// A dimension that is not a positive size.
    #[cfg_attr(feature = "std", error("invalid dimension {dim}"))]
    InvalidDim { dim: Dim },

    /// Shape and strides have different lengths.
    #[cfg_attr(feature = "std", error("shape has rank {shape}, strides have rank {strides}"))]
    RankMismatch { shape: usize, strides: usize },

    /// A rank-0 operand where a matrix or vector is required.
    #[cfg_attr(feature = "std", error("scalar operand where a matrix is required"))]
    ScalarOperand,
}

/// Errors surfaced by the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum GraphError {
    /// An operator rejected its input shapes or axes.
    #[cfg_attr(feature = "std", error("{op}: {source}"))]
    Shape {
        op: &'static str,
        source: ShapeError,
    },

    /// A variant-specific accessor was applied to the wrong node kind.
    #[cfg_attr(feature = "std", error("{op}: node {index} has the wrong kind"))]
    Kind { op: &'static str, index: usize },

    /// A handle that does not point into this graph. Indicates a caller bug.
    #[cfg_attr(feature = "std", error("node index {index} out of range (graph has {len} nodes)"))]
    InvalidNode { index: usize, len: usize },
}

impl GraphError {
    pub fn shape(op: &'static str, source: ShapeError) -> Self {
        Self::Shape { op, source }
    }

    pub fn kind(op: &'static str, index: usize) -> Self {
        Self::Kind { op, index }
    }

    /// Returns the shape cause, if this is a shape error.
    pub fn shape_cause(&self) -> Option<&ShapeError> {
        match self {
            Self::Shape { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for graph construction.
pub type GraphResult<T> = core::result::Result<T, GraphError>;
