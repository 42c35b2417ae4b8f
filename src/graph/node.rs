//! Node algebra: the closed set of operator variants and their payloads.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::shape::{Dim, Shape};

/// Index of a node within its owning [`Graph`](crate::Graph).
///
/// Nodes reference their operands by `NodeId`, never by address, so the
/// arena may reallocate freely during construction. Indices are stable for
/// the lifetime of the graph; nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Opaque pointer-sized token naming an externally owned buffer.
///
/// The runtime binds one of these onto each Tensor node before execution.
/// The builder stores the token and hands it back; it never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferId(pub usize);

/// Element-wise unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryKind {
    Exp,
    Log,
    Sin,
}

impl UnaryKind {
    /// Operator name as it appears in error context.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sin => "sin",
        }
    }
}

/// Element-wise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    CmpEq,
    Max,
}

impl BinaryKind {
    /// Operator name as it appears in error context.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Pow => "pow",
            Self::CmpEq => "cmp_eq",
            Self::Max => "max",
        }
    }
}

/// Reduction operators.
///
/// There is no MIN kind; `min` is built as `-max(-x)` by the constructors,
/// keeping the algebra closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReduceKind {
    Sum,
    Max,
}

impl ReduceKind {
    /// Operator name as it appears in error context.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Max => "max",
        }
    }
}

/// Reduction axes as stored on a node: normalized and strictly increasing.
/// Empty means reduce over every axis.
pub type Axes = SmallVec<[usize; 4]>;

/// Operator payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// An externally supplied buffer; `data` is bound by the runtime
    /// between builds and executions.
    Tensor { data: Option<BufferId> },
    /// A scalar literal. Its shape is empty.
    Immediate { value: f32 },
    /// Element-wise unary operation on `x`.
    Unary { kind: UnaryKind, x: NodeId },
    /// Element-wise binary operation on the broadcast of `x` and `y`.
    Binary {
        kind: BinaryKind,
        x: NodeId,
        y: NodeId,
    },
    /// Reduction of `x` over `axes`.
    Reduce {
        kind: ReduceKind,
        x: NodeId,
        axes: Axes,
        keepdim: bool,
    },
    /// Same data as `x` behind a different shape/stride layout.
    View { x: NodeId },
}

impl Op {
    /// Ids of the nodes this operator reads.
    pub fn operands(&self) -> SmallVec<[NodeId; 2]> {
        match self {
            Self::Tensor { .. } | Self::Immediate { .. } => SmallVec::new(),
            Self::Unary { x, .. } | Self::Reduce { x, .. } | Self::View { x } => {
                SmallVec::from_slice(&[*x])
            }
            Self::Binary { x, y, .. } => SmallVec::from_slice(&[*x, *y]),
        }
    }

    /// Returns true for Tensor nodes.
    #[inline]
    pub fn is_tensor(&self) -> bool {
        matches!(self, Self::Tensor { .. })
    }
}

/// A graph node: an operator plus its resolved output layout.
///
/// Shape and strides are computed once, at construction; downstream passes
/// read them without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) op: Op,
    pub(crate) shape: Shape,
    pub(crate) strides: Shape,
}

impl Node {
    /// The operator payload.
    #[inline]
    pub fn op(&self) -> &Op {
        &self.op
    }

    /// Resolved output shape.
    #[inline]
    pub fn shape(&self) -> &[Dim] {
        &self.shape
    }

    /// Resolved output strides, same length as the shape.
    #[inline]
    pub fn strides(&self) -> &[Dim] {
        &self.strides
    }

    /// Tensor rank.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}
