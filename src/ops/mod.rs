//! Operator constructors layered over the graph store.
//!
//! Primitive constructors live on [`Graph`](crate::Graph) in the store;
//! this module adds the user-facing surface: scalar lifting, composite
//! operators (cos, sigmoid, comparisons, min, matmul), and the view and
//! reduction families. Composites validate everything that can fail before
//! appending their first node, so a failed call never leaves a partial
//! chain behind.

mod compare;
mod elementwise;
mod matmul;
mod reduce;
mod view;

use crate::graph::{Graph, NodeId};
use crate::shape::Shape;
use crate::GraphResult;

/// Either an existing node or a scalar about to be lifted into one.
///
/// There is no mixed-operand binary kind: scalars always materialize as
/// Immediate nodes first, which keeps the operator algebra closed. Both
/// operand positions of every binary constructor accept `impl Into<Operand>`,
/// so scalar-on-left and scalar-on-right forms share one path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Scalar(f32),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Scalar(value)
    }
}

impl Graph {
    /// Shape of an operand without materializing it. Scalars are rank 0.
    pub(crate) fn operand_shape(&self, operand: Operand) -> GraphResult<Shape> {
        match operand {
            Operand::Node(id) => Ok(self.check(id)?.shape().into()),
            Operand::Scalar(_) => Ok(Shape::new()),
        }
    }

    /// Materializes an operand, lifting scalars into Immediate nodes.
    pub(crate) fn lift(&mut self, operand: Operand) -> NodeId {
        match operand {
            Operand::Node(id) => id,
            Operand::Scalar(value) => self.immediate(value),
        }
    }

    /// Validates that a pair of operands broadcast, then materializes both.
    ///
    /// Validation happens first so that nothing is appended when the pair
    /// is rejected.
    pub(crate) fn lift_pair(
        &mut self,
        op: &'static str,
        x: Operand,
        y: Operand,
    ) -> GraphResult<(NodeId, NodeId)> {
        let xs = self.operand_shape(x)?;
        let ys = self.operand_shape(y)?;
        crate::shape::broadcast(&xs, &ys).map_err(|e| crate::GraphError::shape(op, e))?;
        let x = self.lift(x);
        let y = self.lift(y);
        Ok((x, y))
    }
}
