//! Element-wise arithmetic: unary lifts, scalar promotion, and the
//! trigonometric/activation rewrites.

use core::f32::consts::FRAC_PI_2;

use super::Operand;
use crate::graph::{BinaryKind, Graph, NodeId, UnaryKind};
use crate::GraphResult;

impl Graph {
    fn binary_op(
        &mut self,
        kind: BinaryKind,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> GraphResult<NodeId> {
        let (x, y) = self.lift_pair(kind.name(), x.into(), y.into())?;
        self.binary(kind, x, y)
    }

    /// Element-wise addition with broadcasting.
    pub fn add(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        self.binary_op(BinaryKind::Add, x, y)
    }

    /// Element-wise subtraction with broadcasting.
    pub fn sub(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        self.binary_op(BinaryKind::Sub, x, y)
    }

    /// Element-wise multiplication with broadcasting.
    pub fn mul(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        self.binary_op(BinaryKind::Mul, x, y)
    }

    /// Element-wise division with broadcasting.
    pub fn div(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        self.binary_op(BinaryKind::Div, x, y)
    }

    /// Element-wise power with broadcasting.
    pub fn pow(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        self.binary_op(BinaryKind::Pow, x, y)
    }

    /// Element-wise maximum with broadcasting.
    pub fn maximum(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        self.binary_op(BinaryKind::Max, x, y)
    }

    /// Element-wise exponential.
    pub fn exp(&mut self, x: NodeId) -> GraphResult<NodeId> {
        self.unary(UnaryKind::Exp, x)
    }

    /// Element-wise natural logarithm.
    pub fn log(&mut self, x: NodeId) -> GraphResult<NodeId> {
        self.unary(UnaryKind::Log, x)
    }

    /// Element-wise sine.
    pub fn sin(&mut self, x: NodeId) -> GraphResult<NodeId> {
        self.unary(UnaryKind::Sin, x)
    }

    /// Negation, built as `(-1) * x`.
    pub fn neg(&mut self, x: NodeId) -> GraphResult<NodeId> {
        self.mul(-1.0, x)
    }

    /// Cosine, rewritten at construction as `sin(x + π/2)`.
    ///
    /// There is no COS opcode; the rewrite keeps the unary algebra minimal.
    pub fn cos(&mut self, x: NodeId) -> GraphResult<NodeId> {
        let shifted = self.add(x, FRAC_PI_2)?;
        self.sin(shifted)
    }

    /// Logistic sigmoid `1 / (1 + exp(-x))`.
    pub fn sigmoid(&mut self, x: NodeId) -> GraphResult<NodeId> {
        let negated = self.neg(x)?;
        let exp = self.exp(negated)?;
        let denom = self.add(1.0, exp)?;
        self.div(1.0, denom)
    }
}
