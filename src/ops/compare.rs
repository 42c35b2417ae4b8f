//! Comparisons and `min`, decomposed onto the `MAX`/`CMP_EQ` primitives.
//!
//! Every comparison yields a 0/1-valued tensor by construction. The
//! decompositions mirror the reduction side: there is no LESS or MIN
//! opcode anywhere in the algebra.

use super::Operand;
use crate::graph::{BinaryKind, Graph, NodeId};
use crate::GraphResult;

impl Graph {
    /// Element-wise equality: `CMP_EQ(x, y)`.
    pub fn equal(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        let (x, y) = self.lift_pair("equal", x.into(), y.into())?;
        self.binary(BinaryKind::CmpEq, x, y)
    }

    /// Element-wise greater-than: `max(x, y) == x`.
    pub fn greater(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        let (x, y) = self.lift_pair("greater", x.into(), y.into())?;
        let max = self.binary(BinaryKind::Max, x, y)?;
        self.binary(BinaryKind::CmpEq, max, x)
    }

    /// Element-wise less-than: `y > x`.
    pub fn less(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        let (x, y) = self.lift_pair("less", x.into(), y.into())?;
        let max = self.binary(BinaryKind::Max, y, x)?;
        self.binary(BinaryKind::CmpEq, max, y)
    }

    /// Element-wise less-or-equal: `max(x - y, 0) == 0`.
    pub fn less_equal(
        &mut self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> GraphResult<NodeId> {
        let (x, y) = self.lift_pair("less_equal", x.into(), y.into())?;
        let diff = self.binary(BinaryKind::Sub, x, y)?;
        let zero = self.immediate(0.0);
        let clamped = self.binary(BinaryKind::Max, diff, zero)?;
        self.binary(BinaryKind::CmpEq, clamped, zero)
    }

    /// Element-wise greater-or-equal: `min(x - y, 0) == 0`.
    pub fn greater_equal(
        &mut self,
        x: impl Into<Operand>,
        y: impl Into<Operand>,
    ) -> GraphResult<NodeId> {
        let (x, y) = self.lift_pair("greater_equal", x.into(), y.into())?;
        let diff = self.binary(BinaryKind::Sub, x, y)?;
        let zero = self.immediate(0.0);
        let clamped = self.minimum_nodes(diff, zero)?;
        self.binary(BinaryKind::CmpEq, clamped, zero)
    }

    /// Element-wise minimum: `-max(-x, -y)`.
    pub fn minimum(&mut self, x: impl Into<Operand>, y: impl Into<Operand>) -> GraphResult<NodeId> {
        let (x, y) = self.lift_pair("minimum", x.into(), y.into())?;
        self.minimum_nodes(x, y)
    }

    pub(crate) fn minimum_nodes(&mut self, x: NodeId, y: NodeId) -> GraphResult<NodeId> {
        let nx = self.neg(x)?;
        let ny = self.neg(y)?;
        let max = self.binary(BinaryKind::Max, nx, ny)?;
        self.neg(max)
    }
}
