//! Matrix multiplication, decomposed into existing primitives.
//!
//! There is no MATMUL opcode. The product is expressed as a pair of views
//! that separate the contraction axis, a broadcast multiply, and a SUM
//! reduction, so every downstream pass sees only machinery it already
//! handles, batching included.

use crate::error::{GraphError, ShapeError};
use crate::graph::{BinaryKind, Graph, NodeId, ReduceKind};
use crate::shape::{broadcast, canonical_strides, Shape};
use crate::GraphResult;

impl Graph {
    /// Matrix product of `x` and `y` with batch broadcasting.
    ///
    /// Rank-1 operands are promoted (a row vector on the left, a column
    /// vector on the right) and the synthetic axes are squeezed back out of
    /// the result, so vector × vector yields a scalar, matrix × vector a
    /// vector, and so on. Leading batch dimensions follow the standard
    /// broadcast rule.
    pub fn matmul(&mut self, x: NodeId, y: NodeId) -> GraphResult<NodeId> {
        const OP: &str = "matmul";
        let xs = self.check(x)?.shape.clone();
        let ys = self.check(y)?.shape.clone();
        if xs.is_empty() || ys.is_empty() {
            return Err(GraphError::shape(OP, ShapeError::ScalarOperand));
        }
        let x_was_vector = xs.len() == 1;
        let y_was_vector = ys.len() == 1;

        // Promote vectors: (K) -> (1, K) on the left, (K) -> (K, 1) on the right.
        let mut xp = xs;
        if x_was_vector {
            xp.insert(0, 1);
        }
        let mut yp = ys;
        if y_was_vector {
            yp.push(1);
        }

        let k_lhs = xp[xp.len() - 1];
        let k_rhs = yp[yp.len() - 2];
        if k_lhs != k_rhs {
            return Err(GraphError::shape(
                OP,
                ShapeError::InnerDimMismatch {
                    lhs: k_lhs,
                    rhs: k_rhs,
                },
            ));
        }

        // (…, A, K) -> (…, A, K, 1) and (…, K, B) -> (…, 1, K, B): the
        // broadcast product then carries shape (…, A, K, B).
        let mut x_ext = xp;
        x_ext.push(1);
        let mut y_ext = yp.clone();
        y_ext.insert(yp.len() - 2, 1);

        // Batch dims may still clash; reject before any node is appended.
        broadcast(&x_ext, &y_ext).map_err(|e| GraphError::shape(OP, e))?;

        let x_strides = canonical_strides(&x_ext);
        let xv = self.view(x, x_ext, x_strides)?;
        let y_strides = canonical_strides(&y_ext);
        let yv = self.view(y, y_ext, y_strides)?;

        let product = self.binary(BinaryKind::Mul, xv, yv)?;
        let summed = self.reduce(ReduceKind::Sum, product, &[-2], false)?;

        if !(x_was_vector || y_was_vector) {
            return Ok(summed);
        }

        // Squeeze the axes that vector promotion introduced.
        let mut out: Shape = self.check(summed)?.shape.clone();
        if x_was_vector {
            out.remove(out.len() - 2);
        }
        if y_was_vector {
            out.pop();
        }
        let strides = canonical_strides(&out);
        self.view(summed, out, strides)
    }
}
