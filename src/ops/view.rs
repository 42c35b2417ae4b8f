//! View constructors: reshape, permute, transpose.

use hashbrown::HashSet;
use smallvec::smallvec;

use crate::error::{GraphError, ShapeError};
use crate::graph::{Graph, NodeId};
use crate::shape::{canonical_strides, element_count, normalize_axis, Dim, Shape};
use crate::GraphResult;

impl Graph {
    /// Reshapes `x` to `new_shape`, emitting a view.
    ///
    /// At most one entry may be `-1`; it is inferred from the element count,
    /// which the remaining entries must divide evenly. The stored node never
    /// contains the placeholder.
    pub fn reshape(&mut self, x: NodeId, new_shape: &[Dim]) -> GraphResult<NodeId> {
        let resolved = self.resolve_reshape("reshape", x, new_shape)?;
        let strides = canonical_strides(&resolved);
        self.view(x, resolved, strides)
    }

    /// Rank-1 reshape convenience: `reshape(x, &[len])`.
    pub fn reshape_1d(&mut self, x: NodeId, len: Dim) -> GraphResult<NodeId> {
        self.reshape(x, &[len])
    }

    fn resolve_reshape(
        &self,
        op: &'static str,
        x: NodeId,
        new_shape: &[Dim],
    ) -> GraphResult<Shape> {
        let elements = element_count(self.check(x)?.shape());

        let mut inferred: Option<usize> = None;
        let mut known: Dim = 1;
        for (i, &dim) in new_shape.iter().enumerate() {
            if dim == -1 {
                if inferred.is_some() {
                    return Err(GraphError::shape(op, ShapeError::MultipleInferredDims));
                }
                inferred = Some(i);
            } else if dim < 1 {
                return Err(GraphError::shape(op, ShapeError::InvalidDim { dim }));
            } else {
                known *= dim;
            }
        }

        let mut resolved = Shape::from_slice(new_shape);
        if let Some(i) = inferred {
            if elements % known != 0 {
                return Err(GraphError::shape(
                    op,
                    ShapeError::IndivisibleInference { elements, known },
                ));
            }
            resolved[i] = elements / known;
        } else if known != elements {
            return Err(GraphError::shape(
                op,
                ShapeError::ElementCount {
                    have: elements,
                    want: known,
                },
            ));
        }

        Ok(resolved)
    }

    /// Permutes the axes of `x`, emitting a view.
    ///
    /// `dims[i]` names the *destination* of source axis `i`, i.e.
    /// `out_shape[dims[i]] = shape[i]`. Entries may be negative and must
    /// form a permutation of `0..rank`.
    pub fn permute(&mut self, x: NodeId, dims: &[Dim]) -> GraphResult<NodeId> {
        const OP: &str = "permute";
        let shape = self.check(x)?.shape.clone();
        let rank = shape.len();

        if dims.len() != rank {
            return Err(GraphError::shape(
                OP,
                ShapeError::PermutationLength {
                    given: dims.len(),
                    rank,
                },
            ));
        }

        let mut seen: HashSet<usize> = HashSet::with_capacity(rank);
        let mut out_shape: Shape = smallvec![0; rank];
        for (i, &dim) in dims.iter().enumerate() {
            let dest = normalize_axis(dim, rank).map_err(|e| GraphError::shape(OP, e))?;
            if !seen.insert(dest) {
                return Err(GraphError::shape(OP, ShapeError::DuplicateAxis { axis: dest }));
            }
            out_shape[dest] = shape[i];
        }

        let strides = canonical_strides(&out_shape);
        self.view(x, out_shape, strides)
    }

    /// Reverses every axis: `permute(x, reverse(0..rank))`.
    pub fn transpose(&mut self, x: NodeId) -> GraphResult<NodeId> {
        let rank = self.check(x)?.rank();
        let dims: Shape = (0..rank).rev().map(|i| i as Dim).collect();
        self.permute(x, &dims)
    }
}
