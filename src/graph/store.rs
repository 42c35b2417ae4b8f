//! The graph store: an append-only arena of nodes.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::handle::NodeRef;
use super::node::{Axes, BinaryKind, BufferId, Node, NodeId, Op, ReduceKind, UnaryKind};
use crate::error::{GraphError, GraphResult, ShapeError};
use crate::shape::{
    broadcast, canonical_strides, check_dims, element_count, normalize_axis, reduce_shape, Dim,
    Shape,
};

/// An append-only arena of tensor-expression nodes.
///
/// The store owns every node and distinguishes *inputs* (externally supplied
/// tensors) from *weights* (the trainable subset of inputs). Nodes reference
/// operands by index, and operands always precede their consumers, so
/// reading the arena in index order is a topological walk. Downstream
/// passes rely on this; the store never removes or reorders nodes.
///
/// Construction is single-threaded and synchronous: one `&mut Graph` at a
/// time, with failed calls leaving the graph untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<Node>,
    inputs: Vec<NodeId>,
    weights: Vec<NodeId>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no nodes have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in index order. Operands precede consumers.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Ids of every registered input tensor, in registration order.
    #[inline]
    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// Ids of every registered weight. Always a subset of the inputs.
    #[inline]
    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    /// The node behind a handle.
    ///
    /// Panics if the id did not come from this graph; use [`Graph::get`]
    /// for the checked form.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Resolved shape of a node.
    #[inline]
    pub fn shape(&self, id: NodeId) -> &[Dim] {
        self.node(id).shape()
    }

    /// Resolved strides of a node.
    #[inline]
    pub fn strides(&self, id: NodeId) -> &[Dim] {
        self.node(id).strides()
    }

    /// Checked lookup, pairing the graph with the node.
    pub fn get(&self, id: NodeId) -> GraphResult<NodeRef<'_>> {
        self.check(id)?;
        Ok(NodeRef::new(self, id))
    }

    /// Iterates over all nodes as handles, in topological (index) order.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef::new(self, NodeId(i)))
    }

    pub(crate) fn check(&self, id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(id.0).ok_or(GraphError::InvalidNode {
            index: id.0,
            len: self.nodes.len(),
        })
    }

    fn push(&mut self, op: Op, shape: Shape, strides: Shape) -> NodeId {
        debug_assert_eq!(shape.len(), strides.len());
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { op, shape, strides });
        id
    }

    /// Registers an externally supplied tensor as a graph input.
    pub fn input(&mut self, shape: &[Dim]) -> GraphResult<NodeId> {
        let id = self.tensor("input", shape)?;
        self.inputs.push(id);
        Ok(id)
    }

    /// Registers a trainable tensor: an input that also lands in `weights`.
    pub fn weight(&mut self, shape: &[Dim]) -> GraphResult<NodeId> {
        let id = self.tensor("weight", shape)?;
        self.inputs.push(id);
        self.weights.push(id);
        Ok(id)
    }

    fn tensor(&mut self, op: &'static str, shape: &[Dim]) -> GraphResult<NodeId> {
        check_dims(shape).map_err(|e| GraphError::shape(op, e))?;
        let strides = canonical_strides(shape);
        Ok(self.push(Op::Tensor { data: None }, Shape::from_slice(shape), strides))
    }

    /// Adds a scalar literal. Its shape is empty.
    pub fn immediate(&mut self, value: f32) -> NodeId {
        self.push(Op::Immediate { value }, Shape::new(), Shape::new())
    }

    /// Adds an element-wise unary node; shape and strides come from `x`.
    pub fn unary(&mut self, kind: UnaryKind, x: NodeId) -> GraphResult<NodeId> {
        let node = self.check(x)?;
        let (shape, strides) = (node.shape.clone(), node.strides.clone());
        Ok(self.push(Op::Unary { kind, x }, shape, strides))
    }

    /// Adds an element-wise binary node over the broadcast of `x` and `y`.
    pub fn binary(&mut self, kind: BinaryKind, x: NodeId, y: NodeId) -> GraphResult<NodeId> {
        let xs = self.check(x)?.shape.clone();
        let ys = &self.check(y)?.shape;
        let shape = broadcast(&xs, ys).map_err(|e| GraphError::shape(kind.name(), e))?;
        let strides = canonical_strides(&shape);
        Ok(self.push(Op::Binary { kind, x, y }, shape, strides))
    }

    /// Adds a reduction node.
    ///
    /// Axes may be negative and arrive in any order; they are normalized,
    /// sorted, and must be pairwise distinct. An empty list reduces over
    /// every axis.
    pub fn reduce(
        &mut self,
        kind: ReduceKind,
        x: NodeId,
        axes: &[Dim],
        keepdim: bool,
    ) -> GraphResult<NodeId> {
        let op = kind.name();
        let axes = self.normalized_axes(op, x, axes)?;
        let x_shape = self.check(x)?.shape.clone();
        let shape = reduce_shape(&x_shape, &axes, keepdim).map_err(|e| GraphError::shape(op, e))?;
        let strides = canonical_strides(&shape);
        Ok(self.push(
            Op::Reduce {
                kind,
                x,
                axes,
                keepdim,
            },
            shape,
            strides,
        ))
    }

    /// Normalizes, sorts, and checks a user-facing axis list against the
    /// rank of `x`, without appending anything.
    pub(crate) fn normalized_axes(
        &self,
        op: &'static str,
        x: NodeId,
        axes: &[Dim],
    ) -> GraphResult<Axes> {
        let rank = self.check(x)?.rank();
        let mut normalized = Axes::with_capacity(axes.len());
        for &axis in axes {
            normalized.push(normalize_axis(axis, rank).map_err(|e| GraphError::shape(op, e))?);
        }
        normalized.sort_unstable();
        for pair in normalized.windows(2) {
            if pair[0] == pair[1] {
                return Err(GraphError::shape(op, ShapeError::DuplicateAxis { axis: pair[0] }));
            }
        }
        Ok(normalized)
    }

    /// Adds a view node over `x`.
    ///
    /// The caller supplies the already-computed layout; the store verifies
    /// that shape and strides agree in rank, that every dimension is a real
    /// size (no `-1` placeholder survives), and that the element count
    /// matches `x`.
    pub fn view(&mut self, x: NodeId, shape: Shape, strides: Shape) -> GraphResult<NodeId> {
        const OP: &str = "view";
        let node = self.check(x)?;
        if shape.len() != strides.len() {
            return Err(GraphError::shape(
                OP,
                ShapeError::RankMismatch {
                    shape: shape.len(),
                    strides: strides.len(),
                },
            ));
        }
        check_dims(&shape).map_err(|e| GraphError::shape(OP, e))?;
        let have = element_count(&node.shape);
        let want = element_count(&shape);
        if have != want {
            return Err(GraphError::shape(OP, ShapeError::ElementCount { have, want }));
        }
        Ok(self.push(Op::View { x }, shape, strides))
    }

    /// Binds an external buffer onto a Tensor node.
    ///
    /// The runtime calls this between builds and executions; it is the only
    /// mutation allowed after a node is created.
    pub fn set_tensor_data(&mut self, id: NodeId, data: BufferId) -> GraphResult<()> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(GraphError::InvalidNode { index: id.0, len })?;
        match &mut node.op {
            Op::Tensor { data: slot } => {
                *slot = Some(data);
                Ok(())
            }
            _ => Err(GraphError::kind("set_tensor_data", id.0)),
        }
    }

    /// Reads the buffer bound to a Tensor node, if any.
    pub fn tensor_data(&self, id: NodeId) -> GraphResult<Option<BufferId>> {
        match self.check(id)?.op() {
            Op::Tensor { data } => Ok(*data),
            _ => Err(GraphError::kind("tensor_data", id.0)),
        }
    }

    /// Reads the literal behind an Immediate node.
    pub fn immediate_value(&self, id: NodeId) -> GraphResult<f32> {
        match self.check(id)?.op() {
            Op::Immediate { value } => Ok(*value),
            _ => Err(GraphError::kind("immediate_value", id.0)),
        }
    }
}
