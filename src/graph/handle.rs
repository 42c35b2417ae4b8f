//! Node handles: a graph paired with an index.

use super::node::{Node, NodeId, Op};
use super::store::Graph;
use crate::shape::Dim;

/// A borrowed handle to one node of a graph.
///
/// Handles are cheap `(graph, index)` pairs: all accessors are O(1) lookups
/// through the graph. Two handles are equal when they name the same index in
/// the same graph instance.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> NodeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Self { graph, id }
    }

    /// The id this handle wraps.
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    /// The graph that owns the node.
    #[inline]
    pub fn graph(self) -> &'g Graph {
        self.graph
    }

    #[inline]
    fn node(self) -> &'g Node {
        self.graph.node(self.id)
    }

    /// The operator payload.
    #[inline]
    pub fn op(self) -> &'g Op {
        self.node().op()
    }

    /// Resolved output shape.
    #[inline]
    pub fn shape(self) -> &'g [Dim] {
        self.node().shape()
    }

    /// Resolved output strides.
    #[inline]
    pub fn strides(self) -> &'g [Dim] {
        self.node().strides()
    }

    /// Tensor rank.
    #[inline]
    pub fn rank(self) -> usize {
        self.node().rank()
    }

    /// Handles to the operands of this node, in operand order.
    pub fn operands(self) -> impl Iterator<Item = NodeRef<'g>> {
        self.op()
            .operands()
            .into_iter()
            .map(move |id| NodeRef::new(self.graph, id))
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
