//! Reduction constructors.
//!
//! Each reduction comes in three signatures: reduce over everything, over a
//! single axis, or over an explicit axis list. Axes may be negative; they
//! are normalized, sorted, and deduplicated before being stored.

use crate::graph::{Graph, NodeId, ReduceKind};
use crate::shape::Dim;
use crate::GraphResult;

impl Graph {
    /// Sum over every axis.
    pub fn sum(&mut self, x: NodeId, keepdim: bool) -> GraphResult<NodeId> {
        self.reduce(ReduceKind::Sum, x, &[], keepdim)
    }

    /// Sum over one axis.
    pub fn sum_axis(&mut self, x: NodeId, axis: Dim, keepdim: bool) -> GraphResult<NodeId> {
        self.reduce(ReduceKind::Sum, x, &[axis], keepdim)
    }

    /// Sum over a list of axes.
    pub fn sum_axes(&mut self, x: NodeId, axes: &[Dim], keepdim: bool) -> GraphResult<NodeId> {
        self.reduce(ReduceKind::Sum, x, axes, keepdim)
    }

    /// Maximum over every axis.
    pub fn max(&mut self, x: NodeId, keepdim: bool) -> GraphResult<NodeId> {
        self.reduce(ReduceKind::Max, x, &[], keepdim)
    }

    /// Maximum over one axis.
    pub fn max_axis(&mut self, x: NodeId, axis: Dim, keepdim: bool) -> GraphResult<NodeId> {
        self.reduce(ReduceKind::Max, x, &[axis], keepdim)
    }

    /// Maximum over a list of axes.
    pub fn max_axes(&mut self, x: NodeId, axes: &[Dim], keepdim: bool) -> GraphResult<NodeId> {
        self.reduce(ReduceKind::Max, x, axes, keepdim)
    }

    /// Minimum over every axis.
    pub fn min(&mut self, x: NodeId, keepdim: bool) -> GraphResult<NodeId> {
        self.reduce_min(x, &[], keepdim)
    }

    /// Minimum over one axis.
    pub fn min_axis(&mut self, x: NodeId, axis: Dim, keepdim: bool) -> GraphResult<NodeId> {
        self.reduce_min(x, &[axis], keepdim)
    }

    /// Minimum over a list of axes.
    pub fn min_axes(&mut self, x: NodeId, axes: &[Dim], keepdim: bool) -> GraphResult<NodeId> {
        self.reduce_min(x, axes, keepdim)
    }

    /// Min as `-max(-x)`, mirroring the element-wise decomposition.
    fn reduce_min(&mut self, x: NodeId, axes: &[Dim], keepdim: bool) -> GraphResult<NodeId> {
        // Validate the axes up front so the negation chain is not emitted
        // for a call that would fail.
        self.normalized_axes("min", x, axes)?;
        let negated = self.neg(x)?;
        let max = self.reduce(ReduceKind::Max, negated, axes, keepdim)?;
        self.neg(max)
    }
}
