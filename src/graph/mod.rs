//! The computation graph: node algebra, arena store, and handles.
//!
//! A [`Graph`] owns every node of one tensor expression DAG. Nodes carry
//! their operator payload plus the shape and strides resolved at
//! construction time; operands are referenced by [`NodeId`], so the arena
//! can grow without invalidating anything and index order doubles as
//! topological order.

mod handle;
mod node;
mod store;

pub use handle::NodeRef;
pub use node::{Axes, BinaryKind, BufferId, Node, NodeId, Op, ReduceKind, UnaryKind};
pub use store::Graph;
