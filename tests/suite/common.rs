//! Shared invariant checks.

use tensir::Graph;

/// Asserts the structural invariants every public call must preserve:
/// shape/stride agreement, canonical stride layout, topological operand
/// order, and the input/weight bookkeeping.
pub fn assert_invariants(g: &Graph) {
    for (i, node) in g.nodes().iter().enumerate() {
        assert_eq!(
            node.shape().len(),
            node.strides().len(),
            "node {i}: shape and strides must have equal rank"
        );

        let mut product = 1;
        for d in (0..node.shape().len()).rev() {
            let dim = node.shape()[d];
            assert!(dim >= 1, "node {i}: dimension {d} is {dim}");
            if dim == 1 {
                assert_eq!(node.strides()[d], 0, "node {i}: size-1 dim must stride 0");
            } else {
                assert_eq!(node.strides()[d], product, "node {i}: non-canonical stride");
                product *= dim;
            }
        }

        for operand in node.op().operands() {
            assert!(
                operand.index() < i,
                "node {i}: operand {} does not precede it",
                operand.index()
            );
        }
    }

    for &id in g.inputs() {
        assert!(g.node(id).op().is_tensor(), "input list points at a non-tensor");
    }
    for &id in g.weights() {
        assert!(g.inputs().contains(&id), "weight not registered as input");
    }
}
