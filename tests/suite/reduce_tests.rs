//! Reduction constructors through the public surface.

use pretty_assertions::assert_eq;

use tensir::{Graph, Op, ReduceKind, ShapeError};

use crate::common::assert_invariants;

#[test]
fn test_sum_all_keepdim() {
    let mut g = Graph::new();
    let x = g.input(&[2, 3, 4]).unwrap();

    let kept = g.sum(x, true).unwrap();
    assert_eq!(g.shape(kept), &[1, 1, 1]);
    assert_eq!(g.strides(kept), &[0, 0, 0]);

    let scalar = g.sum(x, false).unwrap();
    assert!(g.shape(scalar).is_empty());
    assert_invariants(&g);
}

#[test]
fn test_reduce_axis_bookkeeping() {
    let mut g = Graph::new();
    let x = g.input(&[2, 3, 4]).unwrap();

    let r = g.sum_axes(x, &[-1, 0], true).unwrap();
    assert_eq!(g.shape(r), &[1, 3, 1]);

    match g.node(r).op() {
        Op::Reduce { kind, axes, keepdim, .. } => {
            assert_eq!(*kind, ReduceKind::Sum);
            assert_eq!(axes.as_slice(), &[0, 2]);
            assert!(*keepdim);
        }
        other => panic!("expected reduce, got {other:?}"),
    }
    assert_invariants(&g);
}

#[test]
fn test_reduce_duplicate_axis_fails() {
    let mut g = Graph::new();
    let x = g.input(&[2, 3]).unwrap();
    let before = g.len();

    let err = g.max_axes(x, &[1, -1], false).unwrap_err();
    assert!(matches!(
        err.shape_cause(),
        Some(ShapeError::DuplicateAxis { axis: 1 })
    ));
    assert_eq!(g.len(), before);
}

#[test]
fn test_max_axis() {
    let mut g = Graph::new();
    let x = g.input(&[4, 6]).unwrap();

    let r = g.max_axis(x, 0, false).unwrap();
    assert_eq!(g.shape(r), &[6]);

    let r = g.max_axis(x, 0, true).unwrap();
    assert_eq!(g.shape(r), &[1, 6]);
    assert_invariants(&g);
}

#[test]
fn test_min_composite() {
    let mut g = Graph::new();
    let x = g.input(&[3, 5]).unwrap();

    let m = g.min_axis(x, -1, false).unwrap();
    assert_eq!(g.shape(m), &[3]);

    // min is -max(-x): the reduction kind in the graph is MAX.
    let has_max_reduce = g
        .nodes()
        .iter()
        .any(|n| matches!(n.op(), Op::Reduce { kind: ReduceKind::Max, .. }));
    let has_sum_reduce = g
        .nodes()
        .iter()
        .any(|n| matches!(n.op(), Op::Reduce { kind: ReduceKind::Sum, .. }));
    assert!(has_max_reduce);
    assert!(!has_sum_reduce);
    assert_invariants(&g);
}

#[test]
fn test_reduce_scalar_input() {
    let mut g = Graph::new();
    let s = g.immediate(3.0);

    let r = g.sum(s, false).unwrap();
    assert!(g.shape(r).is_empty());

    // A scalar has no axes to name.
    assert!(g.sum_axis(s, 0, false).is_err());
}
