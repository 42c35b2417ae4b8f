//! Comparison decompositions through the public surface.

use pretty_assertions::assert_eq;

use tensir::{BinaryKind, Graph, Op};

use crate::common::assert_invariants;

#[test]
fn test_greater_builds_max_then_eq() {
    let mut g = Graph::new();
    let x = g.input(&[2]).unwrap();
    let y = g.input(&[2]).unwrap();
    let gt = g.greater(x, y).unwrap();

    // x > y lowers to CMP_EQ(MAX(x, y), x).
    let Op::Binary {
        kind: BinaryKind::CmpEq,
        x: max,
        y: rhs,
    } = g.node(gt).op()
    else {
        panic!("expected cmp_eq at the root");
    };
    assert_eq!(*rhs, x);
    let Op::Binary {
        kind: BinaryKind::Max,
        x: mx,
        y: my,
    } = g.node(*max).op()
    else {
        panic!("expected max under cmp_eq");
    };
    assert_eq!(*mx, x);
    assert_eq!(*my, y);
    assert_invariants(&g);
}

#[test]
fn test_comparisons_broadcast() {
    let mut g = Graph::new();
    let x = g.input(&[3, 1]).unwrap();
    let y = g.input(&[4]).unwrap();

    for id in [
        g.equal(x, y).unwrap(),
        g.greater(x, y).unwrap(),
        g.less(x, y).unwrap(),
        g.less_equal(x, y).unwrap(),
        g.greater_equal(x, y).unwrap(),
    ] {
        assert_eq!(g.shape(id), &[3, 4]);
    }
    assert_invariants(&g);
}

#[test]
fn test_comparisons_with_scalars() {
    let mut g = Graph::new();
    let x = g.input(&[5]).unwrap();

    let a = g.greater(x, 0.0).unwrap();
    let b = g.greater(0.0, x).unwrap();
    let c = g.less_equal(x, 1.0).unwrap();

    for id in [a, b, c] {
        assert_eq!(g.shape(id), &[5]);
    }
    assert_invariants(&g);
}

#[test]
fn test_minimum_shape_and_closure() {
    let mut g = Graph::new();
    let x = g.input(&[2, 3]).unwrap();
    let y = g.input(&[3]).unwrap();
    let m = g.minimum(x, y).unwrap();

    assert_eq!(g.shape(m), &[2, 3]);

    // The algebra stays closed: no node kind beyond the closed set appears,
    // and min exists only as the -max(-x, -y) spelling.
    let max_count = g
        .nodes()
        .iter()
        .filter(|n| matches!(n.op(), Op::Binary { kind: BinaryKind::Max, .. }))
        .count();
    assert_eq!(max_count, 1);
    assert_invariants(&g);
}

#[test]
fn test_equal_is_single_primitive() {
    let mut g = Graph::new();
    let x = g.input(&[4]).unwrap();
    let y = g.input(&[4]).unwrap();
    let before = g.len();
    let eq = g.equal(x, y).unwrap();

    assert_eq!(g.len(), before + 1);
    assert!(matches!(
        g.node(eq).op(),
        Op::Binary {
            kind: BinaryKind::CmpEq,
            ..
        }
    ));
}
