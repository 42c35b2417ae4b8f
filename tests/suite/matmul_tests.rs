//! Matmul decomposition through the public surface.

use pretty_assertions::assert_eq;

use tensir::{Graph, Op, ReduceKind, ShapeError};

use crate::common::assert_invariants;

#[test]
fn test_matmul_2d_decomposition() {
    let mut g = Graph::new();
    let x = g.input(&[3, 4]).unwrap();
    let y = g.input(&[4, 5]).unwrap();
    let z = g.matmul(x, y).unwrap();

    assert_eq!(g.shape(z), &[3, 5]);

    // The result of a pure matrix product is the SUM over the contraction
    // axis of the broadcast multiply.
    match g.node(z).op() {
        Op::Reduce {
            kind: ReduceKind::Sum,
            axes,
            keepdim,
            ..
        } => {
            assert_eq!(axes.as_slice(), &[1]);
            assert!(!keepdim);
        }
        other => panic!("expected sum reduction, got {other:?}"),
    }
    assert_invariants(&g);
}

#[test]
fn test_matmul_batched() {
    let mut g = Graph::new();
    let x = g.input(&[8, 3, 4]).unwrap();
    let y = g.input(&[4, 5]).unwrap();
    let z = g.matmul(x, y).unwrap();

    assert_eq!(g.shape(z), &[8, 3, 5]);
    assert_invariants(&g);
}

#[test]
fn test_matmul_broadcast_batches_on_both_sides() {
    let mut g = Graph::new();
    let x = g.input(&[2, 1, 3, 4]).unwrap();
    let y = g.input(&[5, 4, 6]).unwrap();
    let z = g.matmul(x, y).unwrap();

    assert_eq!(g.shape(z), &[2, 5, 3, 6]);
    assert_invariants(&g);
}

#[test]
fn test_matmul_vector_cases() {
    let mut g = Graph::new();

    let a = g.input(&[7]).unwrap();
    let b = g.input(&[7]).unwrap();
    let dot = g.matmul(a, b).unwrap();
    assert!(g.shape(dot).is_empty());

    let m = g.input(&[3, 4]).unwrap();
    let v = g.input(&[4]).unwrap();
    let mv = g.matmul(m, v).unwrap();
    assert_eq!(g.shape(mv), &[3]);

    // v is [4], m is [3, 4]: promoted inner dims are 4 vs 3.
    let err = g.matmul(v, m).unwrap_err();
    assert!(matches!(
        err.shape_cause(),
        Some(ShapeError::InnerDimMismatch { lhs: 4, rhs: 3 })
    ));
    assert_invariants(&g);
}

#[test]
fn test_matmul_inner_mismatch() {
    let mut g = Graph::new();
    let x = g.input(&[3, 4]).unwrap();
    let y = g.input(&[5, 6]).unwrap();
    let before = g.len();

    assert!(g.matmul(x, y).is_err());
    assert_eq!(g.len(), before);
}

#[test]
fn test_matmul_chain() {
    let mut g = Graph::new();
    let x = g.input(&[2, 3]).unwrap();
    let w1 = g.weight(&[3, 8]).unwrap();
    let w2 = g.weight(&[8, 1]).unwrap();

    let h = g.matmul(x, w1).unwrap();
    let out = g.matmul(h, w2).unwrap();

    assert_eq!(g.shape(h), &[2, 8]);
    assert_eq!(g.shape(out), &[2, 1]);
    assert_invariants(&g);
}
