//! The shape/stride rules every operator constructor goes through.

use smallvec::smallvec;

use super::{Dim, Shape};
use crate::error::ShapeError;

/// Normalizes a possibly negative axis into `[0, rank)`.
///
/// Computed as `((axis mod rank) + rank) mod rank`, so `-1` names the last
/// axis. Fails for rank-0 tensors, which have no axes to name.
pub fn normalize_axis(axis: Dim, rank: usize) -> Result<usize, ShapeError> {
    if rank == 0 {
        return Err(ShapeError::AxisOutOfRange { axis, rank });
    }
    let rank = rank as Dim;
    let normalized = ((axis % rank) + rank) % rank;
    Ok(normalized as usize)
}

/// Broadcasts two shapes together.
///
/// Shapes are aligned at their trailing dimensions. A size-1 dimension
/// stretches to match the other side; unmatched leading dimensions of the
/// longer shape pass through. Equal dimensions pass through unchanged;
/// anything else fails. The operation is symmetric.
pub fn broadcast(a: &[Dim], b: &[Dim]) -> Result<Shape, ShapeError> {
    let rank = a.len().max(b.len());
    let mut out: Shape = smallvec![0; rank];

    for i in 1..=rank {
        let da = if i <= a.len() { a[a.len() - i] } else { 1 };
        let db = if i <= b.len() { b[b.len() - i] } else { 1 };

        out[rank - i] = if da == db || db == 1 {
            da
        } else if da == 1 {
            db
        } else {
            return Err(ShapeError::Broadcast {
                lhs: Shape::from_slice(a),
                rhs: Shape::from_slice(b),
            });
        };
    }

    Ok(out)
}

/// Computes the canonical strides for a shape.
///
/// Walks right to left: size-1 dimensions get stride 0 (a broadcast read is
/// then a no-op at the consumer), every other dimension gets the running
/// product of the dimensions to its right.
pub fn canonical_strides(shape: &[Dim]) -> Shape {
    let mut strides: Shape = smallvec![0; shape.len()];
    let mut product: Dim = 1;

    for i in (0..shape.len()).rev() {
        if shape[i] != 1 {
            strides[i] = product;
            product *= shape[i];
        }
    }

    strides
}

/// Shape left after reducing `axes` out of `shape`.
///
/// An empty `axes` list means reduce over everything: a rank-preserving
/// vector of ones under `keepdim`, the scalar shape otherwise. Axes must
/// already be normalized; out-of-range axes and axis lists longer than the
/// rank fail.
pub fn reduce_shape(shape: &[Dim], axes: &[usize], keepdim: bool) -> Result<Shape, ShapeError> {
    let rank = shape.len();

    if axes.is_empty() {
        return Ok(if keepdim {
            smallvec![1; rank]
        } else {
            Shape::new()
        });
    }

    if axes.len() > rank {
        return Err(ShapeError::TooManyAxes {
            given: axes.len(),
            rank,
        });
    }
    for &axis in axes {
        if axis >= rank {
            return Err(ShapeError::AxisOutOfRange {
                axis: axis as Dim,
                rank,
            });
        }
    }

    let mut out = Shape::new();
    for (i, &d) in shape.iter().enumerate() {
        if axes.contains(&i) {
            if keepdim {
                out.push(1);
            }
        } else {
            out.push(d);
        }
    }

    Ok(out)
}

/// Total number of elements described by a shape. The scalar shape has one.
pub fn element_count(shape: &[Dim]) -> Dim {
    shape.iter().product()
}

/// Rejects non-positive dimensions.
pub(crate) fn check_dims(shape: &[Dim]) -> Result<(), ShapeError> {
    for &dim in shape {
        if dim < 1 {
            return Err(ShapeError::InvalidDim { dim });
        }
    }
    Ok(())
}
