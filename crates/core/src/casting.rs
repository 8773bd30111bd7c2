//! Safe type conversion utilities for PDF objects.

use crate::model::objects::PdfObject;

/// Type alias for a 6-tuple of floats (transformation matrix)
pub type Matrix = (f64, f64, f64, f64, f64, f64);

/// The identity transformation matrix.
pub const MATRIX_IDENTITY: Matrix = (1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

/// Safely convert a PdfObject to an integer.
///
/// Returns `Some(i64)` if the object is an Int, `None` otherwise.
pub fn safe_int(obj: &PdfObject) -> Option<i64> {
    match obj {
        PdfObject::Int(n) => Some(*n),
        _ => None,
    }
}

/// Safely convert a PdfObject to a float.
///
/// Returns `Some(f64)` if the object is numeric (Int or Real), `None`
/// otherwise. Only numeric primitive kinds count; strings never do.
pub fn safe_number(obj: &PdfObject) -> Option<f64> {
    match obj {
        PdfObject::Int(n) => Some(*n as f64),
        PdfObject::Real(n) => Some(*n),
        _ => None,
    }
}

/// Safely create a transformation matrix from the first six elements of a
/// slice of PdfObjects.
///
/// Returns `None` if the slice is short or any element is non-numeric.
pub fn safe_matrix(operands: &[PdfObject]) -> Option<Matrix> {
    if operands.len() < 6 {
        return None;
    }
    let a = safe_number(&operands[0])?;
    let b = safe_number(&operands[1])?;
    let c = safe_number(&operands[2])?;
    let d = safe_number(&operands[3])?;
    let e = safe_number(&operands[4])?;
    let f = safe_number(&operands[5])?;
    Some((a, b, c, d, e, f))
}

/// Multiplies two matrices: result = m1 * m0.
/// This applies m0 first, then m1.
pub fn mult_matrix(m1: Matrix, m0: Matrix) -> Matrix {
    let (a1, b1, c1, d1, e1, f1) = m1;
    let (a0, b0, c0, d0, e0, f0) = m0;
    (
        a0 * a1 + c0 * b1,
        b0 * a1 + d0 * b1,
        a0 * c1 + c0 * d1,
        b0 * c1 + d0 * d1,
        a0 * e1 + c0 * f1 + e0,
        b0 * e1 + d0 * f1 + f0,
    )
}
