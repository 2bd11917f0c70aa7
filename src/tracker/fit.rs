// src/tracker/fit.rs
//
// Least-squares quadratic fit x(y) = a·y² + b·y + c over one lane
// boundary's candidate pixels. Every frame produces two fits per lane: a
// pixel-space fit (scales = 1) and a real-world fit obtained by fitting the
// meter-scaled points directly. The world fit is deliberately a second
// independent fit rather than an algebraic rescale of the pixel
// coefficients, so its rounding behavior matches the pixel fit's.

use tracing::debug;

use crate::error::TrackError;
use crate::types::{LaneSide, QuadraticFit};

/// Fit x = a·y² + b·y + c to `pixels` after scaling y by `y_scale` and x by
/// `x_scale`. Pass 1.0/1.0 for a pixel-space fit.
pub(crate) fn fit_quadratic(
    pixels: &[(u32, u32)],
    y_scale: f64,
    x_scale: f64,
    side: LaneSide,
) -> Result<QuadraticFit, TrackError> {
    if pixels.len() < 3 {
        return Err(TrackError::InsufficientPixels {
            side,
            found: pixels.len(),
        });
    }

    // All pixels on one row leave the system rank-1; reject up front
    // instead of trusting the pivot threshold to catch rounding residue.
    let first_y = pixels[0].1;
    if pixels.iter().all(|&(_, y)| y == first_y) {
        return Err(TrackError::DegenerateFit { side });
    }

    // Power sums for the 3×3 normal equations, accumulated in f64.
    let mut s1 = 0.0f64;
    let mut s2 = 0.0f64;
    let mut s3 = 0.0f64;
    let mut s4 = 0.0f64;
    let mut sx0 = 0.0f64;
    let mut sx1 = 0.0f64;
    let mut sx2 = 0.0f64;
    let s0 = pixels.len() as f64;

    for &(px, py) in pixels {
        let y = py as f64 * y_scale;
        let x = px as f64 * x_scale;
        let y2 = y * y;
        s1 += y;
        s2 += y2;
        s3 += y2 * y;
        s4 += y2 * y2;
        sx0 += x;
        sx1 += x * y;
        sx2 += x * y2;
    }

    //   | s4 s3 s2 | | a |   | sx2 |
    //   | s3 s2 s1 | | b | = | sx1 |
    //   | s2 s1 s0 | | c |   | sx0 |
    let (a, b, c) = solve_3x3([s4, s3, s2, s3, s2, s1, s2, s1, s0], [sx2, sx1, sx0])
        .ok_or(TrackError::DegenerateFit { side })?;

    debug!(
        side = side.as_str(),
        pixels = pixels.len(),
        a,
        b,
        c,
        "quadratic fit"
    );

    Ok(QuadraticFit { a, b, c })
}

/// Solve a 3×3 linear system Ax = b via Gaussian elimination with partial
/// pivoting. Matrix is row-major. Returns None when singular, which in
/// fitting terms means degenerate pixel geometry (e.g. all pixels on one
/// row).
fn solve_3x3(mat: [f64; 9], rhs: [f64; 3]) -> Option<(f64, f64, f64)> {
    let mut m = [
        [mat[0], mat[1], mat[2], rhs[0]],
        [mat[3], mat[4], mat[5], rhs[1]],
        [mat[6], mat[7], mat[8], rhs[2]],
    ];

    for col in 0..3 {
        let mut max_val = m[col][col].abs();
        let mut max_row = col;
        for row in (col + 1)..3 {
            if m[row][col].abs() > max_val {
                max_val = m[row][col].abs();
                max_row = row;
            }
        }

        if max_val < 1e-12 {
            return None;
        }

        if max_row != col {
            m.swap(col, max_row);
        }

        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for j in col..4 {
                m[row][j] -= factor * m[col][j];
            }
        }
    }

    if m[2][2].abs() < 1e-12 {
        return None;
    }
    let c = m[2][3] / m[2][2];
    let b = (m[1][3] - m[1][2] * c) / m[1][1];
    let a = (m[0][3] - m[0][2] * c - m[0][1] * b) / m[0][0];

    if a.is_finite() && b.is_finite() && c.is_finite() {
        Some((a, b, c))
    } else {
        None
    }
}
