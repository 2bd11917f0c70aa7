// src/tracker/geometry.rs
//
// Numeric geometry over the fitted polynomials: osculating-circle radius
// at the vehicle's row and signed lateral offset from lane center.

use crate::types::{PlotPoints, QuadraticFit};

/// Leading coefficients below this magnitude count as a straight line; the
/// radius formula divides by 2a, so straight lanes report the infinite
/// sentinel instead of overflowing toward garbage.
const STRAIGHT_A_EPS: f64 = 1e-12;

/// Curvature radius in meters of one boundary at `y_eval_m` (the vehicle's
/// row, already in meters). `fit` is the real-world-space fit.
///
/// R = (1 + (2·a·y + b)²)^3/2 / |2·a|, with R = +∞ for a ≈ 0.
pub(crate) fn curvature_radius(fit: &QuadraticFit, y_eval_m: f64) -> f64 {
    if fit.a.abs() < STRAIGHT_A_EPS {
        return f64::INFINITY;
    }
    let slope = 2.0 * fit.a * y_eval_m + fit.b;
    (1.0 + slope * slope).powf(1.5) / (2.0 * fit.a).abs()
}

/// Signed distance in meters between the assumed vehicle center column and
/// the lane center at `y_eval`. Both fits are pixel-space.
///
/// Sign convention: positive means the vehicle sits to the RIGHT of lane
/// center (the lane center column is left of `center_car`).
pub(crate) fn lateral_offset(
    left_pix: &QuadraticFit,
    right_pix: &QuadraticFit,
    y_eval: u32,
    center_car: u32,
    xm_per_pix: f64,
) -> f64 {
    let y = y_eval as f64;
    let lane_center = (left_pix.eval(y) + right_pix.eval(y)) / 2.0;
    (center_car as f64 - lane_center) * xm_per_pix
}

/// Both boundaries sampled at every row of an `height`-row frame, for
/// overlay rendering.
pub(crate) fn plot_points(
    left_pix: &QuadraticFit,
    right_pix: &QuadraticFit,
    height: u32,
) -> PlotPoints {
    let mut left_x = Vec::with_capacity(height as usize);
    let mut right_x = Vec::with_capacity(height as usize);
    let mut y = Vec::with_capacity(height as usize);
    for row in 0..height {
        let yf = row as f64;
        left_x.push(left_pix.eval(yf));
        right_x.push(right_pix.eval(yf));
        y.push(yf);
    }
    PlotPoints { left_x, right_x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XM: f64 = 3.7 / 700.0;
    const YM: f64 = 30.0 / 720.0;

    #[test]
    fn test_straight_lane_radius_is_infinite() {
        let fit = QuadraticFit {
            a: 0.0,
            b: 0.01,
            c: 1.8,
        };
        assert!(curvature_radius(&fit, 719.0 * YM).is_infinite());
    }

    #[test]
    fn test_parabola_vertex_radius_matches_analytic_circle() {
        // x = (y - y0)² / (2R) osculates a circle of radius R at its
        // vertex. Put the vertex at the evaluation row: the formula must
        // return exactly R.
        let r = 300.0;
        let y0 = 719.0 * YM;
        let fit = QuadraticFit {
            a: 1.0 / (2.0 * r),
            b: -y0 / r,
            c: y0 * y0 / (2.0 * r),
        };
        let radius = curvature_radius(&fit, y0);
        assert!(
            (radius - r).abs() < 1e-9,
            "expected {} m, got {} m",
            r,
            radius
        );
    }

    #[test]
    fn test_radius_grows_with_gentler_curves() {
        let sharp = QuadraticFit {
            a: 1e-3,
            b: 0.0,
            c: 0.0,
        };
        let gentle = QuadraticFit {
            a: 1e-4,
            b: 0.0,
            c: 0.0,
        };
        let y = 719.0 * YM;
        assert!(curvature_radius(&gentle, y) > curvature_radius(&sharp, y));
    }

    #[test]
    fn test_centered_lane_has_zero_offset() {
        let left = QuadraticFit {
            a: 0.0,
            b: 0.0,
            c: 540.0,
        };
        let right = QuadraticFit {
            a: 0.0,
            b: 0.0,
            c: 740.0,
        };
        let offset = lateral_offset(&left, &right, 719, 640, XM);
        assert!(offset.abs() < 1e-12, "expected 0, got {}", offset);
    }

    #[test]
    fn test_offset_scales_linearly_with_lane_shift() {
        // Lane center shifted 50 px to the RIGHT of the car: the vehicle
        // is left of lane center, so the offset is negative.
        let left = QuadraticFit {
            a: 0.0,
            b: 0.0,
            c: 590.0,
        };
        let right = QuadraticFit {
            a: 0.0,
            b: 0.0,
            c: 790.0,
        };
        let offset = lateral_offset(&left, &right, 719, 640, XM);
        assert!(
            (offset + 50.0 * XM).abs() < 1e-12,
            "expected {}, got {}",
            -50.0 * XM,
            offset
        );
    }

    #[test]
    fn test_plot_points_sample_every_row() {
        let left = QuadraticFit {
            a: 0.0,
            b: 0.0,
            c: 350.0,
        };
        let right = QuadraticFit {
            a: 1e-4,
            b: 0.0,
            c: 900.0,
        };
        let pts = plot_points(&left, &right, 720);
        assert_eq!(pts.y.len(), 720);
        assert_eq!(pts.left_x[0], 350.0);
        assert_eq!(pts.y[719], 719.0);
        assert!((pts.right_x[719] - right.eval(719.0)).abs() < 1e-12);
    }
}
