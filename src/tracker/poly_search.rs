// src/tracker/poly_search.rs
//
// Warm-tracking lane pixel search. Once a fit exists, frame-to-frame
// continuity makes the band-by-band search unnecessary: one pass over the
// set pixels keeps those within ±poly_margin of the previous frame's
// pixel-space polynomials. O(set pixels), no per-band loop.

use tracing::debug;

use crate::mask::BinaryMask;
use crate::types::QuadraticFit;

/// Candidate pixels per lane. Either set may come back empty — a frame with
/// no pixels near a boundary is the fit step's error to report, not this
/// pass's.
pub(crate) struct GuidedSearch {
    pub left_pixels: Vec<(u32, u32)>,
    pub right_pixels: Vec<(u32, u32)>,
}

pub(crate) fn search(
    mask: &BinaryMask,
    left_fit: &QuadraticFit,
    right_fit: &QuadraticFit,
    poly_margin: u32,
) -> GuidedSearch {
    let margin = poly_margin as f64;
    let mut out = GuidedSearch {
        left_pixels: Vec::new(),
        right_pixels: Vec::new(),
    };

    // Strict bounds on both sides, matching the reference acceptance test.
    for (x, y) in mask.nonzero_pixels() {
        let xf = x as f64;
        let yf = y as f64;

        let left_x = left_fit.eval(yf);
        if xf > left_x - margin && xf < left_x + margin {
            out.left_pixels.push((x, y));
        }

        let right_x = right_fit.eval(yf);
        if xf > right_x - margin && xf < right_x + margin {
            out.right_pixels.push((x, y));
        }
    }

    debug!(
        left = out.left_pixels.len(),
        right = out.right_pixels.len(),
        "guided search"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mask_with_columns;

    fn vertical(c: f64) -> QuadraticFit {
        QuadraticFit { a: 0.0, b: 0.0, c }
    }

    #[test]
    fn test_pixels_split_between_lanes() {
        let data = mask_with_columns(1280, 720, &[(350, 5), (900, 5)]);
        let mask = BinaryMask::new(&data, 1280, 720);
        let result = search(&mask, &vertical(350.0), &vertical(900.0), 100);

        assert_eq!(result.left_pixels.len(), 720 * 11);
        assert_eq!(result.right_pixels.len(), 720 * 11);
        assert!(result.left_pixels.iter().all(|&(x, _)| x < 400));
        assert!(result.right_pixels.iter().all(|&(x, _)| x > 800));
    }

    #[test]
    fn test_margin_bounds_are_strict() {
        // Single pixel exactly margin away from the polynomial on each
        // side: excluded. One pixel margin-1 away: included.
        let mut data = vec![0u8; 1280 * 720];
        data[10 * 1280 + 450] = 1; // x = 350 + 100, on the bound
        data[10 * 1280 + 250] = 1; // x = 350 - 100, on the bound
        data[20 * 1280 + 449] = 1; // strictly inside
        let mask = BinaryMask::new(&data, 1280, 720);
        let result = search(&mask, &vertical(350.0), &vertical(2000.0), 100);

        assert_eq!(result.left_pixels, vec![(449, 20)]);
        assert!(result.right_pixels.is_empty());
    }

    #[test]
    fn test_curved_prior_follows_curve() {
        // Paint pixels along x = 2e-4·y² + 300 and search with that exact
        // prior: everything is collected, nothing outside the corridor.
        let prior = QuadraticFit {
            a: 2e-4,
            b: 0.0,
            c: 300.0,
        };
        let mut data = vec![0u8; 1280 * 720];
        for y in 0..720u32 {
            let x = prior.eval(y as f64).round() as usize;
            data[y as usize * 1280 + x] = 1;
        }
        let mask = BinaryMask::new(&data, 1280, 720);
        let result = search(&mask, &prior, &vertical(2000.0), 100);
        assert_eq!(result.left_pixels.len(), 720);
    }

    #[test]
    fn test_empty_mask_yields_empty_sets() {
        let data = vec![0u8; 1280 * 720];
        let mask = BinaryMask::new(&data, 1280, 720);
        let result = search(&mask, &vertical(350.0), &vertical(900.0), 100);
        assert!(result.left_pixels.is_empty());
        assert!(result.right_pixels.is_empty());
    }
}
