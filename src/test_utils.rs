// src/test_utils.rs
//
// Synthetic mask builders shared by the unit tests. All masks are
// row-major u8 buffers with 1 for set pixels, matching what the
// thresholding stage hands the tracker.

use crate::types::QuadraticFit;

/// Full-height vertical columns: for each `(center, half_width)`, paints
/// columns `center - half_width ..= center + half_width` on every row.
pub(crate) fn mask_with_columns(width: u32, height: u32, columns: &[(u32, u32)]) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize];
    for y in 0..height {
        for &(center, half_width) in columns {
            paint_row(&mut data, width, y, center as i64, half_width);
        }
    }
    data
}

/// Arbitrary horizontal segments: each entry paints
/// `center - half_width ..= center + half_width` on its row.
pub(crate) fn mask_with_segments(width: u32, height: u32, segments: &[(u32, u32, u32)]) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize];
    for &(center, y, half_width) in segments {
        if y < height {
            paint_row(&mut data, width, y, center as i64, half_width);
        }
    }
    data
}

/// Bands traced along pixel-space polynomials: for each fit and row, paints
/// `round(fit(y)) ± half_width`.
pub(crate) fn mask_with_poly(
    width: u32,
    height: u32,
    fits: &[QuadraticFit],
    half_width: u32,
) -> Vec<u8> {
    let mut data = vec![0u8; width as usize * height as usize];
    for y in 0..height {
        for fit in fits {
            let center = fit.eval(y as f64).round() as i64;
            paint_row(&mut data, width, y, center, half_width);
        }
    }
    data
}

fn paint_row(data: &mut [u8], width: u32, y: u32, center: i64, half_width: u32) {
    for x in center - half_width as i64..=center + half_width as i64 {
        if x >= 0 && x < width as i64 {
            data[y as usize * width as usize + x as usize] = 1;
        }
    }
}
