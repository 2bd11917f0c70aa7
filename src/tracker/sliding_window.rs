// src/tracker/sliding_window.rs
//
// Cold-start lane pixel search. With no prior fit to lean on, the base
// column of each boundary comes from a column-density histogram over the
// bottom half of the mask, and a stack of fixed-width windows climbs the
// frame from there, recentering on the mean x of the pixels it collects.
//
// Window bounds are signed and half-open. A base column near the frame
// edge produces windows that hang past [0, W); out-of-range coordinates
// simply never match any mask pixel, so no clamping is needed.

use tracing::debug;

use crate::config::TrackerConfig;
use crate::error::TrackError;
use crate::mask::BinaryMask;
use crate::types::{LaneSide, SearchWindow};

/// Everything one cold-start pass produces: per-lane candidate pixels plus
/// the window rectangles, kept for diagnostic rendering by the caller.
#[derive(Debug)]
pub(crate) struct WindowSearch {
    pub left_pixels: Vec<(u32, u32)>,
    pub right_pixels: Vec<(u32, u32)>,
    pub left_windows: Vec<SearchWindow>,
    pub right_windows: Vec<SearchWindow>,
}

pub(crate) fn search(mask: &BinaryMask, config: &TrackerConfig) -> Result<WindowSearch, TrackError> {
    let histogram = mask.bottom_half_histogram();
    let midpoint = (mask.width() / 2) as usize;

    // Peak of each half anchors that lane's first window. Arg-max keeps the
    // first occurrence on ties. A half with no pixels at all has no peak to
    // anchor on; that fails the frame rather than pointing a window at
    // column 0.
    let (left_base, left_peak) = arg_max(&histogram[..midpoint]);
    if left_peak == 0 {
        return Err(TrackError::AmbiguousHistogram {
            side: LaneSide::Left,
        });
    }
    let (right_rel, right_peak) = arg_max(&histogram[midpoint..]);
    if right_peak == 0 {
        return Err(TrackError::AmbiguousHistogram {
            side: LaneSide::Right,
        });
    }
    let right_base = right_rel + midpoint;

    debug!(left_base, right_base, "histogram bases");

    let nonzero = mask.nonzero_pixels();
    let height = mask.height() as i64;
    // nwindows = 0 runs no bands, collects nothing, and lets the fit step
    // report the empty pixel sets; the max(1) only keeps the band-height
    // division from panicking on that misconfiguration.
    let window_height = height / config.nwindows.max(1) as i64;
    let margin = config.window_margin as i64;

    let mut left_current = left_base as i64;
    let mut right_current = right_base as i64;

    let mut out = WindowSearch {
        left_pixels: Vec::new(),
        right_pixels: Vec::new(),
        left_windows: Vec::with_capacity(config.nwindows),
        right_windows: Vec::with_capacity(config.nwindows),
    };

    // Bands run bottom-to-top so each recenter feeds the band above it.
    for window in 0..config.nwindows as i64 {
        let y_low = height - (window + 1) * window_height;
        let y_high = height - window * window_height;

        let left_win = SearchWindow {
            x_low: left_current - margin,
            x_high: left_current + margin,
            y_low,
            y_high,
        };
        let right_win = SearchWindow {
            x_low: right_current - margin,
            x_high: right_current + margin,
            y_low,
            y_high,
        };

        let band_left = collect(&nonzero, &left_win, &mut out.left_pixels);
        let band_right = collect(&nonzero, &right_win, &mut out.right_pixels);

        // Recenter only on solid evidence: a band with `minpix` or fewer
        // pixels keeps the previous base, resisting noise-driven drift.
        if band_left.count > config.minpix {
            left_current = (band_left.sum_x / band_left.count as f64) as i64;
        }
        if band_right.count > config.minpix {
            right_current = (band_right.sum_x / band_right.count as f64) as i64;
        }

        debug!(
            band = window,
            left_count = band_left.count,
            right_count = band_right.count,
            left_current,
            right_current,
            "window band"
        );

        out.left_windows.push(left_win);
        out.right_windows.push(right_win);
    }

    Ok(out)
}

struct BandStats {
    count: usize,
    sum_x: f64,
}

fn collect(nonzero: &[(u32, u32)], win: &SearchWindow, dest: &mut Vec<(u32, u32)>) -> BandStats {
    let mut stats = BandStats {
        count: 0,
        sum_x: 0.0,
    };
    for &(x, y) in nonzero {
        if win.contains(x, y) {
            dest.push((x, y));
            stats.count += 1;
            stats.sum_x += x as f64;
        }
    }
    stats
}

/// Index and value of the maximum, first occurrence on ties.
fn arg_max(values: &[u32]) -> (usize, u32) {
    let mut best_idx = 0;
    let mut best_val = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = i;
        }
    }
    (best_idx, best_val)
}
