// src/tracker/mod.rs
//
// Stateful per-stream lane tracker. Owns the four polynomial fits
// (left/right × pixel/world), the mode machine, and the diagnostics of the
// last processed frame. One tracker per video stream; processing takes
// &mut self, so frames of the same stream are strictly sequential.

mod fit;
mod geometry;
mod poly_search;
mod sliding_window;

use tracing::{debug, info};

use crate::config::TrackerConfig;
use crate::error::TrackError;
use crate::mask::BinaryMask;
use crate::types::{LaneSide, PlotPoints, QuadraticFit, SearchWindow, TrackerMode};

/// Fits and frame bookkeeping held once the first frame succeeds. Pixel and
/// world fits are always replaced together; there is never a stale
/// cross-scale pair.
#[derive(Debug, Clone, Copy)]
struct FitState {
    left_pix: QuadraticFit,
    right_pix: QuadraticFit,
    left_world: QuadraticFit,
    right_world: QuadraticFit,
    frame_height: u32,
}

enum State {
    Uninitialized,
    Tracking(FitState),
}

/// Tracks the two lane boundaries of one video stream across frames.
///
/// The first successful frame runs the sliding-window search and moves the
/// tracker to `Tracking`; every later frame reuses the previous fits as
/// search priors. A failed frame returns an error and changes nothing —
/// recovery policy (reuse the old fit, call [`reset`](Self::reset), drop
/// the frame) belongs to the calling pipeline.
pub struct LaneTracker {
    config: TrackerConfig,
    state: State,

    // Last successful frame's intermediates, kept so callers can render
    // search windows and classified pixels.
    left_pixels: Vec<(u32, u32)>,
    right_pixels: Vec<(u32, u32)>,
    left_windows: Vec<SearchWindow>,
    right_windows: Vec<SearchWindow>,
}

impl LaneTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: State::Uninitialized,
            left_pixels: Vec::new(),
            right_pixels: Vec::new(),
            left_windows: Vec::new(),
            right_windows: Vec::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn mode(&self) -> TrackerMode {
        match self.state {
            State::Uninitialized => TrackerMode::Uninitialized,
            State::Tracking(_) => TrackerMode::Tracking,
        }
    }

    /// Locate both lane boundaries in this frame's mask and refresh all
    /// four stored fits.
    ///
    /// On error the previous fits, mode, and diagnostics are untouched.
    pub fn locate_lanes(&mut self, mask: &BinaryMask) -> Result<(), TrackError> {
        match &self.state {
            State::Uninitialized => {
                let found = sliding_window::search(mask, &self.config)?;
                self.commit(
                    mask,
                    found.left_pixels,
                    found.right_pixels,
                    found.left_windows,
                    found.right_windows,
                )
            }
            State::Tracking(fits) => {
                let prior = *fits;
                let found = poly_search::search(
                    mask,
                    &prior.left_pix,
                    &prior.right_pix,
                    self.config.poly_margin,
                );
                self.commit(mask, found.left_pixels, found.right_pixels, Vec::new(), Vec::new())
            }
        }
    }

    /// Fit both lanes in both coordinate spaces, then swap everything in at
    /// once. Nothing is mutated until all four fits have succeeded.
    fn commit(
        &mut self,
        mask: &BinaryMask,
        left_pixels: Vec<(u32, u32)>,
        right_pixels: Vec<(u32, u32)>,
        left_windows: Vec<SearchWindow>,
        right_windows: Vec<SearchWindow>,
    ) -> Result<(), TrackError> {
        let ym = self.config.ym_per_pix;
        let xm = self.config.xm_per_pix;

        let left_pix = fit::fit_quadratic(&left_pixels, 1.0, 1.0, LaneSide::Left)?;
        let right_pix = fit::fit_quadratic(&right_pixels, 1.0, 1.0, LaneSide::Right)?;
        let left_world = fit::fit_quadratic(&left_pixels, ym, xm, LaneSide::Left)?;
        let right_world = fit::fit_quadratic(&right_pixels, ym, xm, LaneSide::Right)?;

        if matches!(self.state, State::Uninitialized) {
            info!("first fit succeeded, switching to polynomial-guided search");
        } else {
            debug!(
                left_pixels = left_pixels.len(),
                right_pixels = right_pixels.len(),
                "fits refreshed"
            );
        }

        self.state = State::Tracking(FitState {
            left_pix,
            right_pix,
            left_world,
            right_world,
            frame_height: mask.height(),
        });
        self.left_pixels = left_pixels;
        self.right_pixels = right_pixels;
        self.left_windows = left_windows;
        self.right_windows = right_windows;
        Ok(())
    }

    /// Drop all fit state and return to the cold-start search. The explicit
    /// hook for pipelines that decide a re-search is due; the tracker never
    /// does this on its own.
    pub fn reset(&mut self) {
        info!("tracker reset to cold start");
        self.state = State::Uninitialized;
        self.left_pixels.clear();
        self.right_pixels.clear();
        self.left_windows.clear();
        self.right_windows.clear();
    }

    /// Pixel-space fits (left, right), once a frame has succeeded.
    pub fn pixel_fits(&self) -> Option<(QuadraticFit, QuadraticFit)> {
        match &self.state {
            State::Tracking(f) => Some((f.left_pix, f.right_pix)),
            State::Uninitialized => None,
        }
    }

    /// Real-world-space fits (left, right) in meters.
    pub fn world_fits(&self) -> Option<(QuadraticFit, QuadraticFit)> {
        match &self.state {
            State::Tracking(f) => Some((f.left_world, f.right_world)),
            State::Uninitialized => None,
        }
    }

    /// Curvature radius per boundary (left, right), meters.
    /// `f64::INFINITY` marks an effectively straight boundary.
    pub fn lane_curvatures(&self) -> Option<(f64, f64)> {
        let fits = match &self.state {
            State::Tracking(f) => f,
            State::Uninitialized => return None,
        };
        let y_eval_m = self.config.y_eval as f64 * self.config.ym_per_pix;
        Some((
            geometry::curvature_radius(&fits.left_world, y_eval_m),
            geometry::curvature_radius(&fits.right_world, y_eval_m),
        ))
    }

    /// Mean of the two boundary radii, meters. Infinite when either
    /// boundary is effectively straight.
    pub fn curvature(&self) -> Option<f64> {
        self.lane_curvatures().map(|(left, right)| (left + right) / 2.0)
    }

    /// Lateral offset of the vehicle from lane center, meters. Positive
    /// means the vehicle sits to the right of lane center.
    pub fn offset(&self) -> Option<f64> {
        let fits = match &self.state {
            State::Tracking(f) => f,
            State::Uninitialized => return None,
        };
        Some(geometry::lateral_offset(
            &fits.left_pix,
            &fits.right_pix,
            self.config.y_eval,
            self.config.center_car,
            self.config.xm_per_pix,
        ))
    }

    /// Fitted boundary x-positions for every row of the last frame, for
    /// overlay rendering.
    pub fn plot_points(&self) -> Option<PlotPoints> {
        match &self.state {
            State::Tracking(f) => Some(geometry::plot_points(
                &f.left_pix,
                &f.right_pix,
                f.frame_height,
            )),
            State::Uninitialized => None,
        }
    }

    /// Candidate pixel sets (left, right) of the last successful frame.
    pub fn pixel_sets(&self) -> (&[(u32, u32)], &[(u32, u32)]) {
        (&self.left_pixels, &self.right_pixels)
    }

    /// Sliding-window rectangles (left, right) of the last cold-start
    /// frame. Empty after a guided-search frame.
    pub fn search_windows(&self) -> (&[SearchWindow], &[SearchWindow]) {
        (&self.left_windows, &self.right_windows)
    }
}
