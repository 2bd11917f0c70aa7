use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Calibration constants for one camera/lens/mount geometry.
///
/// Fixed at tracker construction; none of these may change mid-stream. The
/// defaults are tuned for a 1280×720 bird's-eye view where the warped lane
/// corridor is ~700 px wide and the visible road patch is ~30 m long.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Number of vertical bands in the sliding-window search.
    pub nwindows: usize,
    /// Half-width of each sliding search window, in pixels.
    pub window_margin: u32,
    /// Minimum pixel count in a band before the window recenters.
    pub minpix: usize,
    /// Half-width of the acceptance corridor around a prior fit, in pixels.
    pub poly_margin: u32,
    /// Meters per pixel along y (road direction).
    pub ym_per_pix: f64,
    /// Meters per pixel along x (across the lane).
    pub xm_per_pix: f64,
    /// Row at which curvature and offset are evaluated (vehicle level,
    /// bottom of a 720-row frame).
    pub y_eval: u32,
    /// Assumed vehicle-center column (camera mounted on the centerline of a
    /// 1280-px-wide frame).
    pub center_car: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            nwindows: 9,
            window_margin: 100,
            minpix: 50,
            poly_margin: 100,
            ym_per_pix: 30.0 / 720.0,
            xm_per_pix: 3.7 / 700.0,
            y_eval: 719,
            center_car: 640,
        }
    }
}

impl TrackerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: TrackerConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
