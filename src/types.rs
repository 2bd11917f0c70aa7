use serde::{Deserialize, Serialize};

/// Second-degree polynomial x(y) = a·y² + b·y + c.
///
/// The independent variable is y (image rows, increasing downward), so a
/// near-vertical lane boundary has small `a` and `b`. The same type carries
/// pixel-space fits (x, y in pixels) and real-world fits (x, y in meters);
/// which space a fit lives in is determined by where the tracker stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticFit {
    #[inline]
    pub fn eval(&self, y: f64) -> f64 {
        self.a * y * y + self.b * y + self.c
    }
}

/// Which search path the next frame takes.
///
/// The only transition is Uninitialized → Tracking, taken on the first frame
/// whose fits succeed. There is no automatic way back; `LaneTracker::reset`
/// is the explicit hook for callers that want to force a cold start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerMode {
    Uninitialized,
    Tracking,
}

/// Lane boundary identifier, carried in errors and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaneSide {
    Left,
    Right,
}

impl LaneSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// One sliding-search rectangle, in pixel coordinates.
///
/// Bounds are half-open (`low <= v < high`) and signed: a window centered
/// near the frame edge legitimately extends past it, and membership testing
/// handles that without clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub x_low: i64,
    pub x_high: i64,
    pub y_low: i64,
    pub y_high: i64,
}

impl SearchWindow {
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let (x, y) = (x as i64, y as i64);
        y >= self.y_low && y < self.y_high && x >= self.x_low && x < self.x_high
    }
}

/// Sampled x-positions of both fitted boundaries, one value per frame row.
/// This is what an overlay renderer consumes to draw the lane corridor.
#[derive(Debug, Clone)]
pub struct PlotPoints {
    pub left_x: Vec<f64>,
    pub right_x: Vec<f64>,
    pub y: Vec<f64>,
}
