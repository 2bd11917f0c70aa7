//! Lane boundary tracking over bird's-eye binary masks.
//!
//! The crate consumes one top-down binary mask per video frame — produced
//! upstream by undistortion, perspective rectification, and pixel
//! thresholding, none of which live here — and maintains a per-stream
//! [`LaneTracker`]: a second-degree polynomial per lane boundary in both
//! pixel and real-world space, road curvature radius, and the vehicle's
//! lateral offset from lane center.
//!
//! The first frame runs a histogram-seeded sliding-window search; once a
//! fit exists, later frames use the cheaper polynomial-guided search. One
//! tracker instance per stream; frames of a stream are processed strictly
//! in order.
//!
//! ```no_run
//! use lane_tracker::{BinaryMask, LaneTracker, TrackerConfig};
//!
//! let mut tracker = LaneTracker::new(TrackerConfig::default());
//! let mask_data = vec![0u8; 1280 * 720];
//! let mask = BinaryMask::new(&mask_data, 1280, 720);
//!
//! match tracker.locate_lanes(&mask) {
//!     Ok(()) => {
//!         let radius_m = tracker.curvature().unwrap();
//!         let offset_m = tracker.offset().unwrap();
//!         println!("radius {radius_m:.0} m, offset {offset_m:+.2} m");
//!     }
//!     Err(err) => eprintln!("frame rejected: {err}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod mask;
pub mod tracker;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::TrackerConfig;
pub use error::TrackError;
pub use mask::BinaryMask;
pub use tracker::LaneTracker;
pub use types::{LaneSide, PlotPoints, QuadraticFit, SearchWindow, TrackerMode};
