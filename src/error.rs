use crate::types::LaneSide;

/// Errors produced while locating lanes in a single frame.
///
/// All of these are fatal for the frame, never for the tracker: on `Err` the
/// previously stored fits and the tracker mode are left untouched, and the
/// calling pipeline decides whether to reuse the last fit, force a cold
/// start via `reset`, or drop the frame.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// The cold-start histogram half has no set pixels at all, so there is
    /// no peak to anchor the window search on.
    #[error("no histogram peak in the {} half of the mask", side.as_str())]
    AmbiguousHistogram { side: LaneSide },

    /// A lane boundary collected fewer candidate pixels than a quadratic
    /// fit needs.
    #[error("{} lane has {found} candidate pixels, need at least 3", side.as_str())]
    InsufficientPixels { side: LaneSide, found: usize },

    /// The normal equations are singular, e.g. every candidate pixel sits
    /// on the same row.
    #[error("degenerate pixel geometry for the {} lane", side.as_str())]
    DegenerateFit { side: LaneSide },
}
