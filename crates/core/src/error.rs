use crate::hex::CubeCoord;
use thiserror::Error;

/// Any error that can come out of the geometry core or the tile map. All of
/// these are deterministic functions of the input, so retrying the same call
/// will always produce the same error.
#[derive(Debug, Error)]
pub enum HexError {
    /// A rotation was requested without saying which way to go. The
    /// direction is never defaulted. `given` holds the raw input, if there
    /// was any.
    #[error("invalid rotation direction {given:?}; expected \"left\" or \"right\"")]
    InvalidDirection { given: Option<String> },

    /// A coordinate that doesn't sit on an integer point of the plane
    /// `q + r + s = 0`. Typically comes from loading a hand-edited or
    /// corrupted map. These are rejected rather than repaired.
    #[error("malformed coordinate ({q}, {r}, {s}); must be integers with q+r+s=0")]
    MalformedCoordinate { q: f64, r: f64, s: f64 },

    /// Two persisted tiles claim the same location
    #[error("duplicate tile at {0}")]
    DuplicateTile(CubeCoord),

    #[error("error in JSON map data")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "bin")]
    #[error("error in binary map data")]
    Bin(#[from] serde_cbor::Error),
}
