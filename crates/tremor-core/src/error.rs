//! Errors raised while validating shared vocabulary types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Playback multipliers are limited to 1, 5, 10 and 30.
    #[error("unsupported playback speed {0}x (expected 1, 5, 10 or 30)")]
    UnsupportedSpeed(u32),
}
