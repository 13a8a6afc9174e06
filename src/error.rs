//! Error types for planting and configuration.

/// Reasons a planting attempt was refused.
///
/// Always handled where it occurs by ignoring the click; never shown to the
/// player.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Rejected {
    /// The countdown has ended or the game has not started.
    #[error("game is not running")]
    Inactive,

    /// The forest already holds the maximum number of trees.
    #[error("forest is at capacity ({capacity})")]
    AtCapacity {
        /// Maximum number of trees.
        capacity: usize,
    },

    /// The click landed left or right of the scene.
    #[error("x={x} is outside the scene")]
    OutsideScene {
        /// Scene x of the click.
        x: f64,
    },

    /// The click landed outside the ground band at the bottom of the scene.
    #[error("y={y} is outside the ground band (starts at {band_top})")]
    OutsideBand {
        /// Scene y of the click.
        y: f64,
        /// Top edge of the ground band.
        band_top: f64,
    },
}

/// Problems with a stored config override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The stored value is not valid JSON for [`crate::config::GameConfig`].
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The value parsed but describes an unplayable game.
    #[error("invalid config: {0}")]
    Invalid(String),
}
