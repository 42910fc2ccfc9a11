use thiserror::Error;

/// Errors raised while building or running a simulation.
///
/// Everything except `Io`, `Image` and `Json` is a configuration error and is
/// reported before the first generation runs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("grid side length must be positive, got {0}")]
    InvalidDimension(usize),

    #[error("a {0}x{0} grid does not fit into memory")]
    GridTooLarge(usize),

    #[error("pattern of {rows}x{cols} cells does not fit into a {size}x{size} grid")]
    PatternTooLarge { rows: usize, cols: usize, size: usize },

    #[error("pattern row {row} has {got} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("cell state must be 0 or 1, got {0}")]
    InvalidCellState(u8),

    #[error("unexpected character {0:?} in pattern picture")]
    InvalidPictureChar(char),

    #[error("rule {index}: lower bound {min} is not below upper bound {max}")]
    InvalidBounds { index: usize, min: u8, max: u8 },

    #[error("rule {index}: probability {probability} is outside [0, 1]")]
    InvalidProbability { index: usize, probability: f64 },

    #[error("write frequency must be positive")]
    InvalidWriteFrequency,

    #[error("invalid rulestring {0:?}")]
    InvalidRulestring(String),

    #[error("malformed RLE: {0}")]
    Rle(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
