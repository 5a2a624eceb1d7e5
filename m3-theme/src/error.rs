use thiserror::Error;

/// Errors produced while converting or deriving colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a `#rgb` or `#rrggbb` hex color.
    #[error("unexpected hex color '{0}'")]
    InvalidHex(String),
    /// A tonal palette was asked for a tone outside `0..=100`.
    #[error("tone {0} is outside the supported range 0..=100")]
    ToneOutOfRange(i32),
}
