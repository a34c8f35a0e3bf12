use std::fmt;

/// Errors raised when grid or snake operations receive invalid input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Grid dimensions were negative or `width * height` overflowed
    InvalidDimension { width: i64, height: i64 },
    /// Coordinate access outside `[0, width) x [0, height)`
    OutOfBounds { x: i32, y: i32 },
    /// Two grids of different dimensions were compared
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Two snakes of different segment counts were compared
    LengthMismatch { left: usize, right: usize },
    /// Color byte outside `1..=9`
    InvalidColor(u8),
    /// Snake coordinate that does not fit the compact encoding
    CoordinateOverflow { x: i32, y: i32 },
    /// Snake length too large to lay out
    InvalidLength(usize),
    /// Random fill with no colors and no empty weight
    EmptyPalette,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDimension { width, height } => {
                write!(f, "Invalid grid dimension: {}x{}", width, height)
            }
            GameError::OutOfBounds { x, y } => write!(f, "Coordinate ({}, {}) is out of bounds", x, y),
            GameError::DimensionMismatch { left, right } => write!(
                f,
                "Grid dimension mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            GameError::LengthMismatch { left, right } => {
                write!(f, "Snake length mismatch: {} vs {}", left, right)
            }
            GameError::InvalidColor(value) => {
                write!(f, "Invalid color value {}, expected 1 through 9", value)
            }
            GameError::CoordinateOverflow { x, y } => {
                write!(f, "Snake coordinate ({}, {}) cannot be encoded", x, y)
            }
            GameError::InvalidLength(length) => write!(f, "Invalid snake length {}", length),
            GameError::EmptyPalette => write!(f, "Fill needs at least one color or an empty weight"),
        }
    }
}

impl std::error::Error for GameError {}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::OutOfBounds { x: -1, y: 4 }.to_string(),
            "Coordinate (-1, 4) is out of bounds"
        );
        assert_eq!(
            GameError::DimensionMismatch {
                left: (3, 2),
                right: (2, 3)
            }
            .to_string(),
            "Grid dimension mismatch: 3x2 vs 2x3"
        );
        assert_eq!(
            GameError::InvalidColor(12).to_string(),
            "Invalid color value 12, expected 1 through 9"
        );
    }
}
