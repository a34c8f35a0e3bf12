use super::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// A cell color, always in `1..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Color(u8);

impl Color {
    pub fn new(value: u8) -> Result<Self> {
        match value {
            1..=9 => Ok(Self(value)),
            _ => Err(GameError::InvalidColor(value)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Color {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Color::new(value)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Color(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Color(color) => Some(*color),
        }
    }

    fn from_byte(value: u8) -> Self {
        // The buffer only ever receives bytes written by `to_byte`
        Color::new(value).map(Cell::Color).unwrap_or(Cell::Empty)
    }

    fn to_byte(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Color(color) => color.0,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Color(color)
    }
}

impl From<Option<Color>> for Cell {
    fn from(color: Option<Color>) -> Self {
        color.map(Cell::Color).unwrap_or(Cell::Empty)
    }
}

/// Returns true if the cell holds no color
pub fn is_empty(cell: Cell) -> bool {
    cell.is_empty()
}

/// Dense 2D color buffer
///
/// Cells are stored column by column: (x, y) lives at `x * height + y`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let invalid = GameError::InvalidDimension { width, height };
        let w = usize::try_from(width).map_err(|_| invalid.clone())?;
        let h = usize::try_from(height).map_err(|_| invalid.clone())?;
        let len = w.checked_mul(h).ok_or(invalid)?;

        Ok(Self {
            width: w,
            height: h,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Check if (x, y) lies inside the grid extended by `margin` on every side
    ///
    /// A negative margin shrinks the region.
    pub fn is_inside_large(&self, margin: i32, x: i32, y: i32) -> bool {
        let (x, y, m) = (x as i64, y as i64, margin as i64);
        x >= -m && y >= -m && x < self.width as i64 + m && y < self.height as i64 + m
    }

    pub fn get_color(&self, x: i32, y: i32) -> Result<Cell> {
        let index = self.index(x, y)?;
        Ok(Cell::from_byte(self.data[index]))
    }

    pub fn set_color(&mut self, x: i32, y: i32, cell: impl Into<Cell>) -> Result<()> {
        let index = self.index(x, y)?;
        self.data[index] = cell.into().to_byte();
        Ok(())
    }

    pub fn set_color_empty(&mut self, x: i32, y: i32) -> Result<()> {
        self.set_color(x, y, Cell::Empty)
    }

    /// Returns true if no cell holds a color
    pub fn is_grid_empty(&self) -> bool {
        self.data.iter().all(|&value| value == 0)
    }

    /// Compare cell contents, rejecting grids of different dimensions
    pub fn grid_equals(&self, other: &Grid) -> Result<bool> {
        if self.width != other.width || self.height != other.height {
            return Err(GameError::DimensionMismatch {
                left: (self.width, self.height),
                right: (other.width, other.height),
            });
        }
        Ok(self.data == other.data)
    }

    /// Iterate over every cell in buffer order
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.data.iter().enumerate().map(move |(index, &value)| {
            let x = (index / self.height) as i32;
            let y = (index % self.height) as i32;
            (x, y, Cell::from_byte(value))
        })
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.is_inside(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        Ok(x as usize * self.height + y as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(value: u8) -> Color {
        Color::new(value).unwrap()
    }

    #[test]
    fn test_color_range() {
        assert!(Color::new(0).is_err());
        assert_eq!(Color::new(1).unwrap().value(), 1);
        assert_eq!(Color::new(9).unwrap().value(), 9);
        assert_eq!(Color::new(10), Err(GameError::InvalidColor(10)));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_grid_empty());

        assert!(Grid::new(0, 0).unwrap().is_grid_empty());
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            Grid::new(-1, 3),
            Err(GameError::InvalidDimension {
                width: -1,
                height: 3
            })
        );
        assert!(Grid::new(3, -2).is_err());
        assert!(Grid::new(i64::MAX, i64::MAX).is_err());
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 10).unwrap();

        assert!(grid.is_inside(0, 0));
        assert!(grid.is_inside(19, 9));
        assert!(!grid.is_inside(-1, 0));
        assert!(!grid.is_inside(20, 0));
        assert!(!grid.is_inside(0, 10));
    }

    #[test]
    fn test_large_bounds_checking() {
        let grid = Grid::new(5, 5).unwrap();

        assert!(grid.is_inside_large(2, -2, -2));
        assert!(grid.is_inside_large(2, 6, 6));
        assert!(!grid.is_inside_large(2, -3, 0));
        assert!(!grid.is_inside_large(2, 7, 0));

        // Negative margin shrinks the region
        assert!(!grid.is_inside_large(-1, 0, 2));
        assert!(grid.is_inside_large(-1, 1, 3));
        assert!(!grid.is_inside_large(-1, 4, 2));
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = Grid::new(7, 4).unwrap();

        for x in 0..7 {
            for y in 0..4 {
                let c = color(((x + y) % 9 + 1) as u8);
                grid.set_color(x, y, c).unwrap();
                assert_eq!(grid.get_color(x, y).unwrap(), Cell::Color(c));
            }
        }

        grid.set_color(3, 2, None).unwrap();
        assert_eq!(grid.get_color(3, 2).unwrap(), Cell::Empty);

        grid.set_color_empty(1, 1).unwrap();
        assert!(is_empty(grid.get_color(1, 1).unwrap()));
    }

    #[test]
    fn test_column_major_layout() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_color(1, 0, color(5)).unwrap();

        // (1, 0) lives at 1 * height + 0
        assert_eq!(grid.data, vec![0, 0, 5, 0, 0, 0]);

        let filled: Vec<_> = grid.cells().filter(|(_, _, cell)| !cell.is_empty()).collect();
        assert_eq!(filled, vec![(1, 0, Cell::Color(color(5)))]);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 3).unwrap();

        assert_eq!(grid.get_color(3, 0), Err(GameError::OutOfBounds { x: 3, y: 0 }));
        assert_eq!(
            grid.set_color(0, -1, color(1)),
            Err(GameError::OutOfBounds { x: 0, y: -1 })
        );
        assert!(grid.is_grid_empty());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_color(2, 3, color(2)).unwrap();

        let mut copy = grid.clone();
        assert!(copy.grid_equals(&grid).unwrap());

        copy.set_color(0, 0, color(9)).unwrap();
        assert_eq!(grid.get_color(0, 0).unwrap(), Cell::Empty);
        assert!(!copy.grid_equals(&grid).unwrap());
    }

    #[test]
    fn test_grid_equals_dimension_mismatch() {
        let a = Grid::new(3, 2).unwrap();
        let b = Grid::new(2, 3).unwrap();

        assert_eq!(
            a.grid_equals(&b),
            Err(GameError::DimensionMismatch {
                left: (3, 2),
                right: (2, 3)
            })
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_color_serde() {
        let json = serde_json::to_string(&color(4)).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<Color>("0").is_err());
    }
}
