use serde::{Deserialize, Serialize};

/// A position on the game grid
///
/// Coordinates are signed since offsets and padded areas around the grid
/// can go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move point by delta, or `None` if a coordinate overflows
    pub fn checked_moved_by(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Move point one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The four orthogonal unit offsets: +x, -y, -x, +y.
///
/// Callers index directions positionally, so the order is fixed.
pub const AROUND4: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(0, 1),
];

/// Direction the snake can move
///
/// `Up` is towards negative y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// All directions in `AROUND4` order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        let offset = AROUND4[self.index()];
        (offset.x, offset.y)
    }

    /// Position of this direction in `AROUND4`
    pub fn index(&self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Down => 3,
        }
    }

    /// Parse a single-letter move (`R`, `U`, `L`, `D`, case-insensitive)
    pub fn from_char(value: char) -> Option<Direction> {
        match value.to_ascii_uppercase() {
            'R' => Some(Direction::Right),
            'U' => Some(Direction::Up),
            'L' => Some(Direction::Left),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }
}
