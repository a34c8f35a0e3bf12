use super::error::{GameError, Result};
use super::point::{Direction, Point};

/// Offset applied to every stored coordinate so that -2 fits in a byte
const OFFSET: i32 = 2;

/// The snake as a compact chain of cells, head first
///
/// Each segment takes two bytes holding `x + 2` and `y + 2`. Moves never
/// mutate a snake; they build the next one into a fresh buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snake {
    cells: Vec<u8>,
}

fn encode_one(value: i32) -> Option<u8> {
    u8::try_from(value.checked_add(OFFSET)?).ok()
}

fn encode(x: i32, y: i32) -> Result<[u8; 2]> {
    match (encode_one(x), encode_one(y)) {
        (Some(ex), Some(ey)) => Ok([ex, ey]),
        _ => Err(GameError::CoordinateOverflow { x, y }),
    }
}

fn decode(value: u8) -> i32 {
    value as i32 - OFFSET
}

impl Snake {
    /// Build a snake from its cells, head first
    pub fn from_cells(points: &[Point]) -> Result<Self> {
        let mut cells = Vec::with_capacity(points.len() * 2);
        for point in points {
            cells.extend(encode(point.x, point.y)?);
        }
        Ok(Self { cells })
    }

    /// Create a straight snake with its body trailing behind the head
    pub fn straight(head: Point, direction: Direction, length: usize) -> Result<Self> {
        let count = i32::try_from(length).map_err(|_| GameError::InvalidLength(length))?;
        let (dx, dy) = direction.delta();

        let mut cells = Vec::new();
        for i in 0..count {
            let point = head
                .checked_moved_by(-dx * i, -dy * i)
                .ok_or(GameError::CoordinateOverflow {
                    x: head.x.saturating_sub(dx * i),
                    y: head.y.saturating_sub(dy * i),
                })?;
            cells.extend(encode(point.x, point.y)?);
        }
        Ok(Self { cells })
    }

    /// Decode the snake back into its cells, head first
    pub fn to_cells(&self) -> Vec<Point> {
        self.cells().collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .chunks_exact(2)
            .map(|pair| Point::new(decode(pair[0]), decode(pair[1])))
    }

    /// Head x, or `None` for a snake without segments
    pub fn head_x(&self) -> Option<i32> {
        self.cells.first().map(|&value| decode(value))
    }

    pub fn head_y(&self) -> Option<i32> {
        self.cells.get(1).map(|&value| decode(value))
    }

    pub fn head(&self) -> Option<Point> {
        Some(Point::new(self.head_x()?, self.head_y()?))
    }

    pub fn tail(&self) -> Option<Point> {
        self.cells().last()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.cells.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells().any(|cell| cell == point)
    }

    /// Compare segment by segment, rejecting snakes of different lengths
    pub fn snake_equals(&self, other: &Snake) -> Result<bool> {
        if self.len() != other.len() {
            return Err(GameError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.cells == other.cells)
    }

    /// The snake one tick after moving its head by (dx, dy)
    ///
    /// Every segment shifts one slot towards the tail and the old tail is
    /// dropped, so the length is unchanged.
    pub fn next(&self, dx: i32, dy: i32) -> Result<Snake> {
        self.advance(dx, dy, false)
    }

    /// Same as [`Snake::next`] but keeps the old tail, growing by one segment
    pub fn next_grown(&self, dx: i32, dy: i32) -> Result<Snake> {
        self.advance(dx, dy, true)
    }

    fn advance(&self, dx: i32, dy: i32, grow: bool) -> Result<Snake> {
        let (Some(x), Some(y)) = (self.head_x(), self.head_y()) else {
            return Ok(self.clone());
        };

        let kept = if grow {
            self.cells.len()
        } else {
            self.cells.len() - 2
        };

        let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
            return Err(GameError::CoordinateOverflow {
                x: x.saturating_add(dx),
                y: y.saturating_add(dy),
            });
        };

        let mut cells = Vec::with_capacity(kept + 2);
        cells.extend(encode(nx, ny)?);
        cells.extend_from_slice(&self.cells[..kept]);

        Ok(Snake { cells })
    }

    /// Check whether moving the head by (dx, dy) runs into the body
    ///
    /// The head and the tail are not checked: the tail vacates its cell on
    /// this move. Snakes of two segments or fewer never collide.
    pub fn will_self_collide(&self, dx: i32, dy: i32) -> bool {
        self.collides_after(dx, dy, self.len().saturating_sub(2))
    }

    /// Same as [`Snake::will_self_collide`] for a move made with
    /// [`Snake::next_grown`], where the tail stays in place
    pub fn will_self_collide_grown(&self, dx: i32, dy: i32) -> bool {
        self.collides_after(dx, dy, self.len().saturating_sub(1))
    }

    fn collides_after(&self, dx: i32, dy: i32, body: usize) -> bool {
        // A head that overflows cannot land on any stored cell
        let Some(next) = self.head().and_then(|head| head.checked_moved_by(dx, dy)) else {
            return false;
        };
        self.cells().skip(1).take(body).any(|cell| cell == next)
    }
}
