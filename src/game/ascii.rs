//! Human-readable text form of a grid, one character per cell
//!
//! `#` is color 3, `@` color 2, `.` color 1 and a digit is that color.
//! Anything else, including a missing trailing character, is empty.

use super::error::Result;
use super::grid::{Cell, Color, Grid};

fn cell_from_char(value: char) -> Cell {
    let color = match value {
        '#' => 3,
        '@' => 2,
        '.' => 1,
        '1'..='9' => value as u8 - b'0',
        _ => return Cell::Empty,
    };
    Color::new(color).map(Cell::Color).unwrap_or(Cell::Empty)
}

fn cell_to_char(cell: Cell) -> char {
    match cell.color().map(|color| color.value()) {
        None => ' ',
        Some(1) => '.',
        Some(2) => '@',
        Some(3) => '#',
        Some(value) => (b'0' + value) as char,
    }
}

/// Parse a grid from rows of characters
///
/// A single leading empty line is skipped so raw string literals can start
/// on the line after the quote. The width is the longest row.
pub fn grid_from_ascii(ascii: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<char>> = ascii.split('\n').map(|row| row.chars().collect()).collect();
    if rows.first().is_some_and(|row| row.is_empty()) {
        rows.remove(0);
    }

    let height = rows.len();
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

    let mut grid = Grid::new(width as i64, height as i64)?;
    for (y, row) in rows.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            grid.set_color(x as i32, y as i32, cell_from_char(value))?;
        }
    }

    Ok(grid)
}

/// Render a grid as rows of characters, the inverse of [`grid_from_ascii`]
pub fn grid_to_ascii(grid: &Grid) -> String {
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| grid.get_color(x, y).map(cell_to_char).unwrap_or(' '))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        let grid = grid_from_ascii(
            r#"
#..
@
.#@#"#,
        )
        .unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn test_parse_colors() {
        let grid = grid_from_ascii("#@.5\n 0x7").unwrap();

        let color = |x, y| grid.get_color(x, y).unwrap().color().map(|c| c.value());
        assert_eq!(color(0, 0), Some(3));
        assert_eq!(color(1, 0), Some(2));
        assert_eq!(color(2, 0), Some(1));
        assert_eq!(color(3, 0), Some(5));
        assert_eq!(color(0, 1), None);
        assert_eq!(color(1, 1), None);
        assert_eq!(color(2, 1), None);
        assert_eq!(color(3, 1), Some(7));
    }

    #[test]
    fn test_short_rows_are_padded_with_empty() {
        let grid = grid_from_ascii("...\n.").unwrap();
        assert!(grid.get_color(2, 1).unwrap().is_empty());
        assert!(!grid.get_color(0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_render_round_trip() {
        let ascii = "#@. 4\n  9..\n.@#  ";
        let grid = grid_from_ascii(ascii).unwrap();
        assert_eq!(grid_to_ascii(&grid), ascii);
        assert_eq!(grid_from_ascii(&grid_to_ascii(&grid)).unwrap(), grid);
    }

    #[test]
    fn test_empty_input() {
        let grid = grid_from_ascii("").unwrap();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid_to_ascii(&grid), "");
    }
}
