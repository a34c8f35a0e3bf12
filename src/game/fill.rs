use super::error::{GameError, Result};
use super::grid::{Cell, Color, Grid};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Palette and empty-cell weight used by [`randomly_fill_grid`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillOptions {
    /// Colors drawn with equal weight
    pub colors: Vec<Color>,
    /// How many color-sized shares of the draw produce an empty cell
    pub empty_weight: u32,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            empty_weight: 2,
        }
    }
}

pub(crate) fn default_colors() -> Vec<Color> {
    [1, 2, 3].into_iter().filter_map(|value| Color::new(value).ok()).collect()
}

/// Overwrite every cell of the grid with a random color or empty
///
/// Each cell draws `k` from `-empty_weight..=colors.len() - 1`; a negative
/// draw empties the cell.
pub fn randomly_fill_grid<R: Rng>(
    grid: &mut Grid,
    options: &FillOptions,
    rng: &mut R,
) -> Result<()> {
    if options.colors.is_empty() && options.empty_weight == 0 {
        return Err(GameError::EmptyPalette);
    }

    let low = -(options.empty_weight as i64);
    let high = options.colors.len() as i64 - 1;

    for x in (0..grid.width() as i32).rev() {
        for y in (0..grid.height() as i32).rev() {
            let k = rng.gen_range(low..=high);
            let cell = match usize::try_from(k) {
                Ok(index) => Cell::Color(options.colors[index]),
                Err(_) => Cell::Empty,
            };
            grid.set_color(x, y, cell)?;
        }
    }

    Ok(())
}
