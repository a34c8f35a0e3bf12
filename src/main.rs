use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use snake_grid::game::{
    grid_to_ascii, randomly_fill_grid, Direction, GameConfig, Grid, Point, Snake,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_grid")]
#[command(version, about = "Grid and snake primitives for Snake")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill a grid with random colors and print it as ASCII
    Fill {
        #[command(flatten)]
        board: BoardArgs,

        /// Seed for the random fill
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Walk a snake through a sequence of moves
    Walk {
        #[command(flatten)]
        board: BoardArgs,

        /// Moves as letters: R(ight), U(p), L(eft), D(own)
        #[arg(long)]
        moves: String,

        /// Initial snake length
        #[arg(long)]
        length: Option<usize>,

        /// Keep the tail on every move so the snake grows
        #[arg(long)]
        grow: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct BoardArgs {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,
}

impl BoardArgs {
    fn config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }

        Ok(config)
    }
}

/// Type of collision that ended a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake hit itself
    SelfCollision,
}

#[derive(Debug, Serialize)]
struct WalkReport {
    steps: usize,
    collision: Option<CollisionType>,
    cells: Vec<Point>,
}

fn new_grid(config: &GameConfig) -> Result<Grid> {
    let grid = Grid::new(config.grid_width as i64, config.grid_height as i64)
        .context("Failed to create grid")?;
    Ok(grid)
}

fn fill(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let mut grid = new_grid(config)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    randomly_fill_grid(&mut grid, &config.fill_options(), &mut rng)
        .context("Failed to fill grid")?;

    println!("{}", grid_to_ascii(&grid));
    Ok(())
}

fn walk(config: &GameConfig, moves: &str, grow: bool) -> Result<WalkReport> {
    let grid = new_grid(config)?;
    let directions = moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::from_char(c).ok_or_else(|| anyhow!("Unknown move '{}'", c)))
        .collect::<Result<Vec<_>>>()?;

    let center = Point::new(
        (config.grid_width / 2) as i32,
        (config.grid_height / 2) as i32,
    );
    let mut snake = Snake::straight(center, Direction::Right, config.initial_snake_length)
        .context("Failed to place the snake")?;

    let mut heading = Direction::Right;
    let mut steps = 0;
    let mut collision = None;

    for direction in directions {
        // 180-degree turns are ignored, the snake keeps its heading
        if !heading.is_opposite(direction) {
            heading = direction;
        }

        let (dx, dy) = heading.delta();
        let Some(head) = snake.head() else {
            break;
        };

        let next = head.moved_in_direction(heading);
        if !grid.is_inside(next.x, next.y) {
            collision = Some(CollisionType::Wall);
            break;
        }
        let collides = if grow {
            snake.will_self_collide_grown(dx, dy)
        } else {
            snake.will_self_collide(dx, dy)
        };
        if collides {
            collision = Some(CollisionType::SelfCollision);
            break;
        }

        snake = if grow {
            snake.next_grown(dx, dy)?
        } else {
            snake.next(dx, dy)?
        };
        steps += 1;
    }

    Ok(WalkReport {
        steps,
        collision,
        cells: snake.to_cells(),
    })
}

fn print_report(report: &WalkReport) {
    println!("{}", "=".repeat(40));
    println!("Steps taken: {}", report.steps);
    match report.collision {
        Some(CollisionType::Wall) => println!("Stopped: hit a wall"),
        Some(CollisionType::SelfCollision) => println!("Stopped: hit itself"),
        None => println!("Completed all moves"),
    }
    println!("Length: {}", report.cells.len());
    let cells: Vec<String> = report
        .cells
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    println!("Cells: {}", cells.join(" "));
    println!("{}", "=".repeat(40));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fill { board, seed } => {
            let config = board.config()?;
            fill(&config, seed)?;
        }
        Command::Walk {
            board,
            moves,
            length,
            grow,
            json,
        } => {
            let mut config = board.config()?;
            if let Some(length) = length {
                config.initial_snake_length = length;
            }

            let report = walk(&config, &moves, grow)?;
            if json {
                let output =
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
                println!("{}", output);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}
