//! `GridMaze`: four-directional navigation on a square-cell maze.
//!
//! Input format, one row per line:
//!
//! ```text
//! #######
//! #S..#.#
//! #.#...#
//! #...#E#
//! #######
//! ```
//!
//! `#` is a wall, `.` is open floor, `S` marks the start and `E` the goal.
//! Any cell outside the text is treated as a wall.

use std::collections::HashSet;

use wayfind_search::Cost;

use crate::contract::{SearchWorld, WorldError};

/// A cell on the square grid. `y` grows downward (row index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors: right, left, down, up.
    #[must_use]
    pub fn neighbors4(&self) -> [Point; 4] {
        [
            Point::new(self.x + 1, self.y),
            Point::new(self.x - 1, self.y),
            Point::new(self.x, self.y + 1),
            Point::new(self.x, self.y - 1),
        ]
    }

    /// The four orthogonal neighbors followed by the four diagonals.
    #[must_use]
    pub fn neighbors8(&self) -> [Point; 8] {
        let [r, l, d, u] = self.neighbors4();
        [
            r,
            l,
            d,
            u,
            Point::new(self.x + 1, self.y - 1),
            Point::new(self.x - 1, self.y + 1),
            Point::new(self.x + 1, self.y + 1),
            Point::new(self.x - 1, self.y - 1),
        ]
    }

    /// Manhattan (taxicab) distance.
    #[must_use]
    pub fn manhattan(&self, other: &Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// A parsed maze world.
#[derive(Debug, Clone)]
pub struct GridMaze {
    open: HashSet<Point>,
    start: Point,
    goal: Point,
    width: usize,
    height: usize,
}

impl GridMaze {
    /// Parse a maze from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Parse`] on an unknown character or a duplicate
    /// marker, and [`WorldError::Missing`] if `S` or `E` is absent.
    pub fn parse(input: &str) -> Result<Self, WorldError> {
        let mut open = HashSet::new();
        let mut start = None;
        let mut goal = None;
        let mut width = 0;
        let mut height = 0;

        for (row, line) in input.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            height = row + 1;
            width = width.max(line.chars().count());
            for (col, ch) in line.chars().enumerate() {
                let point = Point::new(coord(col, row)?, coord(row, row)?);
                match ch {
                    '#' => {}
                    '.' => {
                        open.insert(point);
                    }
                    'S' => {
                        set_marker(&mut start, point, 'S', row)?;
                        open.insert(point);
                    }
                    'E' => {
                        set_marker(&mut goal, point, 'E', row)?;
                        open.insert(point);
                    }
                    other => {
                        return Err(WorldError::Parse {
                            line: row + 1,
                            detail: format!("unexpected character {other:?}"),
                        });
                    }
                }
            }
        }

        Ok(Self {
            open,
            start: start.ok_or_else(|| WorldError::Missing {
                what: "start marker 'S'".into(),
            })?,
            goal: goal.ok_or_else(|| WorldError::Missing {
                what: "goal marker 'E'".into(),
            })?,
            width,
            height,
        })
    }

    /// An obstacle-free `width` x `height` field with the given endpoints.
    #[must_use]
    pub fn open_field(width: i32, height: i32, start: Point, goal: Point) -> Self {
        let open = (0..height)
            .flat_map(|y| (0..width).map(move |x| Point::new(x, y)))
            .collect();
        Self {
            open,
            start,
            goal,
            width: usize::try_from(width).unwrap_or(0),
            height: usize::try_from(height).unwrap_or(0),
        }
    }

    /// The goal cell.
    #[must_use]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Whether `point` is walkable.
    #[must_use]
    pub fn is_open(&self, point: &Point) -> bool {
        self.open.contains(point)
    }

    /// Maze dimensions as parsed (`width`, `height`).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

fn coord(value: usize, row: usize) -> Result<i32, WorldError> {
    i32::try_from(value).map_err(|_| WorldError::Parse {
        line: row + 1,
        detail: "maze too large".into(),
    })
}

fn set_marker(
    slot: &mut Option<Point>,
    point: Point,
    marker: char,
    row: usize,
) -> Result<(), WorldError> {
    if slot.replace(point).is_some() {
        return Err(WorldError::Parse {
            line: row + 1,
            detail: format!("duplicate marker {marker:?}"),
        });
    }
    Ok(())
}

impl SearchWorld for GridMaze {
    type State = Point;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid_maze"
    }

    fn start(&self) -> Point {
        self.start
    }

    fn heuristic(&self, state: &Point) -> Cost {
        f64::from(state.manhattan(&self.goal))
    }

    fn successors(&self, state: &Point) -> Vec<Point> {
        state
            .neighbors4()
            .into_iter()
            .filter(|p| self.open.contains(p))
            .collect()
    }

    fn describe_state(&self, state: &Point) -> serde_json::Value {
        serde_json::json!([state.x, state.y])
    }
}
