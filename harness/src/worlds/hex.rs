//! `HexWalk`: navigation on an unbounded hex grid in cube coordinates.
//!
//! Cube coordinates keep `x + y + z == 0`. The six directions are flat-topped
//! compass directions (`n`, `ne`, `se`, `s`, `sw`, `nw`). A walk target may be
//! given directly or as a comma-separated list of directions from the origin
//! (e.g. `"ne,ne,s,s"`).

use std::collections::HashSet;
use std::str::FromStr;

use wayfind_search::Cost;

use crate::contract::{SearchWorld, WorldError};

/// A hex cell in cube coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl HexPoint {
    pub const ORIGIN: HexPoint = HexPoint::new(0, 0, 0);
    pub const N: HexPoint = HexPoint::new(0, 1, -1);
    pub const NE: HexPoint = HexPoint::new(1, 0, -1);
    pub const SE: HexPoint = HexPoint::new(1, -1, 0);
    pub const S: HexPoint = HexPoint::new(0, -1, 1);
    pub const SW: HexPoint = HexPoint::new(-1, 0, 1);
    pub const NW: HexPoint = HexPoint::new(-1, 1, 0);

    /// All six unit directions, clockwise from north.
    pub const DIRECTIONS: [HexPoint; 6] = [
        HexPoint::N,
        HexPoint::NE,
        HexPoint::SE,
        HexPoint::S,
        HexPoint::SW,
        HexPoint::NW,
    ];

    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn offset(self, other: HexPoint) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// The six adjacent cells.
    #[must_use]
    pub fn neighbors(&self) -> [HexPoint; 6] {
        Self::DIRECTIONS.map(|d| self.offset(d))
    }

    /// Number of steps between two cells.
    #[must_use]
    pub fn distance(&self, other: &HexPoint) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)) / 2
    }
}

impl FromStr for HexPoint {
    type Err = WorldError;

    /// Parse a single direction name (`n`, `ne`, `se`, `s`, `sw`, `nw`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "n" => Ok(Self::N),
            "ne" => Ok(Self::NE),
            "se" => Ok(Self::SE),
            "s" => Ok(Self::S),
            "sw" => Ok(Self::SW),
            "nw" => Ok(Self::NW),
            other => Err(WorldError::Parse {
                line: 1,
                detail: format!("unknown hex direction {other:?}"),
            }),
        }
    }
}

/// Walk from the origin to a target cell, avoiding blocked cells.
#[derive(Debug, Clone)]
pub struct HexWalk {
    target: HexPoint,
    blocked: HashSet<HexPoint>,
}

impl HexWalk {
    #[must_use]
    pub fn new(target: HexPoint) -> Self {
        Self {
            target,
            blocked: HashSet::new(),
        }
    }

    /// Target reached by following `directions` (comma separated) from the origin.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Parse`] on an unknown direction name.
    pub fn from_directions(directions: &str) -> Result<Self, WorldError> {
        let target = directions
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(HexPoint::from_str)
            .try_fold(HexPoint::ORIGIN, |at, step| step.map(|d| at.offset(d)))?;
        Ok(Self::new(target))
    }

    /// Builder-style set of impassable cells.
    #[must_use]
    pub fn with_blocked(mut self, blocked: impl IntoIterator<Item = HexPoint>) -> Self {
        self.blocked.extend(blocked);
        self
    }

    #[must_use]
    pub fn target(&self) -> HexPoint {
        self.target
    }
}

impl SearchWorld for HexWalk {
    type State = HexPoint;

    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "hex_walk"
    }

    fn start(&self) -> HexPoint {
        HexPoint::ORIGIN
    }

    fn heuristic(&self, state: &HexPoint) -> Cost {
        f64::from(state.distance(&self.target))
    }

    fn successors(&self, state: &HexPoint) -> Vec<HexPoint> {
        state
            .neighbors()
            .into_iter()
            .filter(|p| !self.blocked.contains(p))
            .collect()
    }

    fn describe_state(&self, state: &HexPoint) -> serde_json::Value {
        serde_json::json!([state.x, state.y, state.z])
    }
}
