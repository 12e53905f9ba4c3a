//! Shared helpers for wayfind benchmark suites.

#![forbid(unsafe_code)]

use wayfind_harness::contract::SearchWorld;
use wayfind_harness::worlds::floors::FloorsPuzzle;
use wayfind_harness::worlds::grid::{GridMaze, Point};
use wayfind_search::{search_weighted, FoundPath, SearchPolicy};

/// The four-floor puzzle from the worked example (two elements).
pub const FLOORS_EXAMPLE: &str = "\
The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.
The second floor contains a hydrogen generator.
The third floor contains a lithium generator.
The fourth floor contains nothing relevant.
";

/// A serpentine maze: `corridors` horizontal corridors of `width` open cells
/// joined at alternating ends. The only path visits every open cell, so the
/// Manhattan heuristic is badly misleading.
#[must_use]
pub fn serpentine_maze(width: usize, corridors: usize) -> String {
    let wall = "#".repeat(width + 2);
    let mut rows = vec![wall.clone()];
    for i in 0..corridors {
        let mut corridor = ".".repeat(width);
        if i == 0 {
            corridor.replace_range(0..1, "S");
        }
        if i + 1 == corridors {
            let end = if corridors % 2 == 1 { width - 1 } else { 0 };
            corridor.replace_range(end..=end, "E");
        }
        rows.push(format!("#{corridor}#"));
        if i + 1 < corridors {
            let gap = if i % 2 == 0 { width } else { 1 };
            let mut divider = wall.clone();
            divider.replace_range(gap..=gap, ".");
            rows.push(divider);
        }
    }
    rows.push(wall);
    rows.join("\n")
}

/// An obstacle-free `size` x `size` field searched corner to corner.
#[must_use]
pub fn open_field(size: i32) -> GridMaze {
    GridMaze::open_field(size, size, Point::new(0, 0), Point::new(size - 1, size - 1))
}

/// The example floors puzzle with `extra` element pairs added to the ground floor.
///
/// # Panics
///
/// Panics if the bundled example fails to parse. Benchmark setup failures are fatal.
#[must_use]
pub fn floors_regime(extra: usize) -> FloorsPuzzle {
    FloorsPuzzle::parse(FLOORS_EXAMPLE)
        .and_then(|p| p.with_ground_floor_pairs(extra))
        .expect("bundled floors example is valid")
}

/// Run the engine directly on a world, bypassing report rendering and hashing.
///
/// # Panics
///
/// Panics if the search fails. Benchmark regimes are expected to be solvable.
pub fn search_only<W: SearchWorld>(world: &W, policy: &SearchPolicy) -> FoundPath<W::State> {
    search_weighted(
        world.start(),
        policy,
        |s| world.heuristic(s),
        |a, b| world.edge_cost(a, b),
        |s| world.successors(s),
    )
    .expect("search should succeed in benchmarks")
}
