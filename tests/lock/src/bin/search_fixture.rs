//! Binary that runs every bundled world through the harness runner and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=value` line per report field on stdout. Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::error::Error;

use wayfind_harness::policy::RunConfig;
use wayfind_harness::runner::{run_exploration, run_search, SearchReportV1};
use wayfind_harness::worlds::floors::FloorsPuzzle;
use wayfind_harness::worlds::grid::GridMaze;
use wayfind_harness::worlds::hex::HexWalk;

const MAZE: &str = "\
#########
#S..#...#
#.#.#.#.#
#.#...#.#
#.#####.#
#......E#
#########
";

const FLOORS: &str = "\
The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.
The second floor contains a hydrogen generator.
The third floor contains a lithium generator.
The fourth floor contains nothing relevant.
";

fn print_search(label: &str, report: &SearchReportV1) {
    println!("{label}.digest={}", report.digest);
    println!("{label}.policy_digest={}", report.policy_digest);
    println!("{label}.termination={}", report.termination.as_str());
    println!("{label}.edges={}", report.path_edges());
    println!("{label}.expansions={}", report.expansions);
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::default();

    let maze = GridMaze::parse(MAZE)?;
    print_search("grid", &run_search(&maze, &config)?);

    let walk = HexWalk::from_directions("se,sw,se,sw,sw,n,nw")?;
    print_search("hex", &run_search(&walk, &config)?);

    let floors = FloorsPuzzle::parse(FLOORS)?;
    print_search("floors", &run_search(&floors, &config)?);

    let explored = run_exploration(&maze, &config)?;
    println!("explore.digest={}", explored.digest);
    println!("explore.visited={}", explored.visited);

    Ok(())
}
