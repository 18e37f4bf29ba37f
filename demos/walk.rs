//! Find and draw a path across a terrain map.
//!
//! Run: cargo run --bin walk -- [MAP_FILE] [SEED]
//!
//! Without a map file a built-in map is used. Maps without `S`/`T` markers
//! get random endpoints drawn from `SEED` (default 42). Set `RUST_LOG=debug`
//! to see the search engine's own summary line.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use steppath_demos::{Mover, TerrainMap};
use steppath_paths::{SearchConfig, SearchContext, SearchStats, trace_path};

const BUILTIN: &str = "
##############################
#S.....#..........~~~~.......#
#......#..1111....~~~~..###..#
#..##..#..1221....~~~~..#....#
#..##.....1221..........#..###
#.........1111...####...#....#
#######..........#..#...####.#
#.....#..~~~~~...#..#........#
#..3..#..~~~~~......#......T.#
##############################
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let text = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN.to_string(),
    };
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => 42,
    };

    let map = TerrainMap::parse(&text)?;
    let (start, target) = match (map.start(), map.target()) {
        (Some(s), Some(t)) => (s, t),
        _ => {
            let ground = map.ground();
            if ground.is_empty() {
                return Err("map has no ground to walk on".into());
            }
            let mut rng = StdRng::seed_from_u64(seed);
            let s = ground[rng.random_range(0..ground.len())];
            let t = ground[rng.random_range(0..ground.len())];
            (s, t)
        }
    };

    let mover = Mover::default();
    let mut ctx = SearchContext::new();
    let mut stats = None;
    let path = ctx.find_path_observed(
        start,
        target,
        &map,
        &mover,
        &SearchConfig::default(),
        &mut |s: &SearchStats| stats = Some(*s),
    );
    if let Some(s) = stats {
        log::info!(
            "{:?} after {} iterations, {} nodes, {:?}",
            s.outcome,
            s.iterations,
            s.nodes_used,
            s.elapsed
        );
    }

    let Some(path) = path else {
        println!("no path from {start} to {target}");
        return Ok(());
    };
    let trail = trace_path(&map, &mover, start, &path)?;
    println!("{}", map.render(start, &trail));
    println!();
    println!("{start} -> {target}: {} steps", path.len());
    let names: Vec<String> = path.iter().map(|d| d.to_string()).collect();
    println!("{}", names.join(" "));
    Ok(())
}
