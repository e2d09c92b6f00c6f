use std::{fs, path::PathBuf, thread, time::Duration};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;

use bounded_life::{Encoding, Grid, Seeder, Simulation};

/// Runs Conway's Game of Life on a bounded grid and prints each generation.
#[derive(Parser, Debug)]
#[command(name = "bounded-life")]
struct Args {
    #[arg(long, default_value_t = 20)]
    height: usize,
    #[arg(long, default_value_t = 38)]
    width: usize,
    #[arg(short, long, default_value_t = 100)]
    generations: u64,
    /// Delay between generations.
    #[arg(long, default_value_t = 125)]
    tick_ms: u64,
    /// Seed for the random board; random each run if omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Start from a pattern file (`o` alive, `.` dead) instead of a random board.
    #[arg(long)]
    pattern: Option<PathBuf>,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    alive_value: i64,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    dead_value: i64,
    /// Print cells using the numeric encoding.
    #[arg(long)]
    numeric: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let encoding = Encoding::new(args.alive_value, args.dead_value)?;
    let seeder = args.seed.map_or_else(Seeder::from_entropy, Seeder::seeded);

    let mut sim = match &args.pattern {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let grid = Grid::from_pattern(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            Simulation::with_grid(grid, seeder)
        }
        None => {
            anyhow::ensure!(
                args.height.checked_mul(args.width).is_some(),
                "a {}x{} grid is too large",
                args.height,
                args.width
            );
            let mut sim = Simulation::new(args.height, args.width, seeder);
            sim.regenerate();
            sim
        }
    };
    let (height, width) = sim.grid().dimensions();
    log::info!("running {height}x{width} for up to {} generations", args.generations);

    print(&sim, &encoding, args.numeric);
    sim.resume();
    for _ in 0..args.generations {
        thread::sleep(Duration::from_millis(args.tick_ms));
        let previous = sim.grid().clone();
        sim.tick();
        print(&sim, &encoding, args.numeric);
        if sim.grid() == &previous {
            log::info!("settled after {} generations", sim.generation());
            break;
        }
    }
    Ok(())
}

fn print(sim: &Simulation, encoding: &Encoding, numeric: bool) {
    println!("generation {}", sim.generation());
    if numeric {
        for row in encoding.export(sim.grid()) {
            println!("{}", row.iter().join(" "));
        }
    } else {
        println!("{}", sim.grid());
    }
    println!();
}
