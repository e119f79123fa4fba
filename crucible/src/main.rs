//! crucible — least heat loss routes through a city grid.
//!
//! Reads a grid of digit costs and prints the minimum total cost from the
//! top-left to the bottom-right block for each selected movement policy.

mod cli;
mod render;
mod report;

use std::fs;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crucible_core::CostGrid;
use crucible_paths::shortest_route;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use report::Outcome;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let text = fs::read_to_string(&cli.input)?;
    let grid: CostGrid = text.parse()?;
    log::info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        cli.input.display()
    );

    let policies = cli.policies()?;
    let outcomes = thread::scope(|s| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&(name, policy)| {
                let grid = &grid;
                let with_path = cli.json && cli.route;
                s.spawn(move || -> Result<Outcome, crucible_core::GridError> {
                    let started = Instant::now();
                    let route =
                        shortest_route(grid, grid.top_left(), grid.bottom_right(), &policy)?;
                    let elapsed = started.elapsed();
                    log::info!("{name} ({policy}): solved in {elapsed:?}");
                    Ok(Outcome::new(name, policy, route, with_path))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| "search thread panicked"))
            .collect::<Result<Vec<_>, _>>()
    })?
    .into_iter()
    .collect::<Result<Vec<_>, _>>()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for outcome in &outcomes {
        println!("{}", outcome.summary());
        if cli.route {
            if let Some(route) = &outcome.route {
                print!("{}", render::render_route(&grid, route));
            }
        }
    }
    Ok(())
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
