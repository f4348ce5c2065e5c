use std::io;
use std::thread;

use anyhow::{Context, Result};
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use maze_solver::{Grid, Progress, Solver};

mod options;

use options::Options;

enum Outcome {
    Found,
    Exhausted,
    GaveUp,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opts = Options::parse();

    let mut grid = match &opts.maze {
        Some(path) => Grid::from_file(path)
            .with_context(|| format!("Failed to load the maze {}", path.display()))?,
        None => Grid::from_reader(io::stdin().lock()).context("Failed to read the maze")?,
    };

    let outcome = if opts.quiet {
        let pb = ProgressBar::new_spinner().with_style(
            ProgressStyle::with_template("{spinner} {pos} steps ({elapsed})")
                .context("Invalid progress template")?,
        );
        let outcome = run(&mut grid, opts.max_steps, |_| {
            pb.inc(1);
            Ok(())
        })?;
        pb.finish_and_clear();
        outcome
    } else {
        let term = Term::stderr();
        let mut drawn = 0;
        run(&mut grid, opts.max_steps, |grid| {
            if drawn > 0 {
                term.clear_last_lines(drawn)?;
            }
            let frame = grid.to_string();
            term.write_line(&frame)?;
            drawn = grid.height();
            thread::sleep(opts.delay);
            Ok(())
        })
        .context("Failed to draw the maze")?
    };

    if opts.quiet {
        println!("{grid}");
    }
    match outcome {
        Outcome::Found => {
            eprintln!("Reached the goal");
            Ok(())
        }
        Outcome::Exhausted => {
            eprintln!("No path to the goal");
            std::process::exit(1);
        }
        Outcome::GaveUp => {
            eprintln!("Gave up after {} steps", opts.max_steps.unwrap_or(0));
            std::process::exit(1);
        }
    }
}

fn run(
    grid: &mut Grid,
    max_steps: Option<usize>,
    mut on_change: impl FnMut(&Grid) -> io::Result<()>,
) -> io::Result<Outcome> {
    let mut solver = Solver::new(grid);
    loop {
        if max_steps.map_or(false, |max| solver.placements() >= max) {
            return Ok(Outcome::GaveUp);
        }
        match solver.step(grid, &mut on_change)? {
            Progress::Searching => {}
            Progress::Found => return Ok(Outcome::Found),
            Progress::Exhausted => return Ok(Outcome::Exhausted),
        }
    }
}
