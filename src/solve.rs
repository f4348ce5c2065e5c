use log::{debug, trace};

use crate::{Cell, Direction, Grid, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Progress {
    Searching,
    Found,
    Exhausted,
}

/// Depth-first walk from the initial agent position, one placement per step.
///
/// All progress lives in the current position, the trail of branch points and
/// the grid cells themselves; nothing recurses.
#[derive(Debug, Clone)]
pub struct Solver {
    current: Pos,
    goal: Pos,
    trail: Vec<Pos>,
    placements: usize,
    done: Option<Progress>,
}

impl Solver {
    pub fn new(grid: &Grid) -> Self {
        Self {
            current: grid.initial_agent(),
            goal: grid.initial_goal(),
            trail: Vec::new(),
            placements: 0,
            done: None,
        }
    }

    pub fn current(&self) -> Pos {
        self.current
    }

    /// Earlier positions of the live path, oldest first.
    pub fn trail(&self) -> &[Pos] {
        &self.trail
    }

    /// Number of times the agent has been placed, which is also the number of
    /// notifications sent.
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Places the agent, notifies, then either stops at the goal, moves on to
    /// the first steppable neighbor or backtracks.
    ///
    /// Once `Found` or `Exhausted` is returned, further calls return it again
    /// without touching the grid or the listener.
    pub fn step<E>(
        &mut self,
        grid: &mut Grid,
        mut on_change: impl FnMut(&Grid) -> Result<(), E>,
    ) -> Result<Progress, E> {
        if let Some(done) = self.done {
            return Ok(done);
        }

        #[cfg(feature = "coz")]
        coz::progress!("Step");

        let current = self.current;
        current.place(grid, Cell::Agent);
        self.placements += 1;
        on_change(&*grid)?;

        if current.is_at(self.goal) {
            return Ok(self.finish(Progress::Found));
        }

        let next = Direction::ALL
            .into_iter()
            .map(|dir| current.neighbor(dir))
            .find(|pos| pos.can_be_moved_to(grid));

        match next {
            Some(next) => {
                trace!("Move {current} -> {next}");
                self.trail.push(current);
                current.place(grid, Cell::Path);
                self.current = next;
            }
            None => {
                current.place(grid, Cell::Tried);
                let Some(prev) = self.trail.pop() else {
                    return Ok(self.finish(Progress::Exhausted));
                };
                trace!("Dead end at {current}, back to {prev}");
                self.current = prev;
            }
        }
        Ok(Progress::Searching)
    }

    fn finish(&mut self, progress: Progress) -> Progress {
        debug!(
            "Search {} after {} placements",
            match progress {
                Progress::Found => "reached the goal",
                _ => "exhausted",
            },
            self.placements,
        );
        self.done = Some(progress);
        progress
    }
}

/// Moves the agent from its initial position towards the goal, calling
/// `on_change` after every placement. Returns whether the goal was reached.
///
/// An error from `on_change` aborts the search and is returned as is; the grid
/// keeps whatever marks it had at that point.
pub fn solve<E>(
    grid: &mut Grid,
    mut on_change: impl FnMut(&Grid) -> Result<(), E>,
) -> Result<bool, E> {
    let mut solver = Solver::new(grid);
    loop {
        match solver.step(grid, &mut on_change)? {
            Progress::Searching => {}
            Progress::Found => return Ok(true),
            Progress::Exhausted => return Ok(false),
        }
    }
}
