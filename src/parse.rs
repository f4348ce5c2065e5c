use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::{Cell, Grid, GridError, LoadError, Pos};

impl FromStr for Grid {
    type Err = GridError;

    /// Rows are separated by any whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.split_whitespace())
    }
}

impl Grid {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Every whitespace-separated token of every line is a row.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LoadError> {
        let mut rows = Vec::new();
        for line in reader.lines() {
            rows.extend(line?.split_whitespace().map(str::to_owned));
        }
        Ok(Self::from_rows(&rows)?)
    }

    /// Fails on the first violation found, scanning rows top to bottom.
    pub fn from_rows<I>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut agent = None;
        let mut goal = None;
        let mut width = None;
        let mut height = 0;

        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let row_width = row.chars().count();
            let expected = *width.get_or_insert(row_width);
            if row_width != expected {
                return Err(GridError::NotRectangular {
                    row: i,
                    width: row_width,
                    expected,
                });
            }

            for (j, ch) in row.chars().enumerate() {
                let pos = Pos::new(i as _, j as _);
                let cell = Cell::from_symbol(ch).ok_or(GridError::IllegalSymbol { ch, pos })?;
                match cell {
                    Cell::Agent if agent.is_some() => return Err(GridError::MultipleAgents(pos)),
                    Cell::Agent => agent = Some(pos),
                    Cell::Goal if goal.is_some() => return Err(GridError::MultipleGoals(pos)),
                    Cell::Goal => goal = Some(pos),
                    _ => {}
                }
                cells.push(cell);
            }
            height += 1;
        }

        let grid = Grid {
            height,
            width: width.unwrap_or(0),
            cells: cells.into(),
            initial_agent: agent.ok_or(GridError::MissingAgent)?,
            initial_goal: goal.ok_or(GridError::MissingGoal)?,
        };
        debug!(
            "Built {}x{} maze, agent at {}, goal at {}",
            grid.height, grid.width, grid.initial_agent, grid.initial_goal,
        );
        Ok(grid)
    }
}
