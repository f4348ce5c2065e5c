use std::io;
use std::ops::{Index, IndexMut};

use thiserror::Error;

mod fmt;
mod parse;
pub mod solve;

pub use solve::{solve, Progress, Solver};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum GridError {
    #[error("Non-rectangular maze: row {row} has width {width}, expecting width {expected}")]
    NotRectangular {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("Illegal character {ch:?} at {pos}")]
    IllegalSymbol { ch: char, pos: Pos },
    #[error("Maze can only have one agent, found another at {0}")]
    MultipleAgents(Pos),
    #[error("Maze has no agent")]
    MissingAgent,
    #[error("Maze can only have one goal, found another at {0}")]
    MultipleGoals(Pos),
    #[error("Maze has no goal")]
    MissingGoal,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Agent,
    Path,
    Tried,
    Goal,
}

impl Cell {
    pub const ALL: [Self; 6] = [
        Self::Empty,
        Self::Wall,
        Self::Agent,
        Self::Path,
        Self::Tried,
        Self::Goal,
    ];

    /// Maps an input symbol to its cell. `Path` and `Tried` have no input symbol.
    pub fn from_symbol(ch: char) -> Option<Self> {
        Some(match ch {
            'o' => Self::Empty,
            'w' => Self::Wall,
            'r' => Self::Agent,
            'c' => Self::Goal,
            _ => return None,
        })
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Empty => Some('o'),
            Self::Wall => Some('w'),
            Self::Agent => Some('r'),
            Self::Goal => Some('c'),
            Self::Path | Self::Tried => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Wall => '\u{2588}',
            Self::Agent => 'r',
            Self::Path => '.',
            Self::Tried => 'x',
            Self::Goal => 'c',
        }
    }

    pub fn is_steppable(self) -> bool {
        matches!(self, Self::Empty | Self::Goal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Neighbors are always tried in this order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn reversed(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// A `(row, column)` coordinate. It may point outside of any grid; check
/// [`Pos::is_in`] before touching cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: isize,
    pub col: isize,
}

impl Pos {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn above(self) -> Self {
        Self::new(self.row - 1, self.col)
    }

    pub fn below(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    pub fn to_the_left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    pub fn to_the_right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    pub fn neighbor(self, dir: Direction) -> Self {
        match dir {
            Direction::North => self.above(),
            Direction::East => self.to_the_right(),
            Direction::South => self.below(),
            Direction::West => self.to_the_left(),
        }
    }

    pub fn is_at(self, other: Pos) -> bool {
        self == other
    }

    pub fn is_in(self, grid: &Grid) -> bool {
        grid.index_of(self).is_some()
    }

    /// In bounds and either never visited or the goal.
    pub fn can_be_moved_to(self, grid: &Grid) -> bool {
        grid.get(self).map_or(false, Cell::is_steppable)
    }

    pub fn has_goal(self, grid: &Grid) -> bool {
        grid.get(self) == Some(Cell::Goal)
    }

    /// Panics if out of bounds.
    pub fn contents(self, grid: &Grid) -> Cell {
        grid[self]
    }

    /// Panics if out of bounds.
    pub fn place(self, grid: &mut Grid, cell: Cell) {
        grid[self] = cell;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Box<[Cell]>,
    initial_agent: Pos,
    initial_goal: Pos,
}

impl Index<Pos> for Grid {
    type Output = Cell;
    fn index(&self, pos: Pos) -> &Self::Output {
        let idx = self.index_of(pos).expect("position out of bounds");
        &self.cells[idx]
    }
}
impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let idx = self.index_of(pos).expect("position out of bounds");
        &mut self.cells[idx]
    }
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn initial_agent(&self) -> Pos {
        self.initial_agent
    }

    pub fn initial_goal(&self) -> Pos {
        self.initial_goal
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            let pos = Pos::new((idx / width) as isize, (idx % width) as isize);
            (pos, cell)
        })
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        if self.height <= row || self.width <= col {
            return None;
        }
        Some(row * self.width + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_has_a_distinct_glyph() {
        let mut glyphs = Cell::ALL.map(Cell::glyph).to_vec();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Cell::ALL.len());
    }

    #[test]
    fn symbols_round_trip() {
        for cell in Cell::ALL {
            if let Some(ch) = cell.symbol() {
                assert_eq!(Cell::from_symbol(ch), Some(cell));
            }
        }
        assert_eq!(Cell::from_symbol('x'), None);
    }

    #[test]
    fn neighbors_are_inverses() {
        let p = Pos::new(3, 7);
        assert_eq!(p.above().below(), p);
        assert_eq!(p.below().above(), p);
        assert_eq!(p.to_the_left().to_the_right(), p);
        assert_eq!(p.to_the_right().to_the_left(), p);
        for dir in Direction::ALL {
            assert_eq!(p.neighbor(dir).neighbor(dir.reversed()), p);
        }
    }

    #[test]
    fn bounds() {
        let grid: Grid = "rwo oco".parse().unwrap();
        assert!(Pos::new(0, 0).is_in(&grid));
        assert!(Pos::new(1, 2).is_in(&grid));
        assert!(!Pos::new(-1, 0).is_in(&grid));
        assert!(!Pos::new(0, -1).is_in(&grid));
        assert!(!Pos::new(2, 0).is_in(&grid));
        assert!(!Pos::new(0, 3).is_in(&grid));
        assert_eq!(grid.get(Pos::new(0, 3)), None);
    }

    #[test]
    fn steppable_cells() {
        let mut grid: Grid = "rwo oco".parse().unwrap();
        // Agent, wall, goal, empty.
        assert!(!Pos::new(0, 0).can_be_moved_to(&grid));
        assert!(!Pos::new(0, 1).can_be_moved_to(&grid));
        assert!(Pos::new(1, 1).can_be_moved_to(&grid));
        assert!(Pos::new(1, 1).has_goal(&grid));
        assert!(Pos::new(0, 2).can_be_moved_to(&grid));

        Pos::new(0, 2).place(&mut grid, Cell::Path);
        assert!(!Pos::new(0, 2).can_be_moved_to(&grid));
        Pos::new(1, 0).place(&mut grid, Cell::Tried);
        assert!(!Pos::new(1, 0).can_be_moved_to(&grid));
        assert_eq!(Pos::new(1, 0).contents(&grid), Cell::Tried);

        for pos in [Pos::new(-1, 0), Pos::new(0, 3), Pos::new(2, 2)] {
            assert!(!pos.can_be_moved_to(&grid));
        }
    }

    #[test]
    fn cells_are_row_major() {
        let grid: Grid = "rw oc".parse().unwrap();
        let cells = grid.cells().collect::<Vec<_>>();
        assert_eq!(
            cells,
            [
                (Pos::new(0, 0), Cell::Agent),
                (Pos::new(0, 1), Cell::Wall),
                (Pos::new(1, 0), Cell::Empty),
                (Pos::new(1, 1), Cell::Goal),
            ]
        );
    }
}
