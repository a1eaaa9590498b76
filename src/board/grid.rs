//! Puzzle board: a fixed-size grid of cells plus the mirror budget

use crate::board::cell::Cell;
use crate::core::types::Coord;

/// Parsed puzzle board
///
/// `rows` and `cols` are the two numbers of the header line, in that order,
/// and `mirror_budget` is the number on the second line. Every coordinate in
/// `[0, rows) x [0, cols)` holds exactly one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    mirror_budget: i64,
    cells: Vec<Cell>,
}

impl Board {
    /// Board of blank cells
    #[cfg(test)]
    pub fn new(rows: usize, cols: usize, mirror_budget: i64) -> Self {
        Self {
            rows,
            cols,
            mirror_budget,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    /// Build a board from row-major cells. `None` if the cell count does not
    /// match the dimensions.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        mirror_budget: i64,
        cells: Vec<Cell>,
    ) -> Option<Self> {
        if cells.len() != rows * cols {
            return None;
        }
        Some(Self {
            rows,
            cols,
            mirror_budget,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Declared mirror budget. May be negative, in which case no solution
    /// fits within it.
    pub fn mirror_budget(&self) -> i64 {
        self.mirror_budget
    }

    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    #[inline]
    pub fn get(&self, at: Coord) -> Option<Cell> {
        if self.contains(at) {
            Some(self.cells[at.row * self.cols + at.col])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, at: Coord) -> Option<&mut Cell> {
        if self.contains(at) {
            Some(&mut self.cells[at.row * self.cols + at.col])
        } else {
            None
        }
    }

    /// Overwrite a cell; out-of-range coordinates are ignored
    #[cfg(test)]
    pub fn set(&mut self, at: Coord, cell: Cell) {
        if let Some(slot) = self.get_mut(at) {
            *slot = cell;
        }
    }

    /// All cells in row-major order with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / cols, i % cols), *cell))
    }

    pub fn count(&self, pred: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|c| pred(**c)).count()
    }

    pub fn mirror_count(&self) -> usize {
        self.count(Cell::is_mirror)
    }

    pub fn crystal_count(&self) -> usize {
        self.count(|c| c == Cell::Crystal)
    }
}

/// Writes the board back in the exact text format it is loaded from
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        writeln!(f, "{}", self.mirror_budget)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
