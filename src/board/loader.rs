//! Load puzzle boards from their text description
//!
//! Problem and solution files share one layout:
//!
//! ```text
//! <rows> <cols>
//! <mirror budget>
//! <row 0, at least cols characters>
//! ...
//! <row rows-1>
//! ```
//!
//! Rows are read line by line rather than token by token because spaces are
//! blank cells. A trailing line break is stripped and never counts as a cell,
//! so a row must carry `cols` characters of its own. Characters past `cols`
//! are ignored, as is anything after the last row. Symbols outside the
//! alphabet load as [`Cell::Other`] and are left for verification to judge.

use crate::board::cell::Cell;
use crate::board::grid::Board;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a board
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The input is empty
    #[error("missing header line")]
    MissingHeader,
    /// The header is not exactly two non-negative integers
    #[error("header must be two integers, got {0:?}")]
    BadHeader(String),
    /// Either dimension is zero
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },
    /// The budget line is absent or not an integer
    #[error("budget line must be one integer, got {0:?}")]
    BadBudget(Option<String>),
    /// The input ended before every row was read
    #[error("expected {expected} rows, found {found}")]
    MissingRow { expected: usize, found: usize },
    /// A row line is shorter than the declared column count
    #[error("row {row} has {len} characters, expected at least {expected}")]
    ShortRow { row: usize, len: usize, expected: usize },
}

/// Parser for the board text format
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardLoader;

impl BoardLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a board from a type implementing `BufRead`
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Board, LoadError> {
        let mut lines = rdr.lines();

        let header = lines.next().ok_or(LoadError::MissingHeader)??;
        let (rows, cols) = parse_header(&header)?;

        let budget_line = lines.next().transpose()?;
        let mirror_budget = match budget_line.as_deref().map(str::trim) {
            Some(text) => text
                .parse::<i64>()
                .map_err(|_| LoadError::BadBudget(Some(text.to_string())))?,
            None => return Err(LoadError::BadBudget(None)),
        };

        // Header sizes are untrusted; grow as rows actually arrive
        let mut cells = Vec::new();
        for row in 0..rows {
            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    return Err(LoadError::MissingRow {
                        expected: rows,
                        found: row,
                    })
                }
            };
            parse_row(&line, row, cols, &mut cells)?;
        }

        tracing::debug!(rows, cols, mirror_budget, "loaded board");

        let found = cells.len() / cols;
        Board::from_cells(rows, cols, mirror_budget, cells).ok_or(LoadError::MissingRow {
            expected: rows,
            found,
        })
    }

    /// Load a board from a generic reader
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Board, LoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Load a board from a string slice
    pub fn from_str(&self, s: &str) -> Result<Board, LoadError> {
        self.from_bufread(s.as_bytes())
    }

    /// Load a board from a file on disk
    pub fn from_file(&self, path: &Path) -> Result<Board, LoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), LoadError> {
    let bad = || LoadError::BadHeader(line.to_string());
    let mut tokens = line.split_whitespace();
    let (Some(rows), Some(cols), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(bad());
    };
    let rows: usize = rows.parse().map_err(|_| bad())?;
    let cols: usize = cols.parse().map_err(|_| bad())?;
    if rows == 0 || cols == 0 {
        return Err(LoadError::ZeroDimension { rows, cols });
    }
    Ok((rows, cols))
}

fn parse_row(line: &str, row: usize, cols: usize, out: &mut Vec<Cell>) -> Result<(), LoadError> {
    let mut len = 0;
    for symbol in line.chars().take(cols) {
        out.push(Cell::from_symbol(symbol));
        len += 1;
    }
    if len < cols {
        return Err(LoadError::ShortRow {
            row,
            len,
            expected: cols,
        });
    }
    Ok(())
}
