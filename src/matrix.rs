//! Dense cell matrix produced from a [`Layout`].
//!
//! The matrix covers exactly the bounding box of the occupied cells and is re-based so
//! that `(0, 0)` is its top-left corner. It serializes to the shape the browser UI reads:
//!
//! ```json
//! [[{"letter":"c","clue":[0,1]},{"letter":"a","clue":null}], ...]
//! ```
//!
//! with `clue` being `null`, a bare number (one word starts here) or an array (two or more).

use std::fmt;
use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::placement::Layout;

/// Letter stored in cells that no word passes through.
pub const BLANK: char = ' ';

/// What [`Display`] prints for blank cells.
const BLANK_DISPLAY: char = '.';

/// Clue numbers of the word(s) starting at a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Clue {
    Single(usize),
    Multiple(Vec<usize>),
}

impl Clue {
    /// `Single` for one number, `Multiple` otherwise; `None` for an empty set.
    #[must_use]
    pub fn from_numbers(numbers: &[usize]) -> Option<Clue> {
        match numbers {
            [] => None,
            [n] => Some(Clue::Single(*n)),
            many => Some(Clue::Multiple(many.to_vec())),
        }
    }

    /// The clue numbers in the order they were assigned.
    #[must_use]
    pub fn numbers(&self) -> &[usize] {
        match self {
            Clue::Single(n) => std::slice::from_ref(n),
            Clue::Multiple(ns) => ns,
        }
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.numbers().iter().map(ToString::to_string).collect();
        write!(f, "{}", joined.join(","))
    }
}

/// One position of the output grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The letter, or [`BLANK`] for a filler block.
    pub letter: char,
    pub clue: Option<Clue>,
}

impl Cell {
    #[must_use]
    pub const fn blank() -> Self {
        Self { letter: BLANK, clue: None }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.letter == BLANK && self.clue.is_none()
    }
}

/// Row-major, rectangular grid of [`Cell`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<Cell>>,
}

impl Matrix {
    /// Render `layout` into a dense matrix over its bounding box.
    ///
    /// A layout whose words contain no letters at all yields an empty matrix.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let Some(bbox) = layout.bounds() else {
            return Self::default();
        };
        let mut rows = vec![vec![Cell::blank(); bbox.width()]; bbox.height()];
        for (coord, letter) in layout.grid().iter() {
            // every occupied coordinate lies inside its own bounding box
            let Some((r, c)) = bbox.rebase(coord) else {
                continue;
            };
            rows[r][c] = Cell {
                letter,
                clue: layout.clues_at(coord).and_then(Clue::from_numbers),
            };
        }
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// All cells with their `(row, col)` position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, cell)| ((r, c), cell)))
    }

    /// Annotated view: clue cells print as `numbers:letter`, others as the bare letter,
    /// columns separated by tabs.
    #[must_use]
    pub fn render_with_clues(&self) -> String {
        let mut out = String::new();
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            let rendered: Vec<String> = row
                .iter()
                .map(|cell| match &cell.clue {
                    Some(clue) => format!("{clue}:{}", display_letter(cell)),
                    None => display_letter(cell).to_string(),
                })
                .collect();
            out.push_str(&rendered.join("\t"));
        }
        out
    }
}

fn display_letter(cell: &Cell) -> char {
    if cell.letter == BLANK {
        BLANK_DISPLAY
    } else {
        cell.letter
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(display_letter(cell))?;
            }
        }
        Ok(())
    }
}
