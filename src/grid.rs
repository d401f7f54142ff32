//! Sparse grid primitives shared by the placement engine and the matrix renderer.
//!
//! Coordinates are signed: the first word is anchored at `(0, 0)` and a word placed
//! `Down` through one of its letters may start above it, so rows (and, for `Across`
//! words hanging off a `Down` word, columns) can go negative during placement. The
//! renderer re-bases everything to the bounding box at the end.

use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A grid position, row first.
///
/// Used directly as the hash key of the sparse grid and of the clue map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The direction a word must take to cross a word placed in `self`.
    #[must_use]
    pub const fn crossing(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Coordinate of the `index`-th letter of a word starting at `start`.
    #[must_use]
    pub const fn step(self, start: Coord, index: usize) -> Coord {
        // string indices never exceed isize::MAX
        let offset = index as isize;
        match self {
            Direction::Across => Coord::new(start.row, start.col + offset),
            Direction::Down => Coord::new(start.row + offset, start.col),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Inclusive rectangle covering every occupied coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Coord,
    pub max: Coord,
}

impl BoundingBox {
    #[must_use]
    pub fn height(&self) -> usize {
        self.max.row.abs_diff(self.min.row) + 1
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.max.col.abs_diff(self.min.col) + 1
    }

    /// Position of `coord` relative to the top-left corner, as `(row, col)` indices.
    ///
    /// Returns `None` for coordinates outside the box.
    #[must_use]
    pub fn rebase(&self, coord: Coord) -> Option<(usize, usize)> {
        if coord.row < self.min.row
            || coord.row > self.max.row
            || coord.col < self.min.col
            || coord.col > self.max.col
        {
            return None;
        }
        Some((coord.row.abs_diff(self.min.row), coord.col.abs_diff(self.min.col)))
    }

    fn include(&mut self, coord: Coord) {
        self.min.row = self.min.row.min(coord.row);
        self.min.col = self.min.col.min(coord.col);
        self.max.row = self.max.row.max(coord.row);
        self.max.col = self.max.col.max(coord.col);
    }
}

/// Sparse mapping from coordinate to the letter occupying it.
///
/// Once a coordinate holds a letter it keeps that letter: [`SparseGrid::write_word`]
/// is only ever called after the placement has been checked against existing letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashMap<Coord, char>,
}

impl SparseGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.cells.get(&coord).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if every letter of `word` either lands on an empty cell or on the same letter.
    #[must_use]
    pub fn fits(&self, word: &str, start: Coord, direction: Direction) -> bool {
        word.chars().enumerate().all(|(i, letter)| {
            self.get(direction.step(start, i))
                .is_none_or(|existing| existing == letter)
        })
    }

    /// True if none of the `len` cells from `start` in `direction` is occupied.
    #[must_use]
    pub fn is_run_free(&self, start: Coord, len: usize, direction: Direction) -> bool {
        (0..len).all(|i| !self.is_occupied(direction.step(start, i)))
    }

    pub(crate) fn write_word(&mut self, word: &str, start: Coord, direction: Direction) {
        for (i, letter) in word.chars().enumerate() {
            let coord = direction.step(start, i);
            let previous = self.cells.insert(coord, letter);
            debug_assert!(
                previous.is_none_or(|p| p == letter),
                "letter at {coord} changed from {previous:?} to {letter:?}"
            );
        }
    }

    /// Largest row index holding a letter.
    #[must_use]
    pub fn max_row(&self) -> Option<isize> {
        self.cells.keys().map(|c| c.row).max()
    }

    /// Bounding box of all occupied cells, or `None` for an empty grid.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut coords = self.cells.keys();
        let first = *coords.next()?;
        let mut bbox = BoundingBox { min: first, max: first };
        for &coord in coords {
            bbox.include(coord);
        }
        Some(bbox)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells.iter().map(|(&coord, &letter)| (coord, letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_across_and_down() {
        let start = Coord::new(2, -1);
        assert_eq!(Direction::Across.step(start, 3), Coord::new(2, 2));
        assert_eq!(Direction::Down.step(start, 3), Coord::new(5, -1));
        assert_eq!(Direction::Down.step(start, 0), start);
    }

    #[test]
    fn test_crossing_direction() {
        assert_eq!(Direction::Across.crossing(), Direction::Down);
        assert_eq!(Direction::Down.crossing(), Direction::Across);
    }

    #[test]
    fn test_fits_allows_matching_overlap() {
        let mut grid = SparseGrid::new();
        grid.write_word("cat", Coord::ORIGIN, Direction::Across);

        // "tag" down through the 't' of "cat"
        assert!(grid.fits("tag", Coord::new(0, 2), Direction::Down));
        // "dog" down through the 'c' would put 'd' on 'c'
        assert!(!grid.fits("dog", Coord::new(0, 0), Direction::Down));
        // entirely empty cells are always fine
        assert!(grid.fits("dog", Coord::new(5, 5), Direction::Across));
    }

    #[test]
    fn test_fits_rejects_mismatch_past_first_letter() {
        let mut grid = SparseGrid::new();
        grid.write_word("cat", Coord::ORIGIN, Direction::Across);
        // 'c' matches, then 'o' would land on the 'a'
        assert!(!grid.fits("cot", Coord::ORIGIN, Direction::Across));
        assert!(grid.fits("cats", Coord::ORIGIN, Direction::Across));
    }

    #[test]
    fn test_coord_is_a_map_key() {
        let mut grid = SparseGrid::new();
        grid.write_word("ab", Coord::new(-3, 7), Direction::Down);
        assert_eq!(grid.get(Coord::new(-2, 7)), Some('b'));
        assert_eq!(Coord::new(-3, 7), Coord { row: -3, col: 7 });
        assert_ne!(Coord::new(7, -3), Coord::new(-3, 7));
    }

    #[test]
    fn test_fits_ignores_adjacency() {
        let mut grid = SparseGrid::new();
        grid.write_word("cat", Coord::ORIGIN, Direction::Across);
        // parallel word directly underneath touches every letter but shares none
        assert!(grid.fits("dog", Coord::new(1, 0), Direction::Across));
    }

    #[test]
    fn test_run_free() {
        let mut grid = SparseGrid::new();
        grid.write_word("ab", Coord::new(4, 1), Direction::Across);
        assert!(!grid.is_run_free(Coord::new(4, 0), 2, Direction::Across));
        assert!(grid.is_run_free(Coord::new(4, 3), 5, Direction::Across));
        assert!(grid.is_run_free(Coord::new(4, 1), 0, Direction::Across));
    }

    #[test]
    fn test_bounds_and_rebase() {
        let mut grid = SparseGrid::new();
        assert_eq!(grid.bounds(), None);
        assert_eq!(grid.max_row(), None);

        grid.write_word("cat", Coord::ORIGIN, Direction::Across);
        grid.write_word("tan", Coord::new(-1, 1), Direction::Down);

        let bbox = grid.bounds().unwrap();
        assert_eq!(bbox.min, Coord::new(-1, 0));
        assert_eq!(bbox.max, Coord::new(1, 2));
        assert_eq!(bbox.height(), 3);
        assert_eq!(bbox.width(), 3);
        assert_eq!(bbox.rebase(Coord::new(-1, 1)), Some((0, 1)));
        assert_eq!(bbox.rebase(Coord::new(2, 1)), None);
        assert_eq!(grid.max_row(), Some(1));
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Across).unwrap(), "\"across\"");
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    }
}
