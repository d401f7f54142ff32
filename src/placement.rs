//! The placement engine: turns an ordered word list into a [`Layout`].
//!
//! The algorithm is greedy and first-fit, in three passes:
//!
//! 1. **Seed.** The first word goes `Across` with its first letter at `(0, 0)`.
//! 2. **Intersect.** Every later word, in input order, is tried against the words placed
//!    so far (in placement order). For each letter of an anchor word and each letter of
//!    the new word that match, the new word is laid crosswise through that letter. The
//!    first candidate whose letters agree with everything already on the grid wins.
//!    Words with no such candidate are set aside.
//! 3. **Overflow.** Set-aside words are laid `Across` on their own rows below the grid,
//!    one blank row apart, each at the leftmost free run of cells.
//!
//! There is no backtracking and no adjacency check: two parallel words may touch without
//! sharing a letter. Output depends only on the input order, so the same word list always
//! produces the same layout.
//!
//! # Example
//!
//! ```
//! use crossgrid::placement;
//! use crossgrid::grid::{Coord, Direction};
//!
//! let layout = placement::layout(&["cat", "tag"]).expect("non-empty input");
//! let tag = &layout.placed()[1];
//! assert_eq!(tag.direction, Direction::Down);
//! assert_eq!(tag.start, Coord::new(-1, 1));
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use log::{debug, trace};

use crate::grid::{BoundingBox, Coord, Direction, SparseGrid};
use crate::matrix::Matrix;

/// Blank rows left between the bottom of the grid and each overflow word.
const OVERFLOW_ROW_GAP: isize = 2;

/// How a word ended up on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    /// The first word, anchored at the origin.
    Seed,
    /// Crosses a previously placed word.
    Intersection,
    /// Found no crossing and was put on its own row below the grid.
    Overflow,
}

impl Display for PlacementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PlacementKind::Seed => write!(f, "seed"),
            PlacementKind::Intersection => write!(f, "intersection"),
            PlacementKind::Overflow => write!(f, "overflow"),
        }
    }
}

/// One committed word.
///
/// The record stores its start coordinate rather than its clue set: a later word may
/// start on the same cell, and [`Layout::clues_for`] always reports the current set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub start: Coord,
    pub direction: Direction,
    /// Input-order index of this word.
    pub clue: usize,
    pub kind: PlacementKind,
}

impl PlacedWord {
    /// Coordinates and letters of this word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(|(i, letter)| (self.direction.step(self.start, i), letter))
    }
}

/// `#1 "tag" down from (-1, 1), intersection`
impl Display for PlacedWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {:?} {} from {}, {}",
            self.clue, self.word, self.direction, self.start, self.kind
        )
    }
}

/// Clue numbers anchored at each starting cell, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueMap {
    by_start: HashMap<Coord, Vec<usize>>,
}

impl ClueMap {
    /// Record `clue` as starting at `coord`. Adding the same number twice is a no-op.
    fn add(&mut self, coord: Coord, clue: usize) {
        let clues = self.by_start.entry(coord).or_default();
        if !clues.contains(&clue) {
            clues.push(clue);
        }
    }

    /// Clue numbers starting at `coord`, or `None` if no word starts there.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&[usize]> {
        self.by_start.get(&coord).map(Vec::as_slice)
    }
}

/// A word that found no crossing during the intersection pass.
#[derive(Debug, Clone)]
struct UnplacedWord<'w> {
    word: &'w str,
    clue: usize,
}

/// Mutable state of a single generation run. Never outlives the call that created it.
struct PlacementState<'w> {
    words: Vec<&'w str>,
    placed: Vec<PlacedWord>,
    grid: SparseGrid,
    clues: ClueMap,
    unplaced: Vec<UnplacedWord<'w>>,
}

impl<'w> PlacementState<'w> {
    fn new(words: Vec<&'w str>) -> Self {
        Self {
            words,
            placed: Vec::new(),
            grid: SparseGrid::new(),
            clues: ClueMap::default(),
            unplaced: Vec::new(),
        }
    }

    fn commit(
        &mut self,
        word: &str,
        start: Coord,
        direction: Direction,
        clue: usize,
        kind: PlacementKind,
    ) {
        self.clues.add(start, clue);
        self.grid.write_word(word, start, direction);
        self.placed.push(PlacedWord {
            word: word.to_string(),
            start,
            direction,
            clue,
            kind,
        });
    }

    fn place_first_word(&mut self) {
        let word = self.words[0];
        trace!("seeding grid with {word:?} at {}", Coord::ORIGIN);
        self.commit(word, Coord::ORIGIN, Direction::Across, 0, PlacementKind::Seed);
    }

    /// First valid crossing for `word`, searching placed words in placement order, then
    /// anchor letters, then letters of `word`.
    fn find_placement(&self, word: &str) -> Option<(Coord, Direction)> {
        for anchor in &self.placed {
            for (anchor_idx, anchor_letter) in anchor.word.chars().enumerate() {
                let crossing_cell = anchor.direction.step(anchor.start, anchor_idx);
                for (word_idx, letter) in word.chars().enumerate() {
                    if letter != anchor_letter {
                        continue;
                    }
                    // string indices never exceed isize::MAX
                    let back = word_idx as isize;
                    let direction = anchor.direction.crossing();
                    let start = match direction {
                        Direction::Down => {
                            Coord::new(crossing_cell.row - back, crossing_cell.col)
                        }
                        Direction::Across => {
                            Coord::new(crossing_cell.row, crossing_cell.col - back)
                        }
                    };
                    if self.grid.fits(word, start, direction) {
                        return Some((start, direction));
                    }
                    trace!("{word:?} {direction} at {start} conflicts with the grid");
                }
            }
        }
        None
    }

    /// Try to cross `word` with the grid. Returns false if no candidate fits.
    fn place_word(&mut self, word: &str, clue: usize) -> bool {
        match self.find_placement(word) {
            Some((start, direction)) => {
                debug!("placed #{clue} {word:?} {direction} at {start}");
                self.commit(word, start, direction, clue, PlacementKind::Intersection);
                true
            }
            None => false,
        }
    }

    fn place_remaining_words(&mut self) {
        for clue in 1..self.words.len() {
            let word = self.words[clue];
            if !self.place_word(word, clue) {
                debug!("no crossing for #{clue} {word:?}; deferring to overflow");
                self.unplaced.push(UnplacedWord { word, clue });
            }
        }
    }

    /// Lay every deferred word on its own row below the grid.
    fn place_overflow_words(&mut self) {
        if self.unplaced.is_empty() {
            return;
        }
        // an all-empty grid (blank seed word) still counts the seed row as used
        let mut row = self.grid.max_row().unwrap_or(0) + OVERFLOW_ROW_GAP;
        for UnplacedWord { word, clue } in std::mem::take(&mut self.unplaced) {
            let len = word.chars().count();
            let mut start = Coord::new(row, 0);
            while !self.grid.is_run_free(start, len, Direction::Across) {
                start.col += 1;
            }
            debug!("placed #{clue} {word:?} on overflow row at {start}");
            self.commit(word, start, Direction::Across, clue, PlacementKind::Overflow);
            row += OVERFLOW_ROW_GAP;
        }
    }

    fn into_layout(self) -> Layout {
        Layout {
            placed: self.placed,
            grid: self.grid,
            clues: self.clues,
        }
    }
}

/// The finished placement: every input word exactly once, plus the grid they fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    placed: Vec<PlacedWord>,
    grid: SparseGrid,
    clues: ClueMap,
}

impl Layout {
    /// Placement records in the order they were committed: the seed, then crossings in
    /// input order, then overflow words.
    #[must_use]
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Placement record for the word with input index `clue`.
    #[must_use]
    pub fn word_for_clue(&self, clue: usize) -> Option<&PlacedWord> {
        self.placed.iter().find(|p| p.clue == clue)
    }

    /// Current clue set at the start cell of `placed`.
    #[must_use]
    pub fn clues_for(&self, placed: &PlacedWord) -> &[usize] {
        self.clues.get(placed.start).unwrap_or_default()
    }

    #[must_use]
    pub fn clues_at(&self, coord: Coord) -> Option<&[usize]> {
        self.clues.get(coord)
    }

    #[must_use]
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.grid.get(coord)
    }

    #[must_use]
    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    /// Number of words that found no crossing and went to overflow rows.
    #[must_use]
    pub fn overflow_count(&self) -> usize {
        self.placed
            .iter()
            .filter(|p| p.kind == PlacementKind::Overflow)
            .count()
    }

    /// Bounding box of all letters, `None` if nothing was written (only blank words).
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.grid.bounds()
    }

    #[must_use]
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_layout(self)
    }
}

/// Place `words` and return the resulting layout, or `None` for an empty list.
///
/// Each call builds its own state; nothing is shared between calls.
pub fn layout<S: AsRef<str>>(words: &[S]) -> Option<Layout> {
    if words.is_empty() {
        return None;
    }
    let mut state = PlacementState::new(words.iter().map(AsRef::as_ref).collect());
    state.place_first_word();
    state.place_remaining_words();
    state.place_overflow_words();
    Some(state.into_layout())
}

/// Place `words` and render the dense cell matrix, or `None` for an empty list.
///
/// ```
/// let matrix = crossgrid::generate(&["cat"]).unwrap();
/// assert_eq!(matrix.to_string(), "cat");
/// assert!(crossgrid::generate::<&str>(&[]).is_none());
/// ```
pub fn generate<S: AsRef<str>>(words: &[S]) -> Option<Matrix> {
    layout(words).map(|l| l.to_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_summary(layout: &Layout) -> Vec<(String, Coord, Direction, usize)> {
        layout
            .placed()
            .iter()
            .map(|p| (p.word.clone(), p.start, p.direction, p.clue))
            .collect()
    }

    #[test]
    fn test_placed_word_display() {
        let l = layout(&["cat", "tag", "xyz"]).unwrap();
        let lines: Vec<String> = l.placed().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "#0 \"cat\" across from (0, 0), seed",
                "#1 \"tag\" down from (-1, 1), intersection",
                "#2 \"xyz\" across from (3, 0), overflow",
            ]
        );
    }

    #[test]
    fn test_empty_input_has_no_layout() {
        let words: Vec<String> = vec![];
        assert!(layout(&words).is_none());
        assert!(generate(&words).is_none());
    }

    #[test]
    fn test_seed_word_at_origin() {
        let l = layout(&["cat"]).unwrap();
        assert_eq!(
            placed_summary(&l),
            vec![("cat".to_string(), Coord::ORIGIN, Direction::Across, 0)]
        );
        assert_eq!(l.placed()[0].kind, PlacementKind::Seed);
        assert_eq!(l.clues_at(Coord::ORIGIN), Some(&[0][..]));
        assert_eq!(l.letter_at(Coord::new(0, 2)), Some('t'));
    }

    #[test]
    fn test_crossing_through_matching_letter() {
        let l = layout(&["cat", "tag"]).unwrap();
        // the 'a' of "cat" is tried before its 't', so "tag" hangs down through it
        assert_eq!(
            placed_summary(&l)[1],
            ("tag".to_string(), Coord::new(-1, 1), Direction::Down, 1)
        );
        assert_eq!(l.placed()[1].kind, PlacementKind::Intersection);
        assert_eq!(l.letter_at(Coord::new(0, 1)), Some('a'));
        assert_eq!(l.letter_at(Coord::new(1, 1)), Some('g'));
    }

    #[test]
    fn test_first_fit_uses_earliest_anchor_letter() {
        // "tact" could cross "cat" at 'c' or 't'; the anchor's 'c' comes first,
        // and within it the first matching letter of "tact" is index 2
        let l = layout(&["cat", "tact"]).unwrap();
        assert_eq!(
            placed_summary(&l)[1],
            ("tact".to_string(), Coord::new(-2, 0), Direction::Down, 1)
        );
    }

    #[test]
    fn test_later_word_can_anchor_on_down_word() {
        // "go" shares no letter with "cat" and must cross "tag" at its 'g', going across
        let l = layout(&["cat", "tag", "go"]).unwrap();
        assert_eq!(
            placed_summary(&l)[2],
            ("go".to_string(), Coord::new(1, 1), Direction::Across, 2)
        );
    }

    #[test]
    fn test_conflicting_candidate_is_skipped() {
        // "react" through the 'c' of "cat" would put its 'e' on the 't' of "tact",
        // so the search moves on to the 'a' of "cat"
        let l = layout(&["cat", "tact", "react"]).unwrap();
        assert_eq!(l.placed()[1].start, Coord::new(-2, 0));
        assert_eq!(
            placed_summary(&l)[2],
            ("react".to_string(), Coord::new(-2, 1), Direction::Down, 2)
        );
        for p in l.placed() {
            for (coord, letter) in p.cells() {
                assert_eq!(l.letter_at(coord), Some(letter), "{} at {coord}", p.word);
            }
        }
    }

    #[test]
    fn test_no_crossing_goes_to_overflow() {
        let l = layout(&["cat", "dog"]).unwrap();
        let dog = &l.placed()[1];
        assert_eq!(dog.kind, PlacementKind::Overflow);
        assert_eq!(dog.start, Coord::new(2, 0));
        assert_eq!(dog.direction, Direction::Across);
        assert_eq!(dog.clue, 1);
        assert_eq!(l.overflow_count(), 1);
    }

    #[test]
    fn test_overflow_rows_are_two_apart_and_keep_input_order() {
        let l = layout(&["cat", "dog", "tag", "emu"]).unwrap();
        // "tag" crosses; "dog" and "emu" overflow below the bottom of "tag" (row 1)
        let overflow: Vec<_> = l
            .placed()
            .iter()
            .filter(|p| p.kind == PlacementKind::Overflow)
            .map(|p| (p.word.as_str(), p.start, p.clue))
            .collect();
        assert_eq!(
            overflow,
            vec![("dog", Coord::new(3, 0), 1), ("emu", Coord::new(5, 0), 3)]
        );
    }

    #[test]
    fn test_overflow_does_not_cross_later_words() {
        // "go" could cross "dog", but overflow words are never used as anchors
        let l = layout(&["cat", "dog", "go"]).unwrap();
        let go = l.word_for_clue(2).unwrap();
        assert_eq!(go.kind, PlacementKind::Overflow);
        assert_eq!(go.start, Coord::new(4, 0));
    }

    #[test]
    fn test_shared_start_cell_accumulates_clues() {
        // "cow" crosses "cat" at its first letter, so both start at the origin
        let l = layout(&["cat", "cow"]).unwrap();
        assert_eq!(l.placed()[1].start, Coord::ORIGIN);
        assert_eq!(l.clues_at(Coord::ORIGIN), Some(&[0, 1][..]));
        // the seed record sees the clue added after it was created
        assert_eq!(l.clues_for(&l.placed()[0]), &[0, 1]);
    }

    #[test]
    fn test_clue_map_deduplicates() {
        let mut clues = ClueMap::default();
        clues.add(Coord::ORIGIN, 3);
        clues.add(Coord::ORIGIN, 3);
        clues.add(Coord::ORIGIN, 1);
        assert_eq!(clues.get(Coord::ORIGIN), Some(&[3, 1][..]));
        assert_eq!(clues.get(Coord::new(1, 1)), None);
    }

    #[test]
    fn test_empty_word_goes_to_overflow_without_letters() {
        let l = layout(&["cat", ""]).unwrap();
        let blank = l.word_for_clue(1).unwrap();
        assert_eq!(blank.kind, PlacementKind::Overflow);
        assert_eq!(blank.start, Coord::new(2, 0));
        assert_eq!(l.grid().len(), 3);
    }

    #[test]
    fn test_blank_seed_word() {
        let l = layout(&["", "cat"]).unwrap();
        assert_eq!(l.word_for_clue(1).unwrap().start, Coord::new(2, 0));
        assert_eq!(l.bounds().unwrap().min, Coord::new(2, 0));
    }

    #[test]
    fn test_every_word_placed_once() {
        let words = ["react", "javascript", "algoritmo", "crossword", "node", "express", "xyz"];
        let l = layout(&words).unwrap();
        assert_eq!(l.placed().len(), words.len());
        for (clue, word) in words.iter().enumerate() {
            let matching: Vec<_> = l.placed().iter().filter(|p| p.clue == clue).collect();
            assert_eq!(matching.len(), 1);
            assert_eq!(matching[0].word, *word);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let words = ["react", "javascript", "algoritmo", "crossword", "node", "express"];
        assert_eq!(layout(&words), layout(&words));
    }
}
