//! Incremental active-region tracking across contour levels.
//!
//! With a monotonic level list, the cells that can cross level `l + 1` are
//! confined to bands recorded while scanning level `l`: inside the above-level
//! bands when levels ascend, inside the below-level bands when they descend.
//! The tracker keeps two generations of per-row column ranges. The *old*
//! generation drives the current scan; the cell dispatcher reports band
//! boundaries into the *new* generation, which is promoted by [`ActiveRegions::swap`]
//! once the level is finished. On large spectra with hundreds of levels this
//! is what keeps later scans far below O(rows * cols).

/// Band boundary report for one visited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMark {
    /// Keep the row registered without opening or closing a range.
    Neither,
    /// The cell opens a band the next level must scan.
    Start,
    /// The cell closes the band; the range ends two columns past the cell.
    End,
}

/// Inclusive-start, exclusive-end run of columns within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColRange {
    pub start: usize,
    pub end: usize,
}

/// Range end for a band that has been opened but not yet closed.
const OPEN_END: usize = usize::MAX;

/// Per-row slice into the flat range list of a generation.
#[derive(Debug, Clone, Copy)]
struct RowSpan {
    row: usize,
    first: usize,
    len: usize,
}

/// One generation of ranges: rows of interest in ascending order, each with
/// its column ranges stored contiguously in `ranges`.
///
/// Rows are only ever appended in scan order, so flat storage suffices and
/// the buffers keep their capacity from level to level.
#[derive(Debug, Default)]
pub struct Generation {
    spans: Vec<RowSpan>,
    ranges: Vec<ColRange>,
}

impl Generation {
    fn clear(&mut self) {
        self.spans.clear();
        self.ranges.clear();
    }

    /// Iterate `(row, column ranges)` in ascending row order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[ColRange])> {
        self.spans
            .iter()
            .map(move |s| (s.row, &self.ranges[s.first..s.first + s.len]))
    }

    /// True when no rows are registered.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Record a band event for the cell at `(col, row)`.
    ///
    /// Rows arrive in ascending order; a new row entry is opened on first
    /// contact. A range is opened at column 0 regardless of the mark, so a
    /// row whose leading cells are uniform still gets scanned from its left
    /// edge. An `End` with no open range on the row is ignored; tracker-made
    /// ranges always open before they close.
    pub fn note(&mut self, col: usize, row: usize, mark: RangeMark) {
        let new_row = self.spans.last().map_or(true, |s| s.row != row);
        if new_row {
            self.spans.push(RowSpan {
                row,
                first: self.ranges.len(),
                len: 0,
            });
        }
        let Some(span) = self.spans.last_mut() else {
            return;
        };
        if col == 0 || mark == RangeMark::Start {
            self.ranges.push(ColRange {
                start: col,
                end: OPEN_END,
            });
            span.len += 1;
        }
        if mark == RangeMark::End && span.len > 0 {
            if let Some(last) = self.ranges.last_mut() {
                last.end = col + 2;
            }
        }
    }

    /// Snap a still-open trailing range on the current row to the grid edge.
    ///
    /// Called at the end of each scanned row.
    pub fn finalise_row(&mut self, cols: usize) {
        let Some(span) = self.spans.last() else {
            return;
        };
        if span.len == 0 {
            return;
        }
        if let Some(last) = self.ranges.last_mut() {
            if last.end == OPEN_END {
                last.end = cols;
            }
        }
    }
}

/// The old/new generation pair for one extraction call.
#[derive(Debug, Default)]
pub struct ActiveRegions {
    old: Generation,
    new: Generation,
}

impl ActiveRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the old generation with every cell row, full width.
    ///
    /// The first level has no prior information and scans everything.
    pub fn seed(&mut self, rows: usize, cols: usize) {
        self.old.clear();
        self.new.clear();
        if rows < 2 {
            return;
        }
        for r in 0..rows - 1 {
            self.old.spans.push(RowSpan {
                row: r,
                first: self.old.ranges.len(),
                len: 1,
            });
            self.old.ranges.push(ColRange {
                start: 0,
                end: cols,
            });
        }
    }

    /// Borrow the generations for one level scan: read the old, write the new.
    pub fn split(&mut self) -> (&Generation, &mut Generation) {
        (&self.old, &mut self.new)
    }

    /// Promote the new generation to old for the next level.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.old, &mut self.new);
        self.new.clear();
    }
}
