//! Marching-squares cell dispatch over the active ranges of one level.
//!
//! Each 2x2 cell is classified by a pair of 2-bit column states: for the left
//! and right sample columns, bit 0 is set when the upper-row sample exceeds
//! the level and bit 1 when the lower-row sample does. The 4x4 state pairs
//! give the classic 16 marching-squares cases: two empty, twelve single-edge
//! and two saddles (resolved by the cell-centre mean).
//!
//! Vertices are pre-linked as they are created so chains assemble without a
//! matching pass. Two pieces of scratch make that possible while scanning a
//! row left to right:
//!
//! - `v_row[c]`: the vertex on the horizontal edge below the cell at column
//!   `c`, written now and consumed when the next row reaches that column;
//! - `v_col`: the vertex on the right edge of the previous cell, consumed by
//!   the current cell as its left-edge vertex.
//!
//! The scan also reports band boundaries into the new region generation; the
//! side that stays tracked depends on the case geometry and on whether the
//! level list ascends or descends.

use crate::arena::{VertexArena, VertexId};
use crate::error::Result;
use crate::field::SpectrumField;
use crate::region::{Generation, RangeMark};

/// Scan one level over the old generation's ranges.
///
/// Fills `arena` with pre-linked vertices and records the next level's bands
/// into `new` when `more_levels` is set. `v_row` must hold `cols - 1` slots;
/// it is reset here.
pub fn scan_level(
    field: &SpectrumField<'_>,
    level: f32,
    ascending: bool,
    more_levels: bool,
    arena: &mut VertexArena,
    old: &Generation,
    new: &mut Generation,
    v_row: &mut [Option<VertexId>],
) -> Result<()> {
    let rows = field.rows();
    let cols = field.cols();
    if old.is_empty() || rows < 2 || cols < 2 {
        return Ok(());
    }

    v_row.fill(None);

    let mut cells = CellState {
        field,
        level,
        ascending,
        more_levels,
        arena,
        new,
        v_row,
        v_col: None,
    };

    // Crossings along the very first sample row have no cell above to produce
    // them, so they are seeded here before the cell scan.
    if let Some((row, ranges)) = old.rows().next() {
        if row == 0 {
            for range in ranges {
                cells.seed_first_row(range.start, range.end)?;
            }
        }
    }

    for (row, ranges) in old.rows() {
        for range in ranges {
            cells.scan_range(row, range.start, range.end)?;
        }
        cells.new.finalise_row(cols);
    }

    Ok(())
}

struct CellState<'a, 'f> {
    field: &'a SpectrumField<'f>,
    level: f32,
    ascending: bool,
    more_levels: bool,
    arena: &'a mut VertexArena,
    new: &'a mut Generation,
    v_row: &'a mut [Option<VertexId>],
    v_col: Option<VertexId>,
}

impl CellState<'_, '_> {
    /// Create vertices for level crossings along row 0 inside `[start, end)`.
    fn seed_first_row(&mut self, start: usize, end: usize) -> Result<()> {
        for c in start..end.saturating_sub(1) {
            let a = self.field.get(0, c);
            let b = self.field.get(0, c + 1);
            if (a > self.level) != (b > self.level) {
                self.v_row[c] = Some(self.horizontal_edge_vertex(a, b, c, 0)?);
            }
        }
        Ok(())
    }

    /// Process the cells of one column range on cell row `row`.
    fn scan_range(&mut self, row: usize, start: usize, end: usize) -> Result<()> {
        let mut d_old0 = self.field.get(row, start);
        let mut d_new0 = self.field.get(row + 1, start);
        let mut left = self.column_state(d_old0, d_new0);

        // A mixed leading column pair means the iso-curve enters through the
        // left edge of the first cell; no cell to the left will supply it.
        self.v_col = if left == 1 || left == 2 {
            Some(self.vertical_edge_vertex(d_old0, d_new0, start, row)?)
        } else {
            None
        };

        for col in start + 1..end {
            let d_old1 = self.field.get(row, col);
            let d_new1 = self.field.get(row + 1, col);
            let right = self.column_state(d_old1, d_new1);
            self.dispatch(left, right, d_old0, d_old1, d_new0, d_new1, col - 1, row)?;
            left = right;
            d_old0 = d_old1;
            d_new0 = d_new1;
        }
        Ok(())
    }

    #[inline]
    fn column_state(&self, d_old: f32, d_new: f32) -> u8 {
        (d_old > self.level) as u8 | ((d_new > self.level) as u8) << 1
    }

    /// The 16-way case table for the cell at `(x, y)`.
    ///
    /// Case comments picture the corner samples as
    /// `d_old0 d_old1` over `d_new0 d_new1`, `1` meaning above level.
    #[allow(clippy::too_many_arguments)]
    fn dispatch(
        &mut self,
        left: u8,
        right: u8,
        d_old0: f32,
        d_old1: f32,
        d_new0: f32,
        d_new1: f32,
        x: usize,
        y: usize,
    ) -> Result<()> {
        match (left, right) {
            // 0 0
            // 0 0
            (0, 0) => {
                if self.more_levels && x == 0 && !self.ascending {
                    self.new.note(x, y, RangeMark::Neither);
                }
            }
            // 1 1
            // 1 1
            (3, 3) => {
                if self.more_levels && x == 0 && self.ascending {
                    self.new.note(x, y, RangeMark::Neither);
                }
            }
            // 0 1
            // 0 0
            (0, 1) => {
                let v_col = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                let v_old = self.row_vertex(x);
                self.arena.link(v_col, v_old);
                self.v_col = Some(v_col);
                self.mark(x, y, self.pick(RangeMark::Start, RangeMark::Neither));
            }
            // 0 0
            // 0 1
            (0, 2) => {
                let v_new = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_col = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                self.v_row[x] = Some(v_new);
                self.arena.link(v_new, v_col);
                self.v_col = Some(v_col);
                self.mark(x, y, self.pick(RangeMark::Start, RangeMark::Neither));
            }
            // 0 1
            // 0 1
            (0, 3) => {
                let v_new = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_old = self.row_vertex(x);
                self.v_row[x] = Some(v_new);
                self.arena.link(v_new, v_old);
                self.mark(x, y, self.pick(RangeMark::Start, RangeMark::End));
            }
            // 1 0
            // 0 0
            (1, 0) => {
                let v_col = self.col_vertex();
                let v_old = self.row_vertex(x);
                self.arena.link(v_old, v_col);
                self.mark(x, y, self.pick(RangeMark::End, RangeMark::Neither));
            }
            // 1 1
            // 0 0
            (1, 1) => {
                let v_new = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                let v_col = self.col_vertex();
                self.arena.link(v_new, v_col);
                self.v_col = Some(v_new);
                self.mark(x, y, RangeMark::Neither);
            }
            // 1 0
            // 0 1
            (1, 2) => {
                let v = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_new = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                let centre = (d_old0 + d_old1 + d_new0 + d_new1) / 4.0;
                let v_col = self.col_vertex();
                let v_old = self.row_vertex(x);
                if centre > self.level {
                    self.arena.link(v, v_col);
                    self.arena.link(v_old, v_new);
                } else {
                    self.arena.link(v_old, v_col);
                    self.arena.link(v, v_new);
                }
                self.v_row[x] = Some(v);
                self.v_col = Some(v_new);
                self.mark(x, y, RangeMark::Neither);
            }
            // 1 1
            // 0 1
            (1, 3) => {
                let v_new = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_col = self.col_vertex();
                self.v_row[x] = Some(v_new);
                self.arena.link(v_new, v_col);
                self.mark(x, y, self.pick(RangeMark::Neither, RangeMark::End));
            }
            // 0 0
            // 1 0
            (2, 0) => {
                let v_new = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_col = self.col_vertex();
                self.v_row[x] = Some(v_new);
                self.arena.link(v_col, v_new);
                self.mark(x, y, self.pick(RangeMark::End, RangeMark::Neither));
            }
            // 0 1
            // 1 0
            (2, 1) => {
                let v = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_new = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                let centre = (d_old0 + d_old1 + d_new0 + d_new1) / 4.0;
                let v_col = self.col_vertex();
                let v_old = self.row_vertex(x);
                if centre > self.level {
                    self.arena.link(v_col, v_old);
                    self.arena.link(v_new, v);
                } else {
                    self.arena.link(v_col, v);
                    self.arena.link(v_new, v_old);
                }
                self.v_row[x] = Some(v);
                self.v_col = Some(v_new);
                self.mark(x, y, RangeMark::Neither);
            }
            // 0 0
            // 1 1
            (2, 2) => {
                let v_new = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                let v_col = self.col_vertex();
                self.arena.link(v_col, v_new);
                self.v_col = Some(v_new);
                self.mark(x, y, RangeMark::Neither);
            }
            // 0 1
            // 1 1
            (2, 3) => {
                let v_col = self.col_vertex();
                let v_old = self.row_vertex(x);
                self.arena.link(v_col, v_old);
                self.mark(x, y, self.pick(RangeMark::Neither, RangeMark::End));
            }
            // 1 0
            // 1 0
            (3, 0) => {
                let v_new = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_old = self.row_vertex(x);
                self.v_row[x] = Some(v_new);
                self.arena.link(v_old, v_new);
                self.mark(x, y, self.pick(RangeMark::End, RangeMark::Start));
            }
            // 1 1
            // 1 0
            (3, 1) => {
                let v_new = self.horizontal_edge_vertex(d_new0, d_new1, x, y + 1)?;
                let v_col = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                self.v_row[x] = Some(v_new);
                self.arena.link(v_col, v_new);
                self.v_col = Some(v_col);
                self.mark(x, y, self.pick(RangeMark::Neither, RangeMark::Start));
            }
            // 1 0
            // 1 1
            (3, 2) => {
                let v_col = self.vertical_edge_vertex(d_old1, d_new1, x + 1, y)?;
                let v_old = self.row_vertex(x);
                self.arena.link(v_old, v_col);
                self.v_col = Some(v_col);
                self.mark(x, y, self.pick(RangeMark::Neither, RangeMark::Start));
            }
            _ => unreachable!("column states are two bits"),
        }
        Ok(())
    }

    /// Vertex on the horizontal edge between columns `col` and `col + 1` of
    /// sample row `row`.
    fn horizontal_edge_vertex(
        &mut self,
        d1: f32,
        d2: f32,
        col: usize,
        row: usize,
    ) -> Result<VertexId> {
        let t = (self.level - d1) / (d2 - d1);
        self.arena.alloc(col as f32 + t, row as f32)
    }

    /// Vertex on the vertical edge between rows `row` and `row + 1` of sample
    /// column `col`.
    fn vertical_edge_vertex(
        &mut self,
        d1: f32,
        d2: f32,
        col: usize,
        row: usize,
    ) -> Result<VertexId> {
        let t = (self.level - d1) / (d2 - d1);
        self.arena.alloc(col as f32, row as f32 + t)
    }

    /// The vertex on the cell's upper horizontal edge, produced by the row
    /// above (or the first-row seed). Present whenever the case geometry says
    /// that edge crosses the level.
    #[inline]
    fn row_vertex(&self, x: usize) -> VertexId {
        self.v_row[x].expect("upper-edge vertex missing from row scratch")
    }

    /// The vertex on the cell's left edge, produced by the previous cell (or
    /// the range entry). Present whenever the left column pair is mixed.
    #[inline]
    fn col_vertex(&self) -> VertexId {
        self.v_col.expect("left-edge vertex missing from column scratch")
    }

    #[inline]
    fn pick(&self, when_ascending: RangeMark, when_descending: RangeMark) -> RangeMark {
        if self.ascending {
            when_ascending
        } else {
            when_descending
        }
    }

    #[inline]
    fn mark(&mut self, x: usize, y: usize, mark: RangeMark) {
        if self.more_levels {
            self.new.note(x, y, mark);
        }
    }
}
