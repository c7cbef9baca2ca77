//! Block-allocated vertex storage.
//!
//! The cell dispatcher creates vertices in bursts and cross-links them while
//! scanning, so vertex records need stable addresses for the lifetime of one
//! level. The arena allocates fixed-size blocks and hands out small index
//! handles ([`VertexId`]); growth never moves an existing record, and a level
//! change is a single counter rewind that keeps every block for reuse.

use crate::error::{ContourError, Result};

/// Vertices are allocated in bunches of this size.
pub const BLOCK_LEN: usize = 50;

/// Stable handle to a vertex in the arena.
///
/// Valid until the next [`VertexArena::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A contour vertex, pre-linked into a chain by the cell dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    /// Column coordinate in sample space (may be fractional).
    pub x: f32,
    /// Row coordinate in sample space (may be fractional).
    pub y: f32,
    /// Previous vertex along the iso-curve, if already known.
    pub prev: Option<VertexId>,
    /// Next vertex along the iso-curve, if already known.
    pub next: Option<VertexId>,
    /// Scratch flag for chain assembly.
    pub visited: bool,
}

/// Block-allocated vertex store, reused across levels.
#[derive(Debug, Default)]
pub struct VertexArena {
    blocks: Vec<Vec<Vertex>>,
    len: usize,
}

impl VertexArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh vertex at `(x, y)` with no links.
    ///
    /// Amortised O(1); grows by one block when full. Allocation failure
    /// surfaces as [`ContourError::OutOfMemory`] rather than aborting.
    pub fn alloc(&mut self, x: f32, y: f32) -> Result<VertexId> {
        let block = self.len / BLOCK_LEN;
        if block == self.blocks.len() {
            self.blocks
                .try_reserve(1)
                .map_err(|_| ContourError::OutOfMemory)?;
            let mut fresh = Vec::new();
            fresh
                .try_reserve_exact(BLOCK_LEN)
                .map_err(|_| ContourError::OutOfMemory)?;
            self.blocks.push(fresh);
        }
        let slot = self.len % BLOCK_LEN;
        let vertex = Vertex {
            x,
            y,
            ..Vertex::default()
        };
        if slot < self.blocks[block].len() {
            // Reused slot from a previous level.
            self.blocks[block][slot] = vertex;
        } else {
            self.blocks[block].push(vertex);
        }
        let id = VertexId(self.len as u32);
        self.len += 1;
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: VertexId) -> &Vertex {
        let i = id.index();
        &self.blocks[i / BLOCK_LEN][i % BLOCK_LEN]
    }

    #[inline]
    pub fn get_mut(&mut self, id: VertexId) -> &mut Vertex {
        let i = id.index();
        &mut self.blocks[i / BLOCK_LEN][i % BLOCK_LEN]
    }

    /// Record a directed link: `from` precedes `to` along the iso-curve.
    #[inline]
    pub fn link(&mut self, from: VertexId, to: VertexId) {
        self.get_mut(from).next = Some(to);
        self.get_mut(to).prev = Some(from);
    }

    /// Number of live vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Invalidate all outstanding vertices, retaining the blocks for reuse.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Handles of the live vertices, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.len as u32).map(VertexId)
    }
}
