//! Assembly of pre-linked vertices into polylines.

use serde::{Deserialize, Serialize};

use crate::arena::VertexArena;

/// A contour polyline: a flat coordinate buffer `x0 y0 x1 y1 ...`.
///
/// A closed loop repeats its first point at the end of the buffer, so closure
/// is observable from the coordinates alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    coords: Vec<f32>,
}

impl Polyline {
    /// Build a polyline from a flat `x0 y0 x1 y1 ...` buffer.
    pub fn from_coords(coords: Vec<f32>) -> Self {
        Polyline { coords }
    }

    /// The flat coordinate buffer.
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Number of points, including the repeated closing point of a loop.
    pub fn num_points(&self) -> usize {
        self.coords.len() / 2
    }

    /// Iterate the points as `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.coords.chunks_exact(2).map(|p| (p[0], p[1]))
    }

    /// True when the first point equals the last.
    pub fn is_closed(&self) -> bool {
        self.num_points() >= 2
            && self.coords[..2] == self.coords[self.coords.len() - 2..]
    }
}

/// Walk the doubly-linked vertex graph and emit each connected component as
/// one polyline.
///
/// For every unvisited vertex in arena order: follow `prev` back to the chain
/// head (or all the way around a loop), then collect coordinates forward
/// along `next`. Each vertex lands in exactly one polyline.
pub fn assemble(arena: &mut VertexArena) -> Vec<Polyline> {
    let mut polylines = Vec::new();

    for start in arena.ids().collect::<Vec<_>>() {
        if arena.get(start).visited {
            continue;
        }

        // Rewind to the head: an absent `prev` marks an open chain start; a
        // `prev` pointing back at `start` means the component is a loop.
        let mut head = start;
        let mut closed = false;
        loop {
            match arena.get(head).prev {
                None => break,
                Some(p) if p == start => {
                    closed = true;
                    break;
                }
                Some(p) => head = p,
            }
        }

        let mut coords = Vec::new();
        let mut cur = head;
        loop {
            let v = arena.get_mut(cur);
            v.visited = true;
            coords.push(v.x);
            coords.push(v.y);
            match arena.get(cur).next {
                Some(n) if n != head => cur = n,
                _ => break,
            }
        }
        if closed {
            let h = arena.get(head);
            coords.push(h.x);
            coords.push(h.y);
        }

        polylines.push(Polyline { coords });
    }

    polylines
}
