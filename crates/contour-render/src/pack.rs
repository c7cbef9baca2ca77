//! GL line-segment buffer assembly.

use serde::{Deserialize, Serialize};

use contour_core::{contour, flatten, Polyline, Result, SpectrumField};

/// An RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }
}

/// Packed buffers for a `GL_LINES` draw call.
///
/// `vertices` holds two floats per point, `colours` four floats per point,
/// `indices` two entries per line segment. Every polyline contributes a
/// segment from its last point back to its first, so each one renders as a
/// closed figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourBuffers {
    pub num_indices: u32,
    pub num_vertices: u32,
    pub indices: Vec<u32>,
    pub vertices: Vec<f32>,
    pub colours: Vec<f32>,
}

/// Accumulates polylines into a single set of GL buffers.
#[derive(Debug, Default)]
pub struct GlBufferBuilder {
    indices: Vec<u32>,
    vertices: Vec<f32>,
    colours: Vec<f32>,
    next_index: u32,
}

impl GlBufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one extraction result, one colour per level.
    ///
    /// When `colours` is shorter than `levels`, the last colour carries over
    /// to the remaining levels; an empty `colours` falls back to transparent.
    pub fn add_level_set(&mut self, levels: &[Vec<Polyline>], colours: &[Rgba]) {
        for (l, polylines) in levels.iter().enumerate() {
            let colour = colours
                .get(l)
                .or_else(|| colours.last())
                .copied()
                .unwrap_or(Rgba::TRANSPARENT);
            for polyline in polylines {
                self.add_polyline(polyline, colour);
            }
        }
    }

    /// Append one polyline as a run of line segments.
    ///
    /// Point `j` connects to point `j + 1`; the final segment is bent back to
    /// the polyline's first point.
    pub fn add_polyline(&mut self, polyline: &Polyline, colour: Rgba) {
        let n = polyline.num_points() as u32;
        if n == 0 {
            return;
        }
        let base = self.next_index;
        for (x, y) in polyline.points() {
            self.vertices.push(x);
            self.vertices.push(y);
            self.colours.push(colour.r);
            self.colours.push(colour.g);
            self.colours.push(colour.b);
            self.colours.push(colour.a);
        }
        for j in 0..n {
            self.indices.push(base + j);
            self.indices.push(base + j + 1);
        }
        // Close the figure: the dangling final index points back at the
        // polyline's first vertex.
        if let Some(last) = self.indices.last_mut() {
            *last = base;
        }
        self.next_index += n;
    }

    pub fn finish(self) -> ContourBuffers {
        ContourBuffers {
            num_indices: self.indices.len() as u32,
            num_vertices: self.next_index,
            indices: self.indices,
            vertices: self.vertices,
            colours: self.colours,
        }
    }
}

/// Contour a stack of spectrum planes and pack everything into one buffer
/// set.
///
/// Each plane is `rows * cols` samples. With `flatten_planes` set, trailing
/// planes are merged into the first (keeping the signed extremes per pixel)
/// and only the merged plane is contoured; otherwise every plane contributes
/// its own polylines. Positive and negative levels are extracted separately
/// so each side can keep its own monotonic ordering and colour table.
#[allow(clippy::too_many_arguments)]
pub fn pack_planes(
    planes: &mut [Vec<f32>],
    rows: usize,
    cols: usize,
    pos_levels: &[f32],
    neg_levels: &[f32],
    pos_colours: &[Rgba],
    neg_colours: &[Rgba],
    flatten_planes: bool,
) -> Result<ContourBuffers> {
    let nplanes = if flatten_planes && planes.len() > 1 {
        if let Some((first, rest)) = planes.split_first_mut() {
            for plane in rest {
                flatten(first, plane);
            }
        }
        1
    } else {
        planes.len()
    };

    tracing::debug!(
        nplanes,
        rows,
        cols,
        pos_levels = pos_levels.len(),
        neg_levels = neg_levels.len(),
        "packing contour buffers"
    );

    let mut builder = GlBufferBuilder::new();
    for plane in planes.iter().take(nplanes) {
        let field = SpectrumField::from_slice(plane, rows, cols)?;
        if !pos_levels.is_empty() {
            let levels = contour(&field, pos_levels)?;
            builder.add_level_set(&levels, pos_colours);
        }
        if !neg_levels.is_empty() {
            let levels = contour(&field, neg_levels)?;
            builder.add_level_set(&levels, neg_colours);
        }
    }

    Ok(builder.finish())
}
