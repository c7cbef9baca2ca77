//! Deterministic field generators with easily verified contour geometry.

/// A field of one constant value. No level can cross it.
pub fn constant_field(rows: usize, cols: usize, value: f32) -> Vec<f32> {
    vec![value; rows * cols]
}

/// Diagonal ramp: `D[r][c] = r + c`.
///
/// The iso-line of level `L` is the straight diagonal `x + y = L`, which
/// makes interpolated vertex positions exact and easy to assert.
pub fn ramp_field(rows: usize, cols: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            data.push((r + c) as f32);
        }
    }
    data
}

/// Radial bowl peaking at the grid centre:
/// `D[r][c] = 1 - ((r - cy)^2 + (c - cx)^2)`.
///
/// Levels in `(0, 1)` produce a single closed ring around the centre.
pub fn radial_field(rows: usize, cols: usize) -> Vec<f32> {
    let cy = (rows - 1) as f32 / 2.0;
    let cx = (cols - 1) as f32 / 2.0;
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let dr = r as f32 - cy;
            let dc = c as f32 - cx;
            data.push(1.0 - (dr * dr + dc * dc));
        }
    }
    data
}

/// Multi-modal smooth field built from overlapping sine waves, values
/// roughly in `[0, 100]`. Produces realistic nested contours at many levels.
pub fn smooth_field(rows: usize, cols: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let fx = c as f32 / cols as f32;
            let fy = r as f32 / rows as f32;
            let v1 = (fx * std::f32::consts::PI * 4.0).sin() * 20.0;
            let v2 = (fy * std::f32::consts::PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * std::f32::consts::PI * 2.0).sin() * 10.0;
            data.push(50.0 + v1 + v2 + v3);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_row_plus_col() {
        let data = ramp_field(3, 4);
        assert_eq!(data.len(), 12);
        assert_eq!(data[0], 0.0);
        assert_eq!(data[1 * 4 + 2], 3.0);
    }

    #[test]
    fn radial_peaks_at_centre() {
        let data = radial_field(5, 5);
        let centre = data[2 * 5 + 2];
        assert_eq!(centre, 1.0);
        assert!(data.iter().all(|&v| v <= centre));
    }
}
