//! The multi-level contour extraction driver.

use crate::arena::VertexArena;
use crate::cell::scan_level;
use crate::chain::{assemble, Polyline};
use crate::error::{ContourError, Result};
use crate::field::SpectrumField;
use crate::region::ActiveRegions;

/// Extract iso-contour polylines from `field` at each of `levels`.
///
/// `levels` must be monotonic (non-decreasing or non-increasing throughout);
/// the direction drives the incremental active-region optimisation, which
/// restricts each level's cell scan to bands recorded by the previous level.
/// The result always has one entry per level; an entry may be empty. Once a
/// level produces no crossings, no later level in the declared direction can,
/// so scanning stops early and the remaining entries stay empty.
pub fn contour(field: &SpectrumField<'_>, levels: &[f32]) -> Result<Vec<Vec<Polyline>>> {
    let ascending = check_monotonic(levels)?;
    let nlevels = levels.len();
    let mut result: Vec<Vec<Polyline>> = Vec::with_capacity(nlevels);
    result.resize_with(nlevels, Vec::new);
    if nlevels == 0 {
        return Ok(result);
    }

    tracing::debug!(
        rows = field.rows(),
        cols = field.cols(),
        nlevels,
        ascending,
        "contour extraction start"
    );

    let mut arena = VertexArena::new();
    let mut regions = ActiveRegions::new();
    regions.seed(field.rows(), field.cols());
    let mut row_scratch = vec![None; field.cols().saturating_sub(1)];

    for (l, &level) in levels.iter().enumerate() {
        let more_levels = l + 1 < nlevels;
        arena.reset();
        {
            let (old, new) = regions.split();
            scan_level(
                field,
                level,
                ascending,
                more_levels,
                &mut arena,
                old,
                new,
                &mut row_scratch,
            )?;
        }

        if arena.is_empty() {
            tracing::debug!(level_index = l, level, "no crossings, stopping early");
            break;
        }

        let polylines = assemble(&mut arena);
        tracing::debug!(
            level_index = l,
            level,
            vertices = arena.len(),
            polylines = polylines.len(),
            "level contoured"
        );
        result[l] = polylines;

        if more_levels {
            regions.swap();
        }
    }

    Ok(result)
}

/// Verify the level list is monotonic; returns whether it ascends.
///
/// A list of length 0 or 1 counts as ascending, which has no observable
/// effect.
fn check_monotonic(levels: &[f32]) -> Result<bool> {
    if levels.len() < 2 {
        return Ok(true);
    }
    let ascending = levels[0] <= levels[1];
    for pair in levels.windows(2) {
        if ascending && pair[0] > pair[1] {
            return Err(ContourError::non_monotonic(
                "levels initially increase but later decrease",
            ));
        }
        if !ascending && pair[0] < pair[1] {
            return Err(ContourError::non_monotonic(
                "levels initially decrease but later increase",
            ));
        }
    }
    Ok(ascending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::VertexId;

    fn scan_once(data: &[f32], rows: usize, cols: usize, level: f32) -> VertexArena {
        let field = SpectrumField::from_slice(data, rows, cols).unwrap();
        let mut arena = VertexArena::new();
        let mut regions = ActiveRegions::new();
        regions.seed(rows, cols);
        let mut scratch = vec![None; cols - 1];
        let (old, new) = regions.split();
        scan_level(
            &field, level, true, false, &mut arena, old, new, &mut scratch,
        )
        .unwrap();
        arena
    }

    #[test]
    fn monotonic_detection() {
        assert!(check_monotonic(&[]).unwrap());
        assert!(check_monotonic(&[1.0]).unwrap());
        assert!(check_monotonic(&[1.0, 2.0, 2.0, 5.0]).unwrap());
        assert!(!check_monotonic(&[5.0, 2.0, 1.0]).unwrap());
        assert!(check_monotonic(&[1.0, 2.0, 1.5]).is_err());
        assert!(check_monotonic(&[5.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn links_are_well_formed_after_a_scan() {
        // A radial bowl whose above-level set is a closed ring.
        let data = contour_test_utils::radial_field(6, 6);
        let arena = scan_once(&data, 6, 6, 0.25);
        assert!(!arena.is_empty());

        let ids: Vec<VertexId> = arena.ids().collect();
        let mut prev_targets = Vec::new();
        let mut next_targets = Vec::new();
        for &id in &ids {
            let v = arena.get(id);
            if let Some(n) = v.next {
                assert!(
                    arena.get(n).prev == Some(id) || arena.get(n).prev.is_none(),
                    "next link not reciprocated"
                );
                next_targets.push(n);
            }
            if let Some(p) = v.prev {
                assert!(
                    arena.get(p).next == Some(id) || arena.get(p).next.is_none(),
                    "prev link not reciprocated"
                );
                prev_targets.push(p);
            }
        }
        // No vertex is the next (or prev) of two distinct vertices.
        next_targets.sort();
        let before = next_targets.len();
        next_targets.dedup();
        assert_eq!(before, next_targets.len());
        prev_targets.sort();
        let before = prev_targets.len();
        prev_targets.dedup();
        assert_eq!(before, prev_targets.len());
    }

    #[test]
    fn every_vertex_lies_on_a_grid_edge_at_the_level() {
        let data = contour_test_utils::ramp_field(5, 5);
        let arena = scan_once(&data, 5, 5, 2.5);
        for id in arena.ids() {
            let v = arena.get(id);
            // One coordinate is integral (the edge's fixed axis); the field
            // is linear along the other, so the sample there equals the
            // level exactly.
            let x_int = v.x.fract() == 0.0;
            let y_int = v.y.fract() == 0.0;
            assert!(x_int || y_int);
            assert!((v.x + v.y - 2.5).abs() < 1e-6);
        }
    }
}
