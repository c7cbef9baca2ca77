use contour_core::{contour, ContourError, Polyline, SpectrumField};

fn extract(data: &[f32], rows: usize, cols: usize, levels: &[f32]) -> Vec<Vec<Polyline>> {
    let field = SpectrumField::from_slice(data, rows, cols).unwrap();
    contour(&field, levels).unwrap()
}

/// All points of one level's polylines, sorted for order-free comparison.
fn level_points(polylines: &[Polyline]) -> Vec<(f32, f32)> {
    let mut pts: Vec<(f32, f32)> = polylines.iter().flat_map(|p| p.points()).collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    pts
}

fn assert_points_eq(got: &[(f32, f32)], want: &[(f32, f32)]) {
    assert_eq!(got.len(), want.len(), "point counts differ");
    for (g, w) in got.iter().zip(want) {
        assert!(
            (g.0 - w.0).abs() < 1e-6 && (g.1 - w.1).abs() < 1e-6,
            "point {g:?} != {w:?}"
        );
    }
}

#[test]
fn constant_field_yields_no_polylines() {
    let result = extract(&[1.0; 9], 3, 3, &[0.5]);
    assert_eq!(result.len(), 1);
    assert!(result[0].is_empty());
}

#[test]
fn single_cell_crossing_interpolates_both_vertical_edges() {
    // Top row above, bottom row below: the iso-line runs straight across
    // at y = 0.5.
    let result = extract(&[1.0, 1.0, 0.0, 0.0], 2, 2, &[0.5]);
    assert_eq!(result[0].len(), 1);
    let polyline = &result[0][0];
    assert!(!polyline.is_closed());
    assert_points_eq(&level_points(&result[0]), &[(0.0, 0.5), (1.0, 0.5)]);
}

#[test]
fn diagonal_ramp_yields_one_open_diagonal_polyline() {
    let data = contour_test_utils::ramp_field(4, 4);
    let result = extract(&data, 4, 4, &[1.5]);
    assert_eq!(result[0].len(), 1);

    let polyline = &result[0][0];
    assert!(!polyline.is_closed());
    assert_eq!(polyline.num_points(), 4);
    for (x, y) in polyline.points() {
        assert!((x + y - 1.5).abs() < 1e-6, "({x}, {y}) off the iso-line");
    }
    // The chain spans edge to edge of the grid.
    let pts: Vec<_> = polyline.points().collect();
    let mut ends = [pts[0], pts[pts.len() - 1]];
    ends.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert_points_eq(&ends, &[(0.0, 1.5), (1.5, 0.0)]);
}

#[test]
fn saddle_cell_splits_into_two_chains() {
    // Above-level corners on the main diagonal.
    let result = extract(&[1.0, 0.0, 0.0, 1.0], 2, 2, &[0.5]);
    assert_eq!(result[0].len(), 2);
    let mut sets: Vec<Vec<(f32, f32)>> = result[0]
        .iter()
        .map(|p| level_points(std::slice::from_ref(p)))
        .collect();
    sets.sort_by(|a, b| a[0].0.total_cmp(&b[0].0));
    assert_points_eq(&sets[0], &[(0.0, 0.5), (0.5, 0.0)]);
    assert_points_eq(&sets[1], &[(0.5, 1.0), (1.0, 0.5)]);
}

#[test]
fn complementary_saddle_pairs_the_other_way() {
    // Above-level corners on the anti-diagonal.
    let result = extract(&[0.0, 1.0, 1.0, 0.0], 2, 2, &[0.5]);
    assert_eq!(result[0].len(), 2);
    let mut sets: Vec<Vec<(f32, f32)>> = result[0]
        .iter()
        .map(|p| level_points(std::slice::from_ref(p)))
        .collect();
    sets.sort_by(|a, b| a[0].0.total_cmp(&b[0].0));
    assert_points_eq(&sets[0], &[(0.0, 0.5), (0.5, 1.0)]);
    assert_points_eq(&sets[1], &[(0.5, 0.0), (1.0, 0.5)]);
}

#[test]
fn radial_peak_yields_one_closed_ring() {
    let data = contour_test_utils::radial_field(4, 4);
    let result = extract(&data, 4, 4, &[0.25]);
    assert_eq!(result[0].len(), 1);

    let ring = &result[0][0];
    assert!(ring.is_closed());
    assert_eq!(ring.num_points(), 9);

    // Every vertex sits on a grid edge at the interpolated position.
    for (x, y) in ring.points() {
        assert!(x.fract() == 0.0 || y.fract() == 0.0);
    }
    let mut unique: Vec<_> = ring.points().collect();
    unique.pop();
    unique.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    unique.dedup();
    assert_eq!(unique.len(), 8);
}

#[test]
fn early_stop_still_returns_one_entry_per_level() {
    let data = contour_test_utils::ramp_field(4, 4);
    let result = extract(&data, 4, 4, &[10.0, 11.0, 12.0]);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|l| l.is_empty()));
}

#[test]
fn ascending_and_descending_orders_agree() {
    let data = contour_test_utils::radial_field(6, 6);
    let field = SpectrumField::from_slice(&data, 6, 6).unwrap();
    let asc = contour(&field, &[0.1, 0.3]).unwrap();
    let desc = contour(&field, &[0.3, 0.1]).unwrap();

    assert_points_eq(&level_points(&asc[0]), &level_points(&desc[1]));
    assert_points_eq(&level_points(&asc[1]), &level_points(&desc[0]));
}

#[test]
fn incremental_region_tracking_matches_full_scans() {
    // Running all levels in one call must give the same geometry as running
    // each level by itself over the full grid.
    let data = contour_test_utils::smooth_field(24, 24);
    let field = SpectrumField::from_slice(&data, 24, 24).unwrap();
    let levels = [30.0, 45.0, 60.0, 75.0];
    let combined = contour(&field, &levels).unwrap();

    for (l, &level) in levels.iter().enumerate() {
        let alone = contour(&field, &[level]).unwrap();
        assert_points_eq(&level_points(&combined[l]), &level_points(&alone[0]));
    }
}

#[test]
fn non_monotonic_levels_are_rejected() {
    let data = contour_test_utils::ramp_field(4, 4);
    let field = SpectrumField::from_slice(&data, 4, 4).unwrap();
    let err = contour(&field, &[1.0, 3.0, 2.0]).unwrap_err();
    assert!(matches!(err, ContourError::NonMonotonicLevels(_)));
}

#[test]
fn degenerate_grids_yield_empty_levels() {
    assert!(extract(&[1.0, 0.0], 1, 2, &[0.5])[0].is_empty());
    assert!(extract(&[1.0, 0.0], 2, 1, &[0.5])[0].is_empty());
    assert!(extract(&[], 0, 0, &[0.5])[0].is_empty());
}

#[test]
fn empty_level_list_yields_empty_result() {
    let data = contour_test_utils::ramp_field(4, 4);
    let result = extract(&data, 4, 4, &[]);
    assert!(result.is_empty());
}
