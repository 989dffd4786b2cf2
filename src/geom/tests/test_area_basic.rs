use std::f64::consts::TAU;

use crate::geom::{
    ClosedSurfaceSampling, DifferenceScheme, MobiusOptions, MobiusParams, MobiusStrip,
    MobiusSurface, ParamGrid, SampleGradients, ScalarGrid, Surface, area_element_grid,
    estimate_surface_area, gradient_cols, gradient_rows, nominal_cell, parameter_steps,
    sample_surface_grid,
};

fn strip(radius: f64, width: f64, n: usize, options: MobiusOptions) -> MobiusStrip {
    MobiusStrip::with_options(MobiusParams::new(radius, width, n).unwrap(), options)
}

#[test]
fn central_gradient_matches_one_sided_ends() {
    let values = [1.0, 2.0, 4.0, 7.0, 11.0];
    let grid = ScalarGrid::from_fn(1, 5, |_, j| values[j]);
    let d = gradient_cols(&grid, 1.0, DifferenceScheme::Central);
    assert_eq!(d.row(0), &[1.0, 1.5, 2.5, 3.5, 4.0]);
}

#[test]
fn forward_gradient_falls_back_to_backward_at_the_end() {
    let values = [1.0, 2.0, 4.0, 7.0, 11.0];
    let grid = ScalarGrid::from_fn(5, 1, |i, _| values[i]);
    let d = gradient_rows(&grid, 1.0, DifferenceScheme::Forward);
    assert_eq!(d.as_slice(), &[1.0, 2.0, 3.0, 4.0, 4.0]);
}

#[test]
fn gradients_divide_by_spacing() {
    // f = 3 * row, sampled every 0.5 in the row direction.
    let grid = ScalarGrid::from_fn(4, 3, |i, _| 3.0 * i as f64);
    for scheme in [DifferenceScheme::Central, DifferenceScheme::Forward] {
        let d = gradient_rows(&grid, 0.5, scheme);
        assert!(d.as_slice().iter().all(|&g| g == 6.0));
        let flat = gradient_cols(&grid, 0.5, scheme);
        assert!(flat.as_slice().iter().all(|&g| g == 0.0));
    }
}

#[test]
fn two_point_axis_uses_single_difference() {
    let grid = ScalarGrid::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
    let d = gradient_rows(&grid, 1.0, DifferenceScheme::Central);
    assert_eq!(d.as_slice(), &[2.0, 2.0, 2.0, 2.0]);
}

#[test]
fn nominal_cell_uses_resolution_not_spacing() {
    let (du, dv) = nominal_cell(2.0, 200);
    assert_eq!(du, TAU / 200.0);
    assert_eq!(dv, 0.01);
}

#[test]
fn interior_area_elements_track_the_analytic_jacobian() {
    let params = MobiusParams::new(5.0, 2.0, 200).unwrap();
    let grid = ParamGrid::new(&params, ClosedSurfaceSampling::IncludeSeam);
    let surface = MobiusSurface::new(5.0, 2.0);
    let sample = sample_surface_grid(&surface, &grid);
    let elements = area_element_grid(&sample, &grid, DifferenceScheme::Central);

    for (i, j) in [(1, 1), (50, 73), (100, 100), (198, 150)] {
        let (du, dv) = surface.partial_derivatives_at(grid.u()[j], grid.v()[i]);
        let exact = du.cross(dv).length();
        let rel = (elements[(i, j)] - exact).abs() / exact;
        assert!(rel < 1e-2, "element ({i}, {j}) off by {rel}");
    }
}

#[test]
fn tangents_match_area_element_magnitude() {
    let params = MobiusParams::new(3.0, 1.0, 16).unwrap();
    let grid = ParamGrid::new(&params, ClosedSurfaceSampling::IncludeSeam);
    let sample = sample_surface_grid(&MobiusSurface::new(3.0, 1.0), &grid);
    let gradients = SampleGradients::compute(&sample, &grid, DifferenceScheme::Central);
    let elements = gradients.area_elements();

    for (i, j) in [(0, 0), (7, 3), (15, 15)] {
        let cross = gradients.row_tangent(i, j).cross(gradients.col_tangent(i, j));
        assert!((cross.length() - elements[(i, j)]).abs() < 1e-12);
    }
}

#[test]
fn parameter_steps_follow_seam_convention() {
    let params = MobiusParams::new(1.0, 2.0, 5).unwrap();
    let inclusive = ParamGrid::new(&params, ClosedSurfaceSampling::IncludeSeam);
    let exclusive = ParamGrid::new(&params, ClosedSurfaceSampling::ExcludeSeam);

    let (du_in, dv_in) = parameter_steps(&inclusive);
    let (du_ex, dv_ex) = parameter_steps(&exclusive);
    assert!((du_in - TAU / 4.0).abs() < 1e-12);
    assert!((du_ex - TAU / 5.0).abs() < 1e-12);
    assert_eq!(dv_in, 0.5);
    assert_eq!(dv_ex, 0.5);
}

#[test]
fn narrow_strip_area_is_close_to_band_area() {
    let expected = TAU * 5.0 * 2.0;
    for options in [
        MobiusOptions::default(),
        MobiusOptions {
            seam: ClosedSurfaceSampling::ExcludeSeam,
            scheme: DifferenceScheme::Central,
        },
        MobiusOptions {
            seam: ClosedSurfaceSampling::IncludeSeam,
            scheme: DifferenceScheme::Forward,
        },
    ] {
        let area = strip(5.0, 2.0, 200, options).surface_area();
        assert!(
            (area - expected).abs() / expected < 0.03,
            "{options:?}: area {area} vs {expected}"
        );
    }
}

#[test]
fn area_matches_free_function() {
    let s = strip(2.5, 0.75, 31, MobiusOptions::default());
    let direct = estimate_surface_area(s.sample(), s.grid(), 0.75, DifferenceScheme::Central);
    assert_eq!(s.surface_area(), direct);
}

#[test]
fn area_is_positive_and_finite() {
    for (radius, width, n) in [(5.0, 2.0, 3), (1.0, 5.0, 4), (0.1, 0.1, 10), (50.0, 1.0, 64)] {
        let area = strip(radius, width, n, MobiusOptions::default()).surface_area();
        assert!(area.is_finite() && area > 0.0, "R={radius} w={width} n={n}: {area}");
    }
}

#[test]
fn two_column_strip_without_seam_has_positive_area() {
    let options = MobiusOptions {
        seam: ClosedSurfaceSampling::ExcludeSeam,
        ..MobiusOptions::default()
    };
    // u = {0, π}: the columns are a quarter twist apart.
    let area = strip(5.0, 2.0, 2, options).surface_area();
    assert!((area - 22.0).abs() < 1e-9, "area {area}");
}

#[test]
fn two_column_strip_with_seam_collapses() {
    // u = {0, 2π} samples the same seam twice with v mirrored, so the two
    // tangents are parallel and only rounding noise is left.
    for (radius, width) in [(5.0, 2.0), (1.0, 1.0)] {
        let s = strip(radius, width, 2, MobiusOptions::default());
        let area = s.surface_area();
        assert!(area.is_finite() && area >= 0.0, "R={radius} w={width}: {area}");
        assert!(area < 1e-9 * TAU * radius * width, "R={radius} w={width}: {area}");
        assert!(s.edge_length() > 0.0);
    }
}

#[test]
fn area_refinement_differences_shrink() {
    let a50 = strip(5.0, 2.0, 50, MobiusOptions::default()).surface_area();
    let a100 = strip(5.0, 2.0, 100, MobiusOptions::default()).surface_area();
    let a200 = strip(5.0, 2.0, 200, MobiusOptions::default()).surface_area();
    assert!((a200 - a100).abs() < (a100 - a50).abs());
}

#[test]
fn area_scales_with_square_of_size() {
    let base = strip(5.0, 2.0, 80, MobiusOptions::default()).surface_area();
    let scaled = strip(15.0, 6.0, 80, MobiusOptions::default()).surface_area();
    assert!((scaled / base - 9.0).abs() < 1e-9);
}
