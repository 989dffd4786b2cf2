//! Boundary length by chord summation.
//!
//! The strip has a single boundary curve: starting on the `v = +w/2` edge at
//! `u = 0`, it reaches `u = 2π` and continues along the `v = -w/2` edge before
//! closing. Only the `+w/2` half is sampled; its chord sum is doubled on the
//! assumption that the other half has the same length. That holds by symmetry
//! of the parameterization in the limit of fine sampling, not as an exact
//! identity of the sampled polylines.

use super::core::Point3;
use super::grid::{ClosedSurfaceSampling, ParamGrid};
use super::surface::{MobiusSurface, Surface};

/// Points on the `v = +w/2` edge at every `u` sample.
///
/// When the seam column was skipped, the closing sample at the end of the `u`
/// domain (`2π`) is appended so the polyline still spans a full turn.
#[must_use]
pub fn boundary_polyline(surface: &MobiusSurface, u: &[f64], seam: ClosedSurfaceSampling) -> Vec<Point3> {
    let mut points: Vec<Point3> = u.iter().map(|&t| surface.boundary_point_at(t)).collect();
    if seam == ClosedSurfaceSampling::ExcludeSeam {
        let (_, u_end) = surface.domain_u();
        points.push(surface.boundary_point_at(u_end));
    }
    points
}

/// Sum of distances between consecutive points.
#[must_use]
pub fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(w[1])).sum()
}

/// Twice the chord length of the sampled `+w/2` edge.
#[must_use]
pub fn estimate_edge_length(surface: &MobiusSurface, grid: &ParamGrid) -> f64 {
    let edge = boundary_polyline(surface, grid.u(), grid.seam());
    polyline_length(&edge) * 2.0
}
