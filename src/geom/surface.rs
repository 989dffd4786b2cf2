use std::f64::consts::TAU;

use super::core::{BBox, Point3, Vec3};
use super::grid::{ParamGrid, ScalarGrid};

pub trait Surface {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// First partial derivatives `(∂S/∂u, ∂S/∂v)`.
    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3);

    /// Parameter range sampled along `u`.
    fn domain_u(&self) -> (f64, f64);

    /// Parameter range sampled along `v`.
    fn domain_v(&self) -> (f64, f64);

    #[must_use]
    fn is_u_closed(&self) -> bool {
        false
    }

    #[must_use]
    fn normal_at(&self, u: f64, v: f64) -> Option<Vec3> {
        let (du, dv) = self.partial_derivatives_at(u, v);
        du.cross(dv).normalized()
    }
}

/// The half-twisted band around a center circle of radius `radius` in the XY
/// plane.
///
/// `u ∈ [0, 2π]` runs around the circle and `v ∈ [-width/2, width/2]` across
/// the band. The offset direction turns by `u/2`, so `S(2π, v) == S(0, -v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    pub radius: f64,
    pub width: f64,
}

impl MobiusSurface {
    #[must_use]
    pub const fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    #[must_use]
    pub const fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Point on the `v = +width/2` edge.
    #[must_use]
    pub fn boundary_point_at(&self, u: f64) -> Point3 {
        self.point_at(u, self.half_width())
    }
}

impl Surface for MobiusSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let half = u * 0.5;
        let radial = self.radius + v * half.cos();
        Point3::new(radial * u.cos(), radial * u.sin(), v * half.sin())
    }

    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3) {
        let half = u * 0.5;
        let (sin_h, cos_h) = half.sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let radial = self.radius + v * cos_h;

        let du = Vec3::new(
            -0.5 * v * sin_h * cos_u - radial * sin_u,
            -0.5 * v * sin_h * sin_u + radial * cos_u,
            0.5 * v * cos_h,
        );
        let dv = Vec3::new(cos_h * cos_u, cos_h * sin_u, sin_h);
        (du, dv)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        let half = self.half_width();
        (-half, half)
    }

    fn is_u_closed(&self) -> bool {
        true
    }
}

/// Coordinate matrices `X`, `Y`, `Z` of a surface sampled on a [`ParamGrid`].
///
/// Entry `[i][j]` is the point at `(U[i][j], V[i][j])`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSample {
    x: ScalarGrid,
    y: ScalarGrid,
    z: ScalarGrid,
}

impl SurfaceSample {
    #[must_use]
    pub fn x(&self) -> &ScalarGrid {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &ScalarGrid {
        &self.y
    }

    #[must_use]
    pub fn z(&self) -> &ScalarGrid {
        &self.z
    }

    /// `(X, Y, Z)` as a tuple of borrowed matrices.
    #[must_use]
    pub fn matrices(&self) -> (&ScalarGrid, &ScalarGrid, &ScalarGrid) {
        (&self.x, &self.y, &self.z)
    }

    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> Point3 {
        Point3::new(self.x[(row, col)], self.y[(row, col)], self.z[(row, col)])
    }

    /// Every sampled point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.x
            .as_slice()
            .iter()
            .zip(self.y.as_slice())
            .zip(self.z.as_slice())
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
    }

    #[must_use]
    pub fn bounds(&self) -> Option<BBox> {
        BBox::from_points(self.points())
    }
}

/// Evaluates `surface` at every `(U[i][j], V[i][j])` of `grid`.
#[must_use]
pub fn sample_surface_grid(surface: &impl Surface, grid: &ParamGrid) -> SurfaceSample {
    let u = grid.u_grid();
    let v = grid.v_grid();
    let (rows, cols) = u.shape();

    let mut points = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            points.push(surface.point_at(u[(i, j)], v[(i, j)]));
        }
    }

    SurfaceSample {
        x: ScalarGrid::from_fn(rows, cols, |i, j| points[i * cols + j].x),
        y: ScalarGrid::from_fn(rows, cols, |i, j| points[i * cols + j].y),
        z: ScalarGrid::from_fn(rows, cols, |i, j| points[i * cols + j].z),
    }
}
