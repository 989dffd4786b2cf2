//! Surface area by finite differences.
//!
//! The sampled coordinates are differentiated along both grid axes, the two
//! tangent vectors are crossed at every grid point, and the resulting
//! area-element magnitudes are summed as a Riemann sum of
//! `∬ |∂S/∂u × ∂S/∂v| du dv`.
//!
//! Derivatives are taken with respect to the parameters themselves (index
//! differences divided by the sample spacing), so the area elements carry
//! units of length² per unit parameter area and the nominal cell widths
//! `du = 2π/n`, `dv = w/n` scale the sum back to an area.

use std::f64::consts::TAU;

use super::core::Vec3;
use super::grid::{ParamGrid, ScalarGrid};
use super::surface::SurfaceSample;

/// Finite-difference stencil used for the tangent estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifferenceScheme {
    /// `(f[i+1] - f[i-1]) / 2h` in the interior, one-sided at the first and
    /// last index. Second order in the interior.
    #[default]
    Central,
    /// `(f[i+1] - f[i]) / h`, backward at the last index. First order.
    Forward,
}

fn difference_at(value: impl Fn(usize) -> f64, len: usize, k: usize, scheme: DifferenceScheme) -> f64 {
    debug_assert!(len >= 2);
    let last = len - 1;
    if k == last {
        return value(last) - value(last - 1);
    }
    match scheme {
        DifferenceScheme::Central if k > 0 => (value(k + 1) - value(k - 1)) * 0.5,
        _ => value(k + 1) - value(k),
    }
}

/// Derivative along the row axis (down a column, varying `v`).
#[must_use]
pub fn gradient_rows(grid: &ScalarGrid, spacing: f64, scheme: DifferenceScheme) -> ScalarGrid {
    let rows = grid.rows();
    ScalarGrid::from_fn(rows, grid.cols(), |i, j| {
        difference_at(|k| grid[(k, j)], rows, i, scheme) / spacing
    })
}

/// Derivative along the column axis (across a row, varying `u`).
#[must_use]
pub fn gradient_cols(grid: &ScalarGrid, spacing: f64, scheme: DifferenceScheme) -> ScalarGrid {
    let cols = grid.cols();
    ScalarGrid::from_fn(grid.rows(), cols, |i, j| {
        difference_at(|k| grid[(i, k)], cols, j, scheme) / spacing
    })
}

/// Per-axis derivatives of a [`SurfaceSample`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGradients {
    pub dx_row: ScalarGrid,
    pub dy_row: ScalarGrid,
    pub dz_row: ScalarGrid,
    pub dx_col: ScalarGrid,
    pub dy_col: ScalarGrid,
    pub dz_col: ScalarGrid,
}

impl SampleGradients {
    #[must_use]
    pub fn compute(sample: &SurfaceSample, grid: &ParamGrid, scheme: DifferenceScheme) -> Self {
        let (u_step, v_step) = parameter_steps(grid);
        let (x, y, z) = sample.matrices();
        Self {
            dx_row: gradient_rows(x, v_step, scheme),
            dy_row: gradient_rows(y, v_step, scheme),
            dz_row: gradient_rows(z, v_step, scheme),
            dx_col: gradient_cols(x, u_step, scheme),
            dy_col: gradient_cols(y, u_step, scheme),
            dz_col: gradient_cols(z, u_step, scheme),
        }
    }

    /// Estimated `∂S/∂v` at a grid point.
    #[must_use]
    pub fn row_tangent(&self, row: usize, col: usize) -> Vec3 {
        let at = (row, col);
        Vec3::new(self.dx_row[at], self.dy_row[at], self.dz_row[at])
    }

    /// Estimated `∂S/∂u` at a grid point.
    #[must_use]
    pub fn col_tangent(&self, row: usize, col: usize) -> Vec3 {
        let at = (row, col);
        Vec3::new(self.dx_col[at], self.dy_col[at], self.dz_col[at])
    }

    /// `|∂S/∂v × ∂S/∂u|` at every grid point.
    #[must_use]
    pub fn area_elements(&self) -> ScalarGrid {
        let (rows, cols) = self.dx_row.shape();
        ScalarGrid::from_fn(rows, cols, |i, j| {
            let at = (i, j);
            let (xr, yr, zr) = (self.dx_row[at], self.dy_row[at], self.dz_row[at]);
            let (xc, yc, zc) = (self.dx_col[at], self.dy_col[at], self.dz_col[at]);

            let a = xr * yc - xc * yr;
            let b = yr * zc - yc * zr;
            let c = zr * xc - zc * xr;
            (a * a + b * b + c * c).sqrt()
        })
    }
}

/// Sample spacing `(Δu, Δv)` of the parameter sequences.
#[must_use]
pub fn parameter_steps(grid: &ParamGrid) -> (f64, f64) {
    let step = |values: &[f64]| values[1] - values[0];
    (step(grid.u()), step(grid.v()))
}

/// Nominal Riemann cell `(du, dv) = (2π/n, w/n)`.
#[must_use]
pub fn nominal_cell(width: f64, resolution: usize) -> (f64, f64) {
    let n = resolution as f64;
    (TAU / n, width / n)
}

#[must_use]
pub fn area_element_grid(sample: &SurfaceSample, grid: &ParamGrid, scheme: DifferenceScheme) -> ScalarGrid {
    SampleGradients::compute(sample, grid, scheme).area_elements()
}

/// Riemann-sum estimate of the sampled surface's area.
#[must_use]
pub fn estimate_surface_area(
    sample: &SurfaceSample,
    grid: &ParamGrid,
    width: f64,
    scheme: DifferenceScheme,
) -> f64 {
    let (du, dv) = nominal_cell(width, grid.resolution());
    area_element_grid(sample, grid, scheme).sum() * du * dv
}
