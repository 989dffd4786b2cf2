//! Parameter grid construction.
//!
//! A [`ParamGrid`] holds the two 1-D parameter sequences `u` (around the
//! center circle) and `v` (across the strip) together with their meshgrid
//! expansion: `U[i][j] = u[j]`, `V[i][j] = v[i]`. Rows follow `v`, columns
//! follow `u`, and both matrices are always `n × n`.

use std::ops::Index;

use super::mobius::MobiusParams;
use super::surface::{MobiusSurface, Surface};

/// How the closed `u` direction is sampled.
///
/// `u = 0` and `u = 2π` describe the same seam on the strip (with `v`
/// mirrored), so an inclusive sampling visits it twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosedSurfaceSampling {
    /// Skip the duplicate seam column: `u_j = 2π·j/n` for `j < n`.
    ExcludeSeam,
    /// `n` inclusive samples of `[0, 2π]`; the seam is sampled at both ends.
    #[default]
    IncludeSeam,
}

/// `count` evenly spaced values from `start` to `end`.
///
/// With `endpoint` the last value is exactly `end`; without it the spacing is
/// `(end - start) / count` and `end` is never reached.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize, endpoint: bool) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let denom = (if endpoint { count - 1 } else { count }) as f64;
            let step = (end - start) / denom;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            if endpoint {
                // Pin the last sample so the seam lands on `end` without drift.
                values[count - 1] = end;
            }
            values
        }
    }
}

/// Dense row-major matrix of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ScalarGrid {
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row-major view of every value.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }
}

impl Index<(usize, usize)> for ScalarGrid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &self.data[row * self.cols + col]
    }
}

/// The sampled parameter domain of a strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGrid {
    u: Vec<f64>,
    v: Vec<f64>,
    u_grid: ScalarGrid,
    v_grid: ScalarGrid,
    seam: ClosedSurfaceSampling,
}

impl ParamGrid {
    #[must_use]
    pub fn new(params: &MobiusParams, seam: ClosedSurfaceSampling) -> Self {
        let surface = MobiusSurface::new(params.radius(), params.width());
        Self::for_surface(&surface, params.resolution(), seam)
    }

    /// Samples the parameter domain of `surface` `resolution` times in each
    /// direction. The seam can only be skipped on a surface closed in `u`.
    #[must_use]
    pub fn for_surface(surface: &impl Surface, resolution: usize, seam: ClosedSurfaceSampling) -> Self {
        let (u_start, u_end) = surface.domain_u();
        let (v_start, v_end) = surface.domain_v();
        let seam = if surface.is_u_closed() {
            seam
        } else {
            ClosedSurfaceSampling::IncludeSeam
        };

        let n = resolution;
        let u = linspace(u_start, u_end, n, seam == ClosedSurfaceSampling::IncludeSeam);
        let v = linspace(v_start, v_end, n, true);

        let u_grid = ScalarGrid::from_fn(n, n, |_, j| u[j]);
        let v_grid = ScalarGrid::from_fn(n, n, |i, _| v[i]);

        Self {
            u,
            v,
            u_grid,
            v_grid,
            seam,
        }
    }

    /// Samples around the center circle.
    #[must_use]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Samples across the strip width.
    #[must_use]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Meshgrid `U`: constant along each column.
    #[must_use]
    pub fn u_grid(&self) -> &ScalarGrid {
        &self.u_grid
    }

    /// Meshgrid `V`: constant along each row.
    #[must_use]
    pub fn v_grid(&self) -> &ScalarGrid {
        &self.v_grid
    }

    #[must_use]
    pub const fn seam(&self) -> ClosedSurfaceSampling {
        self.seam
    }

    #[must_use]
    pub fn resolution(&self) -> usize {
        self.u.len()
    }
}
