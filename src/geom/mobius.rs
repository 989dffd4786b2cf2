//! The sampled strip and its two measurements.
//!
//! ```ignore
//! use mobius_engine::geom::MobiusStrip;
//!
//! let strip = MobiusStrip::new(5.0, 2.0, 200)?;
//! let (x, y, z) = strip.surface_matrices();
//! println!("Surface Area ≈ {:.3}", strip.surface_area());
//! println!("Edge Length ≈ {:.3}", strip.edge_length());
//! ```

use serde::Serialize;

use super::area::{DifferenceScheme, estimate_surface_area};
use super::core::Tolerance;
use super::edge::estimate_edge_length;
use super::grid::{ClosedSurfaceSampling, ParamGrid, ScalarGrid};
use super::mesh::{GeomMesh, mesh_surface_sample};
use super::metrics::{GeomMetrics, TimingBucket};
use super::surface::{MobiusSurface, SurfaceSample, sample_surface_grid};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MobiusError {
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

fn positive_finite(parameter: &'static str, value: f64) -> Result<f64, MobiusError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MobiusError::InvalidParameter {
            parameter,
            reason: format!("must be finite and > 0 (got {value})"),
        })
    }
}

/// Validated `(R, w, n)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusParams {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl MobiusParams {
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self, MobiusError> {
        let radius = positive_finite("radius", radius)?;
        let width = positive_finite("width", width)?;
        if resolution < 2 {
            return Err(MobiusError::InvalidParameter {
                parameter: "resolution",
                reason: format!("must be at least 2 (got {resolution})"),
            });
        }
        Ok(Self {
            radius,
            width,
            resolution,
        })
    }

    /// Center circle radius `R`.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Strip width `w`.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Samples per parameter direction `n`.
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobiusOptions {
    pub seam: ClosedSurfaceSampling,
    pub scheme: DifferenceScheme,
}

#[derive(Debug, Default)]
pub struct GeomContext {
    pub tolerance: Tolerance,
    pub metrics: GeomMetrics,
}

impl GeomContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobiusReport {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
    pub surface_area: f64,
    pub edge_length: f64,
    pub bounds_min: [f64; 3],
    pub bounds_max: [f64; 3],
}

/// A Möbius strip sampled on an `n × n` parameter grid.
///
/// Parameters, grid and coordinate matrices are fixed at construction; the
/// measurements are recomputed on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct MobiusStrip {
    params: MobiusParams,
    options: MobiusOptions,
    surface: MobiusSurface,
    grid: ParamGrid,
    sample: SurfaceSample,
}

impl MobiusStrip {
    /// Builds a strip with default options.
    ///
    /// Fails with [`MobiusError::InvalidParameter`] when `radius` or `width`
    /// is not a positive finite number or `resolution < 2`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self, MobiusError> {
        let params = MobiusParams::new(radius, width, resolution)?;
        Ok(Self::with_options(params, MobiusOptions::default()))
    }

    #[must_use]
    pub fn with_options(params: MobiusParams, options: MobiusOptions) -> Self {
        let mut ctx = GeomContext::new();
        Self::with_context(params, options, &mut ctx)
    }

    #[must_use]
    pub fn with_context(params: MobiusParams, options: MobiusOptions, ctx: &mut GeomContext) -> Self {
        log::debug!(
            "building strip R={} w={} n={} seam={:?} scheme={:?}",
            params.radius,
            params.width,
            params.resolution,
            options.seam,
            options.scheme
        );

        let surface = MobiusSurface::new(params.radius, params.width);
        let grid = ctx
            .metrics
            .time(TimingBucket::Grid, || ParamGrid::new(&params, options.seam));
        let sample = ctx
            .metrics
            .time(TimingBucket::Sampling, || sample_surface_grid(&surface, &grid));

        Self {
            params,
            options,
            surface,
            grid,
            sample,
        }
    }

    #[must_use]
    pub const fn params(&self) -> &MobiusParams {
        &self.params
    }

    #[must_use]
    pub const fn options(&self) -> &MobiusOptions {
        &self.options
    }

    #[must_use]
    pub const fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    #[must_use]
    pub const fn grid(&self) -> &ParamGrid {
        &self.grid
    }

    #[must_use]
    pub const fn sample(&self) -> &SurfaceSample {
        &self.sample
    }

    /// `(X, Y, Z)`, each `n × n`.
    #[must_use]
    pub fn surface_matrices(&self) -> (&ScalarGrid, &ScalarGrid, &ScalarGrid) {
        self.sample.matrices()
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        let area = estimate_surface_area(&self.sample, &self.grid, self.params.width, self.options.scheme);
        log::debug!("surface area estimate {area}");
        area
    }

    #[must_use]
    pub fn surface_area_with_context(&self, ctx: &mut GeomContext) -> f64 {
        ctx.metrics.time(TimingBucket::Area, || self.surface_area())
    }

    /// Boundary length; the `+w/2` edge is resampled and its chord sum doubled.
    #[must_use]
    pub fn edge_length(&self) -> f64 {
        let length = estimate_edge_length(&self.surface, &self.grid);
        log::debug!("edge length estimate {length}");
        length
    }

    #[must_use]
    pub fn edge_length_with_context(&self, ctx: &mut GeomContext) -> f64 {
        ctx.metrics.time(TimingBucket::EdgeLength, || self.edge_length())
    }

    #[must_use]
    pub fn to_mesh(&self) -> Option<GeomMesh> {
        mesh_surface_sample(&self.sample, &self.grid, self.options.scheme)
    }

    #[must_use]
    pub fn to_mesh_with_context(&self, ctx: &mut GeomContext) -> Option<GeomMesh> {
        let mesh = ctx.metrics.time(TimingBucket::Meshing, || self.to_mesh())?;
        let degenerate = mesh.degenerate_triangle_count(ctx.tolerance);
        if degenerate > 0 {
            log::debug!("mesh has {degenerate} degenerate triangles");
        }
        Some(mesh)
    }

    /// Both measurements plus the sample's bounding box.
    #[must_use]
    pub fn report(&self) -> MobiusReport {
        let (surface_area, edge_length) = self.measure();
        let (bounds_min, bounds_max) = self
            .sample
            .bounds()
            .map_or(([0.0; 3], [0.0; 3]), |b| (b.min.to_array(), b.max.to_array()));

        MobiusReport {
            radius: self.params.radius,
            width: self.params.width,
            resolution: self.params.resolution,
            surface_area,
            edge_length,
            bounds_min,
            bounds_max,
        }
    }

    #[cfg(feature = "parallel")]
    fn measure(&self) -> (f64, f64) {
        rayon::join(|| self.surface_area(), || self.edge_length())
    }

    #[cfg(not(feature = "parallel"))]
    fn measure(&self) -> (f64, f64) {
        (self.surface_area(), self.edge_length())
    }
}
