mod area;
mod core;
mod edge;
mod grid;
mod mesh;
mod metrics;
mod mobius;
mod surface;
mod triangulation;

pub use area::{
    DifferenceScheme, SampleGradients, area_element_grid, estimate_surface_area, gradient_cols,
    gradient_rows, nominal_cell, parameter_steps,
};
pub use self::core::{BBox, Point3, Tolerance, Vec3};
pub use edge::{boundary_polyline, estimate_edge_length, polyline_length};
pub use grid::{ClosedSurfaceSampling, ParamGrid, ScalarGrid, linspace};
pub use mesh::{GeomMesh, mesh_surface_sample};
pub use metrics::{GeomMetrics, GeomTimingReport, TimingBucket};
pub use mobius::{GeomContext, MobiusError, MobiusOptions, MobiusParams, MobiusReport, MobiusStrip};
pub use surface::{MobiusSurface, Surface, SurfaceSample, sample_surface_grid};
pub use triangulation::{triangulate_grid, triangulate_mobius_grid};

#[cfg(test)]
mod tests;
