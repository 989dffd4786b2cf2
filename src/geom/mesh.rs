use super::area::{DifferenceScheme, SampleGradients};
use super::core::{Point3, Tolerance, Vec3};
use super::grid::{ClosedSurfaceSampling, ParamGrid};
use super::surface::SurfaceSample;
use super::triangulation::triangulate_mobius_grid;

/// Triangle mesh handed to renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeomMesh {
    pub positions: Vec<[f64; 3]>,
    pub indices: Vec<u32>,
    pub uvs: Option<Vec<[f64; 2]>>,
    pub normals: Option<Vec<[f64; 3]>>,
}

impl GeomMesh {
    /// Create a new mesh with positions and indices only.
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            uvs: None,
            normals: None,
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions.iter().any(|p| p.iter().any(|c| !c.is_finite()))
    }

    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.positions.len();
        self.indices.iter().all(|&i| (i as usize) < n)
    }

    #[must_use]
    pub fn has_valid_attribute_lengths(&self) -> bool {
        let n = self.positions.len();
        self.uvs.as_ref().map_or(true, |uvs| uvs.len() == n)
            && self.normals.as_ref().map_or(true, |normals| normals.len() == n)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err("mesh indices are not a triangle list (len % 3 != 0)".to_string());
        }
        if self.has_invalid_vertices() {
            return Err("mesh has invalid vertex coordinates (NaN/Inf)".to_string());
        }
        if !self.has_valid_indices() {
            return Err("mesh has out-of-bounds vertex indices".to_string());
        }
        if !self.has_valid_attribute_lengths() {
            return Err("mesh attribute buffers do not match vertex count".to_string());
        }
        Ok(())
    }

    /// Triangles whose area is at or below `tol.eps`.
    #[must_use]
    pub fn degenerate_triangle_count(&self, tol: Tolerance) -> usize {
        let point = |i: u32| {
            let [x, y, z] = self.positions[i as usize];
            Point3::new(x, y, z)
        };
        self.indices
            .chunks_exact(3)
            .filter(|tri| {
                let a = point(tri[0]);
                let twice_area = (point(tri[1]) - a).cross(point(tri[2]) - a).length();
                tol.is_zero_length(twice_area * 0.5)
            })
            .count()
    }

    /// Position buffer as `[x0, y0, z0, x1, y1, z1, ...]`.
    #[must_use]
    pub fn positions_flat(&self) -> Vec<f64> {
        self.positions.iter().flatten().copied().collect()
    }
}

/// Builds a mesh from an `n × n` sample.
///
/// UVs are the normalized grid coordinates and normals come from the same
/// finite-difference tangents the area estimate uses. Returns `None` when the
/// vertex count does not fit in `u32` indices.
#[must_use]
pub fn mesh_surface_sample(
    sample: &SurfaceSample,
    grid: &ParamGrid,
    scheme: DifferenceScheme,
) -> Option<GeomMesh> {
    let (rows, cols) = sample.shape();
    if u32::try_from(rows * cols).is_err() {
        log::warn!("sample of {rows}x{cols} points is too large to index with u32");
        return None;
    }

    let gradients = SampleGradients::compute(sample, grid, scheme);
    let u_denom = cols.saturating_sub(1).max(1) as f64;
    let v_denom = rows.saturating_sub(1).max(1) as f64;

    let mut positions = Vec::with_capacity(rows * cols);
    let mut uvs = Vec::with_capacity(rows * cols);
    let mut normals = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            positions.push(sample.point(i, j).to_array());
            uvs.push([j as f64 / u_denom, i as f64 / v_denom]);
            let normal = gradients
                .col_tangent(i, j)
                .cross(gradients.row_tangent(i, j))
                .normalized()
                .unwrap_or(Vec3::ZERO);
            normals.push(normal.to_array());
        }
    }

    let wrap_seam = grid.seam() == ClosedSurfaceSampling::ExcludeSeam;
    Some(GeomMesh {
        positions,
        indices: triangulate_mobius_grid(rows, wrap_seam),
        uvs: Some(uvs),
        normals: Some(normals),
    })
}
