use crate::geom::{
    ClosedSurfaceSampling, DifferenceScheme, GeomContext, GeomMesh, MobiusOptions, MobiusParams,
    MobiusStrip, Point3, Tolerance, mesh_surface_sample,
};

fn strip(n: usize, seam: ClosedSurfaceSampling) -> MobiusStrip {
    let options = MobiusOptions {
        seam,
        ..MobiusOptions::default()
    };
    MobiusStrip::with_options(MobiusParams::new(5.0, 2.0, n).unwrap(), options)
}

fn position(mesh: &GeomMesh, index: usize) -> Point3 {
    let [x, y, z] = mesh.positions[index];
    Point3::new(x, y, z)
}

#[test]
fn mesh_has_one_vertex_per_sample() {
    let mesh = strip(4, ClosedSurfaceSampling::IncludeSeam).to_mesh().expect("mesh");

    mesh.validate().expect("mesh validate");
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.triangle_count(), 18);
    assert_eq!(mesh.positions_flat().len(), 16 * 3);
    assert_eq!(mesh.uvs.as_ref().map(Vec::len), Some(16));
    assert_eq!(mesh.normals.as_ref().map(Vec::len), Some(16));
}

#[test]
fn mesh_positions_follow_the_surface_matrices() {
    let s = strip(6, ClosedSurfaceSampling::IncludeSeam);
    let mesh = s.to_mesh().expect("mesh");
    let (x, y, z) = s.surface_matrices();

    for i in 0..6 {
        for j in 0..6 {
            assert_eq!(mesh.positions[i * 6 + j], [x[(i, j)], y[(i, j)], z[(i, j)]]);
        }
    }
    assert_eq!(&mesh.positions_flat()[..3], &mesh.positions[0]);
}

#[test]
fn mesh_uvs_span_the_unit_square() {
    let mesh = strip(5, ClosedSurfaceSampling::IncludeSeam).to_mesh().expect("mesh");
    let uvs = mesh.uvs.expect("uvs");
    assert_eq!(uvs[0], [0.0, 0.0]);
    assert_eq!(uvs[4], [1.0, 0.0]);
    assert_eq!(uvs[24], [1.0, 1.0]);
    assert!(uvs.iter().flatten().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn mesh_normals_are_unit_length() {
    for scheme in [DifferenceScheme::Central, DifferenceScheme::Forward] {
        let options = MobiusOptions {
            scheme,
            ..MobiusOptions::default()
        };
        let s = MobiusStrip::with_options(MobiusParams::new(5.0, 2.0, 8).unwrap(), options);
        let mesh = s.to_mesh().expect("mesh");
        for n in mesh.normals.as_ref().expect("normals") {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-9, "{scheme:?}: normal length {len}");
        }
    }
}

#[test]
fn excluded_seam_is_stitched_with_mirrored_rows() {
    let n = 4;
    let open = strip(n, ClosedSurfaceSampling::IncludeSeam).to_mesh().expect("mesh");
    let closed = strip(n, ClosedSurfaceSampling::ExcludeSeam).to_mesh().expect("mesh");

    closed.validate().expect("mesh validate");
    assert_eq!(open.triangle_count(), 18);
    assert_eq!(closed.triangle_count(), 24);
}

#[test]
fn seam_triangles_are_no_longer_than_interior_ones() {
    let n = 32;
    let mesh = strip(n, ClosedSurfaceSampling::ExcludeSeam).to_mesh().expect("mesh");
    let last = n - 1;

    let mut interior = 0.0_f64;
    for row in 0..n {
        for col in 0..last {
            let d = position(&mesh, row * n + col).distance_to(position(&mesh, row * n + col + 1));
            interior = interior.max(d);
        }
    }

    for row in 0..n {
        let seam = position(&mesh, row * n + last).distance_to(position(&mesh, (last - row) * n));
        assert!(seam < 2.0 * interior, "row {row}: seam edge {seam} vs interior {interior}");
    }
}

#[test]
fn fine_mesh_has_no_degenerate_triangles() {
    let mesh = strip(16, ClosedSurfaceSampling::IncludeSeam).to_mesh().expect("mesh");
    assert_eq!(mesh.degenerate_triangle_count(Tolerance::DEFAULT), 0);
}

#[test]
fn collapsed_triangle_is_reported_degenerate() {
    let mesh = GeomMesh::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![0, 1, 2, 0, 1, 3],
    );
    assert_eq!(mesh.degenerate_triangle_count(Tolerance::DEFAULT), 1);
}

#[test]
fn validate_rejects_broken_meshes() {
    let positions = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

    assert!(GeomMesh::new(positions.clone(), vec![0, 1]).validate().is_err());
    assert!(GeomMesh::new(positions.clone(), vec![0, 1, 3]).validate().is_err());

    let mut nan = GeomMesh::new(positions.clone(), vec![0, 1, 2]);
    nan.positions[1][2] = f64::NAN;
    assert!(nan.has_invalid_vertices());
    assert!(nan.validate().is_err());

    let mut short_uvs = GeomMesh::new(positions, vec![0, 1, 2]);
    short_uvs.uvs = Some(vec![[0.0, 0.0]]);
    assert!(!short_uvs.has_valid_attribute_lengths());
    assert!(short_uvs.validate().is_err());
}

#[test]
fn mesh_from_context_matches_plain_mesh() {
    let s = strip(10, ClosedSurfaceSampling::ExcludeSeam);
    let mut ctx = GeomContext::new();
    let with_ctx = s.to_mesh_with_context(&mut ctx).expect("mesh");
    let direct = mesh_surface_sample(s.sample(), s.grid(), s.options().scheme).expect("mesh");
    assert_eq!(with_ctx, direct);
}
