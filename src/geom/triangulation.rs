/// Two triangles per quad of a row-major `v_count × u_count` vertex grid.
#[must_use]
pub fn triangulate_grid(u_count: usize, v_count: usize) -> Vec<u32> {
    if u_count < 2 || v_count < 2 {
        return Vec::new();
    }

    let quad_count = (u_count - 1) * (v_count - 1);
    let mut indices = Vec::with_capacity(quad_count * 6);
    for row in 0..v_count - 1 {
        for col in 0..u_count - 1 {
            push_quad(
                &mut indices,
                row * u_count + col,
                row * u_count + col + 1,
                (row + 1) * u_count + col,
                (row + 1) * u_count + col + 1,
            );
        }
    }
    indices
}

/// Triangulates an `n × n` strip sample.
///
/// With `wrap_seam` the last column is joined to the first. Because
/// `S(2π, v) = S(0, -v)`, row `r` of the last column meets row `n - 1 - r` of
/// the first column.
#[must_use]
pub fn triangulate_mobius_grid(n: usize, wrap_seam: bool) -> Vec<u32> {
    let mut indices = triangulate_grid(n, n);
    if !wrap_seam || n < 2 {
        return indices;
    }

    let last = n - 1;
    indices.reserve(last * 6);
    for row in 0..last {
        let mirrored = last - row;
        push_quad(
            &mut indices,
            row * n + last,
            mirrored * n,
            (row + 1) * n + last,
            (mirrored - 1) * n,
        );
    }
    indices
}

fn push_quad(indices: &mut Vec<u32>, i0: usize, i1: usize, i2: usize, i3: usize) {
    let [i0, i1, i2, i3] = [i0, i1, i2, i3].map(|i| i as u32);
    indices.extend_from_slice(&[i0, i1, i2]);
    indices.extend_from_slice(&[i2, i1, i3]);
}
