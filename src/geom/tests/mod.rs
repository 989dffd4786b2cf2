mod test_area_basic;
mod test_mesh_sanity;
