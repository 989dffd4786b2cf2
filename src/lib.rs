#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod geom;

use std::fmt;

use geom::{GeomMesh, MobiusStrip, ScalarGrid};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no panic hook without the feature
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second `initialize` keeps the logger that is already installed.
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub async fn initialize_parallel(worker_count: Option<u32>) -> Result<(), JsError> {
    let threads = worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(|value| value.get())
                .ok()
        })
        .unwrap_or(1);

    wasm_bindgen_rayon::init_thread_pool(threads)
        .await
        .map_err(|err| JsError::new(&format!("could not start rayon thread pool: {err}")))
}

/// Public entry point for JS consumers: one sampled strip.
#[wasm_bindgen]
pub struct MobiusEngine {
    strip: MobiusStrip,
    mesh: Option<GeomMesh>,
}

#[wasm_bindgen]
impl MobiusEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, width: f64, resolution: u32) -> Result<MobiusEngine, JsValue> {
        let strip = MobiusStrip::new(radius, width, resolution as usize).map_err(to_js_error)?;
        Ok(MobiusEngine { strip, mesh: None })
    }

    #[wasm_bindgen]
    pub fn resolution(&self) -> u32 {
        u32::try_from(self.strip.params().resolution()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen]
    pub fn surface_area(&self) -> f64 {
        self.strip.surface_area()
    }

    #[wasm_bindgen]
    pub fn edge_length(&self) -> f64 {
        self.strip.edge_length()
    }

    /// Row-major `X` matrix.
    #[wasm_bindgen]
    pub fn x_values(&self) -> Vec<f64> {
        flat_values(self.strip.surface_matrices().0)
    }

    /// Row-major `Y` matrix.
    #[wasm_bindgen]
    pub fn y_values(&self) -> Vec<f64> {
        flat_values(self.strip.surface_matrices().1)
    }

    /// Row-major `Z` matrix.
    #[wasm_bindgen]
    pub fn z_values(&self) -> Vec<f64> {
        flat_values(self.strip.surface_matrices().2)
    }

    /// Packed `[x0, y0, z0, ...]` vertex buffer of the render mesh.
    #[wasm_bindgen]
    pub fn mesh_positions(&mut self) -> Result<Vec<f64>, JsValue> {
        Ok(self.mesh()?.positions_flat())
    }

    #[wasm_bindgen]
    pub fn mesh_indices(&mut self) -> Result<Vec<u32>, JsValue> {
        Ok(self.mesh()?.indices.clone())
    }

    /// Both measurements and the bounding box as a plain JS object.
    #[wasm_bindgen]
    pub fn report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.strip.report())
            .map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl MobiusEngine {
    /// The wrapped strip, for native callers.
    #[must_use]
    pub fn strip(&self) -> &MobiusStrip {
        &self.strip
    }

    fn mesh(&mut self) -> Result<&GeomMesh, JsValue> {
        let mesh = match self.mesh.take() {
            Some(mesh) => mesh,
            None => self
                .strip
                .to_mesh()
                .ok_or_else(|| js_error("resolution is too large for a u32-indexed mesh"))?,
        };
        Ok(self.mesh.insert(mesh))
    }
}

fn flat_values(grid: &ScalarGrid) -> Vec<f64> {
    grid.as_slice().to_vec()
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("{message}");
        JsValue::NULL
    }
}
