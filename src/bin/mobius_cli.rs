#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("mobius_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use mobius_engine::geom::{
        ClosedSurfaceSampling, DifferenceScheme, GeomContext, GeomMesh, MobiusOptions,
        MobiusParams, MobiusStrip,
    };
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    const DEFAULT_RADIUS: f64 = 5.0;
    const DEFAULT_WIDTH: f64 = 2.0;
    const DEFAULT_RESOLUTION: usize = 200;

    const USAGE: &str = r#"mobius_cli (mobius-engine)

USAGE:
  mobius_cli [options]

OPTIONS:
  --radius <R>        Center circle radius (default 5)
  --width <W>         Strip width (default 2)
  --resolution <N>    Samples per parameter direction, N >= 2 (default 200)
  --exclude-seam      Do not sample u = 2*pi a second time
  --forward-diff      Use forward differences instead of central
  --obj <path>        Write the sampled mesh as Wavefront OBJ
  --overwrite         Overwrite an existing OBJ file
  -h, --help          Show this help
"#;

    struct Config {
        radius: f64,
        width: f64,
        resolution: usize,
        options: MobiusOptions,
        obj_path: Option<PathBuf>,
        overwrite: bool,
    }

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let Some(config) = parse_config(&mut Args::new(args))? else {
            println!("{USAGE}");
            return Ok(());
        };

        let params = MobiusParams::new(config.radius, config.width, config.resolution)
            .map_err(|e| e.to_string())?;
        let mut ctx = GeomContext::new();
        ctx.metrics.begin();

        let strip = MobiusStrip::with_context(params, config.options, &mut ctx);
        let area = strip.surface_area_with_context(&mut ctx);
        let edge_length = strip.edge_length_with_context(&mut ctx);

        println!("Surface Area ≈ {area:.3}");
        println!("Edge Length ≈ {edge_length:.3}");

        if let Some(path) = config.obj_path.as_deref() {
            let mesh = strip
                .to_mesh_with_context(&mut ctx)
                .ok_or("resolution is too large to export a mesh")?;
            write_obj_file(path, &mesh, config.overwrite)?;
            eprintln!(
                "wrote {}: vertices={} triangles={}",
                path.display(),
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }

        if let Some(report) = ctx.metrics.end() {
            eprintln!("timing: {:.3} ms", report.total_ms());
        }

        Ok(())
    }

    fn parse_config(args: &mut Args) -> Result<Option<Config>, String> {
        let mut config = Config {
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
            resolution: DEFAULT_RESOLUTION,
            options: MobiusOptions::default(),
            obj_path: None,
            overwrite: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--radius" => config.radius = parse_f64("--radius", &args.value("--radius")?)?,
                "--width" => config.width = parse_f64("--width", &args.value("--width")?)?,
                "--resolution" => {
                    let raw = args.value("--resolution")?;
                    config.resolution = raw
                        .parse()
                        .map_err(|_| format!("--resolution expects an integer, got `{raw}`"))?;
                }
                "--exclude-seam" => config.options.seam = ClosedSurfaceSampling::ExcludeSeam,
                "--forward-diff" => config.options.scheme = DifferenceScheme::Forward,
                "--obj" => config.obj_path = Some(PathBuf::from(args.value("--obj")?)),
                "--overwrite" => config.overwrite = true,
                "-h" | "--help" => return Ok(None),
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        Ok(Some(config))
    }

    fn parse_f64(flag: &str, raw: &str) -> Result<f64, String> {
        raw.parse()
            .map_err(|_| format!("{flag} expects a number, got `{raw}`"))
    }

    fn write_obj_file(path: &Path, mesh: &GeomMesh, overwrite: bool) -> Result<(), String> {
        mesh.validate().map_err(|e| format!("mesh validation failed: {e}"))?;

        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }

        let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
        let mut w = BufWriter::new(file);
        let err = |e: std::io::Error| format!("write obj: {e}");

        writeln!(w, "# mobius-engine mobius_cli").map_err(err)?;
        writeln!(w, "o mobius_strip").map_err(err)?;

        for p in &mesh.positions {
            writeln!(w, "v {} {} {}", p[0], p[1], p[2]).map_err(err)?;
        }
        if let Some(uvs) = mesh.uvs.as_ref() {
            for uv in uvs {
                writeln!(w, "vt {} {}", uv[0], uv[1]).map_err(err)?;
            }
        }
        if let Some(normals) = mesh.normals.as_ref() {
            for n in normals {
                writeln!(w, "vn {} {} {}", n[0], n[1], n[2]).map_err(err)?;
            }
        }

        let has_uvs = mesh.uvs.is_some();
        let has_normals = mesh.normals.is_some();
        for tri in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
            match (has_uvs, has_normals) {
                (true, true) => writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}"),
                (true, false) => writeln!(w, "f {a}/{a} {b}/{b} {c}/{c}"),
                (false, true) => writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}"),
                (false, false) => writeln!(w, "f {a} {b} {c}"),
            }
            .map_err(err)?;
        }

        w.flush().map_err(|e| format!("flush {}: {e}", path.display()))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next().ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}
