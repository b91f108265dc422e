//! Entry point: load an OBJ mesh, report what a renderer would upload,
//! and sample the orbit scene layout.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use asset::{FacePolicy, LoadOptions, NormalMode, TextureData, load_obj_from_path};
use corelib::scene::{OrbitScene, SceneParams};

#[derive(Debug, PartialEq)]
struct Config {
    obj: PathBuf,
    texture: Option<PathBuf>,
    load: LoadOptions,
    dump: usize,
    time: f32,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Config> {
    // Accept: --obj=PATH --texture=PATH --on-bad-face=abort|skip
    //         --normals=normalize|trust --dump=N --time=SECONDS
    let mut obj: Option<PathBuf> = None;
    let mut texture: Option<PathBuf> = None;
    let mut load = LoadOptions::default();
    let mut dump = 0usize;
    let mut time = 0.0f32;

    for arg in args {
        if let Some(val) = arg.strip_prefix("--obj=") {
            obj = Some(PathBuf::from(val));
        } else if let Some(val) = arg.strip_prefix("--texture=") {
            texture = Some(PathBuf::from(val));
        } else if let Some(val) = arg.strip_prefix("--on-bad-face=") {
            let policy = match val.to_ascii_lowercase().as_str() {
                "abort" => FacePolicy::Abort,
                "skip" => FacePolicy::SkipFace,
                other => bail!("Unknown --on-bad-face value '{}'", other),
            };
            load = load.with_face_policy(policy);
        } else if let Some(val) = arg.strip_prefix("--normals=") {
            let mode = match val.to_ascii_lowercase().as_str() {
                "normalize" => NormalMode::Normalize,
                "trust" => NormalMode::Trust,
                other => bail!("Unknown --normals value '{}'", other),
            };
            load = load.with_normals(mode);
        } else if let Some(val) = arg.strip_prefix("--dump=") {
            dump = val
                .parse()
                .with_context(|| format!("Invalid --dump value '{}'", val))?;
        } else if let Some(val) = arg.strip_prefix("--time=") {
            time = val
                .parse()
                .with_context(|| format!("Invalid --time value '{}'", val))?;
        } else {
            log::warn!("Ignoring unknown argument '{}'", arg);
        }
    }

    let obj = obj.context("Missing required --obj=PATH")?;
    Ok(Config {
        obj,
        texture,
        load,
        dump,
        time,
    })
}

fn run(config: &Config) -> Result<()> {
    let mesh = load_obj_from_path(&config.obj, &config.load)
        .with_context(|| format!("Failed to load mesh {}", config.obj.display()))?;

    for warning in &mesh.warnings {
        log::warn!("{}: {}", config.obj.display(), warning);
    }

    let buffer = &mesh.buffer;
    let vertices = renderer::vertices_from_buffer(buffer)
        .map_err(|e| anyhow::anyhow!("Vertex cast failed: {e:?}"))?;
    log::info!(
        "Loaded {}: {} triangles, {} vertices, {} bytes of vertex data",
        config.obj.display(),
        buffer.triangle_count(),
        buffer.vertex_count(),
        std::mem::size_of_val(vertices)
    );
    if let Some(b) = buffer.bounds() {
        log::info!(
            "Bounds min={:?} max={:?} center={:?}",
            b.min,
            b.max,
            b.center()
        );
    }
    for (i, v) in buffer.vertices().take(config.dump).enumerate() {
        log::info!("#{:<4} pos={:?} normal={:?} uv={:?}", i, v.position, v.normal, v.uv);
    }

    let tex = match &config.texture {
        Some(path) => TextureData::load(path, true).unwrap_or_else(|e| {
            log::warn!("{}; using checkerboard", e);
            TextureData::checkerboard(64)
        }),
        None => TextureData::checkerboard(64),
    };
    log::info!("Texture {}x{} {:?}", tex.width, tex.height, tex.format);

    let scene = OrbitScene::new(SceneParams::default())?;
    let layout = scene.layout(config.time)?;
    log::info!("Scene at t={:.2}s: planet at {}", config.time, layout.planet.translation);
    for (i, moon) in layout.moons.iter().enumerate() {
        log::debug!("  moon {} at {}", i, moon.translation);
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = parse_args(std::env::args().skip(1))?;
    log::info!(
        "Starting orrery. obj={}, on_bad_face={:?}, normals={:?}",
        config.obj.display(),
        config.load.face_policy,
        config.load.normals
    );

    run(&config)?;

    log::info!("Done.");
    Ok(())
}
