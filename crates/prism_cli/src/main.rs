//! prism: render scenes with the Prism ray tracer.
//!
//! Loads a JSON scene file or a built-in preset, renders it once and
//! writes the frame as PNG or PPM.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prism_core::{preset, SceneFile, PRESET_NAMES};
use prism_renderer::render_scene_file;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Parser)]
#[command(name = "prism")]
#[command(version)]
#[command(about = "Recursive CPU ray tracer")]
#[command(long_about = "
prism renders scenes made of spheres, planes and axis-aligned cubes lit by
point lights, with recursive reflection and refraction.

Example usage:
  prism render --preset glass_and_cubes -o frame.png
  prism render --scene scenes/classic_spheres.json --width 600 --height 500
  prism export-preset classic_spheres -o my_scene.json
")]
struct Cli {
    /// Set logging level (defaults to info, or RUST_LOG when set)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to an image file
    Render {
        /// JSON scene file to render
        #[arg(short, long, conflicts_with = "preset")]
        scene: Option<PathBuf>,

        /// Built-in preset to render
        #[arg(short, long)]
        preset: Option<String>,

        /// Output image (.png or .ppm)
        #[arg(short, long, default_value = "render.png")]
        output: PathBuf,

        /// Override image width
        #[arg(long)]
        width: Option<u32>,

        /// Override image height
        #[arg(long)]
        height: Option<u32>,

        /// Override recursion depth
        #[arg(long)]
        max_depth: Option<u32>,

        /// Render on a single thread
        #[arg(long)]
        serial: bool,
    },

    /// List built-in presets
    Presets,

    /// Write a built-in preset as a JSON scene file
    ExportPreset {
        /// Preset name
        name: String,

        /// Destination file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = cli.log_level {
        builder.filter_level(level.into());
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();

    match cli.command {
        Commands::Render {
            scene,
            preset,
            output,
            width,
            height,
            max_depth,
            serial,
        } => {
            let mut file = load_scene(scene.as_deref(), preset.as_deref())?;

            if let Some(width) = width {
                file.render.width = width;
            }
            if let Some(height) = height {
                file.render.height = height;
            }
            if let Some(max_depth) = max_depth {
                file.render.max_depth = max_depth;
            }
            file.render.validate().context("Invalid render settings")?;

            render_to_file(&file, &output, !serial)?;
        }
        Commands::Presets => {
            for name in PRESET_NAMES {
                println!("{name}");
            }
        }
        Commands::ExportPreset { name, output } => {
            let file = preset(&name)?;
            match output {
                Some(path) => {
                    file.save(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("Wrote preset '{}' to {}", name, path.display());
                }
                None => println!("{}", file.to_json()?),
            }
        }
    }

    Ok(())
}

/// Resolve the scene from a file path or a preset name.
fn load_scene(scene: Option<&Path>, preset_name: Option<&str>) -> Result<SceneFile> {
    match (scene, preset_name) {
        (Some(path), _) => SceneFile::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        (None, Some(name)) => Ok(preset(name)?),
        (None, None) => bail!(
            "Nothing to render: pass --scene FILE or --preset NAME (one of: {})",
            PRESET_NAMES.join(", ")
        ),
    }
}

/// Render `file` and write the frame to `output`.
fn render_to_file(file: &SceneFile, output: &Path, parallel: bool) -> Result<()> {
    log::info!(
        "Scene '{}': {} primitives, {} lights",
        file.scene.name,
        file.scene.primitive_count(),
        file.scene.light_count()
    );

    let start = Instant::now();
    let image = render_scene_file(file, parallel);
    let elapsed = start.elapsed();

    image
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let pixels = f64::from(image.width) * f64::from(image.height);
    log::info!(
        "Saved {} ({}x{}, {:.2} Mpx/s)",
        output.display(),
        image.width,
        image.height,
        pixels / elapsed.as_secs_f64().max(1e-9) / 1e6
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args_parse() {
        let cli = Cli::parse_from([
            "prism", "render", "--preset", "glass_and_cubes", "-o", "out.ppm", "--width", "64",
            "--serial",
        ]);
        match cli.command {
            Commands::Render {
                preset,
                output,
                width,
                height,
                serial,
                ..
            } => {
                assert_eq!(preset.as_deref(), Some("glass_and_cubes"));
                assert_eq!(output, PathBuf::from("out.ppm"));
                assert_eq!(width, Some(64));
                assert_eq!(height, None);
                assert!(serial);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_scene_and_preset_conflict() {
        let result = Cli::try_parse_from(["prism", "render", "--scene", "a.json", "--preset", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_scene_requires_a_source() {
        assert!(load_scene(None, None).is_err());
        assert!(load_scene(None, Some("not_a_preset")).is_err());
        let file = load_scene(None, Some("classic_spheres")).unwrap();
        assert_eq!(file.scene.name, "classic_spheres");
    }

    #[test]
    fn test_render_to_file_writes_ppm() {
        let mut file = preset("classic_spheres").unwrap();
        file.render = file.render.with_resolution(16, 12);
        let path = std::env::temp_dir().join(format!("prism_cli_{}.ppm", std::process::id()));

        render_to_file(&file, &path, false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(text.starts_with("P3\n16 12\n255\n"));
    }
}
