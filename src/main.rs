use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use inkpad::config::Config;
use inkpad::draw::{CairoSurface, ImageData, StrategyKind};
use inkpad::input::KeyboardInput;
use inkpad::notepad::{Notepad, SurfaceRegistry};
use inkpad::{script, seed};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKPAD_GIT_HASH"), ")"),
    about = "Pressure-sensitive freehand drawing surface with undo/redo"
)]
struct Cli {
    /// Config file to use instead of ~/.config/inkpad/config.toml
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay stored strokes onto a fresh surface and write a PNG
    Render {
        /// Stroke document (JSON, optionally gzip-compressed)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: PathBuf,

        /// PNG file to write
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,

        #[command(flatten)]
        surface: SurfaceArgs,
    },

    /// Feed a recorded input trace through a surface
    Replay {
        /// Input trace (JSON lines of mouse/touch/key/pen records)
        #[arg(long, short = 'e', value_name = "FILE")]
        events: PathBuf,

        /// Seed stroke document
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathBuf>,

        /// PNG file to write
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        /// Where to write the visible strokes afterwards
        #[arg(long, short = 's', value_name = "FILE")]
        strokes: Option<PathBuf>,

        #[command(flatten)]
        surface: SurfaceArgs,
    },

    /// Write a default config file
    InitConfig {
        /// Destination (defaults to the standard config path)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

/// Per-run overrides of the `[surface]` and `[pen]` config sections.
#[derive(Args, Debug, Default)]
struct SurfaceArgs {
    /// Segment strategy (smooth or simple)
    #[arg(long, value_name = "STRATEGY")]
    strategy: Option<StrategyKind>,

    /// Displayed width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Displayed height in logical pixels
    #[arg(long)]
    height: Option<f64>,

    /// Physical-to-logical pixel ratio
    #[arg(long)]
    pixel_ratio: Option<f64>,
}

impl SurfaceArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(strategy) = self.strategy {
            config.pen.strategy = strategy;
        }
        if let Some(width) = self.width {
            config.surface.width = width;
        }
        if let Some(height) = self.height {
            config.surface.height = height;
        }
        if let Some(ratio) = self.pixel_ratio {
            config.surface.pixel_ratio = ratio;
        }
        config.validate_and_clamp();
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_usage();
        return Ok(());
    };

    match command {
        Command::Render {
            input,
            output,
            surface,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            surface.apply(&mut config);

            let seed = seed::load_image_data(&input)?;
            let notepad = Notepad::create(&config, config.geometry(), seed)
                .context("failed to create drawing surface")?;
            write_png(&notepad, &output)?;
            println!(
                "Rendered {} stroke(s) to {}",
                notepad.visible_strokes().len(),
                output.display()
            );
        }
        Command::Replay {
            events,
            input,
            output,
            strokes,
            surface,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            surface.apply(&mut config);

            let seed = match &input {
                Some(path) => seed::load_image_data(path)?,
                None => ImageData::default(),
            };
            let trace = fs::read_to_string(&events)
                .with_context(|| format!("failed to read trace {}", events.display()))?;
            let inputs = script::parse_script(&trace)
                .with_context(|| format!("failed to parse trace {}", events.display()))?;

            let keyboard = KeyboardInput::from_config(&config.keybindings)
                .map_err(|err| anyhow::anyhow!("invalid keybindings: {err}"))?;
            let mut registry = SurfaceRegistry::new(keyboard);
            let notepad = Notepad::create(&config, config.geometry(), seed)
                .context("failed to create drawing surface")?;
            let id = registry.register(notepad);

            let stats = script::run_script(&mut registry, id, &inputs);
            let notepad = registry
                .get(id)
                .context("surface disappeared during replay")?;

            if let Some(path) = &output {
                write_png(notepad, path)?;
            }
            if let Some(path) = &strokes {
                seed::save_image_data(path, &notepad.image_data())?;
            }
            println!(
                "Replayed {} input(s) ({} consumed); {} visible stroke(s), {} redoable",
                stats.delivered,
                stats.consumed,
                notepad.history().cursor(),
                notepad.history().len() - notepad.history().cursor()
            );
        }
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_config_path()?,
            };
            Config::default().write_new(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn write_png(notepad: &Notepad<CairoSurface>, path: &Path) -> Result<()> {
    notepad
        .surface()
        .write_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn print_usage() {
    println!("inkpad: Pressure-sensitive freehand drawing surface");
    println!();
    println!("Usage:");
    println!("  inkpad render --input strokes.json --output out.png");
    println!("  inkpad replay --events trace.jsonl --output out.png --strokes out.json");
    println!("  inkpad init-config");
    println!("  inkpad --help");
    println!();
    println!("Trace controls:");
    println!("  - Mouse: left-button drag draws at fixed force");
    println!("  - Stylus: draws with reported pressure; fingers never draw");
    println!("  - Two-finger tap / Meta+Z: undo");
    println!("  - Three-finger tap / Meta+Shift+Z: redo");
}
