use crate::config::{ConfigError, ExplorerConfig, ExplorerSettings};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Escape-time fractal explorer: Mandelbrot, Julia and Burning Ship.
#[derive(Parser, Debug)]
#[command(name = "fractal-explorer", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single frame to an image file.
    Render(RenderArgs),
    /// Run a playback script, exporting one frame per command.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output image; the extension picks the format (png, jpg, bmp).
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// TOML playback script. Plays the built-in tour when omitted.
    pub script: Option<PathBuf>,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Directory receiving one PNG per executed command.
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Ignore the script delays.
    #[arg(long, default_value_t = false)]
    pub instant: bool,
}

/// Start-up view options. Flags override values from `--config`.
#[derive(Args, Debug, Default)]
pub struct ViewArgs {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fractal: mandelbrot, julia, burning-ship.
    #[arg(long)]
    pub variant: Option<String>,

    /// Palette: resonant, harmonic, spectral, fractal, mereotopological, quantum, golden-ratio.
    #[arg(long)]
    pub palette: Option<String>,

    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Side of the square pixel block sharing one sample.
    #[arg(long)]
    pub subsample: Option<u32>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    pub center_re: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub center_im: Option<f64>,

    #[arg(long)]
    pub zoom: Option<f64>,
}

impl ViewArgs {
    /// Loads `--config` (if any), applies the flags on top and resolves.
    pub fn settings(&self) -> Result<ExplorerSettings, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::load(path)?,
            None => ExplorerConfig::default(),
        };

        self.apply_to(&mut config);
        config.resolve()
    }

    pub fn apply_to(&self, config: &mut ExplorerConfig) {
        fn overlay<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                target.clone_from(value);
            }
        }

        overlay(&mut config.fractal.variant, &self.variant);
        overlay(&mut config.fractal.max_iterations, &self.max_iterations);
        overlay(&mut config.fractal.subsample, &self.subsample);
        overlay(&mut config.palette.kind, &self.palette);
        overlay(&mut config.surface.width, &self.width);
        overlay(&mut config.surface.height, &self.height);
        overlay(&mut config.viewport.center_re, &self.center_re);
        overlay(&mut config.viewport.center_im, &self.center_im);
        overlay(&mut config.viewport.zoom, &self.zoom);
    }
}
