use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::errors::ConfigError;
use crate::config::explorer_config::ExplorerConfig;
use crate::core::budget::growth::BudgetGrowth;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::params::NumericFallback;
use crate::core::palette::kinds::PaletteStyleKind;

fn parse_palette_style(value: &str) -> Result<PaletteStyleKind, String> {
    PaletteStyleKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.display_name().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown palette style '{}' (rainbow, fire, ember)", value))
}

/// Settings shared by every entry point; flags win over the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// JSON config file; missing sections fall back to defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Real part of the view center
    #[arg(long, allow_negative_numbers = true)]
    pub center_re: Option<f64>,

    /// Imaginary part of the view center
    #[arg(long, allow_negative_numbers = true)]
    pub center_im: Option<f64>,

    /// Half-width of the visible region
    #[arg(long)]
    pub scale: Option<f64>,

    /// Exponent n in z^n + c
    #[arg(long)]
    pub power: Option<u32>,

    /// Fixed iteration count instead of the zoom-adaptive budget
    #[arg(long)]
    pub iterations: Option<u32>,

    #[arg(long, value_parser = parse_palette_style)]
    pub palette: Option<PaletteStyleKind>,

    /// Treat overflowing orbits as escaped instead of restarting them
    #[arg(long)]
    pub strict: bool,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<ExplorerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::load(path)?,
            None => ExplorerConfig::default(),
        };

        self.apply_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut ExplorerConfig) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }

        let center = config.view.center;
        config.view.center = Complex::new(
            self.center_re.unwrap_or(center.real),
            self.center_im.unwrap_or(center.imag),
        );

        if let Some(scale) = self.scale {
            config.view.scale = scale;
        }
        if let Some(power) = self.power {
            config.render.power = power;
        }
        if let Some(iterations) = self.iterations {
            config.budget.growth = BudgetGrowth::Fixed;
            config.budget.base_iterations = iterations;
            config.budget.min_iterations = config.budget.min_iterations.min(iterations);
            config.budget.hard_cap = config.budget.hard_cap.max(iterations);
        }
        if let Some(style) = self.palette {
            config.palette.style = style;
            config.palette.file = None;
        }
        if self.strict {
            config.render.fallback = NumericFallback::Strict;
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "fractal_viewer", version, about = "Escape-time fractal renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one frame of the configured view to a binary PPM file
    Render {
        #[command(flatten)]
        config: ConfigArgs,

        #[arg(short, long, default_value = "output/fractal.ppm")]
        output: PathBuf,
    },
    /// Write the configured palette as flat RGBA bytes
    Palette {
        #[command(flatten)]
        config: ConfigArgs,

        #[arg(short, long, default_value = "output/palette.rgba")]
        output: PathBuf,
    },
}
