use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::errors::ConfigError;
use crate::core::actions::render_frame::frame_renderer::ExecutionMode;
use crate::core::budget::policy::BudgetSettings;
use crate::core::controls::translator::InputSettings;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::escape_time::params::{NumericFallback, RenderParameters};
use crate::core::palette::kinds::PaletteStyleKind;
use crate::core::palette::palette::{DEFAULT_PALETTE_SIZE, Interpolation, Palette, validate_size};
use crate::core::viewport::controller::ViewportController;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::state::ViewportState;
use crate::errors::ResourceError;
use crate::storage::palette_file::read_palette_file;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub frame_rate_hz: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: String::from("Fractal Viewer"),
            frame_rate_hz: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: Complex,
    pub scale: f64,
    pub limits: ViewportLimits,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: Complex::new(-0.5, 0.0),
            scale: 1.5,
            limits: ViewportLimits::default(),
        }
    }
}

/// Render parameters minus the iteration count, which the budget policy owns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub power: u32,
    pub bailout_radius: f64,
    pub color_cycle_speed: f64,
    pub fallback: NumericFallback,
    pub execution: ExecutionMode,
}

impl RenderConfig {
    #[must_use]
    pub fn parameters(&self, max_iterations: u32) -> RenderParameters {
        RenderParameters {
            power: self.power,
            bailout_radius: self.bailout_radius,
            max_iterations,
            color_cycle_speed: self.color_cycle_speed,
            fallback: self.fallback,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let params = RenderParameters::default();

        Self {
            power: params.power,
            bailout_radius: params.bailout_radius,
            color_cycle_speed: params.color_cycle_speed,
            fallback: params.fallback,
            execution: ExecutionMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub size: usize,
    pub style: PaletteStyleKind,
    pub interpolation: Interpolation,
    pub background: Colour,
    /// Flat RGBA table loaded instead of generating one.
    pub file: Option<PathBuf>,
}

impl PaletteConfig {
    /// Loads the configured palette file, or generates the table when none is set.
    pub fn build(&self) -> Result<Palette, ResourceError> {
        let palette = match &self.file {
            Some(path) => read_palette_file(path)?,
            None => Palette::generate(self.size, self.style)?,
        };

        Ok(palette
            .with_background(self.background)
            .with_interpolation(self.interpolation))
    }

    /// Same table with a different generated style.
    pub fn build_style(&self, style: PaletteStyleKind) -> Result<Palette, ResourceError> {
        Self {
            style,
            file: None,
            ..self.clone()
        }
        .build()
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_PALETTE_SIZE,
            style: PaletteStyleKind::default(),
            interpolation: Interpolation::default(),
            background: Colour::BLACK,
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub render: RenderConfig,
    pub budget: BudgetSettings,
    pub palette: PaletteConfig,
    pub input: InputSettings,
}

impl ExplorerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;

        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn resolution(&self) -> Result<Resolution, ConfigError> {
        Ok(Resolution::new(self.window.width, self.window.height)?)
    }

    pub fn viewport_state(&self) -> Result<ViewportState, ConfigError> {
        Ok(ViewportState::new(
            self.view.center,
            self.view.scale,
            self.resolution()?,
        )?)
    }

    /// Checks every section; the first invalid field wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let state = self.viewport_state()?;

        if !self.view.limits.is_valid() {
            return Err(ConfigError::InvalidLimits);
        }
        ViewportController::new(state, self.view.limits)?;

        let frame_rate_hz = self.window.frame_rate_hz;
        if !frame_rate_hz.is_finite() || frame_rate_hz <= 0.0 {
            return Err(ConfigError::InvalidFrameRate { frame_rate_hz });
        }

        self.render.parameters(self.budget.base_iterations).validate()?;
        self.budget.validate()?;

        if self.palette.file.is_none() {
            validate_size(self.palette.size)?;
        }

        self.validate_input()
    }

    fn validate_input(&self) -> Result<(), ConfigError> {
        let InputSettings {
            key_pan_fraction,
            key_zoom_rate,
            scroll_zoom_base,
        } = self.input;

        if !key_pan_fraction.is_finite() || key_pan_fraction < 0.0 {
            return Err(ConfigError::InvalidInputSetting {
                name: "key_pan_fraction",
                value: key_pan_fraction,
            });
        }

        // a rate of one or more would zoom in to a zero scale
        if !key_zoom_rate.is_finite() || !(0.0..1.0).contains(&key_zoom_rate) {
            return Err(ConfigError::InvalidInputSetting {
                name: "key_zoom_rate",
                value: key_zoom_rate,
            });
        }

        if !scroll_zoom_base.is_finite() || scroll_zoom_base <= 0.0 {
            return Err(ConfigError::InvalidInputSetting {
                name: "scroll_zoom_base",
                value: scroll_zoom_base,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::core::budget::errors::BudgetError;
    use crate::core::budget::growth::BudgetGrowth;
    use crate::core::data::resolution::ResolutionError;
    use crate::core::fractals::escape_time::errors::EscapeTimeError;
    use crate::core::palette::errors::PaletteError;
    use crate::core::viewport::errors::ViewportError;

    #[test]
    fn default_config_is_valid() {
        let config = ExplorerConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.window.frame_rate_hz, 30.0);
        assert_eq!(config.view.center, Complex::new(-0.5, 0.0));
        assert_eq!(config.palette.size, 1024);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ExplorerConfig::from_json_str(
            r#"{
                "window": { "width": 320 },
                "render": { "power": 3, "fallback": "strict" },
                "budget": { "growth": { "strategy": "fixed" } },
                "palette": { "style": "fire" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.render.power, 3);
        assert_eq!(config.render.fallback, NumericFallback::Strict);
        assert_eq!(config.budget.growth, BudgetGrowth::Fixed);
        assert_eq!(config.budget.hard_cap, 10_000);
        assert_eq!(config.palette.style, PaletteStyleKind::Fire);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = ExplorerConfig::from_json_str("{ \"window\": ");

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn validate_rejects_each_invalid_field() {
        let mut zero_width = ExplorerConfig::default();
        zero_width.window.width = 0;
        assert!(matches!(zero_width.validate(), Err(ConfigError::Resolution(_))));

        let mut bad_scale = ExplorerConfig::default();
        bad_scale.view.scale = -1.0;
        assert!(matches!(bad_scale.validate(), Err(ConfigError::View(_))));

        let mut bad_power = ExplorerConfig::default();
        bad_power.render.power = 1;
        assert!(matches!(
            bad_power.validate(),
            Err(ConfigError::Render(EscapeTimeError::PowerTooSmall { power: 1 }))
        ));

        let mut bad_bailout = ExplorerConfig::default();
        bad_bailout.render.bailout_radius = 0.0;
        assert!(matches!(bad_bailout.validate(), Err(ConfigError::Render(_))));

        let mut bad_speed = ExplorerConfig::default();
        bad_speed.render.color_cycle_speed = 0.0;
        assert!(matches!(bad_speed.validate(), Err(ConfigError::Render(_))));

        let mut bad_budget = ExplorerConfig::default();
        bad_budget.budget.min_iterations = 20_000;
        assert!(matches!(
            bad_budget.validate(),
            Err(ConfigError::Budget(BudgetError::MinAboveCap { .. }))
        ));

        let mut bad_growth = ExplorerConfig::default();
        bad_growth.budget.growth = BudgetGrowth::Linear { slope: -2.0 };
        assert!(matches!(bad_growth.validate(), Err(ConfigError::Budget(_))));

        let mut empty_palette = ExplorerConfig::default();
        empty_palette.palette.size = 0;
        assert!(matches!(
            empty_palette.validate(),
            Err(ConfigError::Palette(PaletteError::EmptyPalette))
        ));

        let mut bad_rate = ExplorerConfig::default();
        bad_rate.window.frame_rate_hz = 0.0;
        assert!(matches!(
            bad_rate.validate(),
            Err(ConfigError::InvalidFrameRate { .. })
        ));

        let mut bad_limits = ExplorerConfig::default();
        bad_limits.view.limits.min_scale = 0.0;
        assert!(matches!(bad_limits.validate(), Err(ConfigError::InvalidLimits)));

        let mut no_room = ExplorerConfig::default();
        no_room.view.limits.max_center_abs = 0.0;
        assert!(matches!(no_room.validate(), Err(ConfigError::InvalidLimits)));

        let mut bad_zoom = ExplorerConfig::default();
        bad_zoom.input.key_zoom_rate = 1.5;
        assert!(matches!(
            bad_zoom.validate(),
            Err(ConfigError::InvalidInputSetting {
                name: "key_zoom_rate",
                ..
            })
        ));
    }

    #[test]
    fn initial_view_must_sit_inside_limits() {
        let wide = ExplorerConfig::from_json_str(r#"{ "view": { "scale": 50.0 } }"#).unwrap();
        assert!(matches!(
            wide.validate(),
            Err(ConfigError::View(ViewportError::ScaleOutsideLimits { .. }))
        ));

        let mut deep = ExplorerConfig::default();
        deep.view.scale = 1e-20;
        assert!(matches!(
            deep.validate(),
            Err(ConfigError::View(ViewportError::ScaleOutsideLimits { .. }))
        ));

        let mut far = ExplorerConfig::default();
        far.view.center = Complex::new(-150.0, 0.0);
        assert!(matches!(
            far.validate(),
            Err(ConfigError::View(ViewportError::CenterOutsideLimits { .. }))
        ));
    }

    #[test]
    fn oversized_window_is_rejected() {
        let mut config = ExplorerConfig::default();
        config.window.width = u32::MAX;
        config.window.height = u32::MAX;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Resolution(ResolutionError::TooLarge { .. }))
        ));
    }

    #[test]
    fn palette_config_builds_generated_table() {
        let config = PaletteConfig {
            size: 8,
            background: Colour::rgb(1, 1, 1),
            ..PaletteConfig::default()
        };

        let palette = config.build().unwrap();

        assert_eq!(palette.len(), 8);
        assert_eq!(palette.background(), Colour::rgb(1, 1, 1));
        assert_eq!(palette.style(), Some(PaletteStyleKind::Rainbow));
        assert_eq!(
            config.build_style(PaletteStyleKind::Fire).unwrap().style(),
            Some(PaletteStyleKind::Fire)
        );
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "view": {{ "scale": 0.25 }} }}"#).unwrap();

        let config = ExplorerConfig::load(file.path()).unwrap();

        assert_eq!(config.view.scale, 0.25);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let result = ExplorerConfig::load(&missing);

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
