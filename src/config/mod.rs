use crate::core::calculator::totals::TotalsUnit;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::success;
use crate::utils::colors::is_hex_colour;
use crate::utils::date::format_clock;
use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Unit of the `totals` values sent by the planner
    #[serde(default)]
    pub totals_unit: TotalsUnit,
    #[serde(default = "default_tolerance")]
    pub totals_tolerance_minutes: f64,
    /// strftime pattern for remark clock times
    #[serde(default = "default_remark_time_format")]
    pub remark_time_format: String,
    #[serde(default)]
    pub default_format: ExportFormat,
    #[serde(default = "default_svg_width")]
    pub svg_width: f64,
    #[serde(default = "default_svg_row_height")]
    pub svg_row_height: f64,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_tolerance() -> f64 {
    3.0
}
fn default_remark_time_format() -> String {
    "%H:%M".to_string()
}
fn default_svg_width() -> f64 {
    960.0
}
fn default_svg_row_height() -> f64 {
    40.0
}
fn default_stroke_color() -> String {
    "#0056b3".to_string()
}
fn default_wrap_width() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            totals_unit: TotalsUnit::default(),
            totals_tolerance_minutes: default_tolerance(),
            remark_time_format: default_remark_time_format(),
            default_format: ExportFormat::default(),
            svg_width: default_svg_width(),
            svg_row_height: default_svg_row_height(),
            stroke_color: default_stroke_color(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.rdriverlog)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rdriverlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdriverlog.conf")
    }

    /// Load configuration from `path` (or the standard file).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.totals_tolerance_minutes.is_finite() || self.totals_tolerance_minutes < 0.0 {
            return Err(AppError::Config(format!(
                "totals_tolerance_minutes must be a non-negative number, got {}",
                self.totals_tolerance_minutes
            )));
        }

        if StrftimeItems::new(&self.remark_time_format).any(|i| matches!(i, Item::Error)) {
            return Err(AppError::Config(format!(
                "remark_time_format '{}' is not a valid strftime pattern",
                self.remark_time_format
            )));
        }

        // parses, but may still need data a naive timestamp lacks (%z, %Z)
        if format_clock(NaiveDateTime::default(), &self.remark_time_format).is_none() {
            return Err(AppError::Config(format!(
                "remark_time_format '{}' cannot be printed for a local clock time",
                self.remark_time_format
            )));
        }

        if !is_hex_colour(&self.stroke_color) {
            return Err(AppError::Config(format!(
                "stroke_color '{}' must be a #rrggbb colour",
                self.stroke_color
            )));
        }

        if self.svg_width <= 0.0 || self.svg_row_height <= 0.0 {
            return Err(AppError::Config(
                "svg_width and svg_row_height must be positive".into(),
            ));
        }

        if self.wrap_width < 20 {
            return Err(AppError::Config("wrap_width must be at least 20".into()));
        }

        Ok(())
    }

    /// Write the default configuration file.
    pub fn init(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if is_test {
            return Ok(path);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        success(format!("Config file: {}", path.display()));

        Ok(path)
    }
}
