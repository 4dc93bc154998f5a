use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use crate::error::PlotErr;
use crate::plot::PlotConfig;

pub const ENV_OUT: &str = "PLANE_GEOM_OUT";
pub const ENV_LOG: &str = "PLANE_GEOM_LOG";
pub const ENV_NO_PLOT: &str = "PLANE_GEOM_NO_PLOT";

pub const DEFAULT_OUT: &str = "points_and_rect.svg";
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Settings for the demonstration binary.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub out_path: PathBuf,
    pub log_level: Level,
    pub write_plot: bool,
    pub plot: PlotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT),
            log_level: DEFAULT_LOG_LEVEL,
            write_plot: true,
            plot: PlotConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, PlotErr> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset
    /// keys. Blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PlotErr> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();
        if let Some(out) = get(ENV_OUT) {
            config.out_path = PathBuf::from(out);
        }
        if let Some(level) = get(ENV_LOG) {
            config.log_level = Level::from_str(&level)
                .map_err(|_| PlotErr::InvalidLogLevel(level))?;
        }
        if let Some(flag) = get(ENV_NO_PLOT) {
            config.write_plot = !parse_flag(&flag)?;
        }
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool, PlotErr> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PlotErr::InvalidFlag(value.to_string())),
    }
}
