use serde::{Deserialize, Deserializer};

/// Target prefix of everything the config loader logs: skipped effects,
/// broken recipes, duplicate abilities.
pub const CONFIG_TARGET: &str = "infusion_config";

/// The `[logging]` table
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: LevelFilter,
    /// Level for [`CONFIG_TARGET`] only, e.g. `Debug` to see why an effect was
    /// dropped without turning on debug output everywhere. Unset follows `level`.
    pub config_level: Option<LevelFilter>,
    /// Let `RUST_LOG` override `level`
    pub env: bool,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::Info,
            config_level: None,
            env: false,
            threads: false,
            color: true,
            timestamp: true,
        }
    }
}

impl LoggingConfig {
    /// Per-target levels to install on top of `level`
    pub fn module_levels(&self) -> Vec<(&'static str, log::LevelFilter)> {
        self.config_level
            .map(|level| (CONFIG_TARGET, level.into()))
            .into_iter()
            .collect()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum LevelFilter {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LevelFilter {
    /// Level names in any case, `warning` is accepted for `Warn`.
    pub fn from_name(name: &str) -> Option<Self> {
        let level = match name.to_ascii_lowercase().as_str() {
            "off" => Self::Off,
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => return None,
        };
        Some(level)
    }
}

impl<'de> Deserialize<'de> for LevelFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_name(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "Unknown log level {s}, expected one of Off, Error, Warn, Info, Debug, Trace"
            ))
        })
    }
}

impl From<LevelFilter> for log::LevelFilter {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        }
    }
}
