use std::fs;
use std::path::Path;

use log::{error, info, warn};

use crate::api::Button;

pub const MAX_RADIUS: u32 = 20;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SowingConfig {
    #[serde(default = "default_consumable")]
    pub consumable: bool,

    #[serde(default = "default_radius")]
    pub scan_radius: u32,

    #[serde(default = "default_radius")]
    pub execution_radius: u32,

    #[serde(default)]
    pub always_sow: bool,

    #[serde(default = "default_prevent_fertilizer_waste")]
    pub prevent_fertilizer_waste: bool,

    #[serde(default)]
    pub marquee: bool,

    #[serde(default)]
    pub sow_anywhere: bool,

    #[serde(default = "default_trigger")]
    pub trigger: Button,
}

impl Default for SowingConfig {
    fn default() -> Self {
        SowingConfig {
            consumable: default_consumable(),
            scan_radius: default_radius(),
            execution_radius: default_radius(),
            always_sow: false,
            prevent_fertilizer_waste: default_prevent_fertilizer_waste(),
            marquee: false,
            sow_anywhere: false,
            trigger: default_trigger(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    UnknownOption { key: String },
    InvalidValue { key: String, value: String },
    Serialization(String),
    Io(String),
}

impl SowingConfig {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(data) => match serde_json::from_slice::<SowingConfig>(&data) {
                Ok(config) => {
                    info!("Uses {}", path.display());
                    config.clamped()
                }
                Err(error) => {
                    error!("Unable to parse config file, {error:?}");
                    SowingConfig::default()
                }
            },
            _ => {
                info!("Uses default config, {} not found", path.display());
                SowingConfig::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(self)
            .map_err(|error| ConfigError::Serialization(error.to_string()))?;
        fs::write(path, data).map_err(|error| ConfigError::Io(error.to_string()))
    }

    /// Changes one option from its textual form, as a settings menu would.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "consumable" => self.consumable = parse_flag(key, value)?,
            "scan_radius" => self.scan_radius = parse_radius(key, value)?,
            "execution_radius" => self.execution_radius = parse_radius(key, value)?,
            "always_sow" => self.always_sow = parse_flag(key, value)?,
            "prevent_fertilizer_waste" => self.prevent_fertilizer_waste = parse_flag(key, value)?,
            "marquee" => self.marquee = parse_flag(key, value)?,
            "sow_anywhere" => self.sow_anywhere = parse_flag(key, value)?,
            "trigger" => {
                let button = serde_json::Value::String(value.to_string());
                self.trigger = serde_json::from_value(button).map_err(|_| invalid(key, value))?
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    key: key.to_string(),
                })
            }
        }
        info!("Option {key} set to {value}");
        Ok(())
    }

    fn clamped(mut self) -> Self {
        self.scan_radius = clamp_radius("scan_radius", self.scan_radius);
        self.execution_radius = clamp_radius("execution_radius", self.execution_radius);
        self
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_radius(key: &str, value: &str) -> Result<u32, ConfigError> {
    let radius = value.trim().parse().map_err(|_| invalid(key, value))?;
    Ok(clamp_radius(key, radius))
}

fn clamp_radius(key: &str, radius: u32) -> u32 {
    if radius > MAX_RADIUS {
        warn!("Option {key} is too large ({radius}), uses {MAX_RADIUS}");
        MAX_RADIUS
    } else {
        radius
    }
}

fn default_consumable() -> bool {
    true
}

fn default_radius() -> u32 {
    1
}

fn default_prevent_fertilizer_waste() -> bool {
    true
}

fn default_trigger() -> Button {
    Button::MouseRight
}
