//! Application configuration.
//!
//! Loaded once per invocation from `$XDG_CONFIG_HOME/thinkpad-rotate/config.toml`
//! and never written. Every section and key is optional; a missing file
//! means compiled-in defaults.
//!
//! ```toml
//! [screen]
//! internal = "eDP1"
//!
//! [rotate]
//! default_rotation = "left"
//! subpixels = true
//! subpixels_with_external = false
//! xrandr_bug_workaround = false
//!
//! [unity]
//! toggle_launcher = false
//!
//! [vkeyboard]
//! program = "onboard"
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::orientation::Rotation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub rotate: RotateConfig,
    #[serde(default)]
    pub unity: UnityConfig,
    #[serde(default)]
    pub vkeyboard: VkeyboardConfig,
    #[serde(default)]
    pub hooks: HooksConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// xrandr name of the built-in panel.
    pub internal: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            internal: "LVDS1".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotateConfig {
    /// Direction used when none is given and the lid is open.
    pub default_rotation: String,
    pub subpixels: bool,
    /// Also fix the subpixel order while an external screen is attached.
    pub subpixels_with_external: bool,
    /// Refuse to rotate from a hook unless an external screen is attached.
    pub xrandr_bug_workaround: bool,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            default_rotation: "right".into(),
            subpixels: true,
            subpixels_with_external: false,
            xrandr_bug_workaround: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnityConfig {
    pub toggle_launcher: bool,
}

impl Default for UnityConfig {
    fn default() -> Self {
        Self {
            toggle_launcher: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VkeyboardConfig {
    pub program: String,
}

impl Default for VkeyboardConfig {
    fn default() -> Self {
        Self {
            program: "kvkbd".into(),
        }
    }
}

/// Paths of the user scripts run around a rotation. `~` is expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    pub prerotate: String,
    pub postrotate: String,
}

impl Default for HooksConfig {
    fn default() -> Self {
        let hooks = config_dir().join("hooks");
        Self {
            prerotate: hooks.join("prerotate").to_string_lossy().into_owned(),
            postrotate: hooks.join("postrotate").to_string_lossy().into_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Pointer devices whose name matches are left alone when remapping.
    pub exclude: Option<String>,
}

impl InputConfig {
    pub fn exclude_pattern(&self) -> Result<Option<Regex>> {
        self.exclude
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern)
                    .map_err(|e| Error::Config(format!("invalid input.exclude: {}", e)))
            })
            .transpose()
    }
}

impl Config {
    /// Load and validate configuration from a TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            _ => {
                let config = Self::load(path)?;
                info!("loaded config from {}", path.display());
                Ok(config)
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Fail now rather than halfway through a rotation.
    pub fn validate(&self) -> Result<()> {
        self.rotate.default_rotation.parse::<Rotation>()?;
        self.input.exclude_pattern()?;
        if self.screen.internal.is_empty() {
            return Err(Error::Config("screen.internal must not be empty".into()));
        }
        Ok(())
    }

    /// Snapshot handed to hook scripts.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}

/// `$XDG_CONFIG_HOME/thinkpad-rotate`, falling back to `~/.config`.
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("thinkpad-rotate")
}

pub fn default_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Expand a leading `~/` to `$HOME`.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}
