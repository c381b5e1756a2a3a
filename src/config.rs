//! Display preferences shared with the configuration store.
//!
//! The store itself (file format, load/save) lives outside this crate. The
//! engine only sees the [`DisplayConfig`] trait: it reads the reversal flag
//! on every lookup and writes back the stand shape after each resize.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::LayoutVersion;
use crate::square::ViewSettings;

pub const ENV_BOARD_REVERSE: &str = "SHOGIBAN_BOARD_REVERSE";
pub const ENV_HAND_LAYOUT: &str = "SHOGIBAN_HAND_LAYOUT";

/// The configuration fields the engine reads and writes.
pub trait DisplayConfig {
    /// Board drawn from the second player's side.
    fn board_reverse(&self) -> bool;

    /// Current stand shape.
    fn hand_layout_version(&self) -> LayoutVersion;

    /// Record the stand shape chosen for the current window.
    fn set_hand_layout_version(&mut self, version: LayoutVersion);

    /// Snapshot of the geometry-affecting settings.
    fn view_settings(&self) -> ViewSettings {
        ViewSettings { reversed: self.board_reverse(), layout: self.hand_layout_version() }
    }
}

/// In-memory display preferences.
///
/// Image version fields select artwork and are carried for the renderer;
/// the engine itself only uses `board_reverse` and `hand_layout_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GlobalConfig {
    pub board_image_version: i32,
    pub tatami_image_version: i32,
    pub piece_image_version: i32,
    /// Coordinates drawn around the board: 0 hidden, 1 standard, 2 chess style.
    pub board_number_image_version: i32,
    /// Highlight colour of the last move's destination: 1 vermilion, 2 blue, 3 green.
    pub last_move_color_type: i32,
    pub board_reverse: bool,
    #[serde(rename = "KomadaiImageVersion")]
    pub hand_layout_version: LayoutVersion,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            board_image_version: 1,
            tatami_image_version: 1,
            piece_image_version: 1,
            board_number_image_version: 1,
            last_move_color_type: 1,
            board_reverse: false,
            hand_layout_version: LayoutVersion::Wide,
        }
    }
}

impl GlobalConfig {
    /// Defaults overlaid with environment overrides.
    ///
    /// Optional:
    /// - `SHOGIBAN_BOARD_REVERSE`: `true`/`false`/`1`/`0`
    /// - `SHOGIBAN_HAND_LAYOUT`: `1` (wide) or `2` (tall)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(ENV_BOARD_REVERSE) {
            config.board_reverse = parse_bool(ENV_BOARD_REVERSE, &raw)?;
        }
        if let Ok(raw) = std::env::var(ENV_HAND_LAYOUT) {
            config.hand_layout_version = parse_layout(ENV_HAND_LAYOUT, &raw)?;
        }
        Ok(config)
    }
}

impl DisplayConfig for GlobalConfig {
    fn board_reverse(&self) -> bool {
        self.board_reverse
    }

    fn hand_layout_version(&self) -> LayoutVersion {
        self.hand_layout_version
    }

    fn set_hand_layout_version(&mut self, version: LayoutVersion) {
        self.hand_layout_version = version;
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse { key, value: raw.to_owned() }),
    }
}

fn parse_layout(key: &'static str, raw: &str) -> Result<LayoutVersion, ConfigError> {
    let value: i32 = raw.trim().parse().map_err(|_| ConfigError::Parse { key, value: raw.to_owned() })?;
    LayoutVersion::try_from(value)
}
