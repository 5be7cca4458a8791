/*
 * config.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Framekit, an HTTP framing and stream buffering library.
 *
 * Framekit is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Framekit is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Framekit.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Channel settings: write watermarks, auto-read and initial stream window.
//! Stored as JSON (default ~/.framekit/channel.json); a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::channel::{DEFAULT_HIGH_WATERMARK, DEFAULT_LOW_WATERMARK};
use crate::error::ConfigError;
use crate::h2::{DEFAULT_INITIAL_WINDOW_SIZE, MAX_WINDOW_SIZE};

/// Settings applied to new channels. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSettings {
    pub write_buffer_low: usize,
    pub write_buffer_high: usize,
    pub auto_read: bool,
    pub initial_window_size: u32,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            write_buffer_low: DEFAULT_LOW_WATERMARK,
            write_buffer_high: DEFAULT_HIGH_WATERMARK,
            auto_read: true,
            initial_window_size: DEFAULT_INITIAL_WINDOW_SIZE,
        }
    }
}

impl ChannelSettings {
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        let settings: ChannelSettings =
            serde_json::from_slice(data).map_err(|e| ConfigError::Load(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        serde_json::to_vec_pretty(self).map_err(|e| ConfigError::Load(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.write_buffer_low > self.write_buffer_high {
            return Err(ConfigError::InvalidWatermarks {
                low: self.write_buffer_low,
                high: self.write_buffer_high,
            });
        }
        if self.initial_window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::InvalidWindow(self.initial_window_size));
        }
        Ok(())
    }
}

/// Default config directory: ~/.framekit.
pub fn default_config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from).map(|h| h.join(".framekit"))
}

/// Default settings path: ~/.framekit/channel.json.
pub fn default_settings_path() -> Option<PathBuf> {
    default_config_dir().map(|d| d.join("channel.json"))
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<ChannelSettings, ConfigError> {
    match fs::read(path) {
        Ok(data) => ChannelSettings::from_json(&data),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(ChannelSettings::default())
        }
        Err(e) => Err(ConfigError::Load(format!("{}: {}", path.display(), e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let s = ChannelSettings::from_json(br#"{"write_buffer_high": 131072}"#).unwrap();
        assert_eq!(s.write_buffer_high, 131_072);
        assert_eq!(s.write_buffer_low, DEFAULT_LOW_WATERMARK);
        assert!(s.auto_read);
        assert_eq!(s.initial_window_size, DEFAULT_INITIAL_WINDOW_SIZE);
    }

    #[test]
    fn rejects_invalid() {
        assert!(matches!(
            ChannelSettings::from_json(br#"{"write_buffer_low": 10, "write_buffer_high": 5}"#),
            Err(ConfigError::InvalidWatermarks { low: 10, high: 5 })
        ));
        assert_eq!(
            ChannelSettings::from_json(br#"{"initial_window_size": 4294967295}"#),
            Err(ConfigError::InvalidWindow(u32::MAX))
        );
        assert!(ChannelSettings::from_json(b"not json").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("channel.json");
        assert_eq!(load_settings(&path).unwrap(), ChannelSettings::default());

        let custom = ChannelSettings {
            auto_read: false,
            initial_window_size: 1 << 20,
            ..ChannelSettings::default()
        };
        fs::write(&path, custom.to_json().unwrap()).unwrap();
        assert_eq!(load_settings(&path).unwrap(), custom);
    }
}
