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

//! Generic per-channel configuration.

use std::fmt;

use super::estimator::{BufferWatermarks, SizeEstimator, WireSizeEstimator};
use crate::config::ChannelSettings;
use crate::error::ConfigError;

/// Configuration surface shared by every channel kind.
pub trait ChannelConfig {
    /// Watermarks in effect right now.
    fn watermarks(&self) -> BufferWatermarks;

    fn set_watermarks(&mut self, watermarks: BufferWatermarks) -> Result<(), ConfigError>;

    fn size_estimator(&self) -> &dyn SizeEstimator;

    /// Replace the size estimator. Channels whose estimator is derived reject this.
    fn set_size_estimator(
        &mut self,
        estimator: Box<dyn SizeEstimator + Send>,
    ) -> Result<(), ConfigError>;

    fn auto_read(&self) -> bool;

    fn set_auto_read(&mut self, auto_read: bool);
}

/// Plain channel configuration: every setting is stored and replaceable.
pub struct DefaultChannelConfig {
    watermarks: BufferWatermarks,
    estimator: Box<dyn SizeEstimator + Send>,
    auto_read: bool,
}

impl DefaultChannelConfig {
    pub fn new() -> Self {
        Self {
            watermarks: BufferWatermarks::default(),
            estimator: Box::new(WireSizeEstimator),
            auto_read: true,
        }
    }

    pub fn from_settings(settings: &ChannelSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            watermarks: BufferWatermarks::new(settings.write_buffer_low, settings.write_buffer_high)?,
            estimator: Box::new(WireSizeEstimator),
            auto_read: settings.auto_read,
        })
    }
}

impl Default for DefaultChannelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DefaultChannelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultChannelConfig")
            .field("watermarks", &self.watermarks)
            .field("auto_read", &self.auto_read)
            .finish_non_exhaustive()
    }
}

impl ChannelConfig for DefaultChannelConfig {
    fn watermarks(&self) -> BufferWatermarks {
        self.estimator.watermarks(self.watermarks)
    }

    fn set_watermarks(&mut self, watermarks: BufferWatermarks) -> Result<(), ConfigError> {
        let checked = BufferWatermarks::new(watermarks.low, watermarks.high)?;
        self.watermarks = checked;
        Ok(())
    }

    fn size_estimator(&self) -> &dyn SizeEstimator {
        self.estimator.as_ref()
    }

    fn set_size_estimator(
        &mut self,
        estimator: Box<dyn SizeEstimator + Send>,
    ) -> Result<(), ConfigError> {
        self.estimator = estimator;
        Ok(())
    }

    fn auto_read(&self) -> bool {
        self.auto_read
    }

    fn set_auto_read(&mut self, auto_read: bool) {
        self.auto_read = auto_read;
    }
}
