/*
 * stream_config.rs
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

//! Configuration of one HTTP/2 stream channel.
//!
//! The size estimator is fixed at construction to a `FlowControlledEstimator` over the
//! stream's window; watermarks are derived from the window on every query rather than
//! stored, so frequent WINDOW_UPDATEs never rebuild configuration state.

use super::config::{ChannelConfig, DefaultChannelConfig};
use super::estimator::{BufferWatermarks, FlowControlledEstimator, SizeEstimator, Writability};
use crate::config::ChannelSettings;
use crate::error::ConfigError;
use crate::h2::{FlowControlWindow, StreamWindow};

/// Stream channel configuration whose estimator follows the stream's flow-control window.
#[derive(Debug)]
pub struct StreamBufferConfig<W> {
    base: DefaultChannelConfig,
    estimator: FlowControlledEstimator<W>,
}

impl<W: FlowControlWindow> StreamBufferConfig<W> {
    pub fn new(window: W) -> Self {
        Self::with_base(DefaultChannelConfig::new(), window)
    }

    /// Use `base` for the configured watermarks and auto-read flag.
    pub fn with_base(base: DefaultChannelConfig, window: W) -> Self {
        Self {
            base,
            estimator: FlowControlledEstimator::new(window),
        }
    }

    /// Watermarks as configured, before the window cap.
    pub fn configured_watermarks(&self) -> BufferWatermarks {
        self.base.watermarks()
    }

    pub fn window(&self) -> &W {
        self.estimator.window()
    }

    /// Re-evaluate `writability` for `pending` buffered bytes against the live watermarks.
    pub fn update_writability(&self, writability: &mut Writability, pending: usize) -> bool {
        writability.update(pending, self.watermarks())
    }
}

impl StreamBufferConfig<StreamWindow> {
    /// Channel for a new stream whose window opens at `initial_window_size`.
    /// The stream keeps a clone of `window()` to account credit.
    pub fn from_settings(settings: &ChannelSettings) -> Result<Self, ConfigError> {
        let base = DefaultChannelConfig::from_settings(settings)?;
        Ok(Self::with_base(base, StreamWindow::new(settings.initial_window_size)))
    }
}

impl<W: FlowControlWindow> ChannelConfig for StreamBufferConfig<W> {
    fn watermarks(&self) -> BufferWatermarks {
        self.estimator.watermarks(self.base.watermarks())
    }

    fn set_watermarks(&mut self, watermarks: BufferWatermarks) -> Result<(), ConfigError> {
        self.base.set_watermarks(watermarks)
    }

    fn size_estimator(&self) -> &dyn SizeEstimator {
        &self.estimator
    }

    fn set_size_estimator(
        &mut self,
        _estimator: Box<dyn SizeEstimator + Send>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("rejected size estimator replacement on stream channel");
        Err(ConfigError::OperationNotSupported(
            "stream channel size estimator is derived from flow control",
        ))
    }

    fn auto_read(&self) -> bool {
        self.base.auto_read()
    }

    fn set_auto_read(&mut self, auto_read: bool) {
        self.base.set_auto_read(auto_read);
    }
}
