/*
 * estimator.rs
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

//! Outbound buffer size estimation and write watermarks.

use crate::error::ConfigError;
use crate::h2::{
    FlowControlWindow, FRAME_HEADER_LENGTH, TYPE_DATA, TYPE_HEADERS, TYPE_RST_STREAM,
    TYPE_WINDOW_UPDATE,
};

pub const DEFAULT_LOW_WATERMARK: usize = 32 * 1024;
pub const DEFAULT_HIGH_WATERMARK: usize = 64 * 1024;

/// Low/high thresholds for writability. Always `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferWatermarks {
    pub low: usize,
    pub high: usize,
}

impl BufferWatermarks {
    pub fn new(low: usize, high: usize) -> Result<Self, ConfigError> {
        if low > high {
            return Err(ConfigError::InvalidWatermarks { low, high });
        }
        Ok(Self { low, high })
    }
}

impl Default for BufferWatermarks {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW_WATERMARK,
            high: DEFAULT_HIGH_WATERMARK,
        }
    }
}

/// A frame queued on a stream's outbound buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundFrame {
    /// `padding` counts every padding octet including the Pad Length field.
    Data { payload_len: usize, padding: usize },
    Headers { block_len: usize },
    WindowUpdate,
    RstStream,
}

impl OutboundFrame {
    /// HTTP/2 frame type octet.
    pub fn frame_type(&self) -> u8 {
        match self {
            OutboundFrame::Data { .. } => TYPE_DATA,
            OutboundFrame::Headers { .. } => TYPE_HEADERS,
            OutboundFrame::WindowUpdate => TYPE_WINDOW_UPDATE,
            OutboundFrame::RstStream => TYPE_RST_STREAM,
        }
    }

    /// True for frames that consume stream flow-control credit.
    pub fn is_flow_controlled(&self) -> bool {
        self.frame_type() == TYPE_DATA
    }
}

/// Sizes queued frames and derives the effective watermarks for a channel.
pub trait SizeEstimator {
    /// Bytes this frame counts against the outbound buffer.
    fn estimate(&self, frame: &OutboundFrame) -> usize;

    /// Effective watermarks given the configured ones.
    fn watermarks(&self, configured: BufferWatermarks) -> BufferWatermarks;
}

/// Counts full wire size and uses the configured watermarks unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireSizeEstimator;

impl SizeEstimator for WireSizeEstimator {
    fn estimate(&self, frame: &OutboundFrame) -> usize {
        FRAME_HEADER_LENGTH
            + match *frame {
                OutboundFrame::Data {
                    payload_len,
                    padding,
                } => payload_len + padding,
                OutboundFrame::Headers { block_len } => block_len,
                OutboundFrame::WindowUpdate | OutboundFrame::RstStream => 4,
            }
    }

    fn watermarks(&self, configured: BufferWatermarks) -> BufferWatermarks {
        configured
    }
}

/// Estimator bound to a stream's live flow-control window.
///
/// Only flow-controlled bytes (DATA payload and padding) count. The high watermark is
/// capped by the current window and the low watermark by the high one, so a stream with
/// no credit is never writable. The window is read on every call.
#[derive(Debug, Clone)]
pub struct FlowControlledEstimator<W> {
    window: W,
}

impl<W: FlowControlWindow> FlowControlledEstimator<W> {
    pub fn new(window: W) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &W {
        &self.window
    }
}

impl<W: FlowControlWindow> SizeEstimator for FlowControlledEstimator<W> {
    fn estimate(&self, frame: &OutboundFrame) -> usize {
        match *frame {
            OutboundFrame::Data {
                payload_len,
                padding,
            } => payload_len + padding,
            _ => 0,
        }
    }

    fn watermarks(&self, configured: BufferWatermarks) -> BufferWatermarks {
        let available = self.window.available().max(0);
        let window = usize::try_from(available).unwrap_or(usize::MAX);
        let high = configured.high.min(window);
        let low = configured.low.min(high);
        tracing::trace!(window = available, low, high, "derived watermarks");
        BufferWatermarks { low, high }
    }
}

/// Writability with hysteresis: becomes unwritable above `high`, writable again below `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Writability {
    writable: bool,
}

impl Writability {
    pub fn new() -> Self {
        Self { writable: true }
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Re-evaluate for `pending` buffered bytes. Returns true if writability changed.
    pub fn update(&mut self, pending: usize, watermarks: BufferWatermarks) -> bool {
        let next = if self.writable {
            pending < watermarks.high || (pending == 0 && watermarks.high > 0)
        } else {
            pending < watermarks.low || (pending == 0 && watermarks.high > 0)
        };
        let changed = next != self.writable;
        self.writable = next;
        changed
    }
}

impl Default for Writability {
    fn default() -> Self {
        Self::new()
    }
}
