/*
 * mod.rs
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

//! Channel configuration and outbound buffer estimation.
//!
//! `DefaultChannelConfig` stores every setting. `StreamBufferConfig` fixes the size
//! estimator to one bound to the stream's flow-control window and rejects replacement.

mod config;
mod estimator;
mod stream_config;

pub use config::{ChannelConfig, DefaultChannelConfig};
pub use estimator::{
    BufferWatermarks, FlowControlledEstimator, OutboundFrame, SizeEstimator, WireSizeEstimator,
    Writability, DEFAULT_HIGH_WATERMARK, DEFAULT_LOW_WATERMARK,
};
pub use stream_config::StreamBufferConfig;
