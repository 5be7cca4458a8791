/*
 * flow.rs
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

//! Outbound flow-control window of one stream.
//!
//! `StreamWindow` is a shared handle: the stream keeps one clone to account credit, and
//! the buffer estimator keeps another to read it. Only the stream's own frame-processing
//! context mutates it.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use super::frame::{error_to_string, ERROR_FLOW_CONTROL_ERROR, ERROR_PROTOCOL_ERROR, MAX_WINDOW_SIZE};
use crate::error::FramingError;

/// Read access to a stream's current outbound credit. May be negative after a
/// SETTINGS_INITIAL_WINDOW_SIZE decrease.
pub trait FlowControlWindow {
    fn available(&self) -> i64;
}

/// Any `Fn() -> i64` closure can serve as a window accessor.
impl<F> FlowControlWindow for F
where
    F: Fn() -> i64,
{
    fn available(&self) -> i64 {
        self()
    }
}

/// Shared outbound credit counter for one stream.
#[derive(Debug, Clone)]
pub struct StreamWindow {
    credit: Arc<AtomicI64>,
}

impl StreamWindow {
    pub fn new(initial: u32) -> Self {
        Self {
            credit: Arc::new(AtomicI64::new(initial.min(MAX_WINDOW_SIZE) as i64)),
        }
    }

    /// Spend credit for `n` bytes of DATA. Sending more than the window allows is an error.
    pub fn consume(&self, n: u32) -> Result<(), FramingError> {
        self.update(|cur| {
            let next = cur - n as i64;
            if next < 0 && n > 0 {
                None
            } else {
                Some(next)
            }
        })
        .map_err(|cur| {
            FramingError::FlowControl(format!(
                "{}: {} bytes exceed window {}",
                error_to_string(ERROR_FLOW_CONTROL_ERROR),
                n,
                cur
            ))
        })
    }

    /// Apply a WINDOW_UPDATE increment.
    pub fn increase(&self, increment: u32) -> Result<(), FramingError> {
        if increment == 0 {
            return Err(FramingError::FlowControl(format!(
                "{}: zero window increment",
                error_to_string(ERROR_PROTOCOL_ERROR)
            )));
        }
        self.update(|cur| {
            let next = cur + increment as i64;
            (next <= MAX_WINDOW_SIZE as i64).then_some(next)
        })
        .map_err(|cur| overflow(cur, increment as i64))
    }

    /// Shift the window by the change in SETTINGS_INITIAL_WINDOW_SIZE. The result may be
    /// negative but must not exceed 2^31-1.
    pub fn apply_initial_window_delta(&self, delta: i64) -> Result<(), FramingError> {
        self.update(|cur| {
            let next = cur + delta;
            (next <= MAX_WINDOW_SIZE as i64).then_some(next)
        })
        .map_err(|cur| overflow(cur, delta))
    }

    fn update<F>(&self, f: F) -> Result<(), i64>
    where
        F: FnMut(i64) -> Option<i64>,
    {
        self.credit
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, f)
            .map(|prev| {
                tracing::trace!(prev, now = self.credit.load(Ordering::Relaxed), "window");
            })
    }
}

fn overflow(cur: i64, delta: i64) -> FramingError {
    FramingError::FlowControl(format!(
        "{}: window {} + {} exceeds {}",
        error_to_string(ERROR_FLOW_CONTROL_ERROR),
        cur,
        delta,
        MAX_WINDOW_SIZE
    ))
}

impl FlowControlWindow for StreamWindow {
    fn available(&self) -> i64 {
        self.credit.load(Ordering::Acquire)
    }
}
