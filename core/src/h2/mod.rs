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

//! HTTP/2 stream flow-control window and the frame constants it needs.

mod flow;
mod frame;

pub use flow::{FlowControlWindow, StreamWindow};
pub use frame::{
    error_to_string, DEFAULT_INITIAL_WINDOW_SIZE, ERROR_FLOW_CONTROL_ERROR, ERROR_NO_ERROR,
    ERROR_PROTOCOL_ERROR, FRAME_HEADER_LENGTH, MAX_WINDOW_SIZE, TYPE_DATA, TYPE_HEADERS,
    TYPE_RST_STREAM, TYPE_WINDOW_UPDATE,
};
