/*
 * lib.rs
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

//! Framekit core: HTTP/1.x framing decisions and flow-control-aware stream buffering.
//!
//! - `http`: header container, message head, framing resolver, Content-Type scanning,
//!   charset registry and an HTTP/1.1 body decoder.
//! - `h2`: stream flow-control window handle and frame constants.
//! - `channel`: channel configuration with buffer watermarks and size estimation.
//! - `config`: channel settings loaded from JSON.

pub mod channel;
pub mod config;
pub mod error;
pub mod h2;
pub mod http;

pub use error::{CharsetError, ConfigError, FramingError};
