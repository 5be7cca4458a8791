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

//! HTTP message framing: headers, version, message head, framing decisions and
//! Content-Type scanning.
//!
//! Design:
//! - `Headers` is an ordered, case-insensitive multi-map owned by each `Message`.
//! - Framing functions are stateless and recompute from headers on every call.
//! - Only the targeted token rules needed for framing are parsed; no full header grammar.

mod charset;
mod headers;
mod message;
mod version;

pub mod content_type;
pub mod framing;
pub mod h1;
pub mod names;

pub use charset::Charset;
pub use framing::{BodyFraming, FramingDecision, LengthFallback};
pub use headers::Headers;
pub use message::{Message, MessageKind, Method};
pub use version::ProtocolVersion;
