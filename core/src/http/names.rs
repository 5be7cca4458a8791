/*
 * names.rs
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

//! Header names and values used by framing decisions.

// Header names
pub const CONNECTION: &str = "Connection";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const EXPECT: &str = "Expect";
pub const SEC_WEBSOCKET_KEY1: &str = "Sec-WebSocket-Key1";
pub const SEC_WEBSOCKET_KEY2: &str = "Sec-WebSocket-Key2";
pub const SEC_WEBSOCKET_ORIGIN: &str = "Sec-WebSocket-Origin";
pub const SEC_WEBSOCKET_LOCATION: &str = "Sec-WebSocket-Location";

// Header values
pub const CLOSE: &str = "close";
pub const KEEP_ALIVE: &str = "keep-alive";
pub const CHUNKED: &str = "chunked";
pub const CONTINUE: &str = "100-continue";
pub const CHARSET: &str = "charset=";
