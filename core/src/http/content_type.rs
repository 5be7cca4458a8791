/*
 * content_type.rs
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

//! Content-Type scanning: mime type and charset only, no full parameter grammar.
//!
//! Slices are returned as-is (no trimming, no case folding). Only `charset_or` resolves
//! a name, and it never fails.

use super::charset::Charset;
use super::message::Message;
use super::names;

/// Mime type: text before the first `;`, or the whole value. `None` for an empty value.
pub fn mime_type(content_type: &str) -> Option<&str> {
    match content_type.find(';') {
        Some(i) => Some(&content_type[..i]),
        None if content_type.is_empty() => None,
        None => Some(content_type),
    }
}

/// Raw charset name: text after the first `charset=` (any case) up to the next `;` or end.
/// `None` when the token is missing or nothing follows it.
pub fn charset_slice(content_type: &str) -> Option<&str> {
    let start = find_ignore_ascii_case(content_type, names::CHARSET)? + names::CHARSET.len();
    let rest = &content_type[start..];
    let end = rest.find(';').unwrap_or(rest.len());
    match &rest[..end] {
        "" => None,
        name => Some(name),
    }
}

/// Resolve the charset parameter, falling back to `default` when absent or unknown.
pub fn charset_or(content_type: &str, default: Charset) -> Charset {
    let Some(name) = charset_slice(content_type) else {
        return default;
    };
    match Charset::for_name(name) {
        Ok(charset) => charset,
        Err(e) => {
            tracing::debug!(error = %e, fallback = %default, "charset lookup failed");
            default
        }
    }
}

/// Charset of the message's Content-Type header, or `default`.
pub fn message_charset(message: &Message, default: Charset) -> Charset {
    match message.headers.get(names::CONTENT_TYPE) {
        Some(value) => charset_or(value, default),
        None => default,
    }
}

/// Mime type of the message's Content-Type header.
pub fn message_mime_type(message: &Message) -> Option<&str> {
    message.headers.get(names::CONTENT_TYPE).and_then(mime_type)
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let n = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(n.len())
        .position(|w| w.eq_ignore_ascii_case(n))
}
