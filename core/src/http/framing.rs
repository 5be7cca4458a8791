/*
 * framing.rs
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

//! HTTP/1.x framing decisions derived from a message head.
//!
//! Every function reads the headers at call time; nothing is cached, since headers may
//! change between calls. Header comparisons are ASCII case-insensitive and a missing
//! header always takes the default path.
//!
//! - Keep-alive: `Connection: close` wins; otherwise the version default, with HTTP/1.0
//!   needing an explicit `Connection: keep-alive`.
//! - Body length: explicit `Content-Length`, then the pre-RFC 6455 WebSocket handshake
//!   length (8 for the request, 16 for the 101 response), then the caller's fallback.
//! - Chunked and `Content-Length` are mutually exclusive on outbound messages.
//! - `Expect` is only meaningful on HTTP/1.1+ requests.

use std::borrow::Cow;
use std::net::Ipv6Addr;

use super::headers::Headers;
use super::message::{Message, MessageKind, Method};
use super::names;
use super::version::ProtocolVersion;
use crate::error::FramingError;

/// What to do when no body length can be derived from the headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthFallback {
    /// Fail with `FramingError::MissingLength`.
    Required,
    /// Use this length.
    Default(u64),
}

/// Framing of one message, computed fresh on each call to `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingDecision {
    /// Known body length. Always `None` when `chunked`.
    pub content_length: Option<u64>,
    pub chunked: bool,
    pub keep_alive: bool,
}

impl FramingDecision {
    /// Derive the framing of `message` from its current headers.
    ///
    /// Transfer-Encoding overrides Content-Length (RFC 9112 §6.3). A Content-Length
    /// that is present but malformed is an error, not a missing length.
    pub fn resolve(message: &Message) -> Result<FramingDecision, FramingError> {
        let chunked = is_chunked(message);
        let content_length = if chunked {
            None
        } else {
            match content_length(message, LengthFallback::Required) {
                Ok(n) => Some(n),
                Err(FramingError::MissingLength) => None,
                Err(e) => return Err(e),
            }
        };
        Ok(FramingDecision {
            content_length,
            chunked,
            keep_alive: is_keep_alive(message),
        })
    }
}

/// How the body of an inbound message is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFraming {
    /// No body follows the head.
    Empty,
    Length(u64),
    Chunked,
    /// Body runs until the peer closes the connection (responses only).
    CloseDelimited,
}

/// Body framing for an inbound message. Responses to HEAD are not distinguished here;
/// the caller knows the request method and should treat those as `Empty`.
pub fn body_framing(message: &Message) -> Result<BodyFraming, FramingError> {
    if let Some(status) = message.status() {
        // the draft WebSocket handshake response carries a 16-byte body
        let handshake = status == 101 && websocket_content_length(message).is_some();
        if ((100..200).contains(&status) && !handshake) || status == 204 || status == 304 {
            return Ok(BodyFraming::Empty);
        }
    }
    let decision = FramingDecision::resolve(message)?;
    let framing = if decision.chunked {
        BodyFraming::Chunked
    } else if let Some(n) = decision.content_length {
        BodyFraming::Length(n)
    } else if message.is_request() {
        BodyFraming::Empty
    } else {
        BodyFraming::CloseDelimited
    };
    tracing::trace!(?framing, "body framing");
    Ok(framing)
}

// -- Keep-alive --------------------------------------------------------------

/// Whether the connection persists after this message.
pub fn is_keep_alive(message: &Message) -> bool {
    let headers = &message.headers;
    if headers.contains_value(names::CONNECTION, names::CLOSE, true) {
        return false;
    }
    if message.version.keep_alive_default {
        return true;
    }
    headers.contains_value(names::CONNECTION, names::KEEP_ALIVE, true)
}

/// Set or clear the Connection header so the message signals `keep_alive` for `version`.
///
/// | default     | keep_alive | action                     |
/// |-------------|------------|----------------------------|
/// | persistent  | true       | remove `Connection`        |
/// | persistent  | false      | `Connection: close`        |
/// | 1.0         | true       | `Connection: keep-alive`   |
/// | 1.0         | false      | remove `Connection`        |
pub fn set_keep_alive(headers: &mut Headers, version: ProtocolVersion, keep_alive: bool) {
    match (version.keep_alive_default, keep_alive) {
        (true, true) | (false, false) => {
            headers.remove(names::CONNECTION);
        }
        (true, false) => {
            headers.set(names::CONNECTION, names::CLOSE);
        }
        (false, true) => {
            headers.set(names::CONNECTION, names::KEEP_ALIVE);
        }
    }
}

// -- Content-Length ----------------------------------------------------------

/// Body length of `message`.
///
/// The explicit header wins unconditionally, even when a WebSocket handshake length also
/// applies. A malformed explicit value fails with `InvalidContentLength`.
pub fn content_length(message: &Message, fallback: LengthFallback) -> Result<u64, FramingError> {
    if let Some(value) = message.headers.get(names::CONTENT_LENGTH) {
        return parse_length(value);
    }
    if let Some(n) = websocket_content_length(message) {
        return Ok(n);
    }
    match fallback {
        LengthFallback::Default(n) => Ok(n),
        LengthFallback::Required => Err(FramingError::MissingLength),
    }
}

/// Implicit body length of a Hixie-76 WebSocket handshake, if this message is one.
pub fn websocket_content_length(message: &Message) -> Option<u64> {
    let headers = &message.headers;
    match &message.kind {
        MessageKind::Request {
            method: Method::Get,
            ..
        } if headers.contains(names::SEC_WEBSOCKET_KEY1)
            && headers.contains(names::SEC_WEBSOCKET_KEY2) =>
        {
            Some(8)
        }
        MessageKind::Response { status: 101 }
            if headers.contains(names::SEC_WEBSOCKET_ORIGIN)
                && headers.contains(names::SEC_WEBSOCKET_LOCATION) =>
        {
            Some(16)
        }
        _ => None,
    }
}

pub fn is_content_length_set(message: &Message) -> bool {
    message.headers.contains(names::CONTENT_LENGTH)
}

pub fn set_content_length(message: &mut Message, length: u64) {
    message.headers.set(names::CONTENT_LENGTH, length.to_string());
}

/// Collapse the Content-Length field values of a received message into one length.
///
/// Values may be repeated fields or a comma-separated list. Repeats are accepted only when
/// `allow_duplicates` is set and every value is identical (RFC 9110 §8.6). Returns
/// `Ok(None)` when there are no values.
pub fn normalize_content_length<'a, I>(
    values: I,
    allow_duplicates: bool,
) -> Result<Option<u64>, FramingError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut first: Option<&str> = None;
    let mut count = 0usize;
    for value in values {
        for token in value.split(',').map(str::trim) {
            count += 1;
            match first {
                None => first = Some(token),
                Some(f) if !allow_duplicates || f != token => {
                    return Err(FramingError::ConflictingContentLength);
                }
                Some(_) => {}
            }
        }
    }
    match first {
        None => Ok(None),
        Some(token) => {
            if count > 1 {
                tracing::trace!(count, "collapsed duplicate Content-Length values");
            }
            parse_length(token).map(Some)
        }
    }
}

/// Plain unsigned decimal; surrounding whitespace allowed, sign and inner whitespace not.
fn parse_length(value: &str) -> Result<u64, FramingError> {
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FramingError::InvalidContentLength(value.to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| FramingError::InvalidContentLength(value.to_string()))
}

// -- Transfer-Encoding -------------------------------------------------------

/// True if any Transfer-Encoding token is `chunked`.
pub fn is_chunked(message: &Message) -> bool {
    message
        .headers
        .contains_value(names::TRANSFER_ENCODING, names::CHUNKED, true)
}

/// Enable chunked framing (dropping Content-Length), or strip the `chunked` token while
/// keeping any other codings in order.
pub fn set_chunked(message: &mut Message, chunked: bool) {
    let headers = &mut message.headers;
    if chunked {
        headers.set(names::TRANSFER_ENCODING, names::CHUNKED);
        headers.remove(names::CONTENT_LENGTH);
        return;
    }
    if !headers.contains(names::TRANSFER_ENCODING) {
        return;
    }
    let remaining: Vec<String> = headers
        .get_all(names::TRANSFER_ENCODING)
        .filter_map(|value| {
            let kept: Vec<&str> = value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case(names::CHUNKED))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(kept.join(", "))
            }
        })
        .collect();
    if remaining.is_empty() {
        headers.remove(names::TRANSFER_ENCODING);
    } else {
        headers.set_all(names::TRANSFER_ENCODING, remaining);
    }
}

// -- Expect ------------------------------------------------------------------

/// `Expect` is only honoured on HTTP/1.1+ requests.
fn is_expect_header_valid(message: &Message) -> bool {
    message.is_request() && message.version.at_least_1_1()
}

pub fn is_100_continue_expected(message: &Message) -> bool {
    is_expect_header_valid(message)
        && message
            .headers
            .get_all(names::EXPECT)
            .any(|v| v.trim().eq_ignore_ascii_case(names::CONTINUE))
}

/// True if the request carries an expectation other than `100-continue`.
pub fn is_unsupported_expectation(message: &Message) -> bool {
    if !is_expect_header_valid(message) {
        return false;
    }
    match message.headers.get(names::EXPECT) {
        Some(value) => !value.trim().eq_ignore_ascii_case(names::CONTINUE),
        None => false,
    }
}

pub fn set_expect_100_continue(message: &mut Message, expected: bool) {
    if expected {
        message.headers.set(names::EXPECT, names::CONTINUE);
    } else {
        message.headers.remove(names::EXPECT);
    }
}

// -- Request target ----------------------------------------------------------

/// `origin-form` request target (RFC 9112 §3.2.1), e.g. `/where?q=now`.
pub fn is_origin_form(target: &str) -> bool {
    target.starts_with('/')
}

/// `asterisk-form` request target, used only with OPTIONS.
pub fn is_asterisk_form(target: &str) -> bool {
    target == "*"
}

/// Host as it must appear in a Host header or authority: IPv6 literals are bracketed.
pub fn format_hostname(host: &str) -> Cow<'_, str> {
    if host.parse::<Ipv6Addr>().is_ok() {
        Cow::Owned(format!("[{}]", host))
    } else {
        Cow::Borrowed(host)
    }
}
