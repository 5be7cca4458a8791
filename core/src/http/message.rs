/*
 * message.rs
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

//! HTTP message: request or response head with version and headers.

use super::headers::Headers;
use super::version::ProtocolVersion;

/// HTTP request method. Parsing is case-sensitive; unknown methods are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
    Connect,
    Trace,
    Other(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Method {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            "PATCH" => Method::Patch,
            "CONNECT" => Method::Connect,
            "TRACE" => Method::Trace,
            other => Method::Other(other.to_string()),
        }
    }
}

/// Request or response specifics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Request { method: Method, target: String },
    Response { status: u16 },
}

/// A message head. Owns its headers exclusively; framing helpers read or mutate them on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub version: ProtocolVersion,
    pub headers: Headers,
    pub kind: MessageKind,
}

impl Message {
    pub fn request(method: Method, target: impl Into<String>, version: ProtocolVersion) -> Self {
        Self {
            version,
            headers: Headers::new(),
            kind: MessageKind::Request {
                method,
                target: target.into(),
            },
        }
    }

    pub fn response(status: u16, version: ProtocolVersion) -> Self {
        Self {
            version,
            headers: Headers::new(),
            kind: MessageKind::Response { status },
        }
    }

    /// Add a header (builder style).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    pub fn is_request(&self) -> bool {
        matches!(self.kind, MessageKind::Request { .. })
    }

    pub fn method(&self) -> Option<&Method> {
        match &self.kind {
            MessageKind::Request { method, .. } => Some(method),
            MessageKind::Response { .. } => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            MessageKind::Response { status } => Some(status),
            MessageKind::Request { .. } => None,
        }
    }
}
