/*
 * version.rs
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

//! HTTP protocol version with its persistent-connection default.

use std::cmp::Ordering;
use std::fmt;

/// Protocol version as it appears on the request or status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolVersion {
    pub major: u8,
    pub minor: u8,
    /// True when connections persist unless `Connection: close` is sent (HTTP/1.1 and later).
    pub keep_alive_default: bool,
}

impl ProtocolVersion {
    pub const HTTP_1_0: ProtocolVersion = ProtocolVersion {
        major: 1,
        minor: 0,
        keep_alive_default: false,
    };

    pub const HTTP_1_1: ProtocolVersion = ProtocolVersion {
        major: 1,
        minor: 1,
        keep_alive_default: true,
    };

    pub fn new(major: u8, minor: u8) -> Self {
        Self {
            major,
            minor,
            keep_alive_default: (major, minor) >= (1, 1),
        }
    }

    /// Parse `HTTP/x.y`. The protocol name is matched case-insensitively.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let slash = text.find('/')?;
        if !text[..slash].eq_ignore_ascii_case("HTTP") {
            return None;
        }
        let (major, minor) = text[slash + 1..].split_once('.')?;
        if major.is_empty() || minor.is_empty() {
            return None;
        }
        if !major.bytes().all(|b| b.is_ascii_digit()) || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::new(major.parse().ok()?, minor.parse().ok()?))
    }

    /// True for HTTP/1.1 and later.
    pub fn at_least_1_1(&self) -> bool {
        (self.major, self.minor) >= (1, 1)
    }
}

impl PartialOrd for ProtocolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProtocolVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor)
            .cmp(&(other.major, other.minor))
            .then(self.keep_alive_default.cmp(&other.keep_alive_default))
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_versions() {
        assert_eq!(ProtocolVersion::parse("HTTP/1.1"), Some(ProtocolVersion::HTTP_1_1));
        assert_eq!(ProtocolVersion::parse("http/1.0"), Some(ProtocolVersion::HTTP_1_0));
        let v2 = ProtocolVersion::parse("HTTP/2.0").unwrap();
        assert!(v2.keep_alive_default);
        assert!(v2 > ProtocolVersion::HTTP_1_1);
        assert_eq!(ProtocolVersion::parse("HTTP/1"), None);
        assert_eq!(ProtocolVersion::parse("HTTPS/1.1"), None);
        assert_eq!(ProtocolVersion::parse("HTTP/1.+1"), None);
    }

    #[test]
    fn display_and_order() {
        assert_eq!(ProtocolVersion::HTTP_1_0.to_string(), "HTTP/1.0");
        assert!(ProtocolVersion::HTTP_1_0 < ProtocolVersion::HTTP_1_1);
        assert!(!ProtocolVersion::HTTP_1_0.at_least_1_1());
        assert!(ProtocolVersion::new(1, 2).at_least_1_1());
    }
}
