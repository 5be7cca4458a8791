/*
 * error.rs
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

//! Framing, charset and channel configuration errors.

use std::fmt;

/// Errors from framing decisions and body decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FramingError {
    /// Body length could not be determined and the caller required one.
    MissingLength,
    /// A Content-Length value is not a plain unsigned decimal.
    InvalidContentLength(String),
    /// Several Content-Length values were present and they differ (or duplicates are not allowed).
    ConflictingContentLength,
    /// Malformed chunk-size line or chunk terminator.
    InvalidChunk(String),
    /// Flow-control window would leave its legal range.
    FlowControl(String),
    /// Input ended before the body was complete.
    Truncated,
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramingError::MissingLength => write!(f, "content length is required but missing"),
            FramingError::InvalidContentLength(v) => write!(f, "invalid Content-Length: {:?}", v),
            FramingError::ConflictingContentLength => {
                write!(f, "multiple Content-Length values")
            }
            FramingError::InvalidChunk(m) => write!(f, "invalid chunk: {}", m),
            FramingError::FlowControl(m) => write!(f, "flow control error: {}", m),
            FramingError::Truncated => write!(f, "body ended early"),
        }
    }
}

impl std::error::Error for FramingError {}

/// Charset name lookup failure. Recovered by `charset_or`; only surfaced by `Charset::for_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    Unknown(String),
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharsetError::Unknown(name) => write!(f, "unknown charset: {:?}", name),
        }
    }
}

impl std::error::Error for CharsetError {}

/// Errors from channel configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The setting is derived for this channel and cannot be replaced.
    OperationNotSupported(&'static str),
    InvalidWatermarks { low: usize, high: usize },
    /// Initial window size above 2^31-1.
    InvalidWindow(u32),
    /// Settings file could not be read or parsed.
    Load(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OperationNotSupported(what) => {
                write!(f, "operation not supported: {}", what)
            }
            ConfigError::InvalidWatermarks { low, high } => {
                write!(f, "low watermark {} exceeds high watermark {}", low, high)
            }
            ConfigError::InvalidWindow(size) => {
                write!(f, "initial window size {} exceeds maximum", size)
            }
            ConfigError::Load(m) => write!(f, "{}", m),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            FramingError::MissingLength.to_string(),
            "content length is required but missing"
        );
        assert_eq!(
            ConfigError::InvalidWatermarks { low: 10, high: 5 }.to_string(),
            "low watermark 10 exceeds high watermark 5"
        );
        assert_eq!(
            ConfigError::InvalidWindow(u32::MAX).to_string(),
            "initial window size 4294967295 exceeds maximum"
        );
        assert_eq!(
            CharsetError::Unknown("x-foo".into()).to_string(),
            "unknown charset: \"x-foo\""
        );
    }
}
