/*
 * body.rs
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

//! HTTP/1.1 body push decoder: fixed length, chunked (with trailers) or read-until-close.

use bytes::{Buf, Bytes, BytesMut};

use crate::error::FramingError;
use crate::http::framing::BodyFraming;

/// Longest chunk-size or trailer line accepted before giving up on finding CRLF.
const MAX_LINE_LENGTH: usize = 4096;

/// Callback for body events. The connection implements this and forwards to its consumer.
pub trait BodyHandler {
    fn body_chunk(&mut self, data: Bytes);
    fn trailer(&mut self, name: &str, value: &str);
    fn end_body(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    Length,
    ChunkSize,
    ChunkData,
    /// CRLF after chunk data.
    ChunkEnd,
    ChunkTrailer,
    UntilClose,
    Done,
}

/// Push decoder for one message body. Feed bytes via `receive`; call `finish` on EOF.
pub struct BodyDecoder {
    state: DecodeState,
    /// Bytes left in the body (Length) or current chunk (ChunkData).
    remaining: u64,
}

impl BodyDecoder {
    pub fn new(framing: BodyFraming) -> Self {
        let (state, remaining) = match framing {
            BodyFraming::Empty => (DecodeState::Length, 0),
            BodyFraming::Length(n) => (DecodeState::Length, n),
            BodyFraming::Chunked => (DecodeState::ChunkSize, 0),
            BodyFraming::CloseDelimited => (DecodeState::UntilClose, 0),
        };
        Self { state, remaining }
    }

    pub fn state(&self) -> DecodeState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == DecodeState::Done
    }

    fn find_crlf(buf: &[u8]) -> Option<usize> {
        buf.windows(2).position(|w| w == b"\r\n")
    }

    /// Take one CRLF-terminated line (without the CRLF), or None if incomplete.
    /// Lines longer than `MAX_LINE_LENGTH` are rejected whether or not the CRLF has arrived.
    fn take_line(buf: &mut BytesMut) -> Result<Option<BytesMut>, FramingError> {
        let scan = buf.len().min(MAX_LINE_LENGTH + 2);
        match Self::find_crlf(&buf[..scan]) {
            Some(n) => {
                let line = buf.split_to(n);
                buf.advance(2);
                Ok(Some(line))
            }
            None if buf.len() > MAX_LINE_LENGTH + 1 => {
                Err(FramingError::InvalidChunk("line too long".into()))
            }
            None => Ok(None),
        }
    }

    fn parse_chunk_size(line: &[u8]) -> Result<u64, FramingError> {
        let line = std::str::from_utf8(line)
            .map_err(|_| FramingError::InvalidChunk("chunk size is not ASCII".into()))?;
        // chunk extensions are ignored
        let hex = line.split(';').next().unwrap_or(line).trim();
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FramingError::InvalidChunk(format!("bad chunk size {:?}", line)));
        }
        u64::from_str_radix(hex, 16)
            .map_err(|_| FramingError::InvalidChunk(format!("chunk size overflow {:?}", hex)))
    }

    /// Consume as much of `buf` as possible. Partial lines stay in `buf`.
    pub fn receive<H: BodyHandler>(
        &mut self,
        buf: &mut BytesMut,
        handler: &mut H,
    ) -> Result<(), FramingError> {
        loop {
            match self.state {
                DecodeState::Length => {
                    if self.remaining > 0 {
                        if buf.is_empty() {
                            return Ok(());
                        }
                        let n = (self.remaining.min(buf.len() as u64)) as usize;
                        handler.body_chunk(buf.split_to(n).freeze());
                        self.remaining -= n as u64;
                    }
                    if self.remaining == 0 {
                        handler.end_body();
                        self.state = DecodeState::Done;
                    }
                }
                DecodeState::ChunkSize => {
                    let Some(line) = Self::take_line(buf)? else {
                        return Ok(());
                    };
                    self.remaining = Self::parse_chunk_size(&line)?;
                    tracing::trace!(size = self.remaining, "chunk");
                    self.state = if self.remaining == 0 {
                        DecodeState::ChunkTrailer
                    } else {
                        DecodeState::ChunkData
                    };
                }
                DecodeState::ChunkData => {
                    if buf.is_empty() {
                        return Ok(());
                    }
                    let n = (self.remaining.min(buf.len() as u64)) as usize;
                    handler.body_chunk(buf.split_to(n).freeze());
                    self.remaining -= n as u64;
                    if self.remaining == 0 {
                        self.state = DecodeState::ChunkEnd;
                    }
                }
                DecodeState::ChunkEnd => {
                    if buf.len() < 2 {
                        return Ok(());
                    }
                    if &buf[..2] != b"\r\n" {
                        return Err(FramingError::InvalidChunk("missing CRLF after chunk data".into()));
                    }
                    buf.advance(2);
                    self.state = DecodeState::ChunkSize;
                }
                DecodeState::ChunkTrailer => {
                    let Some(line) = Self::take_line(buf)? else {
                        return Ok(());
                    };
                    if line.is_empty() {
                        handler.end_body();
                        self.state = DecodeState::Done;
                        continue;
                    }
                    let line = std::str::from_utf8(&line)
                        .map_err(|_| FramingError::InvalidChunk("invalid trailer UTF-8".into()))?;
                    let Some((name, value)) = line.split_once(':') else {
                        return Err(FramingError::InvalidChunk("malformed trailer".into()));
                    };
                    handler.trailer(name.trim(), value.trim());
                }
                DecodeState::UntilClose => {
                    if !buf.is_empty() {
                        let all = buf.split_to(buf.len());
                        handler.body_chunk(all.freeze());
                    }
                    return Ok(());
                }
                DecodeState::Done => return Ok(()),
            }
        }
    }

    /// Signal end of input. Completes a close-delimited body; any other unfinished body
    /// is truncated.
    pub fn finish<H: BodyHandler>(&mut self, handler: &mut H) -> Result<(), FramingError> {
        match self.state {
            DecodeState::Done => Ok(()),
            DecodeState::UntilClose => {
                handler.end_body();
                self.state = DecodeState::Done;
                Ok(())
            }
            _ => Err(FramingError::Truncated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        body: Vec<u8>,
        chunks: usize,
        trailers: Vec<(String, String)>,
        ended: bool,
    }

    impl BodyHandler for Recorder {
        fn body_chunk(&mut self, data: Bytes) {
            self.body.extend_from_slice(&data);
            self.chunks += 1;
        }
        fn trailer(&mut self, name: &str, value: &str) {
            self.trailers.push((name.to_string(), value.to_string()));
        }
        fn end_body(&mut self) {
            self.ended = true;
        }
    }

    #[test]
    fn fixed_length_across_reads() {
        let mut dec = BodyDecoder::new(BodyFraming::Length(11));
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(&b"hello "[..]);
        dec.receive(&mut buf, &mut rec).unwrap();
        assert!(!rec.ended);
        buf.extend_from_slice(b"worldEXTRA");
        dec.receive(&mut buf, &mut rec).unwrap();
        assert_eq!(rec.body, b"hello world");
        assert!(rec.ended);
        assert!(dec.is_done());
        assert_eq!(&buf[..], b"EXTRA");
    }

    #[test]
    fn empty_body_ends_immediately() {
        let mut dec = BodyDecoder::new(BodyFraming::Empty);
        let mut rec = Recorder::default();
        let mut buf = BytesMut::new();
        dec.receive(&mut buf, &mut rec).unwrap();
        assert!(rec.ended);
        assert_eq!(rec.chunks, 0);
    }

    #[test]
    fn chunked_with_extension_and_trailers() {
        let mut dec = BodyDecoder::new(BodyFraming::Chunked);
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(
            &b"4;name=val\r\nWiki\r\n5\r\npedia\r\n0\r\nExpires: never\r\n\r\nNEXT"[..],
        );
        dec.receive(&mut buf, &mut rec).unwrap();
        assert_eq!(rec.body, b"Wikipedia");
        assert_eq!(rec.trailers, vec![("Expires".to_string(), "never".to_string())]);
        assert!(rec.ended);
        assert_eq!(&buf[..], b"NEXT");
    }

    #[test]
    fn chunked_split_mid_line() {
        let mut dec = BodyDecoder::new(BodyFraming::Chunked);
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(&b"A"[..]);
        dec.receive(&mut buf, &mut rec).unwrap();
        assert_eq!(dec.state(), DecodeState::ChunkSize);
        buf.extend_from_slice(b"\r\n0123456789\r");
        dec.receive(&mut buf, &mut rec).unwrap();
        assert_eq!(dec.state(), DecodeState::ChunkEnd);
        buf.extend_from_slice(b"\n0\r\n\r\n");
        dec.receive(&mut buf, &mut rec).unwrap();
        assert_eq!(rec.body, b"0123456789");
        assert!(dec.is_done());
    }

    #[test]
    fn bad_chunk_size() {
        let mut dec = BodyDecoder::new(BodyFraming::Chunked);
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(&b"zz\r\n"[..]);
        assert!(matches!(
            dec.receive(&mut buf, &mut rec),
            Err(FramingError::InvalidChunk(_))
        ));
    }

    #[test]
    fn missing_crlf_after_data() {
        let mut dec = BodyDecoder::new(BodyFraming::Chunked);
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(&b"2\r\nabXY"[..]);
        assert!(dec.receive(&mut buf, &mut rec).is_err());
    }

    #[test]
    fn close_delimited_ends_on_finish() {
        let mut dec = BodyDecoder::new(BodyFraming::CloseDelimited);
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(&b"abc"[..]);
        dec.receive(&mut buf, &mut rec).unwrap();
        buf.extend_from_slice(b"def");
        dec.receive(&mut buf, &mut rec).unwrap();
        assert!(!rec.ended);
        dec.finish(&mut rec).unwrap();
        assert!(rec.ended);
        assert_eq!(rec.body, b"abcdef");
    }

    #[test]
    fn finish_before_length_is_truncated() {
        let mut dec = BodyDecoder::new(BodyFraming::Length(10));
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(&b"abc"[..]);
        dec.receive(&mut buf, &mut rec).unwrap();
        assert_eq!(dec.finish(&mut rec), Err(FramingError::Truncated));
    }

    #[test]
    fn oversized_line_rejected_with_crlf_present() {
        let mut dec = BodyDecoder::new(BodyFraming::Chunked);
        let mut rec = Recorder::default();
        let mut wire = b"1;ext=".to_vec();
        wire.extend(std::iter::repeat(b'x').take(10_000));
        wire.extend_from_slice(b"\r\na\r\n0\r\n\r\n");
        let mut buf = BytesMut::from(&wire[..]);
        assert_eq!(
            dec.receive(&mut buf, &mut rec),
            Err(FramingError::InvalidChunk("line too long".into()))
        );
        assert!(!rec.ended);
    }

    #[test]
    fn line_at_limit_accepted() {
        let mut dec = BodyDecoder::new(BodyFraming::Chunked);
        let mut rec = Recorder::default();
        let mut wire = b"1;".to_vec();
        wire.extend(std::iter::repeat(b'x').take(MAX_LINE_LENGTH - 2));
        wire.extend_from_slice(b"\r\na\r\n0\r\n\r\n");
        let mut buf = BytesMut::from(&wire[..]);
        dec.receive(&mut buf, &mut rec).unwrap();
        assert_eq!(rec.body, b"a");
        assert!(dec.is_done());
    }

    #[test]
    fn trailer_without_colon_rejected() {
        let mut dec = BodyDecoder::new(BodyFraming::Chunked);
        let mut rec = Recorder::default();
        let mut buf = BytesMut::from(&b"0\r\nno-separator\r\n\r\n"[..]);
        assert_eq!(
            dec.receive(&mut buf, &mut rec),
            Err(FramingError::InvalidChunk("malformed trailer".into()))
        );
        assert!(rec.trailers.is_empty());
        assert!(!rec.ended);
    }
}
