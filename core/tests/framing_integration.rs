/*
 * framing_integration.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * Integration test for framing decisions and stream buffering. Builds message heads
 * the way a connection would, derives their framing, decodes bodies with the
 * resulting decoder, and checks that stream watermarks follow flow-control credit.
 *
 * Run with:
 *   cargo test -p framekit_core --test framing_integration
 */

use bytes::{Bytes, BytesMut};

use framekit_core::channel::{
    BufferWatermarks, ChannelConfig, OutboundFrame, StreamBufferConfig, WireSizeEstimator,
    Writability,
};
use framekit_core::config::ChannelSettings;
use framekit_core::h2::FlowControlWindow;
use framekit_core::http::content_type;
use framekit_core::http::framing::{self, body_framing};
use framekit_core::http::h1::{BodyDecoder, BodyHandler};
use framekit_core::http::{
    BodyFraming, Charset, FramingDecision, LengthFallback, Message, Method, ProtocolVersion,
};
use framekit_core::{ConfigError, FramingError};

/// BodyHandler that collects everything it is given.
#[derive(Default)]
struct CollectingHandler {
    body: Vec<u8>,
    trailers: Vec<(String, String)>,
    ended: bool,
}

impl BodyHandler for CollectingHandler {
    fn body_chunk(&mut self, data: Bytes) {
        self.body.extend_from_slice(&data);
    }
    fn trailer(&mut self, name: &str, value: &str) {
        self.trailers.push((name.to_string(), value.to_string()));
    }
    fn end_body(&mut self) {
        self.ended = true;
    }
}

/// Parse a minimal response head (status line + headers) into a Message.
fn parse_head(head: &str) -> Message {
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap();
    let mut parts = status_line.splitn(3, ' ');
    let version = ProtocolVersion::parse(parts.next().unwrap()).unwrap();
    let status: u16 = parts.next().unwrap().parse().unwrap();
    let mut msg = Message::response(status, version);
    for line in lines.filter(|l| !l.is_empty()) {
        let (name, value) = line.split_once(':').unwrap();
        msg.headers.add(name.trim(), value.trim());
    }
    msg
}

fn decode(msg: &Message, wire: &[u8], eof: bool) -> CollectingHandler {
    let mut decoder = BodyDecoder::new(body_framing(msg).unwrap());
    let mut handler = CollectingHandler::default();
    let mut buf = BytesMut::new();
    // feed in small pieces, as reads would arrive
    for piece in wire.chunks(3) {
        buf.extend_from_slice(piece);
        decoder.receive(&mut buf, &mut handler).unwrap();
    }
    if eof {
        decoder.finish(&mut handler).unwrap();
    }
    handler
}

#[test]
fn chunked_response_round() {
    let msg = parse_head(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain; charset=ISO-8859-1\r\nTransfer-Encoding: chunked\r\n\r\n",
    );
    let decision = FramingDecision::resolve(&msg).unwrap();
    assert!(decision.chunked);
    assert!(decision.keep_alive);
    assert_eq!(decision.content_length, None);
    assert_eq!(content_type::message_charset(&msg, Charset::Utf8), Charset::Iso8859_1);
    assert_eq!(content_type::message_mime_type(&msg), Some("text/plain"));

    let handler = decode(&msg, b"5\r\nhello\r\n6\r\n world\r\n0\r\nX-Sum: 1\r\n\r\n", false);
    assert_eq!(handler.body, b"hello world");
    assert_eq!(handler.trailers, vec![("X-Sum".to_string(), "1".to_string())]);
    assert!(handler.ended);
}

#[test]
fn http10_response_reads_until_close() {
    let msg = parse_head("HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n");
    assert!(!framing::is_keep_alive(&msg));
    assert_eq!(body_framing(&msg).unwrap(), BodyFraming::CloseDelimited);
    let handler = decode(&msg, b"<html></html>", true);
    assert_eq!(handler.body, b"<html></html>");
    assert!(handler.ended);
}

#[test]
fn websocket_handshake_body_lengths() {
    let req = Message::request(Method::Get, "/demo", ProtocolVersion::HTTP_1_1)
        .with_header("Upgrade", "WebSocket")
        .with_header("Sec-WebSocket-Key1", "4 @1  46546xW%0l 1 5")
        .with_header("Sec-WebSocket-Key2", "12998 5 Y3 1  .P00");
    for fallback in [LengthFallback::Required, LengthFallback::Default(0)] {
        assert_eq!(framing::content_length(&req, fallback), Ok(8));
    }
    assert_eq!(body_framing(&req).unwrap(), BodyFraming::Length(8));

    let resp = parse_head(
        "HTTP/1.1 101 WebSocket Protocol Handshake\r\nSec-WebSocket-Origin: http://example.com\r\nSec-WebSocket-Location: ws://example.com/demo\r\n\r\n",
    );
    assert_eq!(framing::content_length(&resp, LengthFallback::Required), Ok(16));
    assert_eq!(body_framing(&resp).unwrap(), BodyFraming::Length(16));

    // the challenge response is read as the body, leaving the first frame in the buffer
    let mut decoder = BodyDecoder::new(body_framing(&resp).unwrap());
    let mut handler = CollectingHandler::default();
    let mut buf = BytesMut::from(&b"8jKS'y:G*Co,Wxa-\x00hi\xff"[..]);
    decoder.receive(&mut buf, &mut handler).unwrap();
    assert_eq!(handler.body, b"8jKS'y:G*Co,Wxa-");
    assert!(handler.ended);
    assert_eq!(&buf[..], b"\x00hi\xff");
}

#[test]
fn outbound_request_preparation() {
    let mut req = Message::request(Method::Post, "/upload", ProtocolVersion::HTTP_1_1)
        .with_header("Host", framing::format_hostname("::1").into_owned());
    assert_eq!(req.headers.get("host"), Some("[::1]"));

    framing::set_content_length(&mut req, 1024);
    framing::set_expect_100_continue(&mut req, true);
    assert!(framing::is_100_continue_expected(&req));
    assert!(!framing::is_unsupported_expectation(&req));

    // switch to streaming upload
    framing::set_chunked(&mut req, true);
    assert!(!framing::is_content_length_set(&req));
    framing::set_keep_alive(&mut req.headers, req.version, false);
    let d = FramingDecision::resolve(&req).unwrap();
    assert!(d.chunked && !d.keep_alive);

    framing::set_chunked(&mut req, false);
    assert!(!req.headers.contains("Transfer-Encoding"));
    assert_eq!(
        framing::content_length(&req, LengthFallback::Required),
        Err(FramingError::MissingLength)
    );
}

#[test]
fn stream_watermarks_follow_credit() {
    let settings = ChannelSettings::from_json(
        br#"{"write_buffer_low": 4096, "write_buffer_high": 16384, "initial_window_size": 8192}"#,
    )
    .unwrap();
    let mut config = StreamBufferConfig::from_settings(&settings).unwrap();
    let window = config.window().clone();
    assert_eq!(config.watermarks(), BufferWatermarks { low: 4096, high: 8192 });

    let frame = OutboundFrame::Data { payload_len: 6000, padding: 0 };
    let mut writability = Writability::new();
    let mut pending = config.size_estimator().estimate(&frame);
    config.update_writability(&mut writability, pending);
    assert!(writability.is_writable());

    // data goes out, consuming credit; the rest of the buffer now exceeds the cap
    window.consume(6000).unwrap();
    pending += config.size_estimator().estimate(&frame);
    pending -= 6000;
    assert!(config.update_writability(&mut writability, pending));
    assert!(!writability.is_writable());
    assert_eq!(config.watermarks(), BufferWatermarks { low: 2192, high: 2192 });

    // credit returns and the buffer drains below the low watermark
    window.increase(65_535).unwrap();
    assert!(!config.update_writability(&mut writability, pending));
    pending -= 3000;
    assert!(config.update_writability(&mut writability, pending));
    assert!(writability.is_writable());
    assert_eq!(config.watermarks(), BufferWatermarks { low: 4096, high: 16384 });
    assert_eq!(window.available(), 67_727);

    let err = config
        .set_size_estimator(Box::new(WireSizeEstimator))
        .unwrap_err();
    assert!(matches!(err, ConfigError::OperationNotSupported(_)));
    assert_eq!(config.size_estimator().estimate(&OutboundFrame::WindowUpdate), 0);
}
