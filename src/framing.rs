//! Envelope framing for the DAP base protocol.
//!
//! Every DAP message travels in one envelope:
//!
//! ```text
//! Content-Length: <decimal>\r\n\r\n<payload bytes>
//! ```
//!
//! The header block is exactly one line; `\r\n\r\n` is the only recognized
//! delimiter and `Content-Length` the only recognized header. Framing is
//! strict on purpose: a malformed header leaves the stream unsynchronizable
//! and the caller is expected to close it rather than hunt for the next
//! envelope.
//!
//! Two consumption styles are provided:
//!
//! - [`read_envelope`] / [`write_envelope`] block on a `BufRead`/`Write`
//!   pair and handle partial reads internally.
//! - [`EnvelopeBuffer`] accumulates bytes pushed by the caller and yields
//!   completed payloads, for transports that deliver data in arbitrary
//!   chunks.

use std::io::{BufRead, ErrorKind, Read, Write};

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::error::{DapError, Result};

/// The single header every envelope must carry, including the trailing space.
pub const CONTENT_LENGTH_PREFIX: &str = "Content-Length: ";

/// Bytes expected after the header line's `\r`.
const HEADER_TERMINATOR: &[u8; 3] = b"\n\r\n";

/// Writes `payload` to `w` wrapped in a `Content-Length` envelope.
///
/// Fails only if the sink fails. A zero-length payload produces a valid
/// envelope with `Content-Length: 0`.
pub fn write_envelope<W: Write>(w: &mut W, payload: &[u8]) -> Result<()> {
    write!(w, "{}{}\r\n\r\n", CONTENT_LENGTH_PREFIX, payload.len())?;
    w.write_all(payload)?;
    Ok(())
}

/// Reads the next envelope from `r` and returns its payload.
///
/// Blocks until a full envelope is available. Returns [`DapError::Eof`]
/// when the source is exhausted at an envelope boundary (no header byte
/// read), and [`DapError::TruncatedMessage`] when the source ends inside a
/// header or payload.
pub fn read_envelope<R: BufRead>(r: &mut R) -> Result<Vec<u8>> {
    let content_length = read_content_length_header(r)?;
    trace!(content_length, "read envelope header");

    // Grow with the incoming data instead of trusting the advertised
    // length for the allocation.
    let mut payload = Vec::new();
    let n = r.take(content_length as u64).read_to_end(&mut payload)?;
    if (n as i64) < content_length {
        return Err(DapError::TruncatedMessage);
    }
    Ok(payload)
}

/// Reads and validates the header block, returning the advertised length.
///
/// The value may be as large as `i64::MAX`; guarding against absurd
/// lengths is the application's concern (timeouts, size limits).
fn read_content_length_header<R: BufRead>(r: &mut R) -> Result<i64> {
    let mut line = Vec::new();
    let n = r.read_until(b'\r', &mut line)?;
    if n == 0 {
        return Err(DapError::Eof);
    }
    if line.last() != Some(&b'\r') {
        // EOF before the first `\r`.
        return Err(DapError::TruncatedMessage);
    }
    line.pop();

    let mut delimiter = [0u8; 3];
    r.read_exact(&mut delimiter).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            DapError::TruncatedMessage
        } else {
            DapError::Io(e)
        }
    })?;
    if &delimiter != HEADER_TERMINATOR {
        return Err(DapError::HeaderDelimiterNotCrLfCrLf);
    }

    let line = std::str::from_utf8(&line).map_err(|_| DapError::HeaderNotContentLength)?;
    parse_content_length(line).ok_or(DapError::HeaderNotContentLength)
}

/// Parses a header line (without the trailing `\r`) into a length.
///
/// Returns `None` for anything but the exact `Content-Length: ` prefix
/// followed by a non-negative decimal that fits in an `i64`.
fn parse_content_length(line: &str) -> Option<i64> {
    let value = line.strip_prefix(CONTENT_LENGTH_PREFIX)?;
    let length = value.parse::<i64>().ok()?;
    (length >= 0).then_some(length)
}

/// Parsing state for [`EnvelopeBuffer`].
#[derive(Debug, Clone, Copy)]
enum State {
    /// Waiting for a complete `Content-Length: <n>\r\n\r\n` block.
    WaitingForHeader,
    /// Header consumed, waiting for `remaining` payload bytes.
    WaitingForPayload { remaining: usize },
}

/// Buffer that accumulates incoming bytes and extracts complete payloads.
///
/// Counterpart of [`read_envelope`] for callers that receive data in
/// arbitrary chunks (socket readers, async adapters) instead of owning a
/// blocking stream. Partial input is retained between pushes.
///
/// A framing error poisons the byte sequence exactly like it poisons a
/// stream; callers must discard the buffer along with the transport.
pub struct EnvelopeBuffer {
    /// Accumulated bytes not yet consumed.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
}

impl EnvelopeBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(8 * 1024),
            state: State::WaitingForHeader,
        }
    }

    /// Pushes `data` into the buffer and extracts all complete payloads.
    ///
    /// Returns an empty vector while an envelope is still incomplete.
    /// Returns a framing error as soon as the buffered bytes violate the
    /// header rules, regardless of chunk boundaries.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Bytes>> {
        self.buffer.extend_from_slice(data);

        let mut payloads = Vec::new();
        while let Some(payload) = self.try_extract_one()? {
            payloads.push(payload);
        }
        Ok(payloads)
    }

    /// Tries to extract a single payload from the buffered bytes.
    fn try_extract_one(&mut self) -> Result<Option<Bytes>> {
        match self.state {
            State::WaitingForHeader => {
                let Some(cr) = self.buffer.iter().position(|&b| b == b'\r') else {
                    return Ok(None);
                };
                if self.buffer.len() < cr + 4 {
                    return Ok(None);
                }
                if &self.buffer[cr + 1..cr + 4] != HEADER_TERMINATOR {
                    return Err(DapError::HeaderDelimiterNotCrLfCrLf);
                }

                let line = std::str::from_utf8(&self.buffer[..cr])
                    .map_err(|_| DapError::HeaderNotContentLength)?;
                let content_length =
                    parse_content_length(line).ok_or(DapError::HeaderNotContentLength)?;

                let _ = self.buffer.split_to(cr + 4);
                self.state = State::WaitingForPayload {
                    remaining: content_length as usize,
                };
                self.try_extract_one()
            }

            State::WaitingForPayload { remaining } => {
                if self.buffer.len() < remaining {
                    return Ok(None);
                }
                let payload = self.buffer.split_to(remaining).freeze();
                self.state = State::WaitingForHeader;
                Ok(Some(payload))
            }
        }
    }

    /// Number of buffered bytes not yet consumed.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer holds no pending bytes.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drops all buffered bytes and resets the parser.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForHeader;
    }
}

impl Default for EnvelopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use rstest::rstest;

    use super::*;

    /// A reader that returns its input one predetermined chunk per call,
    /// simulating a transport that delivers an envelope in pieces.
    struct ChunkedReader {
        chunks: Vec<Vec<u8>>,
        next: usize,
    }

    impl ChunkedReader {
        fn new<const N: usize>(chunks: [&[u8]; N]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
                next: 0,
            }
        }
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.next >= self.chunks.len() {
                return Ok(0);
            }
            let chunk = &mut self.chunks[self.next];
            let n = chunk.len().min(buf.len());
            buf[..n].copy_from_slice(&chunk[..n]);
            chunk.drain(..n);
            if chunk.is_empty() {
                self.next += 1;
            }
            Ok(n)
        }
    }

    fn read_header_str(input: &str) -> Result<i64> {
        read_content_length_header(&mut BufReader::new(input.as_bytes()))
    }

    #[rstest]
    #[case("", "eof")]
    #[case("Cache-Control: no-cache", "truncated")]
    #[case("Cache-Control: no-cache\r", "truncated")]
    #[case("Cache-Control: no-cache\rabc", "delimiter")]
    #[case("Cache-Control: no-cache\r\n", "truncated")]
    #[case("Cache-Control: no-cache\r\n\r", "truncated")]
    #[case("Cache-Control: no-cache\r\n\r\n", "not-content-length")]
    #[case("Content-Length 3\r\n\r\nabc", "not-content-length")]
    #[case("_Content-Length: 3\r\n\r\nabc", "not-content-length")]
    #[case("Content-Length: 3_\r\n\r\nabc", "not-content-length")]
    #[case("Content-Length: x\r\n\r\nabc", "not-content-length")]
    #[case("Content-Length: 3.0\r\n\r\nabc", "not-content-length")]
    #[case("Content-Length: -3\r\n\r\nabc", "not-content-length")]
    #[case("Content-Length: 3 abc", "truncated")]
    #[case("Content-Length: 3\nabc", "truncated")]
    #[case("Content-Length: 3\rabc", "delimiter")]
    #[case("Content-Length: 3\r\nabc", "delimiter")]
    #[case("Content-Length: 3\r\n\rabc", "delimiter")]
    #[case("Content-Length: 3\r \n\r\nabc", "delimiter")]
    #[case("Content-Length: 3\r\n \r\nabc", "delimiter")]
    #[case("Content-Length: 3\r\n\r \nabc", "delimiter")]
    fn test_header_rejections(#[case] input: &str, #[case] kind: &str) {
        let got = read_header_str(input);
        match kind {
            "eof" => assert!(matches!(got, Err(DapError::Eof)), "{input:?}: {got:?}"),
            "truncated" => assert!(
                matches!(got, Err(DapError::TruncatedMessage)),
                "{input:?}: {got:?}"
            ),
            "delimiter" => assert!(
                matches!(got, Err(DapError::HeaderDelimiterNotCrLfCrLf)),
                "{input:?}: {got:?}"
            ),
            "not-content-length" => assert!(
                matches!(got, Err(DapError::HeaderNotContentLength)),
                "{input:?}: {got:?}"
            ),
            _ => unreachable!(),
        }
    }

    #[rstest]
    #[case("Content-Length: 0\r\n\r\nabc", 0)]
    #[case("Content-Length: 3\r\n\r\nabc", 3)]
    #[case("Content-Length: 9223372036854775807\r\n\r\n", i64::MAX)]
    fn test_header_accepted(#[case] input: &str, #[case] want: i64) {
        assert_eq!(read_header_str(input).unwrap(), want);
    }

    #[rstest]
    #[case(b"", "Content-Length: 0\r\n\r\n")]
    #[case(b"a", "Content-Length: 1\r\n\r\na")]
    #[case(b"{}", "Content-Length: 2\r\n\r\n{}")]
    #[case(b"{\"a\":0 \"b\":\"blah\"}", "Content-Length: 18\r\n\r\n{\"a\":0 \"b\":\"blah\"}")]
    fn test_write_envelope(#[case] payload: &[u8], #[case] want: &str) {
        let mut buf = Vec::new();
        write_envelope(&mut buf, payload).unwrap();
        assert_eq!(buf, want.as_bytes());
    }

    #[test]
    fn test_read_envelope_eof_at_boundary() {
        let mut r = BufReader::new(&b""[..]);
        assert!(matches!(read_envelope(&mut r), Err(DapError::Eof)));
    }

    #[test]
    fn test_read_envelope_truncated_payload() {
        let mut r = BufReader::new(&b"Content-Length: 10\r\n\r\nabc"[..]);
        assert!(matches!(
            read_envelope(&mut r),
            Err(DapError::TruncatedMessage)
        ));
    }

    #[test]
    fn test_read_envelope_consumes_exactly_one() {
        let mut r = BufReader::new(&b"Content-Length: 3\r\n\r\nabcrest"[..]);
        assert_eq!(read_envelope(&mut r).unwrap(), b"abc");
        let mut left = Vec::new();
        r.read_to_end(&mut left).unwrap();
        assert_eq!(left, b"rest");
    }

    #[test]
    fn test_read_envelope_zero_length() {
        let mut r = BufReader::new(&b"Content-Length: 0\r\n\r\nabc"[..]);
        assert_eq!(read_envelope(&mut r).unwrap(), b"");
        let mut left = Vec::new();
        r.read_to_end(&mut left).unwrap();
        assert_eq!(left, b"abc");
    }

    #[test]
    fn test_write_then_read_sequence() {
        let payloads: [&[u8]; 3] = [b"this is", b"a read write", b"test"];

        let mut buf = Vec::new();
        for p in payloads {
            write_envelope(&mut buf, p).unwrap();
        }

        let mut r = BufReader::new(buf.as_slice());
        for p in payloads {
            assert_eq!(read_envelope(&mut r).unwrap(), p);
        }
        assert!(matches!(read_envelope(&mut r), Err(DapError::Eof)));
    }

    #[test]
    fn test_read_envelope_from_chunked_source() {
        // Header, delimiter and payload arrive as separate reads; the
        // reader must assemble exactly one payload out of them.
        let source = ChunkedReader::new([
            b"Content-Length: 11",
            b"\r\n\r\n",
            b"hello world",
            b"Content-Length: 11\r\r\r\r",
        ]);
        let mut r = BufReader::new(source);

        assert_eq!(read_envelope(&mut r).unwrap(), b"hello world");
        assert!(matches!(
            read_envelope(&mut r),
            Err(DapError::HeaderDelimiterNotCrLfCrLf)
        ));
    }

    #[test]
    fn test_buffer_single_complete_envelope() {
        let mut buffer = EnvelopeBuffer::new();
        let payloads = buffer.push(b"Content-Length: 5\r\n\r\nhello").unwrap();

        assert_eq!(payloads.len(), 1);
        assert_eq!(&payloads[0][..], b"hello");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_buffer_multiple_envelopes_in_one_push() {
        let mut buffer = EnvelopeBuffer::new();
        let mut data = Vec::new();
        for p in [&b"first"[..], b"second", b"third"] {
            write_envelope(&mut data, p).unwrap();
        }

        let payloads = buffer.push(&data).unwrap();
        assert_eq!(payloads.len(), 3);
        assert_eq!(&payloads[0][..], b"first");
        assert_eq!(&payloads[1][..], b"second");
        assert_eq!(&payloads[2][..], b"third");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_buffer_fragmented_header_and_payload() {
        let mut buffer = EnvelopeBuffer::new();

        assert!(buffer.push(b"Content-Len").unwrap().is_empty());
        assert!(buffer.push(b"gth: 11\r\n").unwrap().is_empty());
        assert!(buffer.push(b"\r\nhello").unwrap().is_empty());
        let payloads = buffer.push(b" world").unwrap();

        assert_eq!(payloads.len(), 1);
        assert_eq!(&payloads[0][..], b"hello world");
    }

    #[test]
    fn test_buffer_byte_at_a_time() {
        let mut buffer = EnvelopeBuffer::new();
        let mut collected = Vec::new();
        for b in b"Content-Length: 2\r\n\r\nhi" {
            collected.extend(buffer.push(&[*b]).unwrap());
        }

        assert_eq!(collected.len(), 1);
        assert_eq!(&collected[0][..], b"hi");
    }

    #[test]
    fn test_buffer_zero_length_envelope() {
        let mut buffer = EnvelopeBuffer::new();
        let payloads = buffer.push(b"Content-Length: 0\r\n\r\n").unwrap();

        assert_eq!(payloads.len(), 1);
        assert!(payloads[0].is_empty());
    }

    #[test]
    fn test_buffer_bad_delimiter_after_good_envelope() {
        let mut buffer = EnvelopeBuffer::new();
        let payloads = buffer.push(b"Content-Length: 2\r\n\r\nok").unwrap();
        assert_eq!(payloads.len(), 1);

        let got = buffer.push(b"Content-Length: 2\r\r\r\r");
        assert!(matches!(got, Err(DapError::HeaderDelimiterNotCrLfCrLf)));
    }

    #[test]
    fn test_buffer_rejects_unknown_header() {
        let mut buffer = EnvelopeBuffer::new();
        let got = buffer.push(b"Cache-Control: no-cache\r\n\r\n");
        assert!(matches!(got, Err(DapError::HeaderNotContentLength)));
    }

    #[test]
    fn test_buffer_clear_resets_state() {
        let mut buffer = EnvelopeBuffer::new();
        assert!(buffer.push(b"Content-Length: 5\r\n\r\nhe").unwrap().is_empty());
        assert!(!buffer.is_empty());

        buffer.clear();
        assert!(buffer.is_empty());

        let payloads = buffer.push(b"Content-Length: 2\r\n\r\nok").unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(&payloads[0][..], b"ok");
    }
}
