//! SSE frame decoding for the chatbot response stream.
//!
//! The endpoint frames its reply as newline-delimited Server-Sent Events:
//!
//! ```text
//! : heartbeat
//!
//! data: {"choices":[{"delta":{"content":"Hel"}}]}
//!
//! data: {"choices":[{"delta":{"content":"lo"}}]}
//!
//! data: [DONE]
//! ```
//!
//! Network chunks may split a line, a JSON payload, or even a multi-byte
//! UTF-8 sequence at any byte boundary. The decoder carries partial state
//! across [`FrameDecoder::feed`] calls so that every chunking of the same
//! byte stream yields the identical frame sequence.

/// Prefix of a meaningful SSE line.
const DATA_PREFIX: &str = "data: ";

/// Payload marking the end of the stream.
const DONE_SENTINEL: &str = "[DONE]";

/// One classified line extracted from the decoded stream.
///
/// Blank lines, `:` comments, and lines without the `data: ` prefix are
/// consumed silently and never surface as frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A data line carrying a raw JSON payload (not yet parsed).
    Data(String),
    /// The `[DONE]` sentinel; the stream carries nothing further.
    Done,
}

/// Incremental decoder from raw byte chunks to [`Frame`]s.
///
/// Two carries persist between `feed` calls: the trailing bytes of an
/// incomplete UTF-8 sequence and the trailing text of an unterminated line.
/// Once the sentinel has been seen the decoder is closed and all further
/// input is ignored.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    /// Incomplete trailing UTF-8 sequence from the previous chunk.
    utf8_carry: Vec<u8>,
    /// Decoded text that has not yet yielded a complete line.
    line_buf: String,
    /// Set once the sentinel has been seen.
    closed: bool,
}

impl FrameDecoder {
    /// Create a decoder in its initial buffering state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sentinel has been seen.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Decode one chunk and return the frames it completes, in stream order.
    ///
    /// Never fails: invalid UTF-8 decodes to U+FFFD, and payloads that are
    /// not valid JSON still come through as [`Frame::Data`] for the consumer
    /// to judge. A trailing fragment that never receives a newline before
    /// the source ends is not a frame and stays unreported.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();
        if self.closed {
            return frames;
        }

        self.decode(chunk);

        while let Some(newline_pos) = self.line_buf.find('\n') {
            let line = self.line_buf[..newline_pos]
                .trim_end_matches('\r')
                .to_string();
            self.line_buf.drain(..=newline_pos);

            match classify(&line) {
                Some(Frame::Done) => {
                    frames.push(Frame::Done);
                    self.close();
                    break;
                }
                Some(frame) => frames.push(frame),
                None => {}
            }
        }

        frames
    }

    /// Append `chunk` to the text buffer, carrying partial UTF-8 sequences.
    fn decode(&mut self, chunk: &[u8]) {
        let mut bytes = std::mem::take(&mut self.utf8_carry);
        bytes.extend_from_slice(chunk);

        let mut rest = bytes.as_slice();
        while !rest.is_empty() {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    self.line_buf.push_str(text);
                    break;
                }
                Err(err) => {
                    let (valid, tail) = rest.split_at(err.valid_up_to());
                    if let Ok(text) = std::str::from_utf8(valid) {
                        self.line_buf.push_str(text);
                    }
                    match err.error_len() {
                        // Invalid sequence: substitute and resume after it.
                        Some(len) => {
                            self.line_buf.push(char::REPLACEMENT_CHARACTER);
                            rest = &tail[len..];
                        }
                        // Incomplete trailing sequence: carry to the next chunk.
                        None => {
                            self.utf8_carry = tail.to_vec();
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Latch the closed state and release buffered input.
    fn close(&mut self) {
        self.closed = true;
        self.line_buf = String::new();
        self.utf8_carry = Vec::new();
    }
}

/// Classify one complete line (terminator already stripped).
fn classify(line: &str) -> Option<Frame> {
    if line.starts_with(':') || line.trim().is_empty() {
        return None;
    }
    let payload = line.strip_prefix(DATA_PREFIX)?.trim();
    if payload == DONE_SENTINEL {
        Some(Frame::Done)
    } else {
        Some(Frame::Data(payload.to_string()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
