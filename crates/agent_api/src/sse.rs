use std::fmt;

/// Prefix of the sentinel fragment emitted when a stream fails mid-flight.
pub const STREAM_ERROR_PREFIX: &str = "[stream-error]";

/// Format the sentinel payload for a failed byte source.
///
/// Callers emit exactly one sentinel, then terminate the sequence; errors
/// never propagate past the stream boundary.
pub fn stream_error_payload(description: impl fmt::Display) -> String {
    format!("{STREAM_ERROR_PREFIX} {description}")
}

/// Incremental decoder for SSE byte streams.
///
/// Frames are delimited by a blank line (`\n\n`); each `data:` line inside a
/// frame yields one payload with surrounding whitespace trimmed. Lines
/// without the prefix and whitespace-only payloads are dropped. One decoder
/// instance serves one request; the sequence is single-pass.
#[derive(Debug, Default)]
pub struct SseStreamDecoder {
    buffer: Vec<u8>,
}

impl SseStreamDecoder {
    /// Feed arbitrary bytes into the decoder and drain complete frames.
    ///
    /// The accumulator holds raw bytes and only complete frames are decoded
    /// as UTF-8, so chunk boundaries never affect the payload sequence, even
    /// when they fall inside a multi-byte character. UTF-8 continuation
    /// bytes are never `\n`, so the frame scan is byte-safe.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);
        let mut payloads = Vec::new();

        while let Some(split) = find_frame_boundary(&self.buffer) {
            let frame: Vec<u8> = self.buffer.drain(0..split + 2).collect();
            let frame = String::from_utf8_lossy(&frame[..split]);
            extract_data_payloads(&frame, &mut payloads);
        }

        payloads
    }

    /// Decode a complete SSE body in one shot.
    pub fn decode_frames(input: &str) -> Vec<String> {
        let mut decoder = Self::default();
        decoder.feed(input.as_bytes())
    }

    pub fn is_empty_buffer(&self) -> bool {
        self.buffer.iter().all(u8::is_ascii_whitespace)
    }
}

fn find_frame_boundary(buffer: &[u8]) -> Option<usize> {
    buffer.windows(2).position(|window| window == b"\n\n")
}

fn extract_data_payloads(frame: &str, out: &mut Vec<String>) {
    for line in frame.lines() {
        if let Some(payload) = line.strip_prefix("data:") {
            let payload = payload.trim();
            if !payload.is_empty() {
                out.push(payload.to_string());
            }
        }
    }
}
