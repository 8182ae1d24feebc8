//! Transport-only client primitives for a code-agent chat backend.
//!
//! This crate owns request building, response decoding, and SSE stream
//! reassembly for the `/chat` endpoint family. It contains no conversation
//! state and no UI coupling. When no backend base URL is configured, both
//! operations degrade to a deterministic offline stub so callers can exercise
//! a full exchange without any network dependency.
//!
//! Streaming failures never escape the fragment stream: the first transport
//! error is absorbed into a single `[stream-error] ...` sentinel fragment and
//! the stream terminates cleanly.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod payload;
pub mod sse;
pub mod stub;
pub mod url;

pub use client::{AgentClient, CancellationSignal, FragmentStream};
pub use config::AgentConfig;
pub use error::AgentApiError;
pub use payload::{ChatMessage, ChatRequest, ChatResponse, Role, ToolCall, ToolStatus};
pub use sse::{stream_error_payload, SseStreamDecoder, STREAM_ERROR_PREFIX};
pub use stub::{stub_stream, STUB_FRAGMENTS};
