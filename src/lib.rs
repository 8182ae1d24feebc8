//! Conversation core for a streaming code-agent chat client.
//!
//! Owns the message model, the fenced-code block parser, and the
//! one-exchange-at-a-time orchestration over the [`agent_api`] transport:
//! stream the assistant reply into a live typing buffer, finalize it into
//! content blocks, then issue a follow-up completion to recover structured
//! tool calls. Window placement, styling, and other platform glue are
//! deliberately out of scope.

pub mod blocks;
pub mod conversation;
pub mod message;

pub use blocks::parse_blocks;
pub use conversation::Conversation;
pub use message::{ContentBlock, Message};
