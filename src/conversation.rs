use std::sync::atomic::Ordering;

use agent_api::{AgentClient, CancellationSignal, ChatMessage, Role};
use futures_util::StreamExt;

use crate::blocks::parse_blocks;
use crate::message::{ContentBlock, Message};

/// Ordered conversation state plus the live streaming buffer.
///
/// One exchange is in flight at a time; callers gate resubmission on
/// [`Conversation::is_streaming`]. Both the message list and the buffer are
/// single-writer, mutated only by [`Conversation::send`].
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    streaming_text: String,
    streaming: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settled turns in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Live assistant-typing preview; empty outside the streaming phase.
    pub fn streaming_text(&self) -> &str {
        &self.streaming_text
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Runs one full exchange: append the user turn, stream the assistant
    /// reply into the live buffer, finalize it into content blocks, then
    /// issue a follow-up completion to recover structured tool calls.
    ///
    /// Blank input is a no-op. A completion-phase failure is recorded as an
    /// error-content assistant message rather than returned; streaming-phase
    /// failures arrive as a `[stream-error]` fragment inside the assistant
    /// body. Cancellation mid-stream stops pulling, clears the buffer, and
    /// commits no assistant turn.
    pub async fn send(
        &mut self,
        input: &str,
        client: &AgentClient,
        cancellation: Option<&CancellationSignal>,
    ) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }

        self.messages.push(Message::new(Role::User, trimmed));
        self.streaming_text.clear();
        self.streaming = true;

        let mut fragments = client.stream(&self.history(), cancellation.cloned());
        loop {
            if is_cancelled(cancellation) {
                break;
            }
            let Some(fragment) = fragments.next().await else {
                break;
            };
            self.streaming_text.push_str(&fragment);
        }
        drop(fragments);

        self.streaming = false;
        if is_cancelled(cancellation) {
            self.streaming_text.clear();
            return;
        }

        let content = std::mem::take(&mut self.streaming_text);
        let blocks = parse_blocks(&content);
        self.messages
            .push(Message::with_blocks(Role::Assistant, content, blocks));

        match client.complete(&self.history()).await {
            Ok(response) if !response.tool_calls.is_empty() => {
                let blocks = response
                    .tool_calls
                    .into_iter()
                    .map(ContentBlock::Tool)
                    .collect();
                self.messages
                    .push(Message::with_blocks(Role::Assistant, "", blocks));
            }
            Ok(_) => {}
            Err(error) => {
                self.messages
                    .push(Message::new(Role::Assistant, format!("Error: {error}")));
            }
        }
    }

    fn history(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .map(|message| ChatMessage::new(message.role, message.content.clone()))
            .collect()
    }
}

fn is_cancelled(cancellation: Option<&CancellationSignal>) -> bool {
    cancellation.is_some_and(|signal| signal.load(Ordering::Acquire))
}

#[cfg(test)]
mod tests {
    use agent_api::{AgentClient, AgentConfig, Role};

    use super::Conversation;
    use crate::message::ContentBlock;

    fn offline_client() -> AgentClient {
        AgentClient::new(AgentConfig::default()).expect("client")
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_is_a_no_op() {
        let mut conversation = Conversation::new();
        conversation.send("   \n", &offline_client(), None).await;
        assert!(conversation.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn input_is_trimmed_before_the_user_turn_is_appended() {
        let mut conversation = Conversation::new();
        conversation.send("  hello  ", &offline_client(), None).await;

        let user = &conversation.messages()[0];
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "hello");
        assert!(user.blocks.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stub_exchange_settles_into_user_and_assistant_turns() {
        let mut conversation = Conversation::new();
        conversation.send("hello", &offline_client(), None).await;

        // The offline completion reports no tool calls, so exactly two turns.
        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "Analyzing your request...");
        assert_eq!(
            messages[1].blocks,
            vec![ContentBlock::Text("Analyzing your request...".to_string())]
        );

        assert!(!conversation.is_streaming());
        assert!(conversation.streaming_text().is_empty());
    }
}
