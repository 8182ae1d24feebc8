use std::pin::Pin;
use std::sync::{atomic::AtomicBool, atomic::Ordering, Arc};

use futures_util::{Stream, StreamExt};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::config::AgentConfig;
use crate::error::{status_error_message, AgentApiError};
use crate::headers::build_headers;
use crate::payload::{ChatMessage, ChatRequest, ChatResponse};
use crate::sse::{stream_error_payload, SseStreamDecoder};
use crate::stub::stub_stream;
use crate::url::{chat_stream_url, chat_url};

/// Optional cancellation signal shared between the caller and stream loops.
pub type CancellationSignal = Arc<AtomicBool>;

/// Boxed fragment stream returned by [`AgentClient::stream`].
pub type FragmentStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Single-attempt HTTP transport for the `/chat` endpoint family.
///
/// Neither operation retries. `complete` surfaces failures as typed errors;
/// `stream` absorbs them into one sentinel fragment so the consuming loop
/// never unwinds.
#[derive(Debug)]
pub struct AgentClient {
    http: Client,
    config: AgentConfig,
}

impl AgentClient {
    pub fn new(config: AgentConfig) -> Result<Self, AgentApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(AgentApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Single-shot completion against `<base>/chat`.
    ///
    /// With no base URL configured, answers with an offline stub response
    /// without touching the network.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> Result<ChatResponse, AgentApiError> {
        let Some(base) = self.config.configured_base_url() else {
            return Ok(self.offline_response());
        };

        let response = self
            .http
            .post(chat_url(base))
            .headers(self.request_headers(false)?)
            .json(&self.chat_request(messages, false))
            .send()
            .await
            .map_err(AgentApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentApiError::Status(
                status,
                status_error_message(status, &body),
            ));
        }

        let body = response.text().await.map_err(AgentApiError::from)?;
        serde_json::from_str::<ChatResponse>(&body).map_err(AgentApiError::from)
    }

    /// Streaming completion against `<base>/chat/stream`.
    ///
    /// Returns the decoded payload sequence of the response's SSE stream, or
    /// the stub stream when no base URL is configured. The first transport
    /// failure yields one `[stream-error] ...` fragment and ends the
    /// sequence. The cancellation signal is checked before each pull; a
    /// cancelled stream ends immediately and drops the connection.
    pub fn stream(
        &self,
        messages: &[ChatMessage],
        cancellation: Option<CancellationSignal>,
    ) -> FragmentStream {
        let Some(base) = self.config.configured_base_url() else {
            return Box::pin(stub_stream());
        };

        let request = self
            .http
            .post(chat_stream_url(base))
            .json(&self.chat_request(messages, true));
        let headers = match self.request_headers(true) {
            Ok(headers) => headers,
            Err(error) => {
                return Box::pin(futures_util::stream::once(async move {
                    stream_error_payload(error)
                }));
            }
        };
        let request = request.headers(headers);

        Box::pin(async_stream::stream! {
            if is_cancelled(cancellation.as_ref()) {
                return;
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(error) => {
                    yield stream_error_payload(error);
                    return;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let error = AgentApiError::Status(status, status_error_message(status, &body));
                yield stream_error_payload(error);
                return;
            }

            let mut bytes = response.bytes_stream();
            let mut decoder = SseStreamDecoder::default();

            loop {
                if is_cancelled(cancellation.as_ref()) {
                    return;
                }
                let Some(chunk) = bytes.next().await else {
                    break;
                };
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(error) => {
                        yield stream_error_payload(error);
                        return;
                    }
                };
                for payload in decoder.feed(&chunk) {
                    yield payload;
                }
            }
        })
    }

    fn chat_request(&self, messages: &[ChatMessage], stream: bool) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            stream,
        }
    }

    fn request_headers(&self, streaming: bool) -> Result<HeaderMap, AgentApiError> {
        let mut out = HeaderMap::new();
        for (key, value) in build_headers(&self.config, streaming) {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| AgentApiError::InvalidHeader(key.clone()))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|_| AgentApiError::InvalidHeader(key.clone()))?;
            out.insert(name, value);
        }
        Ok(out)
    }

    fn offline_response(&self) -> ChatResponse {
        ChatResponse {
            content: format!(
                "Stub response: configure CODE_AGENT_BASE_URL to integrate with the \
                 code-agent backend. Model: {}",
                self.config.model
            ),
            tool_calls: Vec::new(),
            finish_reason: "stop".to_string(),
        }
    }
}

fn is_cancelled(cancellation: Option<&CancellationSignal>) -> bool {
    cancellation.is_some_and(|signal| signal.load(Ordering::Acquire))
}
