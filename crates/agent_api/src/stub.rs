use std::time::Duration;

use futures_util::Stream;

/// Fragments yielded by the offline stub stream, in order.
pub const STUB_FRAGMENTS: [&str; 4] = ["Analyzing", " your", " request", "..."];

const FRAGMENT_DELAY: Duration = Duration::from_millis(300);

/// Deterministic fallback stream used when no backend base URL is configured.
///
/// Pauses 300 ms before each fragment so the consumer sees a realistic
/// typing cadence, then terminates after the fourth fragment. Fresh stream
/// per call; this is a demo/test seam, not a fallback for transient network
/// failures.
pub fn stub_stream() -> impl Stream<Item = String> + Send {
    async_stream::stream! {
        for fragment in STUB_FRAGMENTS {
            tokio::time::sleep(FRAGMENT_DELAY).await;
            yield fragment.to_string();
        }
    }
}
