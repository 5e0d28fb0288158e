//! The per-session pull loop: decode, accumulate, notify.
//!
//! One task owns the whole session. The loop suspends only while awaiting
//! the next body chunk (or cancellation); decoding and accumulation run
//! synchronously in between, so frames reach the observer in exact stream
//! order with no reentrancy.

use agrichat_types::{ChatError, ChatOutcome};
use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::answer::AnswerAccumulator;
use crate::sse::{Frame, FrameDecoder};

/// Drive one streaming response to a terminal state.
///
/// Returning on any path drops the response body, which closes the
/// underlying connection.
pub(crate) async fn run(
    response: reqwest::Response,
    cancel: CancellationToken,
    mut on_update: impl FnMut(&str),
) -> Result<ChatOutcome, ChatError> {
    let mut body = response.bytes_stream();
    let mut decoder = FrameDecoder::new();
    let mut answer = AnswerAccumulator::new();

    loop {
        // Cancellation wins over a ready chunk: nothing is observed after it.
        let chunk = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("chat session cancelled mid-stream");
                return Ok(ChatOutcome::Cancelled);
            }
            next = body.next() => match next {
                Some(Ok(chunk)) => chunk,
                Some(Err(err)) => {
                    tracing::debug!(error = %err, "chat stream read failed");
                    return Err(ChatError::Transport(Box::new(err)));
                }
                // Natural end without a sentinel.
                None => break,
            },
        };

        for frame in decoder.feed(&chunk) {
            match frame {
                Frame::Data(payload) => {
                    if let Some(partial) = answer.ingest(&payload) {
                        on_update(partial);
                    }
                }
                // Sentinel: stop reading and drop the connection even if
                // more chunks remain in flight.
                Frame::Done => {
                    tracing::debug!("chat stream finished");
                    return Ok(ChatOutcome::Complete(answer.finalize()));
                }
            }
        }
    }

    tracing::debug!("chat stream ended without a sentinel");
    Ok(ChatOutcome::Complete(answer.finalize()))
}
