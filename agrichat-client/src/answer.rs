//! Running-answer accumulation from data frame payloads.

use serde_json::Value;

/// Accumulates the assistant's reply across data frames.
///
/// Each payload is expected to expose an incremental fragment at
/// `choices[0].delta.content`. Payloads that fail to parse, or that carry
/// no text at that path, are skipped without disturbing the running answer:
/// truncated or malformed frames degrade gracefully instead of aborting the
/// session.
#[derive(Debug, Default)]
pub struct AnswerAccumulator {
    answer: String,
}

impl AnswerAccumulator {
    /// Create an accumulator with an empty answer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one data frame payload.
    ///
    /// Returns the updated running answer when the frame contributed text,
    /// or `None` when the frame was skipped (malformed JSON, missing delta
    /// path, or an empty fragment).
    pub fn ingest(&mut self, payload: &str) -> Option<&str> {
        let json: Value = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed data frame");
                return None;
            }
        };

        let delta = json["choices"][0]["delta"]["content"]
            .as_str()
            .unwrap_or_default();
        if delta.is_empty() {
            return None;
        }

        self.answer.push_str(delta);
        Some(&self.answer)
    }

    /// The running answer so far.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Consume the accumulator, returning the final answer.
    #[must_use]
    pub fn finalize(self) -> String {
        self.answer
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
