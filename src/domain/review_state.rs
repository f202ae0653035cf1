use super::decision::{Decision, DecisionRecord};
use super::suggestion::Suggestion;

/// Everything the review inbox shows: suggestions awaiting a decision and what was decided.
#[derive(Clone, Debug, Default)]
pub struct ReviewState {
    pub pending: Vec<Suggestion>,
    /// Newest first.
    pub history: Vec<DecisionRecord>,
    /// Where the pending suggestions were loaded from.
    pub feed_label: String,
    pub load_error: Option<String>,
}

impl ReviewState {
    pub fn from_feed(feed_label: impl Into<String>, pending: Vec<Suggestion>) -> Self {
        Self {
            pending,
            feed_label: feed_label.into(),
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            load_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Replaces the pending list with a freshly loaded feed, skipping anything already decided.
    /// Returns how many suggestions are now pending.
    pub fn reload(&mut self, feed_label: impl Into<String>, suggestions: Vec<Suggestion>) -> usize {
        self.pending = suggestions
            .into_iter()
            .filter(|suggestion| {
                !self
                    .history
                    .iter()
                    .any(|record| record.suggestion_id == suggestion.id)
            })
            .collect();
        self.feed_label = feed_label.into();
        self.load_error = None;
        self.pending.len()
    }

    pub fn find(&self, id: &str) -> Option<&Suggestion> {
        self.pending.iter().find(|suggestion| suggestion.id == id)
    }

    /// Removes the suggestion from the inbox and records the decision.
    pub fn resolve(&mut self, id: &str, decision: Decision) -> Option<&DecisionRecord> {
        let index = self.pending.iter().position(|suggestion| suggestion.id == id)?;
        let suggestion = self.pending.remove(index);
        self.history.insert(
            0,
            DecisionRecord::new(suggestion.id, suggestion.target_artifact.title, decision),
        );
        self.history.first()
    }
}
