//! Conversation history: the ordered (query, response) turns passed between successive model calls.

use serde::{Deserialize, Serialize};

/// One exchange: the user's query and the model's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub query: String,
    pub response: String,
}

impl Turn {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
        }
    }
}

/// Ordered turns, oldest first. Produced by a [`crate::Gateway`] and handed back to it on the next call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Returns this history with `turn` appended.
    pub fn with_turn(mut self, turn: Turn) -> Self {
        self.turns.push(turn);
        self
    }

    /// Drops the oldest turns so that at most `max_turns` remain.
    pub fn keep_recent(mut self, max_turns: usize) -> Self {
        if self.turns.len() > max_turns {
            let excess = self.turns.len() - max_turns;
            self.turns.drain(..excess);
        }
        self
    }
}

impl From<Vec<Turn>> for ConversationHistory {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_turn_appends_in_order() {
        let history = ConversationHistory::new()
            .with_turn(Turn::new("hi", "hello"))
            .with_turn(Turn::new("how are you?", "fine"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].query, "hi");
        assert_eq!(history.last().map(|t| t.response.as_str()), Some("fine"));
    }

    #[test]
    fn test_keep_recent_drops_oldest() {
        let history: ConversationHistory = (0..5)
            .map(|i| Turn::new(format!("q{}", i), format!("r{}", i)))
            .collect::<Vec<_>>()
            .into();
        let kept = history.keep_recent(2);
        assert_eq!(kept.turns(), &[Turn::new("q3", "r3"), Turn::new("q4", "r4")]);
    }

    #[test]
    fn test_keep_recent_noop_when_short() {
        let history = ConversationHistory::new().with_turn(Turn::new("a", "b"));
        assert_eq!(history.clone().keep_recent(3), history);
        assert!(ConversationHistory::new().keep_recent(0).is_empty());
    }
}
