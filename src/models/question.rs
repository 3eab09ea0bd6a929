//! A multiple-choice question: prompt, four options and the correct answer text.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: [String; 4],
    pub answer: String,
}

impl Question {
    /// Exact string match against the stored answer.
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.answer
    }

    /// Option text for a 1-based menu choice.
    pub fn option(&self, choice: usize) -> Option<&str> {
        choice
            .checked_sub(1)
            .and_then(|idx| self.options.get(idx))
            .map(String::as_str)
    }
}
