//! Question bank grouped by difficulty tier, and the quiz modes that draw from it.
use super::Question;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub easy: Vec<Question>,
    #[serde(default)]
    pub medium: Vec<Question>,
    #[serde(default)]
    pub hard: Vec<Question>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizMode {
    Easy,
    Medium,
    Hard,
    Marathon,
}

impl QuizMode {
    pub const ALL: [QuizMode; 4] = [
        QuizMode::Easy,
        QuizMode::Medium,
        QuizMode::Hard,
        QuizMode::Marathon,
    ];

    pub fn is_marathon(self) -> bool {
        self == QuizMode::Marathon
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizMode::Easy => "Easy",
            QuizMode::Medium => "Medium",
            QuizMode::Hard => "Hard",
            QuizMode::Marathon => "Marathon",
        };
        f.write_str(name)
    }
}

impl QuestionBank {
    pub fn is_empty(&self) -> bool {
        self.easy.is_empty() && self.medium.is_empty() && self.hard.is_empty()
    }

    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    /// Questions eligible for a mode. Marathon gets every tier, easy first.
    pub fn pool(&self, mode: QuizMode) -> Vec<Question> {
        match mode {
            QuizMode::Easy => self.easy.clone(),
            QuizMode::Medium => self.medium.clone(),
            QuizMode::Hard => self.hard.clone(),
            QuizMode::Marathon => self
                .easy
                .iter()
                .chain(&self.medium)
                .chain(&self.hard)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> Question {
        Question {
            question: text.to_string(),
            options: ["a", "b", "c", "d"].map(String::from),
            answer: "a".to_string(),
        }
    }

    #[test]
    fn test_marathon_pool_is_all_tiers() {
        let bank = QuestionBank {
            easy: vec![q("e1"), q("e2")],
            medium: vec![q("m1")],
            hard: vec![q("h1")],
        };

        let pool = bank.pool(QuizMode::Marathon);
        let texts: Vec<_> = pool.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, ["e1", "e2", "m1", "h1"]);
        assert_eq!(bank.len(), 4);
    }

    #[test]
    fn test_tier_pool() {
        let bank = QuestionBank {
            easy: vec![q("e1")],
            medium: vec![],
            hard: vec![q("h1"), q("h2")],
        };
        assert_eq!(bank.pool(QuizMode::Hard).len(), 2);
        assert!(bank.pool(QuizMode::Medium).is_empty());
        assert!(!bank.is_empty());
        assert!(QuestionBank::default().is_empty());
    }
}
