//! Quiz progression for one mode selection.
//! A session is created on mode selection and dropped on return to the menu;
//! every transition goes through `&mut self` so no state lives outside it.

use super::{Question, QuestionBank, QuizMode};
use crate::error::{PortfolioError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Presenting,
    Feedback(AnswerOutcome),
    /// Marathon only: the first miss ends the run.
    GameOver { correct_answer: String },
    Results,
}

/// Final screen content for a finished session.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSummary {
    pub title: &'static str,
    pub score_text: String,
    pub comment: String,
    pub percentage: Option<f64>,
}

pub struct QuizSession {
    pub mode: QuizMode,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    phase: QuizPhase,
}

impl QuizSession {
    /// Builds a shuffled copy of the mode's pool with score and index at zero.
    pub fn start<R: Rng + ?Sized>(mode: QuizMode, bank: &QuestionBank, rng: &mut R) -> Result<Self> {
        let mut questions = bank.pool(mode);
        if questions.is_empty() {
            return Err(PortfolioError::malformed(format!(
                "no questions available for {mode} mode"
            )));
        }
        questions.shuffle(rng);
        debug!(%mode, count = questions.len(), "quiz session started");

        Ok(Self {
            mode,
            questions,
            current_index: 0,
            score: 0,
            phase: QuizPhase::Presenting,
        })
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_count(&self) -> usize {
        self.questions.len()
    }

    /// The question on screen, until the session reaches its results.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Results => None,
            _ => self.questions.get(self.current_index),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::GameOver { .. } | QuizPhase::Results)
    }

    /// Stays on the last question once the pool is used up.
    pub fn tracker_text(&self) -> String {
        let number = (self.current_index + 1).min(self.total_count());
        if self.mode.is_marathon() {
            format!("Question: {number}")
        } else {
            format!("Question: {number} / {}", self.total_count())
        }
    }

    pub fn answer(&mut self, selected: &str) -> Result<AnswerOutcome> {
        if self.phase != QuizPhase::Presenting {
            return Err(PortfolioError::invalid("no question is waiting for an answer"));
        }
        let question = self
            .questions
            .get(self.current_index)
            .ok_or_else(|| PortfolioError::invalid("no question is waiting for an answer"))?;

        if question.is_correct(selected) {
            self.score += 1;
            self.phase = QuizPhase::Feedback(AnswerOutcome::Correct);
            return Ok(AnswerOutcome::Correct);
        }

        if self.mode.is_marathon() {
            debug!(score = self.score, "marathon ended on a miss");
            self.phase = QuizPhase::GameOver {
                correct_answer: question.answer.clone(),
            };
        } else {
            self.phase = QuizPhase::Feedback(AnswerOutcome::Incorrect);
        }
        Ok(AnswerOutcome::Incorrect)
    }

    /// Moves past the feedback screen to the next question or the results.
    pub fn advance(&mut self) -> Result<&QuizPhase> {
        if !matches!(self.phase, QuizPhase::Feedback(_)) {
            return Err(PortfolioError::invalid("nothing to advance from"));
        }
        self.current_index += 1;
        self.phase = if self.current_index < self.questions.len() {
            QuizPhase::Presenting
        } else {
            QuizPhase::Results
        };
        Ok(&self.phase)
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        if !self.is_finished() {
            return None;
        }

        if self.mode.is_marathon() {
            return Some(QuizSummary {
                title: "Marathon Complete!",
                score_text: format!("Score: {}", self.score),
                comment: format!("You survived {} rounds!", self.score),
                percentage: None,
            });
        }

        let total = self.total_count();
        let percentage = if total == 0 {
            0.0
        } else {
            self.score as f64 / total as f64 * 100.0
        };

        Some(QuizSummary {
            title: "Quiz Complete!",
            score_text: format!("{} / {}", self.score, total),
            comment: comment_for(percentage).to_string(),
            percentage: Some(percentage),
        })
    }
}

pub fn comment_for(percentage: f64) -> &'static str {
    if percentage >= 100.0 {
        "Perfect! Great job!"
    } else if percentage >= 75.0 {
        "Great job!"
    } else if percentage >= 50.0 {
        "Good try!"
    } else {
        "Keep practicing!"
    }
}
