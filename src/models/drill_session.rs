//! Math drill session: generated problems, two attempts each, 10/5 scoring.
//! Marathon rounds also carry a deadline; callers pass the current time in.

use super::arithmetic::{ArithmeticProblem, DrillLevel};
use crate::config::DrillConfig;
use crate::error::{PortfolioError, Result};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

pub const FIRST_TRY_POINTS: u32 = 10;
pub const SECOND_TRY_POINTS: u32 = 5;
const MAX_ATTEMPTS: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillFeedback {
    Correct { points: u32 },
    /// First miss; one more attempt is allowed.
    TryAgain,
    /// Second miss; the answer is revealed and the drill moves on.
    Revealed { answer: i64 },
    /// Marathon deadline passed before the answer came in.
    TimeUp,
}

pub struct DrillSession {
    pub level: DrillLevel,
    max_questions: usize,
    question_count: usize,
    attempts_on_current: u32,
    score: u32,
    current: Option<ArithmeticProblem>,
    deadline: Option<DateTime<Utc>>,
    finished: bool,
}

impl DrillSession {
    pub fn start(level: DrillLevel, config: &DrillConfig, now: DateTime<Utc>) -> Self {
        let (max_questions, deadline) = match level {
            DrillLevel::Marathon => (
                config.marathon_questions,
                Some(now + Duration::seconds(config.marathon_seconds)),
            ),
            _ => (config.questions_per_round, None),
        };
        debug!(level = level.label(), max_questions, "drill started");

        Self {
            level,
            max_questions,
            question_count: 0,
            attempts_on_current: 0,
            score: 0,
            current: None,
            deadline,
            finished: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    pub fn current(&self) -> Option<&ArithmeticProblem> {
        self.current.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn progress_text(&self) -> String {
        format!("{}/{}", self.question_count, self.max_questions)
    }

    /// Whole seconds left on the marathon clock; `None` outside marathon.
    pub fn seconds_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        self.deadline
            .map(|deadline| (deadline - now).num_seconds().max(0))
    }

    fn time_is_up(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Draws the next problem, or ends the session when the budget is spent.
    pub fn next_question<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<&ArithmeticProblem> {
        if self.finished || self.question_count >= self.max_questions || self.time_is_up(now) {
            self.finish();
            return None;
        }
        self.question_count += 1;
        self.attempts_on_current = 0;
        self.current = Some(ArithmeticProblem::generate(self.level, rng));
        self.current.as_ref()
    }

    /// Checks typed input against the current problem.
    /// Non-numeric input is rejected without consuming an attempt.
    pub fn submit(&mut self, input: &str, now: DateTime<Utc>) -> Result<DrillFeedback> {
        let problem = self
            .current
            .ok_or_else(|| PortfolioError::invalid("no question is waiting for an answer"))?;
        if self.time_is_up(now) {
            self.finish();
            return Ok(DrillFeedback::TimeUp);
        }

        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| PortfolioError::invalid("Please enter a valid number."))?;

        let answer = problem.evaluate();
        if value == answer {
            let points = if self.attempts_on_current == 0 {
                FIRST_TRY_POINTS
            } else {
                SECOND_TRY_POINTS
            };
            self.score += points;
            self.current = None;
            return Ok(DrillFeedback::Correct { points });
        }

        self.attempts_on_current += 1;
        if self.attempts_on_current < MAX_ATTEMPTS {
            Ok(DrillFeedback::TryAgain)
        } else {
            self.current = None;
            Ok(DrillFeedback::Revealed { answer })
        }
    }

    fn finish(&mut self) {
        if !self.finished {
            debug!(score = self.score, "drill finished");
        }
        self.finished = true;
        self.current = None;
    }

    pub fn rank(&self) -> &'static str {
        rank_for(self.score)
    }
}

pub fn rank_for(score: u32) -> &'static str {
    match score {
        90.. => "A+",
        80..=89 => "A",
        70..=79 => "B",
        60..=69 => "C",
        _ => "F",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_first_try_scores_ten() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = DrillSession::start(DrillLevel::Easy, &DrillConfig::default(), t0());
        let answer = session.next_question(&mut rng, t0()).unwrap().evaluate();

        let feedback = session.submit(&answer.to_string(), t0()).unwrap();
        assert_eq!(feedback, DrillFeedback::Correct { points: 10 });
        assert_eq!(session.score(), 10);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_second_try_scores_five() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = DrillSession::start(DrillLevel::Medium, &DrillConfig::default(), t0());
        let answer = session.next_question(&mut rng, t0()).unwrap().evaluate();

        let wrong = (answer + 1).to_string();
        assert_eq!(session.submit(&wrong, t0()).unwrap(), DrillFeedback::TryAgain);
        assert_eq!(
            session.submit(&answer.to_string(), t0()).unwrap(),
            DrillFeedback::Correct { points: 5 }
        );
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn test_two_misses_reveal_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = DrillSession::start(DrillLevel::Hard, &DrillConfig::default(), t0());
        let answer = session.next_question(&mut rng, t0()).unwrap().evaluate();

        let wrong = (answer - 1).to_string();
        session.submit(&wrong, t0()).unwrap();
        assert_eq!(
            session.submit(&wrong, t0()).unwrap(),
            DrillFeedback::Revealed { answer }
        );
        assert_eq!(session.score(), 0);
        assert!(session.submit(&wrong, t0()).is_err());
    }

    #[test]
    fn test_non_numeric_input_keeps_attempt() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = DrillSession::start(DrillLevel::Easy, &DrillConfig::default(), t0());
        let answer = session.next_question(&mut rng, t0()).unwrap().evaluate();

        let err = session.submit("twelve", t0()).unwrap_err();
        assert!(matches!(err, PortfolioError::UserInputInvalid(_)));
        assert_eq!(
            session.submit(&answer.to_string(), t0()).unwrap(),
            DrillFeedback::Correct { points: 10 }
        );
    }

    #[test]
    fn test_standard_round_stops_after_budget() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = DrillSession::start(DrillLevel::Easy, &DrillConfig::default(), t0());

        for _ in 0..10 {
            let answer = session.next_question(&mut rng, t0()).unwrap().evaluate();
            session.submit(&answer.to_string(), t0()).unwrap();
        }
        assert_eq!(session.progress_text(), "10/10");
        assert!(session.next_question(&mut rng, t0()).is_none());
        assert!(session.is_finished());
        assert_eq!(session.score(), 100);
        assert_eq!(session.rank(), "A+");
    }

    #[test]
    fn test_marathon_deadline_ends_session() {
        let mut rng = StdRng::seed_from_u64(6);
        let config = DrillConfig::default();
        let mut session = DrillSession::start(DrillLevel::Marathon, &config, t0());
        assert_eq!(session.max_questions(), 15);
        assert_eq!(session.seconds_remaining(t0()), Some(30));

        let answer = session.next_question(&mut rng, t0()).unwrap().evaluate();
        let late = t0() + Duration::seconds(31);
        assert_eq!(
            session.submit(&answer.to_string(), late).unwrap(),
            DrillFeedback::TimeUp
        );
        assert!(session.is_finished());
        assert_eq!(session.score(), 0);
        assert_eq!(session.seconds_remaining(late), Some(0));
        assert!(session.next_question(&mut rng, late).is_none());
    }

    #[test]
    fn test_garbage_after_deadline_is_time_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = DrillSession::start(DrillLevel::Marathon, &DrillConfig::default(), t0());
        session.next_question(&mut rng, t0()).unwrap();

        let late = t0() + Duration::seconds(31);
        assert_eq!(session.submit("abc", late).unwrap(), DrillFeedback::TimeUp);
        assert!(session.is_finished());
        assert!(session.next_question(&mut rng, late).is_none());
    }

    #[test]
    fn test_marathon_stops_after_fifteen_questions() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = DrillSession::start(DrillLevel::Marathon, &DrillConfig::default(), t0());

        for i in 0..15 {
            let now = t0() + Duration::seconds(i);
            let answer = session.next_question(&mut rng, now).unwrap().evaluate();
            session.submit(&answer.to_string(), now).unwrap();
        }
        assert_eq!(session.progress_text(), "15/15");
        assert!(session.next_question(&mut rng, t0() + Duration::seconds(15)).is_none());
        assert!(session.is_finished());
        assert_eq!(session.score(), 150);
    }

    #[test]
    fn test_rank_bands() {
        assert_eq!(rank_for(95), "A+");
        assert_eq!(rank_for(80), "A");
        assert_eq!(rank_for(75), "B");
        assert_eq!(rank_for(60), "C");
        assert_eq!(rank_for(55), "F");
    }
}
