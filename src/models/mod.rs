pub mod arithmetic;
pub mod drill_session;
pub mod joke;
pub mod question;
pub mod question_bank;
pub mod quiz_session;
pub mod roster;
pub mod student;

pub use arithmetic::{ArithmeticProblem, DrillLevel, Operator};
pub use drill_session::{DrillFeedback, DrillSession};
pub use joke::{Joke, JokeDeck, RevealStage};
pub use question::Question;
pub use question_bank::{QuestionBank, QuizMode};
pub use quiz_session::{AnswerOutcome, QuizPhase, QuizSession, QuizSummary};
pub use roster::{RecordUpdate, Roster, SortOrder};
pub use student::{Grade, StudentRecord};
