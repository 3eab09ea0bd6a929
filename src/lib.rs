pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod storage;

pub use config::AppConfig;
pub use error::{PortfolioError, Result};
pub use models::{Joke, JokeDeck, Question, QuestionBank, QuizSession, Roster, StudentRecord};
