//! Terminal front ends. Each app prints its screens as text blocks and reads
//! menu choices line by line, so they run over any `BufRead`/`Write` pair.

pub mod drill;
pub mod jokes;
pub mod quiz;
pub mod students;
pub mod terminal;

pub use drill::DrillApp;
pub use jokes::JokeApp;
pub use quiz::QuizApp;
pub use students::StudentApp;
pub use terminal::Terminal;
