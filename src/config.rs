//! Where the apps look for their data files (relative to the working directory),
//! and the drill constants.

use std::path::{Path, PathBuf};

pub const DATA_DIR: &str = "data";
pub const QUESTIONS_FILE: &str = "questions.json";
pub const JOKES_FILE: &str = "randomJokes.txt";
pub const STUDENTS_FILE: &str = "studentMarks.txt";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub questions_file: String,
    pub jokes_file: String,
    pub students_file: String,
    pub drill: DrillConfig,
}

/// Question budgets and the marathon time limit for the math drill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrillConfig {
    pub questions_per_round: usize,
    pub marathon_questions: usize,
    pub marathon_seconds: i64,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            questions_per_round: 10,
            marathon_questions: 15,
            marathon_seconds: 30,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_dir(DATA_DIR)
    }
}

impl AppConfig {
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            questions_file: QUESTIONS_FILE.to_string(),
            jokes_file: JOKES_FILE.to_string(),
            students_file: STUDENTS_FILE.to_string(),
            drill: DrillConfig::default(),
        }
    }

    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join(&self.questions_file)
    }

    pub fn jokes_path(&self) -> PathBuf {
        self.data_dir.join(&self.jokes_file)
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }
}
