//! JSON loading for the quiz question bank.
//! The file is an object with optional `easy`, `medium` and `hard` arrays.

use super::read_data_file;
use crate::error::{PortfolioError, Result};
use crate::models::QuestionBank;
use std::path::Path;
use tracing::info;

/// Loads a question bank from a JSON file.
/// Missing tiers are treated as empty; a bank with no questions at all is malformed.
pub fn load_question_bank(path: &Path) -> Result<QuestionBank> {
    let contents = read_data_file(path)?;
    let bank = parse_question_bank(&contents)?;

    info!(
        easy = bank.easy.len(),
        medium = bank.medium.len(),
        hard = bank.hard.len(),
        "question bank loaded from '{}'",
        path.display()
    );
    Ok(bank)
}

pub fn parse_question_bank(contents: &str) -> Result<QuestionBank> {
    let bank: QuestionBank = serde_json::from_str(contents)?;
    if bank.is_empty() {
        return Err(PortfolioError::malformed(
            "questions.json is empty or has wrong format",
        ));
    }
    Ok(bank)
}
