//! Student marks record. Totals, percentage and grade are derived from the
//! four marks on demand so they can never disagree with them.

use crate::error::{PortfolioError, Result};
use std::fmt;

pub const COURSEWORK_MAX: u32 = 60;
pub const COURSEWORK_ITEM_MAX: u32 = 20;
pub const EXAM_MAX: u32 = 100;
pub const TOTAL_MAX: u32 = COURSEWORK_MAX + EXAM_MAX;
const FIELD_COUNT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_percentage(percent: f64) -> Self {
        if percent >= 70.0 {
            Grade::A
        } else if percent >= 60.0 {
            Grade::B
        } else if percent >= 50.0 {
            Grade::C
        } else if percent >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub coursework: [u32; 3],
    pub exam: u32,
}

impl StudentRecord {
    /// Parses `id,name,c1,c2,c3,exam`.
    pub fn parse_line(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if parts.len() != FIELD_COUNT {
            return Err(PortfolioError::invalid(format!(
                "expected {FIELD_COUNT} comma-separated fields (ID,Name,C1,C2,C3,Exam), got {}",
                parts.len()
            )));
        }

        let id = parts[0];
        let name = parts[1];
        if id.is_empty() {
            return Err(PortfolioError::invalid("student ID cannot be empty"));
        }
        if name.is_empty() {
            return Err(PortfolioError::invalid("student name cannot be empty"));
        }

        let coursework = [
            parse_mark(parts[2], "C1", COURSEWORK_ITEM_MAX)?,
            parse_mark(parts[3], "C2", COURSEWORK_ITEM_MAX)?,
            parse_mark(parts[4], "C3", COURSEWORK_ITEM_MAX)?,
        ];
        let exam = parse_mark(parts[5], "Exam", EXAM_MAX)?;

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            coursework,
            exam,
        })
    }

    /// Line as stored in the backing file.
    pub fn to_line(&self) -> String {
        let [c1, c2, c3] = self.coursework;
        format!("{},{},{c1},{c2},{c3},{}", self.id, self.name, self.exam)
    }

    pub fn coursework_total(&self) -> u32 {
        self.coursework.iter().sum()
    }

    pub fn total(&self) -> u32 {
        self.coursework_total() + self.exam
    }

    pub fn percentage(&self) -> f64 {
        self.total() as f64 / TOTAL_MAX as f64 * 100.0
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }

    /// Three-line report block followed by a separator.
    pub fn report(&self) -> String {
        format!(
            "ID: {} | NAME: {}\n   Coursework: {}/{COURSEWORK_MAX} | Exam: {}/{EXAM_MAX}\n   TOTAL: {}/{TOTAL_MAX} ({:.1}%) -> GRADE: {}\n{}\n",
            self.id,
            self.name,
            self.coursework_total(),
            self.exam,
            self.total(),
            self.percentage(),
            self.grade(),
            "-".repeat(60)
        )
    }
}

pub fn parse_mark(raw: &str, field: &str, max: u32) -> Result<u32> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| PortfolioError::invalid(format!("{field} must be a whole number, got '{raw}'")))?;
    if value > max {
        return Err(PortfolioError::invalid(format!(
            "{field} must be between 0 and {max}, got {value}"
        )));
    }
    Ok(value)
}
