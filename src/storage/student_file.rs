//! Student marks backing file.
//!
//! Layout: a header line holding the record count (informational, never
//! checked), then one `id,name,c1,c2,c3,exam` line per student.
//! Add appends a single line; delete and update rewrite the whole file
//! from the in-memory roster.

use crate::error::{PortfolioError, Result};
use crate::loader::read_data_file;
use crate::models::{RecordUpdate, Roster, SortOrder, StudentRecord};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Parses the file body, skipping the header. Bad lines are logged and dropped.
pub fn parse_records(contents: &str) -> Vec<StudentRecord> {
    contents
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(n, line)| match StudentRecord::parse_line(line) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(line = n + 1, "skipping student record: {e}");
                None
            }
        })
        .collect()
}

pub fn render_file(roster: &Roster) -> String {
    let mut out = format!("{}\n", roster.len());
    for record in roster.records() {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    out
}

pub struct StudentStore {
    path: PathBuf,
    roster: Roster,
}

impl StudentStore {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_data_file(path)?;
        let roster = Roster::new(parse_records(&contents));
        info!(count = roster.len(), "student records loaded from '{}'", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            roster,
        })
    }

    /// Loads the file, falling back to an empty roster. The load error, if any, is handed back
    /// so the caller can show it.
    pub fn load_or_empty(path: &Path) -> (Self, Option<PortfolioError>) {
        match Self::load(path) {
            Ok(store) => (store, None),
            Err(e) => {
                warn!("starting with no student records: {e}");
                let store = Self {
                    path: path.to_path_buf(),
                    roster: Roster::default(),
                };
                (store, Some(e))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Reorders the in-memory list; the file keeps its order until the next rewrite.
    pub fn sort(&mut self, order: SortOrder) {
        self.roster.sort_by_total(order);
    }

    /// Validates an `ID,Name,C1,C2,C3,Exam` line and appends it.
    pub fn add(&mut self, input: &str) -> Result<&StudentRecord> {
        let record = StudentRecord::parse_line(input)?;
        if self.roster.contains(&record.id) {
            return Err(PortfolioError::DuplicateId(record.id));
        }

        let mut next = self.roster.clone();
        next.push(record.clone())?;
        if self.file_has_records_section() {
            self.append_line(&record.to_line())?;
        } else {
            fs::write(&self.path, render_file(&next))?;
        }
        self.roster = next;
        info!(id = %record.id, "student added");

        self.roster
            .find(&record.id)
            .ok_or_else(|| PortfolioError::NotFound(record.id.clone()))
    }

    /// Removes the ID and rewrites the file. An unknown ID changes nothing.
    pub fn delete(&mut self, id: &str) -> Result<usize> {
        let mut next = self.roster.clone();
        let removed = next.remove(id)?;
        fs::write(&self.path, render_file(&next))?;
        self.roster = next;
        info!(id, removed, "student deleted");
        Ok(removed)
    }

    /// Changes only the given fields of the matched record and rewrites the file.
    pub fn update(&mut self, id: &str, update: &RecordUpdate) -> Result<StudentRecord> {
        let mut next = self.roster.clone();
        let updated = next.update(id, update)?.clone();
        fs::write(&self.path, render_file(&next))?;
        self.roster = next;
        info!(id, "student updated");
        Ok(updated)
    }

    fn file_has_records_section(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.len() > 0)
            .unwrap_or(false)
    }

    fn append_line(&self, line: &str) -> Result<()> {
        let existing = fs::read_to_string(&self.path)?;
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        if !existing.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        writeln!(file, "{line}")?;
        Ok(())
    }
}
