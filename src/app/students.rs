//! Student manager front end. Every command prints into a single output panel.

use super::terminal::Terminal;
use crate::error::PortfolioError;
use crate::models::{RecordUpdate, SortOrder};
use crate::storage::StudentStore;
use std::io::{self, BufRead, Write};

const MENU: &str = "1) VIEW ALL  2) VIEW RECORD  3) HIGH SCORE  4) LOW SCORE\n\
                    5) SORT LIST 6) ADD NEW      7) DELETE      8) UPDATE     q) QUIT";

pub struct StudentApp {
    store: StudentStore,
}

impl StudentApp {
    pub fn new(store: StudentStore) -> Self {
        Self { store }
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
        load_error: Option<&PortfolioError>,
    ) -> io::Result<()> {
        match load_error {
            Some(e) => term.say(&format!("Failed to load data: {e}"))?,
            None => term.say("Hello :D")?,
        }

        loop {
            term.blank()?;
            term.say(MENU)?;
            let Some(choice) = term.prompt("> ")? else {
                return Ok(());
            };

            let message = match choice.to_ascii_lowercase().as_str() {
                "1" => Some(self.store.roster().class_report()),
                "2" => self.view_individual(term)?,
                "3" => Some(self.extreme("HIGHEST", true)),
                "4" => Some(self.extreme("LOWEST", false)),
                "5" => self.sort_records(term)?,
                "6" => self.add_student(term)?,
                "7" => self.delete_student(term)?,
                "8" => self.update_student(term)?,
                "q" => return Ok(()),
                _ => Some("Unknown command.".to_string()),
            };

            if let Some(message) = message {
                term.blank()?;
                term.say(&message)?;
            }
        }
    }

    fn view_individual<R: BufRead, W: Write>(
        &self,
        term: &mut Terminal<R, W>,
    ) -> io::Result<Option<String>> {
        let Some(id) = ask(term, "Enter Student ID: ")? else {
            return Ok(None);
        };
        Ok(Some(match self.store.roster().find(&id) {
            Some(record) => record.report(),
            None => format!("Student ID {id} not found."),
        }))
    }

    fn extreme(&self, label: &str, highest: bool) -> String {
        let roster = self.store.roster();
        let record = if highest {
            roster.highest()
        } else {
            roster.lowest()
        };
        match record {
            Some(record) => format!(
                "--- {label} PERFORMING STUDENT ---\n\n{}",
                record.report()
            ),
            None => "No student records loaded.".to_string(),
        }
    }

    fn sort_records<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
    ) -> io::Result<Option<String>> {
        let Some(choice) = ask(term, "Type 'A' for Ascending or 'D' for Descending: ")? else {
            return Ok(None);
        };
        let order = match SortOrder::parse(&choice) {
            Ok(order) => order,
            Err(e) => return Ok(Some(format!("Error: {e}"))),
        };
        self.store.sort(order);

        let status = match order {
            SortOrder::Ascending => "Sorted: Ascending Order",
            SortOrder::Descending => "Sorted: Descending Order (Highest First)",
        };
        Ok(Some(format!("{status}\n\n{}", self.store.roster().class_report())))
    }

    fn add_student<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
    ) -> io::Result<Option<String>> {
        term.say("Format: ID,Name,C1,C2,C3,Exam")?;
        term.say("Example: 5555,New Guy,15,15,15,80")?;
        let Some(data) = ask(term, "Add: ")? else {
            return Ok(None);
        };
        Ok(Some(match self.store.add(&data) {
            Ok(record) => format!("Student added successfully.\n\n{}", record.report()),
            Err(e) => format!("Error: {e}"),
        }))
    }

    fn delete_student<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
    ) -> io::Result<Option<String>> {
        let Some(id) = ask(term, "Enter ID to delete: ")? else {
            return Ok(None);
        };
        Ok(Some(match self.store.delete(&id) {
            Ok(_) => format!("Student {id} deleted."),
            Err(PortfolioError::NotFound(_)) => "Student ID not found.".to_string(),
            Err(e) => format!("Error: {e}"),
        }))
    }

    fn update_student<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
    ) -> io::Result<Option<String>> {
        let Some(id) = ask(term, "Enter ID to update: ")? else {
            return Ok(None);
        };
        let Some(record) = self.store.roster().find(&id) else {
            return Ok(Some("ID not found.".to_string()));
        };

        term.say(&format!("Updating {}...", record.name))?;
        term.say("Enter only the fields to change, e.g. name=Jo Bloggs,c2=14,exam=71")?;
        let Some(input) = ask(term, "Update: ")? else {
            return Ok(None);
        };
        let update = match RecordUpdate::parse(&input) {
            Ok(update) => update,
            Err(e) => return Ok(Some(format!("Error: {e}"))),
        };

        Ok(Some(match self.store.update(&id, &update) {
            Ok(record) => format!("Student record updated.\n\n{}", record.report()),
            Err(e) => format!("Error: {e}"),
        }))
    }
}

/// Prompts once; an empty answer cancels the command like closing the dialog.
fn ask<R: BufRead, W: Write>(term: &mut Terminal<R, W>, label: &str) -> io::Result<Option<String>> {
    Ok(term.prompt(label)?.filter(|answer| !answer.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    const SAMPLE: &str = "2\n1845,John Smith,12,14,11,72\n2136,Priya Patel,18,19,17,88\n";

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("portfolio_{}_{name}", std::process::id()))
    }

    fn run_script(path: &PathBuf, script: &str) -> String {
        let (store, err) = StudentStore::load_or_empty(path);
        let mut app = StudentApp::new(store);
        let mut term = Terminal::new(Cursor::new(script.to_string()), Vec::new());
        app.run(&mut term, err.as_ref()).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_add_then_view_record() {
        let path = temp_path("app_add.txt");
        fs::write(&path, SAMPLE).unwrap();

        let out = run_script(&path, "6\n5555,New Guy,15,15,15,80\n2\n5555\nq\n");
        assert!(out.contains("Student added successfully."));
        assert!(out.contains("ID: 5555 | NAME: New Guy"));
        assert!(out.contains("   Coursework: 45/60 | Exam: 80/100"));
        assert!(out.contains("   TOTAL: 125/160 (78.1%) -> GRADE: A"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_delete_unknown_id() {
        let path = temp_path("app_delete.txt");
        fs::write(&path, SAMPLE).unwrap();

        let out = run_script(&path, "7\n0000\nq\n");
        assert!(out.contains("Student ID not found."));
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_sort_and_extremes() {
        let path = temp_path("app_sort.txt");
        fs::write(&path, SAMPLE).unwrap();

        let out = run_script(&path, "5\nx\n5\na\n3\n4\nq\n");
        assert!(out.contains("Error: invalid input: sort choice must be 'A' or 'D'"));
        assert!(out.contains("Sorted: Ascending Order"));
        assert!(out.contains("--- HIGHEST PERFORMING STUDENT ---\n\nID: 2136"));
        assert!(out.contains("--- LOWEST PERFORMING STUDENT ---\n\nID: 1845"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_update_single_field() {
        let path = temp_path("app_update.txt");
        fs::write(&path, SAMPLE).unwrap();

        let out = run_script(&path, "8\n1845\nexam=90\nq\n");
        assert!(out.contains("Updating John Smith..."));
        assert!(out.contains("Student record updated."));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2\n1845,John Smith,12,14,11,90\n2136,Priya Patel,18,19,17,88\n"
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_path("app_missing_does_not_exist.txt");
        let out = run_script(&path, "1\nq\n");
        assert!(out.starts_with("Failed to load data:"));
        assert!(out.contains("Students: 0\nAverage Score: 0.0%"));
    }
}
