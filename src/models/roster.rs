//! In-memory student list: lookup, reports, sorting and field-level edits.

use super::StudentRecord;
use super::student::{COURSEWORK_ITEM_MAX, EXAM_MAX, parse_mark};
use crate::error::{PortfolioError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Accepts `A`/`D` or `asc`/`desc`, any case.
    pub fn parse(choice: &str) -> Result<Self> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "a" | "asc" | "ascending" => Ok(SortOrder::Ascending),
            "d" | "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(PortfolioError::invalid(format!(
                "sort choice must be 'A' or 'D', got '{other}'"
            ))),
        }
    }
}

/// Fields to change on an existing record. `None` leaves the field as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub coursework: [Option<u32>; 3],
    pub exam: Option<u32>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.coursework.iter().all(Option::is_none) && self.exam.is_none()
    }

    /// Parses `field=value` pairs separated by commas, e.g. `name=Jo,c2=14,exam=71`.
    pub fn parse(input: &str) -> Result<Self> {
        let mut update = RecordUpdate::default();
        for pair in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| PortfolioError::invalid(format!("expected field=value, got '{pair}'")))?;
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "name" if !value.is_empty() => update.name = Some(value.to_string()),
                "name" => return Err(PortfolioError::invalid("student name cannot be empty")),
                "c1" => update.coursework[0] = Some(parse_mark(value, "C1", COURSEWORK_ITEM_MAX)?),
                "c2" => update.coursework[1] = Some(parse_mark(value, "C2", COURSEWORK_ITEM_MAX)?),
                "c3" => update.coursework[2] = Some(parse_mark(value, "C3", COURSEWORK_ITEM_MAX)?),
                "exam" => update.exam = Some(parse_mark(value, "Exam", EXAM_MAX)?),
                other => {
                    return Err(PortfolioError::invalid(format!(
                        "unknown field '{other}' (use name, c1, c2, c3 or exam)"
                    )));
                }
            }
        }
        if update.is_empty() {
            return Err(PortfolioError::invalid("no fields to update"));
        }
        Ok(update)
    }

    fn apply(&self, record: &mut StudentRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        for (mark, new) in record.coursework.iter_mut().zip(self.coursework) {
            if let Some(new) = new {
                *mark = new;
            }
        }
        if let Some(exam) = self.exam {
            record.exam = exam;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with this ID.
    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn average_percentage(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.records.iter().map(StudentRecord::percentage).sum();
        sum / self.records.len() as f64
    }

    /// Earliest record holding the highest total.
    pub fn highest(&self) -> Option<&StudentRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.total() > best.total() { r } else { best })
    }

    /// Earliest record holding the lowest total.
    pub fn lowest(&self) -> Option<&StudentRecord> {
        self.records.iter().min_by_key(|r| r.total())
    }

    /// Stable sort by total score.
    pub fn sort_by_total(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.records.sort_by_key(|r| r.total()),
            SortOrder::Descending => self.records.sort_by(|a, b| b.total().cmp(&a.total())),
        }
    }

    pub fn class_report(&self) -> String {
        let mut report = String::from("--- CLASS REPORT ---\n\n");
        for record in &self.records {
            report.push_str(&record.report());
        }
        report.push_str(&format!(
            "\nCLASS SUMMARY:\nStudents: {}\nAverage Score: {:.1}%",
            self.records.len(),
            self.average_percentage()
        ));
        report
    }

    pub fn push(&mut self, record: StudentRecord) -> Result<()> {
        if self.contains(&record.id) {
            return Err(PortfolioError::DuplicateId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes every record with this ID; returns how many went.
    pub fn remove(&mut self, id: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        match before - self.records.len() {
            0 => Err(PortfolioError::NotFound(id.to_string())),
            removed => Ok(removed),
        }
    }

    /// Applies the update to the first matching record in place.
    pub fn update(&mut self, id: &str, update: &RecordUpdate) -> Result<&StudentRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| PortfolioError::NotFound(id.to_string()))?;
        update.apply(record);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> StudentRecord {
        StudentRecord::parse_line(line).unwrap()
    }

    fn roster() -> Roster {
        Roster::new(vec![
            record("1,Ann,10,10,10,50"),
            record("2,Ben,20,20,20,90"),
            record("3,Cat,5,5,5,30"),
            record("4,Dan,15,15,15,65"),
            record("5,Eve,20,20,20,90"),
        ])
    }

    fn ids(roster: &Roster) -> Vec<&str> {
        roster.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_highest_and_lowest_prefer_first() {
        let roster = roster();
        assert_eq!(roster.highest().unwrap().id, "2");
        assert_eq!(roster.lowest().unwrap().id, "3");
        assert!(Roster::default().highest().is_none());
    }

    #[test]
    fn test_sort_is_stable_both_ways() {
        let mut roster = roster();
        roster.sort_by_total(SortOrder::Descending);
        assert_eq!(ids(&roster), ["2", "5", "4", "1", "3"]);
        roster.sort_by_total(SortOrder::Ascending);
        assert_eq!(ids(&roster), ["3", "1", "4", "2", "5"]);
    }

    #[test]
    fn test_sort_choice_parsing() {
        assert_eq!(SortOrder::parse("a").unwrap(), SortOrder::Ascending);
        assert_eq!(SortOrder::parse(" D ").unwrap(), SortOrder::Descending);
        assert!(matches!(
            SortOrder::parse("sideways"),
            Err(PortfolioError::UserInputInvalid(_))
        ));
    }

    #[test]
    fn test_class_report_summary() {
        let roster = Roster::new(vec![record("1,Ann,10,10,10,50"), record("2,Ben,20,20,20,90")]);
        let report = roster.class_report();
        assert!(report.starts_with("--- CLASS REPORT ---\n\n"));
        assert!(report.contains("ID: 2 | NAME: Ben"));
        // (80/160 + 150/160) / 2 = 71.875%
        assert!(report.ends_with("CLASS SUMMARY:\nStudents: 2\nAverage Score: 71.9%"));
    }

    #[test]
    fn test_empty_report_average_is_zero() {
        let report = Roster::default().class_report();
        assert!(report.ends_with("Students: 0\nAverage Score: 0.0%"));
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut roster = roster();
        let err = roster.push(record("3,Someone Else,1,1,1,1")).unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateId(id) if id == "3"));
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut roster = roster();
        assert!(matches!(roster.remove("99"), Err(PortfolioError::NotFound(_))));
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.remove("4").unwrap(), 1);
        assert!(!roster.contains("4"));
    }

    #[test]
    fn test_update_touches_only_given_fields() {
        let mut roster = roster();
        let update = RecordUpdate::parse("c2=19, exam=70").unwrap();
        let updated = roster.update("1", &update).unwrap().clone();

        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.coursework, [10, 19, 10]);
        assert_eq!(updated.exam, 70);
        assert_eq!(ids(&roster), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_update_parse_errors() {
        assert!(RecordUpdate::parse("").is_err());
        assert!(RecordUpdate::parse("grade=A").is_err());
        assert!(RecordUpdate::parse("c1=25").is_err());
        assert!(RecordUpdate::parse("name").is_err());
        assert_eq!(
            RecordUpdate::parse("name=Ann Lee").unwrap().name.as_deref(),
            Some("Ann Lee")
        );
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let roster = Roster::new(vec![record("7,First,1,1,1,1"), record("7,Second,2,2,2,2")]);
        assert_eq!(roster.find("7").unwrap().name, "First");
    }
}
