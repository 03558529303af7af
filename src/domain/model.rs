use crate::utils::error::ValidationError;
use crate::utils::validation::{validate_date_order, validate_non_empty_string, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First and last day of classes, finals week excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemesterWindow {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl SemesterWindow {
    pub fn new(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            first_day,
            last_day,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }
}

impl Validate for SemesterWindow {
    fn validate(&self, path: &str) -> Result<(), ValidationError> {
        validate_date_order(path, self.first_day, self.last_day, true)
    }
}

impl fmt::Display for SemesterWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.first_day, self.last_day)
    }
}

/// A labeled, inclusive break. Labels may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacationRange {
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl VacationRange {
    pub fn new(label: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            start_date,
            end_date,
        }
    }

    pub fn single_day(label: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(label, date, date)
    }

    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }

    pub fn lies_within(&self, window: &SemesterWindow) -> bool {
        window.contains(self.start_date) && window.contains(self.end_date)
    }
}

impl Validate for VacationRange {
    fn validate(&self, path: &str) -> Result<(), ValidationError> {
        validate_non_empty_string(&format!("{}.label", path), &self.label)?;
        validate_date_order(path, self.start_date, self.end_date, false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterConfig {
    pub window: SemesterWindow,
    pub vacations: Vec<VacationRange>,
}

/// Non-fatal finding reported next to a successfully loaded calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    VacationOutsideWindow {
        index: usize,
        label: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        window: SemesterWindow,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::VacationOutsideWindow {
                index,
                label,
                start_date,
                end_date,
                window,
            } => write!(
                f,
                "vacations[{}] '{}' ({} .. {}) is not inside the semester window {}",
                index, label, start_date, end_date, window
            ),
        }
    }
}

/// A validated calendar and whatever advisories its data raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loaded {
    pub config: SemesterConfig,
    pub advisories: Vec<Advisory>,
}

impl Loaded {
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let window = SemesterWindow::new(ymd(2022, 1, 26), ymd(2022, 5, 5));
        assert!(window.contains(ymd(2022, 1, 26)));
        assert!(window.contains(ymd(2022, 5, 5)));
        assert!(!window.contains(ymd(2022, 1, 25)));
        assert!(!window.contains(ymd(2022, 5, 6)));
    }

    #[test]
    fn test_vacation_lies_within() {
        let window = SemesterWindow::new(ymd(2022, 1, 26), ymd(2022, 5, 5));
        let spring = VacationRange::new("Spring Break", ymd(2022, 4, 15), ymd(2022, 4, 18));
        let straddling = VacationRange::new("Winter Vacation", ymd(2021, 3, 10), ymd(2022, 3, 13));
        assert!(spring.lies_within(&window));
        assert!(!straddling.lies_within(&window));
    }

    #[test]
    fn test_single_day_vacation_validates() {
        let holiday = VacationRange::single_day("Reading Day", ymd(2022, 3, 1));
        assert!(holiday.is_single_day());
        assert!(holiday.validate("vacations[0]").is_ok());
    }

    #[test]
    fn test_blank_label_is_missing() {
        let unnamed = VacationRange::new("  ", ymd(2022, 3, 1), ymd(2022, 3, 2));
        assert_eq!(
            unnamed.validate("vacations[2]"),
            Err(ValidationError::MissingField {
                field: "vacations[2].label".to_string()
            })
        );
    }

    #[test]
    fn test_advisory_serializes_with_kind_tag() {
        let advisory = Advisory::VacationOutsideWindow {
            index: 0,
            label: "Winter Vacation".to_string(),
            start_date: ymd(2021, 3, 10),
            end_date: ymd(2022, 3, 13),
            window: SemesterWindow::new(ymd(2022, 1, 26), ymd(2022, 5, 5)),
        };
        let value = serde_json::to_value(&advisory).unwrap();
        assert_eq!(value["kind"], "vacation_outside_window");
        assert_eq!(value["start_date"], "2021-03-10");
        assert_eq!(value["window"]["first_day"], "2022-01-26");
    }
}
