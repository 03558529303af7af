use serde::{Deserialize, Serialize};
use toml::Value;

/// Unvalidated calendar input as it appears in a literal or a file. Every
/// field is optional so that absence is reported as a missing field instead
/// of a parse failure. Dates are kept as untyped values: a quoted string, a
/// TOML date literal, or anything else the file happens to hold, which the
/// loader then reports as a malformed date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCalendar {
    pub window: Option<RawWindow>,
    #[serde(default)]
    pub vacations: Vec<RawVacation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWindow {
    pub first_day: Option<Value>,
    pub last_day: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVacation {
    pub label: Option<String>,
    pub start_date: Option<Value>,
    pub end_date: Option<Value>,
}

fn text(value: &str) -> Option<Value> {
    Some(Value::String(value.to_string()))
}

impl RawWindow {
    pub fn new(first_day: &str, last_day: &str) -> Self {
        Self {
            first_day: text(first_day),
            last_day: text(last_day),
        }
    }
}

impl RawVacation {
    pub fn new(label: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            start_date: text(start_date),
            end_date: text(end_date),
        }
    }
}

impl RawCalendar {
    pub fn new(window: RawWindow, vacations: Vec<RawVacation>) -> Self {
        Self {
            window: Some(window),
            vacations,
        }
    }
}
