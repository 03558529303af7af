use crate::utils::error::ValidationError;
use chrono::{NaiveDate, NaiveTime};
use toml::Value;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const TIME_FORMATS: [&str; 5] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Hard checks on an already-typed value; `path` prefixes the reported field.
pub trait Validate {
    fn validate(&self, path: &str) -> Result<(), ValidationError>;
}

pub fn validate_required_field<'a, T>(
    field_name: &str,
    value: &'a Option<T>,
) -> Result<&'a T, ValidationError> {
    value.as_ref().ok_or_else(|| ValidationError::MissingField {
        field: field_name.to_string(),
    })
}

/// Parses a calendar date. A time-of-day that legacy data carries
/// (`2022-01-26T04:00:00`, `01/26/2022 4:00:00`) must itself parse and is then
/// dropped; any other trailing text makes the date malformed.
pub fn parse_calendar_date(field_name: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let malformed = |reason: &str| ValidationError::MalformedDate {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(malformed("Date cannot be empty or whitespace-only"));
    }

    let date_part = trimmed
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or(trimmed);

    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
        .ok_or_else(|| malformed("Expected a real calendar day as YYYY-MM-DD or MM/DD/YYYY"))?;

    let rest = &trimmed[date_part.len()..];
    if !rest.is_empty() {
        // 跳過分隔字元 ('T' 或空白)
        let mut chars = rest.chars();
        chars.next();
        let time_part = chars.as_str().trim_start();
        let is_time = TIME_FORMATS
            .iter()
            .any(|format| NaiveTime::parse_from_str(time_part, format).is_ok());
        if !is_time {
            return Err(malformed("Only a time of day may follow the date"));
        }
    }

    Ok(date)
}

/// Accepts a date string or a TOML date literal; any other value is malformed.
/// The time and offset of a TOML datetime are ignored.
pub fn parse_date_value(field_name: &str, value: &Value) -> Result<NaiveDate, ValidationError> {
    match value {
        Value::String(text) => parse_calendar_date(field_name, text),
        Value::Datetime(datetime) => datetime
            .date
            .and_then(|date| {
                NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
            })
            .ok_or_else(|| ValidationError::MalformedDate {
                field: field_name.to_string(),
                value: datetime.to_string(),
                reason: "TOML time without a date".to_string(),
            }),
        other => Err(ValidationError::MalformedDate {
            field: field_name.to_string(),
            value: other.to_string(),
            reason: format!("Expected a date, found {}", other.type_str()),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        // 空白標籤視同缺漏
        return Err(ValidationError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// `strict` demands `start < end`; otherwise `start == end` is allowed.
pub fn validate_date_order(
    field_name: &str,
    start: NaiveDate,
    end: NaiveDate,
    strict: bool,
) -> Result<(), ValidationError> {
    let ordered = if strict { start < end } else { start <= end };
    if !ordered {
        return Err(ValidationError::InvertedRange {
            field: field_name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}
