use thiserror::Error;

/// Hard failures found while validating calendar input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Malformed date in {field}: '{value}' ({reason})")]
    MalformedDate {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Inverted range in {field}: {start} is not before {end}")]
    InvertedRange {
        field: String,
        start: String,
        end: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MalformedDate { field, .. }
            | ValidationError::InvertedRange { field, .. }
            | ValidationError::MissingField { field } => field,
        }
    }
}

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Semester calendar has not been loaded yet")]
    NotInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CalendarError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalendarError::Validation(ValidationError::MalformedDate { field, .. }) => format!(
                "Fix '{}' so it uses YYYY-MM-DD (or MM/DD/YYYY) and names a real calendar day",
                field
            ),
            CalendarError::Validation(ValidationError::InvertedRange { field, .. }) => {
                format!("Swap or correct the dates of '{}'", field)
            }
            CalendarError::Validation(ValidationError::MissingField { field }) => {
                format!("Add '{}' to the calendar file", field)
            }
            CalendarError::NotInitialized => {
                "Call load() once at startup before reading the calendar".to_string()
            }
            CalendarError::IoError(_) => {
                "Check that the calendar file exists and is readable".to_string()
            }
            CalendarError::TomlParse(_) | CalendarError::JsonParse(_) => {
                "Check the calendar file syntax".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalendarError::Validation(e) => format!("Semester calendar is invalid: {}", e),
            CalendarError::NotInitialized => "Semester calendar is not available yet".to_string(),
            CalendarError::IoError(e) => format!("Could not read the calendar file: {}", e),
            CalendarError::TomlParse(e) => format!("Calendar file is not valid TOML: {}", e),
            CalendarError::JsonParse(e) => format!("Calendar data is not valid JSON: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
