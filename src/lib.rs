pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::core::registry::{self, SemesterCalendar};
pub use crate::domain::model::{Advisory, Loaded, SemesterConfig, SemesterWindow, VacationRange};
pub use crate::domain::ports::CalendarProvider;
pub use crate::domain::raw::{RawCalendar, RawVacation, RawWindow};
pub use crate::utils::error::{CalendarError, Result, ValidationError};
