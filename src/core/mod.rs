pub mod loader;
pub mod registry;

pub use crate::domain::model::{Advisory, Loaded, SemesterConfig, SemesterWindow, VacationRange};
pub use crate::domain::ports::CalendarProvider;
pub use crate::domain::raw::RawCalendar;
pub use crate::utils::error::Result;
