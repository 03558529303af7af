use crate::domain::model::{SemesterConfig, SemesterWindow, VacationRange};

/// Read-only view handed to calendar consumers.
pub trait CalendarProvider: Send + Sync {
    fn semester_window(&self) -> &SemesterWindow;
    fn vacation_ranges(&self) -> &[VacationRange];
}

impl CalendarProvider for SemesterConfig {
    fn semester_window(&self) -> &SemesterWindow {
        &self.window
    }

    fn vacation_ranges(&self) -> &[VacationRange] {
        &self.vacations
    }
}
