use crate::core::loader;
use crate::domain::model::{Loaded, SemesterConfig, SemesterWindow, VacationRange};
use crate::domain::raw::RawCalendar;
use crate::utils::error::{CalendarError, Result};
use std::sync::OnceLock;

/// Holds the semester calendar once it has loaded successfully.
///
/// Two states only: uninitialized until the first successful `load`, ready
/// afterwards. A failed load leaves it uninitialized. Later loads still
/// validate and return their own result but never replace the published
/// calendar. `OnceLock` gives readers on other threads a fully built value.
#[derive(Debug, Default)]
pub struct SemesterCalendar {
    config: OnceLock<SemesterConfig>,
}

impl SemesterCalendar {
    pub const fn new() -> Self {
        Self {
            config: OnceLock::new(),
        }
    }

    pub fn load(&self, window: SemesterWindow, vacations: Vec<VacationRange>) -> Result<Loaded> {
        let loaded = loader::load(window, vacations)?;
        self.publish(&loaded);
        Ok(loaded)
    }

    pub fn load_raw(&self, raw: &RawCalendar) -> Result<Loaded> {
        let loaded = loader::load_raw(raw)?;
        self.publish(&loaded);
        Ok(loaded)
    }

    pub fn get(&self) -> Result<&SemesterConfig> {
        self.config.get().ok_or(CalendarError::NotInitialized)
    }

    pub fn is_ready(&self) -> bool {
        self.config.get().is_some()
    }

    fn publish(&self, loaded: &Loaded) {
        match self.config.set(loaded.config.clone()) {
            Ok(()) => tracing::info!(
                "✅ Semester calendar ready: {} with {} vacation range(s)",
                loaded.config.window,
                loaded.config.vacations.len()
            ),
            Err(rejected) => {
                if self.config.get() == Some(&rejected) {
                    tracing::debug!("Semester calendar already loaded with identical data");
                } else {
                    tracing::warn!(
                        "⚠️ Semester calendar already loaded; keeping the first calendar ({})",
                        self.config
                            .get()
                            .map(|current| current.window.to_string())
                            .unwrap_or_default()
                    );
                }
            }
        }
    }
}

static CALENDAR: SemesterCalendar = SemesterCalendar::new();

/// The process-wide calendar.
pub fn global() -> &'static SemesterCalendar {
    &CALENDAR
}

pub fn load(window: SemesterWindow, vacations: Vec<VacationRange>) -> Result<Loaded> {
    CALENDAR.load(window, vacations)
}

pub fn load_raw(raw: &RawCalendar) -> Result<Loaded> {
    CALENDAR.load_raw(raw)
}

pub fn get() -> Result<&'static SemesterConfig> {
    CALENDAR.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::raw::{RawVacation, RawWindow};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_before_load_fails() {
        let calendar = SemesterCalendar::new();
        assert!(!calendar.is_ready());
        assert!(matches!(calendar.get(), Err(CalendarError::NotInitialized)));
    }

    #[test]
    fn test_failed_load_stays_uninitialized() {
        let calendar = SemesterCalendar::new();
        let raw = RawCalendar::new(RawWindow::new("2022-05-05", "2022-01-26"), vec![]);

        let err = calendar.load_raw(&raw).unwrap_err();
        assert!(matches!(err, CalendarError::Validation(_)));
        assert!(matches!(calendar.get(), Err(CalendarError::NotInitialized)));
    }

    #[test]
    fn test_load_then_get() {
        let calendar = SemesterCalendar::new();
        let window = SemesterWindow::new(ymd(2022, 1, 26), ymd(2022, 5, 5));
        let loaded = calendar.load(window, vec![]).unwrap();

        assert!(calendar.is_ready());
        assert_eq!(calendar.get().unwrap(), &loaded.config);
    }

    #[test]
    fn test_second_load_keeps_first_calendar() {
        let calendar = SemesterCalendar::new();
        let first = RawCalendar::new(
            RawWindow::new("2022-01-26", "2022-05-05"),
            vec![RawVacation::new("Spring Break", "2022-03-14", "2022-03-18")],
        );
        let second = RawCalendar::new(RawWindow::new("2022-08-29", "2022-12-09"), vec![]);

        let first_loaded = calendar.load_raw(&first).unwrap();
        let again = calendar.load_raw(&first).unwrap();
        assert_eq!(first_loaded, again);

        let other = calendar.load_raw(&second).unwrap();
        assert_eq!(other.config.window.first_day, ymd(2022, 8, 29));
        assert_eq!(calendar.get().unwrap(), &first_loaded.config);
    }

    #[test]
    fn test_readers_on_other_threads_see_published_value() {
        let calendar = Arc::new(SemesterCalendar::new());
        let window = SemesterWindow::new(ymd(2022, 1, 26), ymd(2022, 5, 5));
        calendar.load(window, vec![]).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let calendar = Arc::clone(&calendar);
                std::thread::spawn(move || calendar.get().map(|c| c.window).ok())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(window));
        }
    }
}
