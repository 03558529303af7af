// Kept alone in its own test binary: it is the only code touching the
// process-wide calendar, so the uninitialized state is observable.
use semester_calendar::config::builtin;
use semester_calendar::{registry, CalendarError, CalendarProvider};

#[test]
fn test_global_calendar_lifecycle() {
    assert!(matches!(registry::get(), Err(CalendarError::NotInitialized)));
    assert!(!registry::global().is_ready());

    let first = registry::load_raw(&builtin::spring_2022()).unwrap();
    let calendar = registry::get().unwrap();
    assert_eq!(calendar, &first.config);
    assert_eq!(calendar.vacation_ranges().len(), 2);

    let second = registry::load_raw(&builtin::spring_2022()).unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(calendar, registry::get().unwrap()));
}
