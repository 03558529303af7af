use crate::domain::raw::{RawCalendar, RawVacation, RawWindow};

/// The Spring 2022 calendar as it was originally entered, known data-entry
/// quirk included: the first "Winter Vacation" starts in 2021, before the
/// semester does.
pub fn spring_2022() -> RawCalendar {
    RawCalendar::new(
        RawWindow::new("2022-01-26", "2022-05-05"),
        vec![
            RawVacation::new("Winter Vacation", "2021-03-10", "2022-03-13"),
            RawVacation::new("Winter Vacation", "2022-04-15", "2022-04-18"),
        ],
    )
}
