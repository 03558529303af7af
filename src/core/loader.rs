use crate::domain::model::{Advisory, Loaded, SemesterConfig, SemesterWindow, VacationRange};
use crate::domain::raw::{RawCalendar, RawVacation, RawWindow};
use crate::utils::error::ValidationError;
use crate::utils::validation::{
    parse_date_value, validate_non_empty_string, validate_required_field, Validate,
};

/// Validates typed calendar values and builds the aggregate.
///
/// Hard checks run in order and stop at the first failure: the window must be
/// strictly ordered, then every vacation (in input order) must have
/// `start_date <= end_date`. Vacations that fall outside the window are
/// reported as advisories and do not fail the load.
pub fn load(
    window: SemesterWindow,
    vacations: Vec<VacationRange>,
) -> Result<Loaded, ValidationError> {
    window.validate("window")?;
    validated(window, vacations)
}

/// Same as [`load`] but starting from untyped input. Missing fields and
/// malformed dates are caught while converting: first the window, whose
/// ordering is checked before any vacation is looked at, then every vacation
/// in input order. Vacation ordering is checked only once all of them convert.
pub fn load_raw(raw: &RawCalendar) -> Result<Loaded, ValidationError> {
    let raw_window = validate_required_field("window", &raw.window)?;
    let window = convert_window(raw_window)?;
    window.validate("window")?;

    let vacations = raw
        .vacations
        .iter()
        .enumerate()
        .map(|(index, raw_vacation)| convert_vacation(&vacation_path(index), raw_vacation))
        .collect::<Result<Vec<_>, ValidationError>>()?;

    validated(window, vacations)
}

fn validated(
    window: SemesterWindow,
    vacations: Vec<VacationRange>,
) -> Result<Loaded, ValidationError> {
    for (index, vacation) in vacations.iter().enumerate() {
        vacation.validate(&vacation_path(index))?;
    }

    let advisories = collect_advisories(&window, &vacations);
    for advisory in &advisories {
        tracing::warn!("⚠️ {}", advisory);
    }

    tracing::debug!(
        "Semester calendar validated: window {}, {} vacation range(s), {} advisory(ies)",
        window,
        vacations.len(),
        advisories.len()
    );

    Ok(Loaded {
        config: SemesterConfig { window, vacations },
        advisories,
    })
}

pub fn collect_advisories(window: &SemesterWindow, vacations: &[VacationRange]) -> Vec<Advisory> {
    vacations
        .iter()
        .enumerate()
        .filter(|(_, vacation)| !vacation.lies_within(window))
        .map(|(index, vacation)| Advisory::VacationOutsideWindow {
            index,
            label: vacation.label.clone(),
            start_date: vacation.start_date,
            end_date: vacation.end_date,
            window: *window,
        })
        .collect()
}

fn convert_window(raw: &RawWindow) -> Result<SemesterWindow, ValidationError> {
    let first_day = validate_required_field("window.first_day", &raw.first_day)?;
    let first_day = parse_date_value("window.first_day", first_day)?;
    let last_day = validate_required_field("window.last_day", &raw.last_day)?;
    let last_day = parse_date_value("window.last_day", last_day)?;
    Ok(SemesterWindow::new(first_day, last_day))
}

fn convert_vacation(path: &str, raw: &RawVacation) -> Result<VacationRange, ValidationError> {
    let label_field = format!("{}.label", path);
    let label = validate_required_field(&label_field, &raw.label)?;
    validate_non_empty_string(&label_field, label)?;

    let start_field = format!("{}.start_date", path);
    let start_date = validate_required_field(&start_field, &raw.start_date)?;
    let start_date = parse_date_value(&start_field, start_date)?;

    let end_field = format!("{}.end_date", path);
    let end_date = validate_required_field(&end_field, &raw.end_date)?;
    let end_date = parse_date_value(&end_field, end_date)?;

    Ok(VacationRange::new(label.trim(), start_date, end_date))
}

fn vacation_path(index: usize) -> String {
    format!("vacations[{}]", index)
}
