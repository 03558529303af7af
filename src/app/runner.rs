use crate::config::{builtin, CliConfig, OutputFormat};
use crate::core::registry::SemesterCalendar;
use crate::domain::model::{Advisory, Loaded};
use crate::domain::ports::CalendarProvider;
use crate::domain::raw::RawCalendar;
use crate::utils::error::Result;

pub const EXIT_OK: u8 = 0;
/// Hard validation, IO or parse error.
pub const EXIT_FAILURE: u8 = 1;
/// Advisories were reported and `--strict` is set.
pub const EXIT_ADVISORIES: u8 = 2;

/// What one CLI invocation printed and how it should exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub exit_code: u8,
    pub stdout: String,
    pub stderr: String,
}

pub fn exit_code_for(loaded: &Loaded, strict: bool) -> u8 {
    if strict && !loaded.is_clean() {
        EXIT_ADVISORIES
    } else {
        EXIT_OK
    }
}

/// Loads the calendar named by `config` into `calendar` and renders it.
pub fn run(config: &CliConfig, calendar: &SemesterCalendar) -> RunReport {
    match execute(config, calendar) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("❌ Calendar load failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            RunReport {
                exit_code: EXIT_FAILURE,
                stdout: String::new(),
                stderr: format!(
                    "❌ {}\n💡 {}\n",
                    e.user_friendly_message(),
                    e.recovery_suggestion()
                ),
            }
        }
    }
}

fn execute(config: &CliConfig, calendar: &SemesterCalendar) -> Result<RunReport> {
    let raw = if config.builtin {
        tracing::info!("📁 Using bundled Spring 2022 calendar");
        builtin::spring_2022()
    } else {
        tracing::info!("📁 Loading calendar from: {}", config.config);
        RawCalendar::from_file(&config.config)?
    };

    // 驗證並發佈行事曆
    let loaded = calendar.load_raw(&raw)?;
    let current = calendar.get()?;

    let stdout = match config.format {
        OutputFormat::Text => text_summary(current, &loaded.advisories),
        OutputFormat::Json => {
            let report = json_report(current, &loaded.advisories);
            format!("{}\n", serde_json::to_string_pretty(&report)?)
        }
    };

    let exit_code = exit_code_for(&loaded, config.strict);
    if exit_code == EXIT_ADVISORIES {
        tracing::error!(
            "❌ {} advisory(ies) reported in strict mode",
            loaded.advisories.len()
        );
    } else {
        tracing::info!("✅ Semester calendar loaded and validated successfully");
    }

    Ok(RunReport {
        exit_code,
        stdout,
        stderr: String::new(),
    })
}

pub fn json_report(calendar: &dyn CalendarProvider, advisories: &[Advisory]) -> serde_json::Value {
    serde_json::json!({
        "window": calendar.semester_window(),
        "vacations": calendar.vacation_ranges(),
        "advisories": advisories,
    })
}

pub fn text_summary(calendar: &dyn CalendarProvider, advisories: &[Advisory]) -> String {
    let window = calendar.semester_window();
    let vacations = calendar.vacation_ranges();

    let mut lines = vec![
        "📋 Semester Calendar:".to_string(),
        format!("  First day: {}", window.first_day),
        format!("  Last day:  {}", window.last_day),
        String::new(),
        format!("🏖️ Vacations ({}):", vacations.len()),
    ];

    for vacation in vacations {
        if vacation.is_single_day() {
            lines.push(format!("  {} on {}", vacation.label, vacation.start_date));
        } else {
            lines.push(format!(
                "  {} from {} to {}",
                vacation.label, vacation.start_date, vacation.end_date
            ));
        }
    }

    if !advisories.is_empty() {
        lines.push(String::new());
        lines.push(format!("⚠️ Advisories ({}):", advisories.len()));
        lines.extend(advisories.iter().map(|advisory| format!("  {}", advisory)));
    }

    lines.push(String::new());
    lines.join("\n")
}
