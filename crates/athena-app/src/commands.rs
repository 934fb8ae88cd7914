//! Command implementations.
//!
//! Every command writes its console output to the given writer so the
//! binary and the tests share the same code path.

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use athena_core::TimestampPolicy;
use athena_core::config::Settings;
use athena_core::parse_timezone;
use athena_ical::{parse, parse_shift_date, serialize, shift_course};
use athena_plan::{Plan, PlanOptions, convert_plan};
use athena_render::{
    CalendarOptions, IulianaOptions, Sheet, iuliana_sheet, lessons_sheet, render_agenda,
    render_console, render_ics, write_xlsx,
};
use chrono::Utc;
use chrono_tz::Tz;

use crate::cli::{Cli, Command};

/// Settings merged with command line overrides.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub zone: Tz,
    pub timestamps: TimestampPolicy,
}

impl Context {
    /// ## Errors
    /// Returns an error if the configured or requested zone is unknown.
    pub fn new(cli: &Cli, settings: Settings) -> Result<Self> {
        let zone = match cli.timezone.as_deref() {
            Some(name) => parse_timezone(name),
            None => settings.tz(),
        }
        .context("Invalid time zone")?;
        let timestamps = if cli.strict {
            TimestampPolicy::Strict
        } else {
            settings.timestamps
        };

        Ok(Self {
            settings,
            zone,
            timestamps,
        })
    }

    fn plan_options(&self) -> PlanOptions {
        PlanOptions::new(self.zone).with_timestamp_policy(self.timestamps)
    }
}

/// ## Summary
/// Runs one command.
///
/// ## Errors
/// Returns an error if an input cannot be read or parsed, or an output
/// cannot be written.
pub fn run(command: &Command, ctx: &Context, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::List { plan } => {
            let plan = load_plan(plan, ctx)?;
            out.write_all(render_console(&plan.lessons).as_bytes())?;
        }
        Command::Sheet { plan, output, echo } => {
            let plan = load_plan(plan, ctx)?;
            save_sheet(&lessons_sheet(&plan.lessons), output)?;
            if *echo {
                out.write_all(render_console(&plan.lessons).as_bytes())?;
            }
        }
        Command::Iuliana {
            plan,
            output,
            course_name,
            course_code,
            echo,
        } => {
            let options = IulianaOptions {
                course_name: course_name
                    .clone()
                    .or_else(|| ctx.settings.course.name.clone())
                    .unwrap_or_default(),
                course_code: course_code
                    .clone()
                    .or_else(|| ctx.settings.course.code.clone())
                    .unwrap_or_default(),
            };
            let plan = load_plan(plan, ctx)?;
            save_sheet(&iuliana_sheet(&plan.lessons, &options), output)?;
            if *echo {
                out.write_all(render_console(&plan.lessons).as_bytes())?;
            }
        }
        Command::Ics {
            plan,
            output,
            name,
            description,
        } => {
            let plan = load_plan(plan, ctx)?;
            let calendar = &ctx.settings.calendar;
            let options = CalendarOptions {
                name: name.clone().or_else(|| calendar.name.clone()),
                description: description.clone().or_else(|| calendar.description.clone()),
                generated_at: Utc::now(),
            };
            let text = render_ics(&plan.lessons, &options);
            match output {
                Some(path) => write_file(path, text.as_bytes())?,
                None => out.write_all(text.as_bytes())?,
            }
        }
        Command::Shift {
            input,
            start_date,
            output,
        } => {
            shift_file(input, start_date, output, ctx, out)?;
        }
        Command::Agenda { input } => {
            let ical = load_calendar(input)?;
            let agenda = render_agenda(&ical, ctx.zone)
                .with_context(|| format!("Failed to read events of {}", input.display()))?;
            out.write_all(agenda.as_bytes())?;
        }
    }

    Ok(())
}

fn shift_file(
    input: &Path,
    start_date: &str,
    output: &Path,
    ctx: &Context,
    out: &mut dyn Write,
) -> Result<()> {
    let new_date = parse_shift_date(start_date)?;
    let mut ical = load_calendar(input)?;
    let report = shift_course(&mut ical, new_date, ctx.zone, Utc::now())
        .with_context(|| format!("Failed to shift {}", input.display()))?;
    write_file(output, serialize(&ical).as_bytes())?;

    writeln!(
        out,
        "Moved {} events by {} days: first lesson {} is now {}",
        report.shifted,
        report.delta_days,
        report.old_start.format("%Y-%m-%d %H:%M"),
        report.new_start.format("%Y-%m-%d %H:%M"),
    )?;
    Ok(())
}

fn load_plan(path: &Path, ctx: &Context) -> Result<Plan> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let plan = convert_plan(&xml, &ctx.plan_options())
        .with_context(|| format!("Failed to convert {}", path.display()))?;

    for diagnostic in &plan.diagnostics {
        eprintln!("warning: {}: {diagnostic}", path.display());
    }
    tracing::info!(
        path = %path.display(),
        lessons = plan.lessons.len(),
        diagnostics = plan.diagnostics.len(),
        "Plan loaded"
    );
    Ok(plan)
}

fn load_calendar(path: &Path) -> Result<athena_ical::ICalendar> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn save_sheet(sheet: &Sheet, path: &Path) -> Result<()> {
    let bytes = write_xlsx(sheet).context("Failed to build spreadsheet")?;
    write_file(path, &bytes)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote output");
    Ok(())
}
