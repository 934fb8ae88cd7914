use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "athena", version)]
#[command(about = "Convert Athena course plan exports and re-host course calendars")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to ./athena.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Target time zone, e.g. "Europe/Stockholm"
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// Abort on the first malformed timestamp instead of reporting it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the lessons of a plan export, one per line
    List {
        /// Plan export (XML)
        plan: PathBuf,
    },
    /// Write the lessons of a plan export to a spreadsheet
    Sheet {
        plan: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Also print the console listing
        #[arg(long)]
        echo: bool,
    },
    /// Write a Swedish course schedule spreadsheet
    Iuliana {
        plan: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Course name column
        #[arg(long)]
        course_name: Option<String>,

        /// Course code column
        #[arg(long)]
        course_code: Option<String>,

        /// Also print the console listing
        #[arg(long)]
        echo: bool,
    },
    /// Export the lessons of a plan as an iCalendar file
    Ics {
        plan: PathBuf,

        /// Output file; standard output if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Calendar name (X-WR-CALNAME)
        #[arg(long)]
        name: Option<String>,

        /// Calendar description (X-WR-CALDESC)
        #[arg(long)]
        description: Option<String>,
    },
    /// Move every event of a course calendar so it starts on a new date
    Shift {
        /// Existing course calendar
        input: PathBuf,

        /// New first day of the course (DD.MM.YYYY)
        start_date: String,

        #[arg(default_value = "new.ics")]
        output: PathBuf,
    },
    /// Print a day-by-day agenda of an iCalendar file
    Agenda { input: PathBuf },
}
