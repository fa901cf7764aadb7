use clap::{Parser, ValueEnum};

/// Phase of the Moon, lunation calendar and solar events.
#[derive(Parser)]
#[command(
    name = "moontool",
    version,
    about = "Phase of the Moon, lunation calendar and solar events"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also list the year's new and full moons, equinoxes and solstices.
    #[arg(short, long)]
    pub year: bool,

    /// ISO-8601 date-time, signed Unix timestamp or Julian date (default: now).
    #[arg(value_name = "DATETIME|±TIMESTAMP|JD", allow_negative_numbers = true)]
    pub datetime: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
