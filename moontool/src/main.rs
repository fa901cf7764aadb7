mod cli;
mod logging;
mod output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use moon_ephemeris::{
    compute_moon_calendar, compute_moon_phase, compute_sun_calendar, compute_yearly_moon_calendar,
};
use moon_time::{parse_instant, Instant};
use tracing::info;

use crate::cli::{Cli, Format};
use crate::output::Report;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let instant = match cli.datetime.as_deref() {
        Some(arg) => parse_instant(arg).with_context(|| format!("invalid argument '{arg}'"))?,
        None => Instant::now(),
    };
    info!(
        utc = %instant.utc(),
        jd = instant.julian_date().to_f64(),
        "computing moon report"
    );

    let report = Report {
        phase: compute_moon_phase(Some(instant)),
        calendar: compute_moon_calendar(Some(instant)),
        yearly_calendar: cli.year.then(|| compute_yearly_moon_calendar(Some(instant))),
        sun_calendar: cli.year.then(|| compute_sun_calendar(Some(instant))),
    };

    match cli.format {
        Format::Text => print!("{}", output::to_text(&report)),
        Format::Json => println!("{}", output::to_json(&report)?),
    }
    Ok(())
}
