use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};

use nbody::prelude::*;

/// Integrates the sun and the outer planets and prints the total energy
/// before and after the run.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Number of steps to advance. Zero or negative runs no steps.
	#[arg(default_value_t = DEFAULT_STEPS, allow_negative_numbers = true)]
	steps: i64,

	/// Step size in years.
	#[arg(long, default_value_t = DEFAULT_DT)]
	dt: f64,

	/// Raise log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() -> Result<()> {
	let args = Args::parse();
	setup_logging(args.verbose)?;
	debug!("{:?}", args);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	simulate(&mut out, &mut System::new(), args.steps, args.dt)
		.context("failed to write energies")
}

/// Writes the energy before and after `steps` steps, one value per line.
fn simulate(out: &mut impl Write, system: &mut System, steps: i64, dt: f64) -> io::Result<()> {
	writeln!(out, "{}", system.energy())?;

	let start = Instant::now();
	system.run(steps, dt);
	info!("{} steps of {} in {:?}", steps.max(0), dt, start.elapsed());

	writeln!(out, "{}", system.energy())?;
	out.flush()
}

fn setup_logging(verbose: u8) -> Result<()> {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	// stdout carries only the two energies
	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!(
				"{}[{}][{}] {}",
				chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
				record.target(),
				record.level(),
				message
			))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
		.context("failed to install logger")
}
