/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

mod error;
mod trace;
mod policy;
mod resident;
mod metrics;
mod simulation;
mod report;

use std::process::ExitCode;
use clap::Parser;

use crate::{
	error::SimError,
	policy::PolicyKind,
	report::Report,
	simulation::simulate,
	trace::TraceReader,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
	#[arg(short, long)]
	path: String,

	#[arg(short, long, default_value_t = 3)]
	frames: usize,

	#[arg(long, default_value = "fifo")]
	policy: PolicyKind,
}

fn main() -> ExitCode {
	env_logger::init();

	let args = Args::parse();

	match run(&args) {
		Ok(report) => {
			println!("{report}");
			ExitCode::SUCCESS
		},

		Err(err) => {
			eprintln!("memsim: {err}");
			ExitCode::FAILURE
		},
	}
}

fn run(args: &Args) -> Result<Report, SimError> {
	let reader = TraceReader::open(&args.path)?;
	let metrics = simulate(&args.policy, args.frames, reader)?;

	Ok(Report::new(args.policy.name(), args.frames, metrics))
}
