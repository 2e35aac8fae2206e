/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::{
	fs::File,
	io::{BufRead, BufReader},
	process::ExitCode,
};

use clap::Parser;

// Prints the first lines of a trace file verbatim, with line numbers,
// for inspecting the format of an unfamiliar trace. No parsing is
// performed, so malformed traces can be inspected too.

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
	#[arg(short, long)]
	path: String,

	#[arg(short, long, default_value_t = 20)]
	lines: usize,
}

fn main() -> ExitCode {
	let args = Args::parse();

	let file = match File::open(&args.path) {
		Ok(file) => file,

		Err(err) => {
			eprintln!("peek: could not open trace file {}: {err}", args.path);
			return ExitCode::FAILURE;
		},
	};

	let reader = BufReader::new(file);

	for (number, line) in reader.lines().take(args.lines).enumerate() {
		match line {
			Ok(line) => println!("{:4}: {line}", number + 1),

			Err(err) => {
				eprintln!("peek: trace stream failed: {err}");
				return ExitCode::FAILURE;
			},
		}
	}

	ExitCode::SUCCESS
}
