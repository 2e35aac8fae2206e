/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::io;
use thiserror::Error;

/// Every failure the simulation engine can surface. All of them are
/// fatal for the run; none is retried or recovered silently.
#[derive(Debug, Error)]
pub enum SimError {
	#[error("Invalid frame count: {0} (must be at least 1).")]
	InvalidFrames(usize),

	#[error("Invalid replacement policy: {0:?}.")]
	UnknownPolicy(String),

	#[error("Malformed trace line {line}: {content:?}.")]
	MalformedLine {
		line: u64,
		content: String,
	},

	#[error("Trace stream failed: {0}")]
	Stream(#[from] io::Error),
}
