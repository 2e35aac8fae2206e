/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::{
	fmt::{self, Display, Formatter},
	fs::File,
	io::{BufRead, BufReader, Lines},
	path::Path,
};

use crate::error::SimError;

/// An opaque page identifier drawn from a trace.
///
/// Traces are numeric in common usage, but the identifier is never
/// interpreted as an address, so any whitespace-free token is a valid
/// page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(String);

impl PageId {
	pub fn new(token: &str) -> Self {
		PageId(token.to_owned())
	}
}

impl From<&str> for PageId {
	fn from(token: &str) -> Self {
		PageId::new(token)
	}
}

impl Display for PageId {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A lazy, single-pass reader of page references.
///
/// Each line is stripped of surrounding whitespace. Blank lines and
/// lines whose first character is `#` are skipped without being
/// counted. Every other line must contain exactly one token, which is
/// yielded as a `PageId`; anything else ends the run with a
/// `MalformedLine` error carrying the line number and content.
pub struct TraceReader<R> {
	lines: Lines<R>,
	line_number: u64,
}

impl<R: BufRead> TraceReader<R> {
	pub fn new(reader: R) -> Self {
		TraceReader {
			lines: reader.lines(),
			line_number: 0,
		}
	}
}

impl TraceReader<BufReader<File>> {
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
		let file = File::open(path)?;

		Ok(TraceReader::new(BufReader::new(file)))
	}
}

impl<R: BufRead> Iterator for TraceReader<R> {
	type Item = Result<PageId, SimError>;

	fn next(&mut self) -> Option<Self::Item> {
		for line in self.lines.by_ref() {
			self.line_number += 1;

			let line = match line {
				Ok(line) => line,
				Err(err) => return Some(Err(SimError::Stream(err))),
			};

			let token = line.trim();

			if token.is_empty() || token.starts_with('#') {
				continue;
			}

			if token.split_whitespace().nth(1).is_some() {
				return Some(Err(SimError::MalformedLine {
					line: self.line_number,
					content: token.to_owned(),
				}));
			}

			return Some(Ok(PageId::new(token)));
		}

		None
	}
}
