/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use crate::{
	error::SimError,
	trace::PageId,
	policy::{
		Policy,
		FifoPolicy,
		LruPolicy,
		ClockPolicy,
		OptimalPolicy,
	},
};

/// The closed set of replacement policies. Selected once at
/// configuration time and held for the run's duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyKind {
	Fifo,
	Lru,
	Clock,
	Optimal,
}

impl PolicyKind {
	pub fn name(&self) -> &'static str {
		match self {
			PolicyKind::Fifo => "FIFO",
			PolicyKind::Lru => "LRU",
			PolicyKind::Clock => "CLOCK",
			PolicyKind::Optimal => "OPTIMAL",
		}
	}

	/// Returns `true` if the policy needs the full trace ahead of
	/// time instead of a streamed one.
	pub fn requires_lookahead(&self) -> bool {
		matches!(self, PolicyKind::Optimal)
	}

	/// Builds the policy's bookkeeping. `lookahead` is the
	/// materialized trace for `Optimal` and is ignored by the
	/// streaming policies.
	pub fn new_policy(&self, frames: usize, lookahead: &[PageId]) -> Box<dyn Policy> {
		match self {
			PolicyKind::Fifo => Box::new(FifoPolicy::new()),
			PolicyKind::Lru => Box::new(LruPolicy::new()),
			PolicyKind::Clock => Box::new(ClockPolicy::new(frames)),
			PolicyKind::Optimal => Box::new(OptimalPolicy::new(lookahead)),
		}
	}
}

impl FromStr for PolicyKind {
	type Err = SimError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.to_ascii_lowercase().as_str() {
			"fifo" => Ok(PolicyKind::Fifo),
			"lru" => Ok(PolicyKind::Lru),
			"clock" => Ok(PolicyKind::Clock),
			"optimal" => Ok(PolicyKind::Optimal),

			_ => Err(SimError::UnknownPolicy(value.to_owned())),
		}
	}
}

impl Display for PolicyKind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}
