/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt::{self, Display, Formatter};

use crate::metrics::Metrics;

/// The fixed-format results block for one finished run. Formatting
/// only; every number comes from the final `Metrics` and the run's
/// static configuration.
pub struct Report {
	policy: &'static str,
	frames: usize,
	metrics: Metrics,
}

impl Report {
	pub fn new(policy: &'static str, frames: usize, metrics: Metrics) -> Self {
		Report {
			policy,
			frames,
			metrics,
		}
	}
}

impl Display for Report {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		writeln!(f, "=== memsim results ===")?;
		writeln!(f, "policy:     {}", self.policy)?;
		writeln!(f, "frames:     {}", self.frames)?;
		writeln!(f, "references: {}", self.metrics.references)?;
		writeln!(f, "hits:       {}", self.metrics.hits)?;
		writeln!(f, "misses:     {}", self.metrics.misses)?;
		writeln!(f, "evictions:  {}", self.metrics.evictions)?;
		write!(f, "hit_rate:   {:.2}%", self.metrics.hit_rate() * 100.0)
	}
}
