/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::io::BufRead;
use log::debug;

use crate::{
	error::SimError,
	metrics::Metrics,
	policy::{Policy, PolicyKind},
	resident::ResidentSet,
	trace::{PageId, TraceReader},
};

/// The outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
	Hit,
	Miss,
}

/// One simulation run: the resident set, the active policy's
/// bookkeeping and the run's counters, exclusively owned for the
/// lifetime of one trace and discarded afterwards.
pub struct Simulation {
	resident: ResidentSet,
	policy: Box<dyn Policy>,
	metrics: Metrics,
}

impl Simulation {
	pub fn new(frames: usize, policy: Box<dyn Policy>) -> Result<Self, SimError> {
		if frames == 0 {
			return Err(SimError::InvalidFrames(frames));
		}

		let simulation = Simulation {
			resident: ResidentSet::new(frames),
			policy,
			metrics: Metrics::new(),
		};

		Ok(simulation)
	}

	/// Processes one reference to completion: hit/miss
	/// classification, any eviction, policy bookkeeping and counter
	/// updates, before the next reference begins.
	pub fn access(&mut self, page: PageId) -> AccessKind {
		if self.resident.contains(&page) {
			self.metrics.record_hit();
			self.policy.on_reference(&page, true);

			debug!("hit  {page}");

			return AccessKind::Hit;
		}

		self.metrics.record_miss();

		let victim = match self.resident.is_full() {
			true => {
				let victim = self.policy.decide_eviction();

				self.resident.remove(&victim);
				self.metrics.record_eviction();

				Some(victim)
			},

			false => None,
		};

		self.resident.insert(page.clone());
		self.policy.on_reference(&page, false);

		match victim {
			Some(victim) => debug!("miss {page} (evicted {victim})"),
			None => debug!("miss {page} ({} frames in use)", self.resident.len()),
		}

		AccessKind::Miss
	}

	pub fn into_metrics(self) -> Metrics {
		self.metrics
	}
}

/// Runs one full trace through the engine and returns the final
/// counters.
///
/// The streaming policies consume the reader lazily in a single pass,
/// holding memory proportional to the frame count. `Optimal` is the
/// documented exception: it needs the next reference of every page,
/// so the full trace is materialized up front.
pub fn simulate<R: BufRead>(
	kind: &PolicyKind,
	frames: usize,
	reader: TraceReader<R>,
) -> Result<Metrics, SimError> {
	if frames == 0 {
		return Err(SimError::InvalidFrames(frames));
	}

	if kind.requires_lookahead() {
		let pages = reader.collect::<Result<Vec<_>, _>>()?;

		debug!("materialized {} references for lookahead", pages.len());

		let mut simulation = Simulation::new(frames, kind.new_policy(frames, &pages))?;

		for page in pages {
			simulation.access(page);
		}

		return Ok(simulation.into_metrics());
	}

	let mut simulation = Simulation::new(frames, kind.new_policy(frames, &[]))?;

	for page in reader {
		simulation.access(page?);
	}

	Ok(simulation.into_metrics())
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use crate::{
		error::SimError,
		metrics::Metrics,
		policy::PolicyKind,
		simulation::{simulate, AccessKind, Simulation},
		trace::{PageId, TraceReader},
	};

	fn run_text(kind: &PolicyKind, frames: usize, text: &str) -> Metrics {
		let reader = TraceReader::new(Cursor::new(text.to_owned()));

		simulate(kind, frames, reader).unwrap()
	}

	fn run(kind: &PolicyKind, frames: usize, pages: &[&str]) -> Metrics {
		run_text(kind, frames, &pages.join("\n"))
	}

	#[test]
	fn fifo_evicts_longest_resident() {
		let metrics = run(&PolicyKind::Fifo, 3, &["1", "2", "3", "2", "4", "1"]);

		assert_eq!(metrics.references, 6);
		assert_eq!(metrics.hits, 1);
		assert_eq!(metrics.misses, 5);
		assert_eq!(metrics.evictions, 2);
	}

	#[test]
	fn loop_within_capacity_never_evicts() {
		let metrics = run(&PolicyKind::Fifo, 3, &["1", "2", "3", "1", "2", "3"]);

		assert_eq!(metrics.hits, 3);
		assert_eq!(metrics.misses, 3);
		assert_eq!(metrics.evictions, 0);
		assert_eq!(metrics.hit_rate(), 0.5);
	}

	#[test]
	fn cold_sequential_scan_never_hits() {
		let metrics = run(&PolicyKind::Fifo, 3, &["1", "2", "3", "4", "5", "6"]);

		assert_eq!(metrics.hits, 0);
		assert_eq!(metrics.misses, 6);
		assert_eq!(metrics.evictions, 3);
		assert_eq!(metrics.hit_rate(), 0.0);
	}

	#[test]
	fn consecutive_references_hit_after_first_miss() {
		let metrics = run(&PolicyKind::Fifo, 3, &["1", "1", "1", "2", "2", "3", "3"]);

		assert_eq!(metrics.hits, 4);
		assert_eq!(metrics.misses, 3);
		assert_eq!(metrics.evictions, 0);
	}

	#[test]
	fn comments_and_blanks_are_not_references() {
		let text = "# c\n1\n\n2\n# c2\n3\n2\n";
		let metrics = run_text(&PolicyKind::Fifo, 3, text);

		assert_eq!(metrics.references, 4);
		assert_eq!(metrics.hits, 1);
		assert_eq!(metrics.misses, 3);
		assert_eq!(metrics.evictions, 0);
		assert_eq!(metrics.hit_rate(), 0.25);
	}

	#[test]
	fn empty_trace_is_a_valid_run() {
		let metrics = run_text(&PolicyKind::Fifo, 3, "# nothing but comments\n\n");

		assert_eq!(metrics, Metrics::new());
		assert_eq!(metrics.hit_rate(), 0.0);
	}

	#[test]
	fn fifo_ignores_hits_when_choosing_a_victim() {
		// 1 is hit three times right before the store fills, yet it
		// is still the oldest insertion when 4 arrives.
		let pages = ["1", "2", "3", "1", "1", "1", "4", "1"];

		let fifo = run(&PolicyKind::Fifo, 3, &pages);
		assert_eq!(fifo.hits, 3);
		assert_eq!(fifo.evictions, 2);

		let lru = run(&PolicyKind::Lru, 3, &pages);
		assert_eq!(lru.hits, 4);
		assert_eq!(lru.evictions, 1);
	}

	#[test]
	fn optimal_keeps_pages_with_near_reuse() {
		let pages = ["1", "2", "3", "4", "1", "2"];

		let optimal = run(&PolicyKind::Optimal, 3, &pages);
		assert_eq!(optimal.hits, 2);
		assert_eq!(optimal.misses, 4);
		assert_eq!(optimal.evictions, 1);

		let lru = run(&PolicyKind::Lru, 3, &pages);
		assert_eq!(lru.hits, 0);
	}

	#[test]
	fn clock_spares_recently_hit_pages() {
		let pages = ["1", "2", "3", "4", "2", "5", "3"];

		let clock = run(&PolicyKind::Clock, 3, &pages);
		assert_eq!(clock.hits, 1);
		assert_eq!(clock.misses, 6);
		assert_eq!(clock.evictions, 3);

		let fifo = run(&PolicyKind::Fifo, 3, &pages);
		assert_eq!(fifo.hits, 2);
	}

	#[test]
	fn zero_frames_is_rejected_before_reading() {
		let reader = TraceReader::new(Cursor::new("1\n2\n"));
		let err = simulate(&PolicyKind::Fifo, 0, reader).unwrap_err();

		assert!(matches!(err, SimError::InvalidFrames(0)));
	}

	#[test]
	fn malformed_lines_abort_the_run() {
		let reader = TraceReader::new(Cursor::new("1\n2 3\n4\n"));
		let err = simulate(&PolicyKind::Fifo, 3, reader).unwrap_err();

		assert!(matches!(err, SimError::MalformedLine { line: 2, .. }));
	}

	#[test]
	fn access_reports_hits_and_misses() {
		let kind = PolicyKind::Fifo;
		let mut simulation = Simulation::new(3, kind.new_policy(3, &[])).unwrap();

		assert_eq!(simulation.access(PageId::from("1")), AccessKind::Miss);
		assert_eq!(simulation.access(PageId::from("1")), AccessKind::Hit);
		assert_eq!(simulation.access(PageId::from("2")), AccessKind::Miss);
	}
}
