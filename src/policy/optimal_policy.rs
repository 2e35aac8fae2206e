/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::collections::VecDeque;
use rustc_hash::FxHashMap;

use crate::{
	policy::Policy,
	trace::PageId,
};

/// Farthest-future-use replacement (Belady's algorithm).
///
/// The constructor indexes every position at which each page occurs,
/// so the bookkeeping grows with the trace length rather than the
/// frame count. The policy must then be driven with exactly the trace
/// it indexed, one `on_reference` call per position.
pub struct OptimalPolicy {
	position: usize,

	future: FxHashMap<PageId, VecDeque<usize>>,
	resident: Vec<PageId>,
}

impl OptimalPolicy {
	pub fn new(trace: &[PageId]) -> Self {
		let mut future = FxHashMap::<PageId, VecDeque<usize>>::default();

		for (position, page) in trace.iter().enumerate() {
			future
				.entry(page.clone())
				.or_default()
				.push_back(position);
		}

		OptimalPolicy {
			position: 0,

			future,
			resident: Vec::new(),
		}
	}

	fn next_use(&self, page: &PageId) -> Option<usize> {
		self.future
			.get(page)
			.and_then(|positions| positions.front())
			.copied()
	}
}

impl Policy for OptimalPolicy {
	fn on_reference(&mut self, page: &PageId, was_hit: bool) {
		if let Some(positions) = self.future.get_mut(page) {
			if positions.front() == Some(&self.position) {
				positions.pop_front();
			}
		}

		self.position += 1;

		if !was_hit {
			self.resident.push(page.clone());
		}
	}

	fn decide_eviction(&mut self) -> PageId {
		let mut victim = 0;
		let mut farthest = 0;

		for (slot, page) in self.resident.iter().enumerate() {
			match self.next_use(page) {
				// Never referenced again: no later candidate can
				// beat it.
				None => {
					victim = slot;
					break;
				},

				Some(next) if next > farthest => {
					victim = slot;
					farthest = next;
				},

				Some(_) => {},
			}
		}

		self.resident.remove(victim)
	}
}
