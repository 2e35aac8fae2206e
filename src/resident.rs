/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use rustc_hash::FxHashSet;
use crate::trace::PageId;

/// The bounded set of currently resident pages.
///
/// Holds membership only; any ordering among residents lives in the
/// active policy's bookkeeping. The set never exceeds `frames`
/// entries and never holds a page twice.
pub struct ResidentSet {
	frames: usize,
	pages: FxHashSet<PageId>,
}

impl ResidentSet {
	pub fn new(frames: usize) -> Self {
		ResidentSet {
			frames,
			pages: FxHashSet::default(),
		}
	}

	pub fn len(&self) -> usize {
		self.pages.len()
	}

	pub fn is_full(&self) -> bool {
		self.pages.len() == self.frames
	}

	pub fn contains(&self, page: &PageId) -> bool {
		self.pages.contains(page)
	}

	pub fn insert(&mut self, page: PageId) {
		self.pages.insert(page);

		debug_assert!(self.pages.len() <= self.frames);
	}

	pub fn remove(&mut self, page: &PageId) -> bool {
		self.pages.remove(page)
	}
}
