/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use rustc_hash::FxHashMap;
use dlv_list::{VecList, Index};

use crate::{
	policy::Policy,
	trace::PageId,
};

/// Least-recently-used replacement.
///
/// Every reference, hit or miss, moves the page to the
/// most-recently-used end of the stack; eviction removes the
/// least-recently-used end.
pub struct LruPolicy {
	map: FxHashMap<PageId, Index<PageId>>,
	stack: VecList<PageId>,
}

impl LruPolicy {
	pub fn new() -> Self {
		LruPolicy {
			map: FxHashMap::default(),
			stack: VecList::new(),
		}
	}

	fn touch(&mut self, page: &PageId) {
		if let Some(index) = self.map.remove(page) {
			self.stack.remove(index);
		}

		let index = self.stack.push_front(page.clone());
		self.map.insert(page.clone(), index);
	}
}

impl Policy for LruPolicy {
	fn on_reference(&mut self, page: &PageId, _was_hit: bool) {
		self.touch(page);
	}

	fn decide_eviction(&mut self) -> PageId {
		let page = self.stack.pop_back().unwrap();
		self.map.remove(&page);

		page
	}
}
