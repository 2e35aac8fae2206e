/*
 * Copyright (c) Kia Shakiba
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

pub mod kind;

mod fifo_policy;
mod lru_policy;
mod clock_policy;
mod optimal_policy;

use crate::trace::PageId;

pub use crate::policy::kind::PolicyKind;

/// A replacement policy's private bookkeeping, updated on every
/// reference and consulted whenever a miss occurs on a full resident
/// set.
pub trait Policy {
	/// Updates the bookkeeping for one reference, hit or miss. On a
	/// miss, any required eviction has already been decided and the
	/// referenced page is being inserted.
	fn on_reference(&mut self, page: &PageId, was_hit: bool);

	/// Chooses the resident page to evict. Called only on a miss
	/// while the resident set is at capacity, before the missed page
	/// is inserted.
	fn decide_eviction(&mut self) -> PageId;
}

pub use crate::{
	policy::fifo_policy::*,
	policy::lru_policy::*,
	policy::clock_policy::*,
	policy::optimal_policy::*,
};
