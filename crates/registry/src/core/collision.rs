//! Duplicate-name policy and the single insertion path used by every
//! derivation that adds actions.

use indexmap::map::Entry;
use tracing::debug;

use crate::actions::{Action, ActionMap};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Keep the action already registered under a name.
	FirstWins,
	/// Overwrite with the action registered last.
	#[default]
	LastWins,
}

/// Result of inserting one action into a map under construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum InsertAction {
	/// Name was new; action inserted.
	InsertedNew,
	/// Name existed; kept the existing action (policy chose existing).
	KeptExisting,
	/// Name existed; replaced with the new action (policy chose new).
	ReplacedExisting,
}

/// Inserts `action` under `name`, resolving collisions with `policy`.
///
/// A replaced action keeps its slot, so iteration order stays the order in
/// which names were first seen.
pub(crate) fn insert_action<T>(
	actions: &mut ActionMap<T>,
	label: &'static str,
	name: Box<str>,
	action: Action<T>,
	policy: DuplicatePolicy,
) -> InsertAction {
	match actions.entry(name) {
		Entry::Vacant(slot) => {
			slot.insert(action);
			InsertAction::InsertedNew
		}
		Entry::Occupied(mut slot) => match policy {
			DuplicatePolicy::LastWins => {
				debug!(registry = label, action = %slot.key(), "replacing existing action");
				slot.insert(action);
				InsertAction::ReplacedExisting
			}
			DuplicatePolicy::FirstWins => {
				debug!(registry = label, action = %slot.key(), "keeping existing action");
				InsertAction::KeptExisting
			}
		},
	}
}
