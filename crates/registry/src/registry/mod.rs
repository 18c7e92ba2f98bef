//! The immutable registry value.
//!
//! # Mental Model
//!
//! A [`Registry`] is a pair of frozen containers: the action map and the
//! subscriber list. Every operation that looks like a mutation builds a new
//! container for the half it changes, shares the other half by `Arc`, and
//! returns a new registry. Existing values, and anything already handed out
//! from them (bound actions, composed invokers), never observe the change.
//!
//! # Invariants
//!
//! - Containers are never mutated after construction.
//!   - Enforced in: `Registry::derive` (the only constructor past `with_options`).
//!   - Tested by: `tests::derivations_leave_receiver_untouched`
//! - Registration without a resolvable name is a no-op sharing storage.
//!   - Enforced in: [`Registry::register`], [`Registry::register_auto`].
//!   - Tested by: `tests::anonymous_registration_is_a_noop`
//! - Subscribers survive every derivation, `remove` included.
//!   - Tested by: `tests::remove_keeps_subscribers`

use std::sync::Arc;

use pocket_invocation::Selector;
use tracing::debug;

use crate::actions::{Action, ActionMap};
use crate::core::collision::insert_action;
use crate::core::{DuplicatePolicy, RegistryOptions};
use crate::subscribers::Subscriber;

mod compose;
mod invoke;

pub use compose::{BatchTransactional, ComposedInvoker};
pub use invoke::{BoundAction, BoundActions};


/// Immutable collection of named actions and ordered subscribers.
pub struct Registry<T> {
	actions: Arc<ActionMap<T>>,
	subscribers: Arc<[Subscriber<T>]>,
	options: RegistryOptions,
}

impl<T> Clone for Registry<T> {
	fn clone(&self) -> Self {
		Self {
			actions: self.actions.clone(),
			subscribers: self.subscribers.clone(),
			options: self.options,
		}
	}
}

impl<T> Default for Registry<T> {
	fn default() -> Self {
		Self::with_options(RegistryOptions::default())
	}
}

impl<T> std::fmt::Debug for Registry<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.options.label)
			.field("actions", &self.actions.keys().collect::<Vec<_>>())
			.field("subscribers", &self.subscribers.len())
			.finish()
	}
}

impl<T> Registry<T> {
	/// Creates an empty registry with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty registry with the given options.
	pub fn with_options(options: RegistryOptions) -> Self {
		Self {
			actions: Arc::new(ActionMap::default()),
			subscribers: Arc::from(Vec::new()),
			options,
		}
	}

	/// Folds `registries` into one, starting from an empty default registry.
	pub fn combine_all<'a, I>(registries: I) -> Self
	where
		I: IntoIterator<Item = &'a Registry<T>>,
		T: 'a,
	{
		Self::new().combine(registries)
	}

	fn derive(&self, actions: Arc<ActionMap<T>>, subscribers: Arc<[Subscriber<T>]>) -> Self {
		Self {
			actions,
			subscribers,
			options: self.options,
		}
	}

	/// Registers `action` under an explicit `name`.
	///
	/// The explicit name wins over any name the action declares. An empty name
	/// is a no-op and the returned registry shares this one's storage.
	pub fn register(&self, name: impl Into<Box<str>>, action: Action<T>) -> Self {
		let name = name.into();
		if name.is_empty() {
			debug!(registry = self.label(), "ignoring registration without a name");
			return self.clone();
		}
		self.insert(name, action)
	}

	/// Registers `action` under the name it declares.
	///
	/// Anonymous actions are ignored and the returned registry shares this
	/// one's storage.
	pub fn register_auto(&self, action: Action<T>) -> Self {
		match action.name() {
			Some(name) => {
				let name: Box<str> = name.into();
				self.insert(name, action)
			}
			None => {
				debug!(registry = self.label(), "ignoring anonymous action");
				self.clone()
			}
		}
	}

	/// Registers every `(name, action)` pair in order.
	pub fn register_many<I, S>(&self, entries: I) -> Self
	where
		I: IntoIterator<Item = (S, Action<T>)>,
		S: Into<Box<str>>,
	{
		let mut actions = (*self.actions).clone();
		let mut changed = false;
		for (name, action) in entries {
			let name = name.into();
			if name.is_empty() {
				debug!(registry = self.label(), "ignoring registration without a name");
				continue;
			}
			insert_action(&mut actions, self.label(), name, action, self.options.duplicate_policy);
			changed = true;
		}
		if !changed {
			return self.clone();
		}
		self.derive(Arc::new(actions), self.subscribers.clone())
	}

	fn insert(&self, name: Box<str>, action: Action<T>) -> Self {
		let mut actions = (*self.actions).clone();
		insert_action(&mut actions, self.label(), name, action, self.options.duplicate_policy);
		self.derive(Arc::new(actions), self.subscribers.clone())
	}

	/// Returns a registry without the selected actions. Unknown names are ignored.
	pub fn remove(&self, selector: impl Into<Selector>) -> Self {
		let selector = selector.into();
		let actions: ActionMap<T> = self
			.actions
			.iter()
			.filter(|(name, _)| !selector.contains(name))
			.map(|(name, action)| (name.clone(), action.clone()))
			.collect();
		self.derive(Arc::new(actions), self.subscribers.clone())
	}

	/// Returns a registry with `subscriber` appended to the subscriber list.
	pub fn subscribe(&self, subscriber: Subscriber<T>) -> Self {
		let subscribers: Arc<[Subscriber<T>]> = self
			.subscribers
			.iter()
			.cloned()
			.chain(std::iter::once(subscriber))
			.collect();
		self.derive(self.actions.clone(), subscribers)
	}

	/// Returns a registry without any occurrence of `subscriber`.
	pub fn unsubscribe(&self, subscriber: &Subscriber<T>) -> Self {
		let subscribers: Arc<[Subscriber<T>]> = self
			.subscribers
			.iter()
			.filter(|s| !Subscriber::ptr_eq(s, subscriber))
			.cloned()
			.collect();
		self.derive(self.actions.clone(), subscribers)
	}

	/// Merges `others` into this registry, left to right.
	///
	/// Name collisions follow this registry's duplicate policy, so by default
	/// the last registry wins. Subscribers are concatenated in argument order
	/// after this registry's own.
	pub fn combine<'a, I>(&self, others: I) -> Self
	where
		I: IntoIterator<Item = &'a Registry<T>>,
		T: 'a,
	{
		let mut actions = (*self.actions).clone();
		let mut subscribers = self.subscribers.to_vec();
		for other in others {
			for (name, action) in other.actions.iter() {
				insert_action(
					&mut actions,
					self.label(),
					name.clone(),
					action.clone(),
					self.options.duplicate_policy,
				);
			}
			subscribers.extend(other.subscribers.iter().cloned());
		}
		self.derive(Arc::new(actions), Arc::from(subscribers))
	}

	/// Returns a registry with the same contents and a different duplicate policy.
	pub fn with_policy(&self, policy: DuplicatePolicy) -> Self {
		Self {
			actions: self.actions.clone(),
			subscribers: self.subscribers.clone(),
			options: self.options.with_policy(policy),
		}
	}

	pub fn actions(&self) -> &ActionMap<T> {
		&self.actions
	}

	pub fn get(&self, name: &str) -> Option<&Action<T>> {
		self.actions.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.actions.contains_key(name)
	}

	/// Registered names in iteration order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.actions.keys().map(|name| &**name)
	}

	pub fn len(&self) -> usize {
		self.actions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}

	pub fn subscribers(&self) -> &[Subscriber<T>] {
		&self.subscribers
	}

	pub fn options(&self) -> &RegistryOptions {
		&self.options
	}

	pub fn label(&self) -> &'static str {
		self.options.label
	}

	/// Whether both registries share the same action map and subscriber list.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.actions, &b.actions) && Arc::ptr_eq(&a.subscribers, &b.subscribers)
	}
}
