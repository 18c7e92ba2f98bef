//! Single and batch invocation, plus the bound-action view.

use pocket_invocation::{Outcome, ResultMap, Selector};
use rustc_hash::FxBuildHasher;
use tracing::trace;

use super::Registry;
use crate::actions::run_action;
use crate::core::InvokeError;
use crate::subscribers::{notify_all, publish_single};

/// Bound actions keyed by name, in registry order.
pub type BoundActions<T> = indexmap::IndexMap<Box<str>, BoundAction<T>, FxBuildHasher>;

impl<T> Registry<T> {
	/// Runs the selected actions with `args` and notifies subscribers.
	///
	/// A single name must be registered. In a batch, unknown names are skipped
	/// and a name requested twice runs once. Subscribers only fire once every
	/// selected action has succeeded.
	pub fn invoke(&self, selector: impl Into<Selector>, args: &T) -> Result<Outcome<T>, InvokeError> {
		let selector = selector.into();
		trace!(registry = self.label(), invocation = %selector.describe(), "invoke");

		let outcome = match &selector {
			Selector::One(name) => Outcome::Single(self.run_one(name, args)?),
			Selector::Many(names) => Outcome::Batch(self.run_many(names, args)?),
		};
		notify_all(self.label(), &self.subscribers, &outcome)?;
		Ok(outcome)
	}

	/// Invokes a single action and returns its bare result.
	pub fn invoke_one(&self, name: &str, args: &T) -> Result<T, InvokeError> {
		trace!(registry = self.label(), action = name, "invoke");
		let value = self.run_one(name, args)?;
		publish_single(self.label(), &self.subscribers, value)
	}

	/// Invokes a batch of actions and returns results keyed by name.
	pub fn invoke_many<I, S>(&self, names: I, args: &T) -> Result<ResultMap<T>, InvokeError>
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		match self.invoke(Selector::many(names), args)? {
			Outcome::Batch(results) => Ok(results),
			Outcome::Single(_) => unreachable!("batch selector produced a single outcome"),
		}
	}

	fn run_one(&self, name: &str, args: &T) -> Result<T, InvokeError> {
		let action = self
			.actions
			.get(name)
			.ok_or_else(|| InvokeError::UnknownAction { name: name.into() })?;
		run_action(name, action, args)
	}

	fn run_many(&self, names: &[Box<str>], args: &T) -> Result<ResultMap<T>, InvokeError> {
		let mut results = ResultMap::default();
		for name in names {
			if results.contains_key(&**name) {
				continue;
			}
			let Some(action) = self.actions.get(&**name) else {
				trace!(registry = self.label(), action = %name, "skipping unknown action in batch");
				continue;
			};
			let value = run_action(name, action, args)?;
			results.insert(name.clone(), value);
		}
		Ok(results)
	}

	/// Returns one callable per registered action.
	///
	/// Recomputed on every call. Each [`BoundAction`] holds a snapshot of this
	/// registry, so subscribers still fire when it is called.
	pub fn fns(&self) -> BoundActions<T> {
		self.actions
			.keys()
			.map(|name| {
				let bound = BoundAction {
					registry: self.clone(),
					name: name.clone(),
				};
				(name.clone(), bound)
			})
			.collect()
	}
}

/// A registry action bound to its name, callable on its own.
pub struct BoundAction<T> {
	registry: Registry<T>,
	name: Box<str>,
}

impl<T> Clone for BoundAction<T> {
	fn clone(&self) -> Self {
		Self {
			registry: self.registry.clone(),
			name: self.name.clone(),
		}
	}
}

impl<T> std::fmt::Debug for BoundAction<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BoundAction")
			.field("registry", &self.registry.label())
			.field("name", &self.name)
			.finish()
	}
}

impl<T> BoundAction<T> {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Invokes the action through its registry.
	pub fn call(&self, args: &T) -> Result<T, InvokeError> {
		self.registry.invoke_one(&self.name, args)
	}
}
