//! Action handles stored in a registry.

use std::sync::Arc;

use rustc_hash::FxBuildHasher;

use crate::core::InvokeError;

mod macros;

/// Name-to-action map, iterated in insertion order.
pub type ActionMap<T> = indexmap::IndexMap<Box<str>, Action<T>, FxBuildHasher>;

type ActionFn<T> = dyn Fn(&T) -> anyhow::Result<T> + Send + Sync;

/// A shareable action callable with an optional declared name.
///
/// Clones share the same callable; [`Action::ptr_eq`] compares that identity.
pub struct Action<T> {
	name: Option<Box<str>>,
	handler: Arc<ActionFn<T>>,
}

impl<T> Clone for Action<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			handler: self.handler.clone(),
		}
	}
}

impl<T> std::fmt::Debug for Action<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Action").field("name", &self.name).finish_non_exhaustive()
	}
}

impl<T: 'static> Action<T> {
	/// Creates an anonymous action.
	///
	/// Anonymous actions can only be registered under an explicit name.
	pub fn new<F>(handler: F) -> Self
	where
		F: Fn(&T) -> anyhow::Result<T> + Send + Sync + 'static,
	{
		Self {
			name: None,
			handler: Arc::new(handler),
		}
	}

	/// Creates an action that declares its own name.
	pub fn named<F>(name: impl Into<Box<str>>, handler: F) -> Self
	where
		F: Fn(&T) -> anyhow::Result<T> + Send + Sync + 'static,
	{
		Self {
			name: Some(name.into()),
			handler: Arc::new(handler),
		}
	}

	/// Creates an anonymous action from an infallible function.
	pub fn pure<F>(handler: F) -> Self
	where
		F: Fn(&T) -> T + Send + Sync + 'static,
	{
		Self::new(move |args| Ok(handler(args)))
	}
}

impl<T> Action<T> {
	/// Declared name, if any. Empty names count as absent.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref().filter(|name| !name.is_empty())
	}

	/// Runs the action directly, bypassing any registry and its subscribers.
	pub fn call(&self, args: &T) -> anyhow::Result<T> {
		(self.handler)(args)
	}

	/// Whether both handles share the same callable.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.handler, &b.handler)
	}
}

/// Runs `action` registered as `name`, tagging failures with the name.
pub(crate) fn run_action<T>(name: &str, action: &Action<T>, args: &T) -> Result<T, InvokeError> {
	action.call(args).map_err(|source| InvokeError::Action {
		name: name.into(),
		source,
	})
}
