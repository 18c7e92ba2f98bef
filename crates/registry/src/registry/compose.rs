//! Right-to-left composition of registered actions.

use std::sync::Arc;

use tracing::trace;

use super::Registry;
use crate::actions::{Action, run_action};
use crate::core::InvokeError;
use crate::subscribers::{Subscriber, publish_single};

/// A host that can run a function as one grouped, batched operation.
///
/// The host supplies the starting value, runs `op` once, and owns whatever
/// commit semantics apply to the value `op` returns.
pub trait BatchTransactional<T> {
	fn run_batched(&self, op: &mut dyn FnMut(T) -> Result<T, InvokeError>) -> Result<T, InvokeError>;
}

/// Callable produced by [`Registry::compose`].
///
/// Captures the matching actions and the subscriber list at composition time;
/// later derivations of the source registry do not affect it.
pub struct ComposedInvoker<T> {
	label: &'static str,
	chain: Vec<(Box<str>, Action<T>)>,
	subscribers: Arc<[Subscriber<T>]>,
}

impl<T> Clone for ComposedInvoker<T> {
	fn clone(&self) -> Self {
		Self {
			label: self.label,
			chain: self.chain.clone(),
			subscribers: self.subscribers.clone(),
		}
	}
}

impl<T> std::fmt::Debug for ComposedInvoker<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComposedInvoker")
			.field("registry", &self.label)
			.field("chain", &self.names().collect::<Vec<_>>())
			.finish()
	}
}

impl<T> Registry<T> {
	/// Composes the named actions into one callable, applied right to left.
	///
	/// `compose(["f", "g"]).call(x)` computes `f(g(x))`. Unknown names are
	/// dropped and repeated names are captured once.
	pub fn compose<I, S>(&self, names: I) -> ComposedInvoker<T>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut chain: Vec<(Box<str>, Action<T>)> = Vec::new();
		for name in names {
			let name = name.as_ref();
			if chain.iter().any(|(captured, _)| &**captured == name) {
				continue;
			}
			match self.actions.get_key_value(name) {
				Some((key, action)) => chain.push((key.clone(), action.clone())),
				None => trace!(registry = self.label(), action = name, "dropping unknown action from composition"),
			}
		}
		ComposedInvoker {
			label: self.label(),
			chain,
			subscribers: self.subscribers.clone(),
		}
	}
}

impl<T> ComposedInvoker<T> {
	/// Threads `input` through the chain and notifies subscribers.
	pub fn call(&self, input: T) -> Result<T, InvokeError> {
		trace!(registry = self.label, steps = self.chain.len(), "composed call");
		let value = self.pipeline(input)?;
		publish_single(self.label, &self.subscribers, value)
	}

	/// Runs the chain as a single batched operation on `host`.
	///
	/// The host's result is the output; subscribers see it once the batch
	/// returns.
	pub fn call_batched<H>(&self, host: &H) -> Result<T, InvokeError>
	where
		H: BatchTransactional<T> + ?Sized,
	{
		trace!(registry = self.label, steps = self.chain.len(), "composed call in batch");
		let value = host.run_batched(&mut |input| self.pipeline(input))?;
		publish_single(self.label, &self.subscribers, value)
	}

	fn pipeline(&self, input: T) -> Result<T, InvokeError> {
		self.chain
			.iter()
			.rev()
			.try_fold(input, |value, (name, action)| run_action(name, action, &value))
	}

	/// Captured action names in the order they were given.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.chain.iter().map(|(name, _)| &**name)
	}

	pub fn len(&self) -> usize {
		self.chain.len()
	}

	/// An empty invoker returns its input unchanged.
	pub fn is_empty(&self) -> bool {
		self.chain.is_empty()
	}
}
