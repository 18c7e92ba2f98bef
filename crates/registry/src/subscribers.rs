//! Subscriber handles and notification.
//!
//! Subscribers observe the [`Outcome`] of every invocation after it has been
//! computed. They cannot change the result; their successes are discarded and
//! the first failure stops notification.

use std::sync::Arc;

use pocket_invocation::Outcome;

use crate::core::InvokeError;

type SubscriberFn<T> = dyn Fn(&Outcome<T>) -> anyhow::Result<()> + Send + Sync;

/// A shareable subscriber callable.
///
/// Identity is the shared callable: clones of one handle are the same
/// subscriber for [`Registry::unsubscribe`](crate::Registry::unsubscribe).
pub struct Subscriber<T> {
	handler: Arc<SubscriberFn<T>>,
}

impl<T> Clone for Subscriber<T> {
	fn clone(&self) -> Self {
		Self {
			handler: self.handler.clone(),
		}
	}
}

impl<T> std::fmt::Debug for Subscriber<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscriber")
			.field("ptr", &Arc::as_ptr(&self.handler).cast::<()>())
			.finish()
	}
}

impl<T: 'static> Subscriber<T> {
	pub fn new<F>(handler: F) -> Self
	where
		F: Fn(&Outcome<T>) -> anyhow::Result<()> + Send + Sync + 'static,
	{
		Self {
			handler: Arc::new(handler),
		}
	}

	/// Creates a subscriber that cannot fail.
	pub fn observer<F>(handler: F) -> Self
	where
		F: Fn(&Outcome<T>) + Send + Sync + 'static,
	{
		Self::new(move |outcome| {
			handler(outcome);
			Ok(())
		})
	}
}

impl<T> Subscriber<T> {
	pub fn notify(&self, outcome: &Outcome<T>) -> anyhow::Result<()> {
		(self.handler)(outcome)
	}

	/// Whether both handles share the same callable.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.handler, &b.handler)
	}
}

/// Notifies `subscribers` in order, stopping at the first failure.
pub(crate) fn notify_all<T>(
	label: &'static str,
	subscribers: &[Subscriber<T>],
	outcome: &Outcome<T>,
) -> Result<(), InvokeError> {
	if subscribers.is_empty() {
		return Ok(());
	}
	tracing::trace!(
		registry = label,
		subscribers = subscribers.len(),
		outcome = %outcome.describe(),
		"notifying subscribers"
	);
	for (index, subscriber) in subscribers.iter().enumerate() {
		subscriber
			.notify(outcome)
			.map_err(|source| InvokeError::Subscriber { index, source })?;
	}
	Ok(())
}

/// Publishes a single result and hands it back to the caller.
pub(crate) fn publish_single<T>(
	label: &'static str,
	subscribers: &[Subscriber<T>],
	value: T,
) -> Result<T, InvokeError> {
	let outcome = Outcome::Single(value);
	notify_all(label, subscribers, &outcome)?;
	match outcome {
		Outcome::Single(value) => Ok(value),
		Outcome::Batch(_) => unreachable!("single outcome changed shape"),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;

	#[test]
	fn notify_all_runs_in_order_and_stops_at_failure() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let record = |tag: &'static str| {
			let seen = seen.clone();
			Subscriber::observer(move |_: &Outcome<i32>| seen.lock().unwrap().push(tag))
		};
		let failing = Subscriber::new(|_: &Outcome<i32>| Err(anyhow::anyhow!("nope")));
		let subscribers = [record("a"), record("b"), failing, record("c")];

		let err = notify_all("test", &subscribers, &Outcome::Single(1)).unwrap_err();
		assert!(matches!(err, InvokeError::Subscriber { index: 2, .. }));
		assert_eq!(*seen.lock().unwrap(), ["a", "b"]);
	}

	#[test]
	fn publish_single_returns_value_after_notifying() {
		let seen = Arc::new(Mutex::new(None));
		let sink = seen.clone();
		let subscriber = Subscriber::observer(move |outcome: &Outcome<i32>| {
			*sink.lock().unwrap() = outcome.single().copied();
		});

		let value = publish_single("test", &[subscriber], 7).unwrap();
		assert_eq!(value, 7);
		assert_eq!(*seen.lock().unwrap(), Some(7));
	}
}
