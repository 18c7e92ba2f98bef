/// Failure raised while invoking actions or notifying subscribers.
///
/// `anyhow` is the transport inside user callbacks; this enum is what crosses
/// the registry API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InvokeError {
	/// A single-action invocation named an action that is not registered.
	///
	/// Batch invocations skip unknown names instead.
	#[error("unknown action: {name:?}")]
	UnknownAction { name: Box<str> },

	/// An action returned an error.
	#[error("action {name:?} failed: {source}")]
	Action {
		name: Box<str>,
		#[source]
		source: anyhow::Error,
	},

	/// A subscriber returned an error. Later subscribers did not run.
	#[error("subscriber #{index} failed: {source}")]
	Subscriber {
		/// Position in the registry's subscriber list.
		index: usize,
		#[source]
		source: anyhow::Error,
	},

	/// A batch-transactional host failed outside the composed pipeline.
	#[error("batched host failed: {0}")]
	Host(#[source] anyhow::Error),
}

impl InvokeError {
	/// Name of the action involved, if any.
	pub fn action_name(&self) -> Option<&str> {
		match self {
			Self::UnknownAction { name } | Self::Action { name, .. } => Some(&**name),
			Self::Subscriber { .. } | Self::Host(_) => None,
		}
	}
}
