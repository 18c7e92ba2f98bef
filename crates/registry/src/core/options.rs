use super::collision::DuplicatePolicy;

/// Per-registry configuration, inherited by every derived registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryOptions {
	/// Tag attached to every tracing event the registry emits.
	pub label: &'static str,
	/// How `register` and `combine` resolve a name that is already taken.
	pub duplicate_policy: DuplicatePolicy,
}

impl RegistryOptions {
	pub const DEFAULT_LABEL: &'static str = "actions";

	/// Creates options with the given label and the default policy.
	pub const fn new(label: &'static str) -> Self {
		Self {
			label,
			duplicate_policy: DuplicatePolicy::LastWins,
		}
	}

	pub const fn with_policy(self, duplicate_policy: DuplicatePolicy) -> Self {
		Self {
			label: self.label,
			duplicate_policy,
		}
	}
}

impl Default for RegistryOptions {
	fn default() -> Self {
		Self::new(Self::DEFAULT_LABEL)
	}
}
