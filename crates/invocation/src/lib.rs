//! Canonical invocation types for registry dispatch.
//!
//! Every call into a registry names its actions through a [`Selector`] and
//! gets back an [`Outcome`] whose shape mirrors the selector: one name yields
//! a bare result, a batch of names yields a [`ResultMap`].

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Per-action results of a batch invocation, in request order.
pub type ResultMap<T> = IndexMap<Box<str>, T, FxBuildHasher>;

/// The set of actions a caller asks a registry to run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
	/// A single action. Unknown names are an error.
	One(Box<str>),
	/// An ordered batch of actions. Unknown names are skipped.
	Many(Vec<Box<str>>),
}

impl Selector {
	/// Creates a single-action selector.
	pub fn one(name: impl Into<Box<str>>) -> Self {
		Self::One(name.into())
	}

	/// Creates a batch selector from any sequence of names.
	pub fn many<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Box<str>>,
	{
		Self::Many(names.into_iter().map(Into::into).collect())
	}

	/// Returns the requested names, in request order.
	pub fn names(&self) -> &[Box<str>] {
		match self {
			Self::One(name) => std::slice::from_ref(name),
			Self::Many(names) => names,
		}
	}

	/// Whether results come back as a [`ResultMap`].
	pub fn is_batch(&self) -> bool {
		matches!(self, Self::Many(_))
	}

	/// Returns true if `name` is one of the requested names.
	pub fn contains(&self, name: &str) -> bool {
		self.names().iter().any(|n| &**n == name)
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		match self {
			Self::One(name) => format!("action:{name}"),
			Self::Many(names) if names.is_empty() => "batch:[]".to_string(),
			Self::Many(names) => format!("batch:[{}]", names.join(",")),
		}
	}
}

impl From<&str> for Selector {
	fn from(name: &str) -> Self {
		Self::one(name)
	}
}

impl From<String> for Selector {
	fn from(name: String) -> Self {
		Self::one(name)
	}
}

impl From<Box<str>> for Selector {
	fn from(name: Box<str>) -> Self {
		Self::One(name)
	}
}

impl From<&[&str]> for Selector {
	fn from(names: &[&str]) -> Self {
		Self::many(names.iter().copied())
	}
}

impl<const N: usize> From<[&str; N]> for Selector {
	fn from(names: [&str; N]) -> Self {
		Self::many(names)
	}
}

impl From<Vec<&str>> for Selector {
	fn from(names: Vec<&str>) -> Self {
		Self::many(names)
	}
}

impl From<Vec<String>> for Selector {
	fn from(names: Vec<String>) -> Self {
		Self::many(names)
	}
}

/// Result of an invocation, shaped like the [`Selector`] that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
	/// Bare result of a single action.
	Single(T),
	/// Results of a batch, keyed by action name.
	Batch(ResultMap<T>),
}

impl<T> Outcome<T> {
	/// Returns the single result, if this is one.
	pub fn single(&self) -> Option<&T> {
		match self {
			Self::Single(value) => Some(value),
			Self::Batch(_) => None,
		}
	}

	/// Returns the batch results, if this is a batch.
	pub fn batch(&self) -> Option<&ResultMap<T>> {
		match self {
			Self::Single(_) => None,
			Self::Batch(results) => Some(results),
		}
	}

	pub fn into_single(self) -> Option<T> {
		match self {
			Self::Single(value) => Some(value),
			Self::Batch(_) => None,
		}
	}

	pub fn into_batch(self) -> Option<ResultMap<T>> {
		match self {
			Self::Single(_) => None,
			Self::Batch(results) => Some(results),
		}
	}

	/// Number of action results carried.
	pub fn len(&self) -> usize {
		match self {
			Self::Single(_) => 1,
			Self::Batch(results) => results.len(),
		}
	}

	/// True only for an empty batch.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		match self {
			Self::Single(_) => "single".to_string(),
			Self::Batch(results) => format!("batch({})", results.len()),
		}
	}
}
