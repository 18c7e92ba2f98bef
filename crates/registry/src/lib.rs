//! Immutable action registry.
//!
//! A [`Registry`] maps action names to functions and keeps an ordered list
//! of subscribers. Registries are values: `register`, `remove`, `subscribe`,
//! `unsubscribe` and `combine` all return a new registry and leave the
//! receiver untouched, so any registry can be shared and kept around freely.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Registry`] | Immutable map of actions plus ordered subscribers. |
//! | [`Action`] | Shareable `Fn(&T) -> anyhow::Result<T>` with an optional declared name. |
//! | [`Subscriber`] | Shareable observer of every invocation [`Outcome`]. |
//! | [`ComposedInvoker`] | Right-to-left chain of captured actions. |
//! | [`BatchTransactional`] | Host capability for running a chain as one batch. |
//! | [`InvokeError`] | Everything that can fail during dispatch. |
//!
//! # Example
//!
//! ```ignore
//! use pocket_registry::{Action, Registry, Subscriber, named_action};
//!
//! fn double(n: &i64) -> anyhow::Result<i64> {
//! 	Ok(n * 2)
//! }
//!
//! let actions = Registry::new()
//! 	.register_auto(named_action!(double))
//! 	.register("plus2", Action::pure(|n: &i64| n + 2))
//! 	.subscribe(Subscriber::observer(|outcome| println!("{outcome:?}")));
//!
//! assert_eq!(actions.invoke_one("double", &2)?, 4);
//! let double_plus2 = actions.compose(["double", "plus2"]);
//! assert_eq!(double_plus2.call(3)?, 10);
//! ```

pub mod actions;
pub mod core;
mod registry;
pub mod subscribers;

pub use actions::{Action, ActionMap};
pub use crate::core::{DuplicatePolicy, InvokeError, RegistryOptions};
pub use pocket_invocation::{Outcome, ResultMap, Selector};
pub use registry::{BatchTransactional, BoundAction, BoundActions, ComposedInvoker, Registry};
pub use subscribers::Subscriber;
