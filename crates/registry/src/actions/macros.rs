//! Action construction macros.

/// Builds an [`Action`](crate::Action) named after a function item.
///
/// The function must be in scope and have the signature
/// `fn(&T) -> anyhow::Result<T>`.
///
/// ```ignore
/// fn double(n: &i64) -> anyhow::Result<i64> {
/// 	Ok(n * 2)
/// }
///
/// let registry = Registry::new().register_auto(pocket_registry::named_action!(double));
/// assert_eq!(registry.invoke_one("double", &2)?, 4);
/// ```
#[macro_export]
macro_rules! named_action {
	($name:ident) => {
		$crate::Action::named(stringify!($name), $name)
	};
}
