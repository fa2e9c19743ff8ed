use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

type LazyValue = Arc<dyn Fn() -> Value + Send + Sync>;

enum ContextValue {
	Value(Value),
	Lazy(LazyValue),
}

impl Clone for ContextValue {
	fn clone(&self) -> Self {
		match self {
			ContextValue::Value(v) => ContextValue::Value(v.clone()),
			ContextValue::Lazy(f) => ContextValue::Lazy(Arc::clone(f)),
		}
	}
}

impl fmt::Debug for ContextValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ContextValue::Value(v) => v.fmt(f),
			ContextValue::Lazy(_) => f.write_str("<lazy>"),
		}
	}
}

/// Template context: the values a render call hands to the engine
///
/// Plain values are serialized on insertion. Lazy values are closures
/// evaluated immediately before rendering, so expensive or time-sensitive
/// values are computed only when (and every time) the context is actually
/// rendered.
///
/// # Examples
///
/// ```
/// use hotclub_shortcuts::Context;
/// use serde_json::json;
///
/// let mut context = Context::new();
/// context.insert("title", "Concert listing");
/// context.insert_lazy("seats_left", || json!(42));
/// assert_eq!(context.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
	entries: HashMap<String, ContextValue>,
}

impl Context {
	pub fn new() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	/// Insert a value, serializing it for the engine
	///
	/// A value that fails to serialize is skipped with a warning rather
	/// than poisoning the whole render.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) -> &mut Self {
		let key = key.into();
		match serde_json::to_value(value) {
			Ok(value) => {
				self.entries.insert(key, ContextValue::Value(value));
			}
			Err(e) => {
				tracing::warn!("context value for '{}' is not serializable: {}", key, e);
			}
		}
		self
	}

	/// Insert a closure evaluated at render time
	pub fn insert_lazy(
		&mut self,
		key: impl Into<String>,
		value: impl Fn() -> Value + Send + Sync + 'static,
	) -> &mut Self {
		self.entries
			.insert(key.into(), ContextValue::Lazy(Arc::new(value)));
		self
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Flatten into an engine context, evaluating lazy entries now
	pub(crate) fn to_engine(&self) -> tera::Context {
		let mut out = tera::Context::new();
		for (key, value) in &self.entries {
			match value {
				ContextValue::Value(v) => out.insert(key, v),
				ContextValue::Lazy(f) => out.insert(key, &f()),
			}
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn test_insert_overwrites() {
		let mut context = Context::new();
		context.insert("n", 1);
		context.insert("n", 2);
		assert_eq!(context.len(), 1);
		assert_eq!(context.to_engine().get("n"), Some(&json!(2)));
	}

	#[test]
	fn test_lazy_evaluated_per_render() {
		let counter = Arc::new(AtomicUsize::new(0));
		let seen = Arc::clone(&counter);

		let mut context = Context::new();
		context.insert_lazy("tick", move || {
			json!(seen.fetch_add(1, Ordering::SeqCst))
		});

		assert_eq!(counter.load(Ordering::SeqCst), 0);
		assert_eq!(context.to_engine().get("tick"), Some(&json!(0)));
		assert_eq!(context.to_engine().get("tick"), Some(&json!(1)));
	}

	#[test]
	fn test_unserializable_value_is_skipped() {
		struct Opaque;
		impl Serialize for Opaque {
			fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
				Err(serde::ser::Error::custom("nope"))
			}
		}

		let mut context = Context::new();
		context.insert("bad", Opaque);
		assert!(context.is_empty());
	}
}
