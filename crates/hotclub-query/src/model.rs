use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::backend::QueryBackend;
use crate::error::QueryError;
use crate::manager::Manager;

/// A queryable row type
///
/// Implementations usually need nothing beyond `impl Model for T {}`; the
/// name used in error messages defaults to the type's short name.
pub trait Model: Send + Sync + Sized + 'static {
	/// The name used when this model appears in error messages
	fn model_name() -> &'static str {
		let full = std::any::type_name::<Self>();
		full.rsplit("::").next().unwrap_or(full)
	}

	/// The manager for this model, resolved through the process-global
	/// backend binding
	///
	/// Fails with [`QueryError::Backend`] when no backend has been bound
	/// for the type, rather than panicking at the call site.
	fn objects() -> Result<Manager<Self>, QueryError> {
		bound_backend::<Self>().map(Manager::new).ok_or_else(|| {
			QueryError::Backend(format!(
				"no backend bound for model {}",
				Self::model_name()
			))
		})
	}
}

static BINDINGS: Lazy<RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>> =
	Lazy::new(|| RwLock::new(HashMap::new()));

/// Bind a backend as the process-global source for `M`
///
/// Enables the `M::objects()` calling shape. Rebinding replaces the
/// previous backend.
pub fn bind_backend<M: Model>(backend: Arc<dyn QueryBackend<M>>) {
	BINDINGS
		.write()
		.insert(TypeId::of::<M>(), Box::new(backend));
}

/// Drop every backend binding
///
/// Tests that bind backends call this to isolate themselves; run such
/// tests serially.
pub fn clear_bindings() {
	BINDINGS.write().clear();
}

fn bound_backend<M: Model>() -> Option<Arc<dyn QueryBackend<M>>> {
	BINDINGS
		.read()
		.get(&TypeId::of::<M>())
		.and_then(|entry| entry.downcast_ref::<Arc<dyn QueryBackend<M>>>())
		.cloned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::MemoryBackend;
	use serde::Serialize;
	use serial_test::serial;

	#[derive(Debug, Clone, Serialize)]
	struct Gig {
		id: i64,
	}
	impl Model for Gig {}

	#[test]
	fn test_model_name_is_short() {
		assert_eq!(Gig::model_name(), "Gig");
	}

	#[test]
	#[serial]
	fn test_objects_without_binding_fails() {
		clear_bindings();
		let err = Gig::objects().unwrap_err();
		assert!(matches!(err, QueryError::Backend(msg) if msg.contains("Gig")));
	}

	#[test]
	#[serial]
	fn test_objects_resolves_bound_backend() {
		clear_bindings();
		bind_backend::<Gig>(Arc::new(MemoryBackend::from_rows(vec![Gig { id: 1 }])));
		let manager = Gig::objects().unwrap();
		let rows = manager.get_queryset().all_blocking().unwrap();
		assert_eq!(rows.len(), 1);
		clear_bindings();
	}
}
