use std::sync::Arc;

use crate::backend::QueryBackend;
use crate::error::QueryError;
use crate::filter::{FilterOperator, FilterValue};
use crate::model::Model;
use crate::queryset::QuerySet;

/// The entry point for querying a model
///
/// Thin front over a backend: every query starts from `get_queryset()` or
/// one of the passthroughs below.
pub struct Manager<M: Model> {
	backend: Arc<dyn QueryBackend<M>>,
}

impl<M: Model> Clone for Manager<M> {
	fn clone(&self) -> Self {
		Self {
			backend: Arc::clone(&self.backend),
		}
	}
}

impl<M: Model> std::fmt::Debug for Manager<M> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Manager").finish_non_exhaustive()
	}
}

impl<M: Model> Manager<M> {
	pub fn new(backend: Arc<dyn QueryBackend<M>>) -> Self {
		Self { backend }
	}

	/// A fresh, unfiltered query set over this manager's backend
	pub fn get_queryset(&self) -> QuerySet<M> {
		QuerySet::new(Arc::clone(&self.backend))
	}

	/// Shorthand for `get_queryset().filter(...)`
	pub fn filter(
		&self,
		field: impl Into<String>,
		operator: FilterOperator,
		value: impl Into<FilterValue>,
	) -> QuerySet<M> {
		self.get_queryset().filter(field, operator, value)
	}

	/// Every row this manager can see
	pub async fn all(&self) -> Result<Vec<M>, QueryError> {
		self.get_queryset().all().await
	}

	/// Every row, for synchronous callers
	pub fn all_blocking(&self) -> Result<Vec<M>, QueryError> {
		self.get_queryset().all_blocking()
	}
}
