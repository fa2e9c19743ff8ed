use std::sync::Arc;

use crate::backend::QueryBackend;
use crate::error::QueryError;
use crate::filter::{Filter, FilterOperator, FilterValue};
use crate::manager::Manager;
use crate::model::Model;

/// A lazy, filterable query
///
/// Nothing touches the backend until one of the executing methods runs.
/// `filter` clones nothing but the accumulated filter list; the backend is
/// shared by reference.
pub struct QuerySet<M: Model> {
	backend: Arc<dyn QueryBackend<M>>,
	filters: Vec<Filter>,
}

impl<M: Model> Clone for QuerySet<M> {
	fn clone(&self) -> Self {
		Self {
			backend: Arc::clone(&self.backend),
			filters: self.filters.clone(),
		}
	}
}

impl<M: Model> QuerySet<M> {
	pub fn new(backend: Arc<dyn QueryBackend<M>>) -> Self {
		Self {
			backend,
			filters: Vec::new(),
		}
	}

	/// Narrow the query by one more field comparison
	pub fn filter(
		mut self,
		field: impl Into<String>,
		operator: FilterOperator,
		value: impl Into<FilterValue>,
	) -> Self {
		self.filters.push(Filter::new(field, operator, value));
		self
	}

	/// Narrow the query by a batch of prepared filters
	pub fn with_filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
		self.filters.extend(filters);
		self
	}

	/// Filtering fetch: every matching row, in the backend's order
	pub async fn all(&self) -> Result<Vec<M>, QueryError> {
		self.backend.fetch(&self.filters).await
	}

	/// Filtering fetch for synchronous callers
	pub fn all_blocking(&self) -> Result<Vec<M>, QueryError> {
		self.backend.fetch_blocking(&self.filters)
	}

	/// Single-result fetch
	///
	/// Zero matches fail with [`QueryError::DoesNotExist`], more than one
	/// with [`QueryError::MultipleObjectsReturned`].
	pub async fn get(&self) -> Result<M, QueryError> {
		Self::exactly_one(self.all().await?)
	}

	/// Single-result fetch for synchronous callers
	pub fn get_blocking(&self) -> Result<M, QueryError> {
		Self::exactly_one(self.all_blocking()?)
	}

	pub async fn count(&self) -> Result<usize, QueryError> {
		Ok(self.all().await?.len())
	}

	pub fn count_blocking(&self) -> Result<usize, QueryError> {
		Ok(self.all_blocking()?.len())
	}

	pub async fn exists(&self) -> Result<bool, QueryError> {
		Ok(!self.all().await?.is_empty())
	}

	pub fn exists_blocking(&self) -> Result<bool, QueryError> {
		Ok(!self.all_blocking()?.is_empty())
	}

	fn exactly_one(mut rows: Vec<M>) -> Result<M, QueryError> {
		match rows.len() {
			0 => Err(QueryError::DoesNotExist {
				model: M::model_name(),
			}),
			1 => Ok(rows.remove(0)),
			count => Err(QueryError::MultipleObjectsReturned {
				model: M::model_name(),
				count,
			}),
		}
	}
}

/// The queryable-source calling shapes: a prepared query set, a manager, or
/// (through [`Model::objects`]) a model type
pub trait IntoQuerySet<M: Model> {
	fn into_queryset(self) -> QuerySet<M>;
}

impl<M: Model> IntoQuerySet<M> for QuerySet<M> {
	fn into_queryset(self) -> QuerySet<M> {
		self
	}
}

impl<M: Model> IntoQuerySet<M> for Manager<M> {
	fn into_queryset(self) -> QuerySet<M> {
		self.get_queryset()
	}
}

impl<M: Model> IntoQuerySet<M> for &Manager<M> {
	fn into_queryset(self) -> QuerySet<M> {
		self.get_queryset()
	}
}
