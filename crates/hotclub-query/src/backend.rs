use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;

use crate::error::QueryError;
use crate::filter::Filter;

/// A storage engine the query layer can execute against
///
/// `fetch` and `fetch_blocking` carry identical semantics: return every row
/// satisfying all of `filters`, in the backend's natural order, and never
/// treat an empty result as an error. The pair exists so that both
/// synchronous and asynchronous request-handling contexts can share one
/// contract.
#[async_trait]
pub trait QueryBackend<M>: Send + Sync {
	/// Filtering fetch, suspending on backend I/O
	async fn fetch(&self, filters: &[Filter]) -> Result<Vec<M>, QueryError>;

	/// Filtering fetch for synchronous callers
	fn fetch_blocking(&self, filters: &[Filter]) -> Result<Vec<M>, QueryError>;
}

/// Rows in process memory
///
/// The reference backend: rows live behind an `RwLock`, filters are
/// evaluated against each row's serde_json projection. Insertion order is
/// the fetch order.
pub struct MemoryBackend<M> {
	rows: RwLock<Vec<M>>,
}

impl<M> MemoryBackend<M> {
	pub fn new() -> Self {
		Self {
			rows: RwLock::new(Vec::new()),
		}
	}

	pub fn from_rows(rows: Vec<M>) -> Self {
		Self {
			rows: RwLock::new(rows),
		}
	}

	pub fn insert(&self, row: M) {
		self.rows.write().push(row);
	}

	pub fn len(&self) -> usize {
		self.rows.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.read().is_empty()
	}
}

impl<M> Default for MemoryBackend<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M> MemoryBackend<M>
where
	M: Serialize + Clone + Send + Sync,
{
	fn matching(&self, filters: &[Filter]) -> Result<Vec<M>, QueryError> {
		let rows = self.rows.read();
		let mut out = Vec::new();
		for row in rows.iter() {
			let projected = serde_json::to_value(row)
				.map_err(|e| QueryError::Backend(format!("row projection failed: {}", e)))?;
			if filters.iter().all(|f| f.matches(&projected)) {
				out.push(row.clone());
			}
		}
		Ok(out)
	}
}

#[async_trait]
impl<M> QueryBackend<M> for MemoryBackend<M>
where
	M: Serialize + Clone + Send + Sync,
{
	async fn fetch(&self, filters: &[Filter]) -> Result<Vec<M>, QueryError> {
		self.matching(filters)
	}

	fn fetch_blocking(&self, filters: &[Filter]) -> Result<Vec<M>, QueryError> {
		self.matching(filters)
	}
}
