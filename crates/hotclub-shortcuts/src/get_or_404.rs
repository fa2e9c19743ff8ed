//! Query shortcuts that translate absence into a not-found signal.
//!
//! Each helper comes in an async and a `_blocking` form with identical
//! validation and error translation; only the way the underlying fetch is
//! invoked differs. The translation touches exactly one condition:
//! [`QueryError::DoesNotExist`] (or an empty list) becomes
//! [`LookupError::NotFound`]. Everything else, including
//! `MultipleObjectsReturned`, passes through untranslated.

use hotclub_http::Response;
use hotclub_query::{Filter, IntoQuerySet, Model, QueryError, QuerySet};

/// Failures surfaced by the or-404 lookup helpers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
	/// The distinguished not-found signal, naming the model it concerns
	///
	/// Intended for the request-handling layer to turn into a 404.
	#[error("no {model} matches the given query")]
	NotFound { model: &'static str },
	/// Any other query failure, passed through unchanged
	#[error(transparent)]
	Query(QueryError),
}

impl From<LookupError> for Response {
	fn from(error: LookupError) -> Self {
		match &error {
			LookupError::NotFound { .. }
			| LookupError::Query(QueryError::DoesNotExist { .. }) => {
				Response::not_found().with_body(error.to_string())
			}
			LookupError::Query(QueryError::MultipleObjectsReturned { .. }) => {
				Response::bad_request().with_body("Multiple objects returned")
			}
			LookupError::Query(err) => {
				// the backend error is logged server-side only, never
				// exposed in the HTTP response
				tracing::error!("query failure in or-404 lookup: {}", err);
				Response::internal_server_error().with_body("Internal server error")
			}
		}
	}
}

/// Fetch exactly one row or surface not-found
///
/// `source` is anything queryable: a prepared [`QuerySet`], a `Manager`,
/// or a model type via `M::objects()?`. `filters` narrow it further, in the
/// same shape `QuerySet::filter` accepts.
///
/// # Examples
///
/// ```rust,ignore
/// use hotclub_query::{Filter, FilterOperator};
/// use hotclub_shortcuts::get_object_or_404;
///
/// async fn track_detail(id: i64) -> Result<Response, Response> {
///     let track = get_object_or_404(
///         Track::objects().map_err(LookupError::Query)?,
///         [Filter::new("id", FilterOperator::Eq, id)],
///     )
///     .await?;
///     Ok(render_json(&track)?)
/// }
/// ```
///
/// # Errors
///
/// [`LookupError::NotFound`] when nothing matches;
/// `MultipleObjectsReturned` and backend failures propagate unchanged
/// inside [`LookupError::Query`].
pub async fn get_object_or_404<M, Q>(
	source: Q,
	filters: impl IntoIterator<Item = Filter>,
) -> Result<M, LookupError>
where
	M: Model,
	Q: IntoQuerySet<M>,
{
	narrow(source, filters).get().await.map_err(absence_to_not_found::<M>)
}

/// [`get_object_or_404`] for synchronous callers
pub fn get_object_or_404_blocking<M, Q>(
	source: Q,
	filters: impl IntoIterator<Item = Filter>,
) -> Result<M, LookupError>
where
	M: Model,
	Q: IntoQuerySet<M>,
{
	narrow(source, filters)
		.get_blocking()
		.map_err(absence_to_not_found::<M>)
}

/// Fetch every matching row, or surface not-found when there are none
///
/// A non-empty result, including a single row, returns as-is, in the
/// fetch's natural order.
pub async fn get_list_or_404<M, Q>(
	source: Q,
	filters: impl IntoIterator<Item = Filter>,
) -> Result<Vec<M>, LookupError>
where
	M: Model,
	Q: IntoQuerySet<M>,
{
	let rows = narrow(source, filters).all().await.map_err(LookupError::Query)?;
	non_empty::<M>(rows)
}

/// [`get_list_or_404`] for synchronous callers
pub fn get_list_or_404_blocking<M, Q>(
	source: Q,
	filters: impl IntoIterator<Item = Filter>,
) -> Result<Vec<M>, LookupError>
where
	M: Model,
	Q: IntoQuerySet<M>,
{
	let rows = narrow(source, filters)
		.all_blocking()
		.map_err(LookupError::Query)?;
	non_empty::<M>(rows)
}

/// Succeed only if at least one row matches
pub async fn exists_or_404<M, Q>(
	source: Q,
	filters: impl IntoIterator<Item = Filter>,
) -> Result<(), LookupError>
where
	M: Model,
	Q: IntoQuerySet<M>,
{
	let exists = narrow(source, filters)
		.exists()
		.await
		.map_err(LookupError::Query)?;
	found_or_not::<M>(exists)
}

/// [`exists_or_404`] for synchronous callers
pub fn exists_or_404_blocking<M, Q>(
	source: Q,
	filters: impl IntoIterator<Item = Filter>,
) -> Result<(), LookupError>
where
	M: Model,
	Q: IntoQuerySet<M>,
{
	let exists = narrow(source, filters)
		.exists_blocking()
		.map_err(LookupError::Query)?;
	found_or_not::<M>(exists)
}

fn narrow<M, Q>(source: Q, filters: impl IntoIterator<Item = Filter>) -> QuerySet<M>
where
	M: Model,
	Q: IntoQuerySet<M>,
{
	source.into_queryset().with_filters(filters)
}

fn absence_to_not_found<M: Model>(err: QueryError) -> LookupError {
	match err {
		QueryError::DoesNotExist { .. } => LookupError::NotFound {
			model: M::model_name(),
		},
		other => LookupError::Query(other),
	}
}

fn non_empty<M: Model>(rows: Vec<M>) -> Result<Vec<M>, LookupError> {
	if rows.is_empty() {
		Err(LookupError::NotFound {
			model: M::model_name(),
		})
	} else {
		Ok(rows)
	}
}

fn found_or_not<M: Model>(exists: bool) -> Result<(), LookupError> {
	if exists {
		Ok(())
	} else {
		Err(LookupError::NotFound {
			model: M::model_name(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hotclub_query::{FilterOperator, Manager, MemoryBackend};
	use serde::Serialize;
	use std::sync::Arc;

	#[derive(Debug, Clone, Serialize, PartialEq)]
	struct Track {
		id: i64,
		album: String,
	}
	impl Model for Track {}

	fn manager() -> Manager<Track> {
		Manager::new(Arc::new(MemoryBackend::from_rows(vec![
			Track {
				id: 1,
				album: "Djangology".into(),
			},
			Track {
				id: 2,
				album: "Djangology".into(),
			},
		])))
	}

	fn by_id(id: i64) -> Filter {
		Filter::new("id", FilterOperator::Eq, id)
	}

	#[test]
	fn test_get_blocking_returns_the_row() {
		let track = get_object_or_404_blocking(&manager(), [by_id(1)]).unwrap();
		assert_eq!(track.id, 1);
	}

	#[test]
	fn test_get_blocking_zero_matches_is_not_found() {
		let err = get_object_or_404_blocking(&manager(), [by_id(404)]).unwrap_err();
		assert_eq!(err, LookupError::NotFound { model: "Track" });
		assert!(err.to_string().contains("Track"));
	}

	#[test]
	fn test_get_blocking_many_matches_is_not_translated() {
		let err = get_object_or_404_blocking(
			&manager(),
			[Filter::new("album", FilterOperator::Eq, "Djangology")],
		)
		.unwrap_err();
		assert_eq!(
			err,
			LookupError::Query(QueryError::MultipleObjectsReturned {
				model: "Track",
				count: 2
			})
		);
	}

	#[test]
	fn test_list_blocking_empty_is_not_found() {
		let err = get_list_or_404_blocking(&manager(), [by_id(404)]).unwrap_err();
		assert!(matches!(err, LookupError::NotFound { model: "Track" }));
	}

	#[test]
	fn test_list_blocking_single_row_is_fine() {
		let rows = get_list_or_404_blocking(&manager(), [by_id(2)]).unwrap();
		assert_eq!(rows.len(), 1);
	}

	#[test]
	fn test_exists_blocking() {
		assert!(exists_or_404_blocking(&manager(), [by_id(1)]).is_ok());
		assert!(exists_or_404_blocking(&manager(), [by_id(9)]).is_err());
	}
}
