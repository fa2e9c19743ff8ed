/// Failures surfaced by query execution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
	/// The single-result fetch matched nothing
	#[error("no {model} matches the given query")]
	DoesNotExist { model: &'static str },
	/// The single-result fetch matched more than one row
	#[error("get() returned more than one {model} ({count} found)")]
	MultipleObjectsReturned { model: &'static str, count: usize },
	/// The backend itself failed
	#[error("query backend error: {0}")]
	Backend(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_name_the_model() {
		let err = QueryError::DoesNotExist { model: "Track" };
		assert_eq!(err.to_string(), "no Track matches the given query");

		let err = QueryError::MultipleObjectsReturned {
			model: "Track",
			count: 3,
		};
		assert_eq!(
			err.to_string(),
			"get() returned more than one Track (3 found)"
		);
	}
}
