/// Error type shared by the HTTP value layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("not found: {0}")]
	NotFound(String),
	#[error("invalid request: {0}")]
	InvalidRequest(String),
	#[error("serialization failed: {0}")]
	Serialization(String),
	#[error("internal error: {0}")]
	Internal(String),
}

impl Error {
	/// The HTTP status code this error maps to at the boundary
	pub fn status_code(&self) -> u16 {
		match self {
			Error::NotFound(_) => 404,
			Error::InvalidRequest(_) => 400,
			Error::Serialization(_) | Error::Internal(_) => 500,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
