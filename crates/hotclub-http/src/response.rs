use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue, CONTENT_TYPE, LOCATION};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

/// An HTTP response value
///
/// Built by views and shortcuts, turned into a wire message by whatever
/// transport hosts the application.
#[derive(Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a response with the given status and nothing else
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::IM_A_TEAPOT);
	/// assert_eq!(response.status, StatusCode::IM_A_TEAPOT);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// 200 OK
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// 201 Created
	pub fn created() -> Self {
		Self::new(StatusCode::CREATED)
	}

	/// 204 No Content
	pub fn no_content() -> Self {
		Self::new(StatusCode::NO_CONTENT)
	}

	/// 400 Bad Request
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	/// 403 Forbidden
	pub fn forbidden() -> Self {
		Self::new(StatusCode::FORBIDDEN)
	}

	/// 404 Not Found
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// 500 Internal Server Error
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// 302 Found, the classic temporary redirect
	///
	/// User agents may (and in practice do) rewrite the method to GET when
	/// following it. Use [`Response::temporary_redirect`] when the method
	/// must survive.
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::found("/login/");
	/// assert_eq!(response.status, StatusCode::FOUND);
	/// assert_eq!(
	///     response.headers.get("location").unwrap().to_str().unwrap(),
	///     "/login/"
	/// );
	/// ```
	pub fn found(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::FOUND).with_location(location.as_ref())
	}

	/// 301 Moved Permanently
	pub fn moved_permanently(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::MOVED_PERMANENTLY).with_location(location.as_ref())
	}

	/// 307 Temporary Redirect; method and body are preserved
	pub fn temporary_redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::TEMPORARY_REDIRECT).with_location(location.as_ref())
	}

	/// 308 Permanent Redirect; method and body are preserved
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::permanent_redirect("/items/1/");
	/// assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
	/// ```
	pub fn permanent_redirect(location: impl AsRef<str>) -> Self {
		Self::new(StatusCode::PERMANENT_REDIRECT).with_location(location.as_ref())
	}

	/// Set the body
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_http::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("hello");
	/// assert_eq!(response.body, Bytes::from("hello"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a header, ignoring names or values that are not valid header
	/// syntax
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Set the `Location` header
	pub fn with_location(mut self, location: &str) -> Self {
		if let Ok(value) = HeaderValue::from_str(location) {
			self.headers.insert(LOCATION, value);
		}
		self
	}

	/// Set the `Content-Type` header
	pub fn with_content_type(mut self, content_type: &str) -> Self {
		if let Ok(value) = HeaderValue::from_str(content_type) {
			self.headers.insert(CONTENT_TYPE, value);
		}
		self
	}

	/// Serialize `data` into the body and mark it `application/json`
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"ready": true})).unwrap();
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> crate::Result<Self> {
		let json = serde_json::to_vec(data)
			.map_err(|e| crate::Error::Serialization(e.to_string()))?;
		self.body = Bytes::from(json);
		self.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		Ok(self)
	}
}

impl From<crate::Error> for Response {
	fn from(error: crate::Error) -> Self {
		let status = StatusCode::from_u16(error.status_code())
			.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		let body = serde_json::json!({
			"error": error.to_string(),
		});

		Response::new(status)
			.with_json(&body)
			.unwrap_or_else(|_| Response::internal_server_error())
	}
}
