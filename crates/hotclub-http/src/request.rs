use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use std::collections::HashMap;

use crate::{Error, Result};

/// An already-parsed HTTP request
///
/// Transport integration lives elsewhere; views and shortcuts only ever see
/// this value.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Request {
	/// Create a request from its parts
	pub fn new(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: Bytes,
	) -> Self {
		Self {
			method,
			uri,
			version,
			headers,
			body,
		}
	}

	/// Start building a request
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/items/1/")
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.path(), "/items/1/");
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// The path component of the request URI
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Query parameters parsed from the URI
	///
	/// Pairs are split on the first `=` only, so values containing `=`
	/// (Base64 payloads and the like) come through intact.
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_http::Request;
	///
	/// let request = Request::builder()
	///     .uri("/search?q=swing&page=2")
	///     .build()
	///     .unwrap();
	///
	/// let params = request.query_params();
	/// assert_eq!(params.get("q").map(String::as_str), Some("swing"));
	/// assert_eq!(params.get("page").map(String::as_str), Some("2"));
	/// ```
	pub fn query_params(&self) -> HashMap<String, String> {
		self.uri
			.query()
			.map(|q| {
				q.split('&')
					.filter_map(|pair| {
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// A header value as a string, if present and valid UTF-8
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}
}

/// Builder for [`Request`]
///
/// Defaults: `GET /`, HTTP/1.1, empty headers and body.
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
}

impl RequestBuilder {
	pub fn new() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Add a single header, ignoring names or values that are not valid
	/// header syntax
	pub fn header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Finish building
	///
	/// Fails if the accumulated URI does not parse.
	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.parse()
			.map_err(|e| Error::InvalidRequest(format!("invalid uri '{}': {}", self.uri, e)))?;

		Ok(Request::new(
			self.method,
			uri,
			self.version,
			self.headers,
			self.body,
		))
	}
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_defaults() {
		let request = Request::builder().build().unwrap();
		assert_eq!(request.method, Method::GET);
		assert_eq!(request.path(), "/");
		assert!(request.body.is_empty());
	}

	#[test]
	fn test_invalid_uri_is_rejected() {
		let result = Request::builder().uri("http://[broken").build();
		assert!(matches!(result, Err(Error::InvalidRequest(_))));
	}

	#[test]
	fn test_query_value_keeps_embedded_equals() {
		let request = Request::builder()
			.uri("/cb?token=YWJjZA==")
			.build()
			.unwrap();
		assert_eq!(
			request.query_params().get("token").map(String::as_str),
			Some("YWJjZA==")
		);
	}

	#[test]
	fn test_header_lookup() {
		let request = Request::builder()
			.header("x-requested-with", "XMLHttpRequest")
			.build()
			.unwrap();
		assert_eq!(request.header("x-requested-with"), Some("XMLHttpRequest"));
		assert_eq!(request.header("x-missing"), None);
	}
}
