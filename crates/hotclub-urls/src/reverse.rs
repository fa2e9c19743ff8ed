use std::collections::HashMap;

use crate::pattern::{extract_param_names, is_safe_param};
use crate::route::Route;

/// Failures surfaced by URL reversal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReverseError {
	#[error("no route named '{0}' is registered")]
	NotFound(String),
	#[error("route '{route}' is missing parameter '{name}'")]
	MissingParam { route: String, name: String },
	#[error("parameter '{name}' contains path or query delimiters")]
	InvalidParam { name: String },
}

pub type ReverseResult<T> = Result<T, ReverseError>;

/// Resolves registered route names back to URLs
///
/// # Examples
///
/// ```
/// use hotclub_urls::UrlReverser;
/// use std::collections::HashMap;
///
/// let mut reverser = UrlReverser::new();
/// reverser.register_path("users:detail", "/users/{id}/");
///
/// let mut params = HashMap::new();
/// params.insert("id".to_string(), "123".to_string());
/// assert_eq!(reverser.reverse("users:detail", &params).unwrap(), "/users/123/");
/// ```
#[derive(Debug, Default)]
pub struct UrlReverser {
	routes: HashMap<String, Route>,
}

impl UrlReverser {
	pub fn new() -> Self {
		Self {
			routes: HashMap::new(),
		}
	}

	/// Register a route under its fully qualified name
	///
	/// Routes without a name cannot be reversed and are skipped.
	pub fn register(&mut self, route: Route) {
		if let Some(full_name) = route.full_name() {
			self.routes.insert(full_name, route);
		}
	}

	/// Register a name-to-pattern pair directly
	pub fn register_path(&mut self, name: &str, path: &str) {
		self.routes
			.insert(name.to_string(), Route::new(path).with_name(name));
	}

	/// Resolve a route name to a URL
	///
	/// Every placeholder in the pattern must have a value in `params`;
	/// values must not carry path or query delimiters. Extra entries in
	/// `params` are ignored.
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> ReverseResult<String> {
		let route = self
			.routes
			.get(name)
			.ok_or_else(|| ReverseError::NotFound(name.to_string()))?;

		for param_name in extract_param_names(&route.path) {
			let value =
				params
					.get(&param_name)
					.ok_or_else(|| ReverseError::MissingParam {
						route: name.to_string(),
						name: param_name.clone(),
					})?;
			if !is_safe_param(value) {
				return Err(ReverseError::InvalidParam { name: param_name });
			}
		}

		Ok(substitute(&route.path, params))
	}

	/// Resolve with parameters given as key-value pairs
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_urls::UrlReverser;
	///
	/// let mut reverser = UrlReverser::new();
	/// reverser.register_path("detail", "/users/{id}/");
	/// let url = reverser.reverse_with("detail", &[("id", "7")]).unwrap();
	/// assert_eq!(url, "/users/7/");
	/// ```
	pub fn reverse_with<S: AsRef<str>>(
		&self,
		name: &str,
		params: &[(S, S)],
	) -> ReverseResult<String> {
		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
			.collect();

		self.reverse(name, &params_map)
	}

	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}

	pub fn route_names(&self) -> Vec<String> {
		self.routes.keys().cloned().collect()
	}
}

/// Single-pass placeholder substitution
///
/// Walks the pattern once, copying literal characters and splicing in
/// parameter values as placeholders are encountered. Placeholders without a
/// value are preserved verbatim; `reverse` validates before calling, so that
/// only happens when this is used directly.
fn substitute(pattern: &str, params: &HashMap<String, String>) -> String {
	let mut result = String::with_capacity(pattern.len());
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let param_name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			match params.get(&param_name) {
				Some(value) => result.push_str(value),
				None => {
					result.push('{');
					result.push_str(&param_name);
					result.push('}');
				}
			}
		} else {
			result.push(ch);
		}
	}

	result
}
