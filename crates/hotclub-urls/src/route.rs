/// A named URL pattern
///
/// Only the pieces reversal needs: the path pattern and the symbolic name
/// under which it was registered.
#[derive(Debug, Clone)]
pub struct Route {
	pub path: String,
	name: Option<String>,
	namespace: Option<String>,
}

impl Route {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			name: None,
			namespace: None,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	/// The fully qualified name, `namespace:name` when a namespace is set
	///
	/// # Examples
	///
	/// ```
	/// use hotclub_urls::Route;
	///
	/// let route = Route::new("/users/{id}/")
	///     .with_name("detail")
	///     .with_namespace("users");
	/// assert_eq!(route.full_name().as_deref(), Some("users:detail"));
	///
	/// let unnamed = Route::new("/health/");
	/// assert_eq!(unnamed.full_name(), None);
	/// ```
	pub fn full_name(&self) -> Option<String> {
		let name = self.name.as_ref()?;
		match &self.namespace {
			Some(ns) => Some(format!("{}:{}", ns, name)),
			None => Some(name.clone()),
		}
	}
}
