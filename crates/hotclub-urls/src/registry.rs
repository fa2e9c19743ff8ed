//! Process-global default reverser.
//!
//! Applications that wire their routes once at startup can use these free
//! functions instead of threading a [`UrlReverser`] through every call
//! site. The shortcuts layer resolves `RedirectTarget::Route` against this
//! registry.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::reverse::{ReverseResult, UrlReverser};
use crate::route::Route;

static DEFAULT_REVERSER: Lazy<RwLock<UrlReverser>> =
	Lazy::new(|| RwLock::new(UrlReverser::new()));

/// Register a named route with the default reverser
pub fn register_route(route: Route) {
	DEFAULT_REVERSER.write().register(route);
}

/// Register a name-to-pattern pair with the default reverser
pub fn register_path(name: &str, path: &str) {
	DEFAULT_REVERSER.write().register_path(name, path);
}

/// Resolve a route name against the default reverser
pub fn reverse(name: &str, params: &HashMap<String, String>) -> ReverseResult<String> {
	DEFAULT_REVERSER.read().reverse(name, params)
}

/// Resolve with parameters given as key-value pairs
pub fn reverse_with<S: AsRef<str>>(name: &str, params: &[(S, S)]) -> ReverseResult<String> {
	DEFAULT_REVERSER.read().reverse_with(name, params)
}

/// Whether the default reverser knows `name`
pub fn has_route(name: &str) -> bool {
	DEFAULT_REVERSER.read().has_route(name)
}

/// Drop every registered route
///
/// Tests that populate the global registry call this to keep their route
/// tables from leaking into each other; run such tests serially.
pub fn clear_routes() {
	*DEFAULT_REVERSER.write() = UrlReverser::new();
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_global_register_and_reverse() {
		clear_routes();
		register_path("login", "/accounts/login/");
		assert!(has_route("login"));
		assert_eq!(
			reverse("login", &HashMap::new()).unwrap(),
			"/accounts/login/"
		);
		clear_routes();
	}

	#[test]
	#[serial]
	fn test_clear_forgets_routes() {
		clear_routes();
		register_route(Route::new("/x/").with_name("x"));
		clear_routes();
		assert!(!has_route("x"));
	}
}
