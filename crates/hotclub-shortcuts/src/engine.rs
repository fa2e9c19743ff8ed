//! Named template engine registry.
//!
//! Engines are process-global, the way route tables and backend bindings
//! are: applications register them once at startup, render calls look them
//! up by name. The engine named [`DEFAULT_ENGINE`] is special-cased: if
//! nothing registered it, the first lookup builds it from the directory
//! named by the `HOTCLUB_TEMPLATE_DIR` environment variable (falling back
//! to `./templates`).

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tera::Tera;

use crate::render::RenderError;

/// Name of the engine used when a render call does not select one
pub const DEFAULT_ENGINE: &str = "default";

static ENGINES: Lazy<RwLock<HashMap<String, Arc<Tera>>>> =
	Lazy::new(|| RwLock::new(HashMap::new()));

/// Register an engine under a name
///
/// Registering under [`DEFAULT_ENGINE`] replaces the disk-backed default.
///
/// # Examples
///
/// ```
/// use hotclub_shortcuts::register_engine;
/// use tera::Tera;
///
/// let mut tera = Tera::default();
/// tera.add_raw_template("hello.html", "Hello {{ name }}!").unwrap();
/// register_engine("greetings", tera);
/// ```
pub fn register_engine(name: impl Into<String>, engine: Tera) {
	ENGINES.write().insert(name.into(), Arc::new(engine));
}

/// Look up an engine by name, `None` meaning the default
pub fn engine(name: Option<&str>) -> Result<Arc<Tera>, RenderError> {
	let name = name.unwrap_or(DEFAULT_ENGINE);

	if let Some(engine) = ENGINES.read().get(name) {
		return Ok(Arc::clone(engine));
	}

	if name != DEFAULT_ENGINE {
		return Err(RenderError::UnknownEngine(name.to_string()));
	}

	let engine = Arc::new(load_default_engine()?);
	ENGINES
		.write()
		.insert(DEFAULT_ENGINE.to_string(), Arc::clone(&engine));
	Ok(engine)
}

/// Drop every registered engine
///
/// The next default lookup rebuilds from disk. Tests that register engines
/// call this to isolate themselves; run such tests serially.
pub fn reset_engines() {
	ENGINES.write().clear();
}

fn load_default_engine() -> Result<Tera, RenderError> {
	let dir = std::env::var("HOTCLUB_TEMPLATE_DIR").unwrap_or_else(|_| "templates".to_string());
	let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
	Tera::new(&glob).map_err(|e| RenderError::Engine(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_registered_engine_is_returned() {
		reset_engines();
		let mut tera = Tera::default();
		tera.add_raw_template("x.html", "x").unwrap();
		register_engine("alt", tera);

		let engine = engine(Some("alt")).unwrap();
		assert!(engine.get_template_names().any(|n| n == "x.html"));
		reset_engines();
	}

	#[test]
	#[serial]
	fn test_unknown_engine_errors() {
		reset_engines();
		let err = engine(Some("missing")).unwrap_err();
		assert!(matches!(err, RenderError::UnknownEngine(name) if name == "missing"));
		reset_engines();
	}
}
