//! Template rendering integration tests
//!
//! Exercises engine registration, candidate selection, lazy context
//! evaluation, render options, and conversion of render failures into
//! responses.

#![cfg(feature = "templates")]

use hotclub_http::{Request, Response};
use hotclub_shortcuts::{
	register_engine, render, render_with, reset_engines, Context, RenderError, RenderOptions,
	DEFAULT_ENGINE,
};
use hyper::StatusCode;
use rstest::rstest;
use serde_json::json;
use serial_test::serial;
use tera::Tera;

fn request() -> Request {
	Request::builder().uri("/").build().unwrap()
}

fn engine_with(templates: &[(&str, &str)]) -> Tera {
	let mut tera = Tera::default();
	for (name, body) in templates {
		tera.add_raw_template(name, body)
			.unwrap_or_else(|e| panic!("template '{}' failed to parse: {}", name, e));
	}
	tera
}

fn body(response: &Response) -> String {
	String::from_utf8(response.body.to_vec()).unwrap()
}

/// Test: a registered template renders with its context into a 200 HTML
/// response
#[rstest]
#[serial]
fn test_render_basic() {
	reset_engines();
	register_engine(
		DEFAULT_ENGINE,
		engine_with(&[("hello.html", "Hello {{ name }}!")]),
	);

	let mut context = Context::new();
	context.insert("name", "Django");

	let response = render(&request(), "hello.html", &context).unwrap();
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(
		response
			.headers
			.get("content-type")
			.unwrap()
			.to_str()
			.unwrap(),
		"text/html; charset=utf-8"
	);
	assert_eq!(body(&response), "Hello Django!");
	reset_engines();
}

/// Test: a lazy context value is evaluated at render time and its result,
/// not the closure, appears in the output
#[rstest]
#[serial]
fn test_render_lazy_context_value() {
	reset_engines();
	register_engine(
		DEFAULT_ENGINE,
		engine_with(&[("seats.html", "{{ seats }} seats left")]),
	);

	let mut context = Context::new();
	context.insert_lazy("seats", || json!(12));

	let response = render(&request(), "seats.html", &context).unwrap();
	assert_eq!(body(&response), "12 seats left");
	reset_engines();
}

/// Test: with a candidate list where only the second template exists, the
/// second one is used
#[rstest]
#[serial]
fn test_render_with_second_candidate() {
	reset_engines();
	register_engine(
		DEFAULT_ENGINE,
		engine_with(&[("fallback.html", "fallback content")]),
	);

	let response = render_with(
		&request(),
		&["preferred.html", "fallback.html"],
		&Context::new(),
		RenderOptions::default(),
	)
	.unwrap();
	assert_eq!(body(&response), "fallback content");
	reset_engines();
}

/// Test: when no candidate exists the error names every candidate tried
#[rstest]
#[serial]
fn test_render_no_candidate_found() {
	reset_engines();
	register_engine(DEFAULT_ENGINE, Tera::default());

	let err = render_with(
		&request(),
		&["a.html", "b.html"],
		&Context::new(),
		RenderOptions::default(),
	)
	.unwrap_err();

	match &err {
		RenderError::TemplateNotFound { tried } => {
			assert!(tried.contains("a.html"));
			assert!(tried.contains("b.html"));
		}
		other => panic!("expected TemplateNotFound, got {:?}", other),
	}

	let response: Response = err.into();
	assert_eq!(response.status, StatusCode::NOT_FOUND);
	reset_engines();
}

/// Test: custom status and content type are carried onto the response
#[rstest]
#[serial]
fn test_render_with_options() {
	reset_engines();
	register_engine(
		DEFAULT_ENGINE,
		engine_with(&[("made.html", "made: {{ what }}")]),
	);

	let mut context = Context::new();
	context.insert("what", "a response");

	let options = RenderOptions {
		content_type: Some("text/plain; charset=utf-8".to_string()),
		status: StatusCode::CREATED,
		using: None,
	};
	let response = render_with(&request(), &["made.html"], &context, options).unwrap();
	assert_eq!(response.status, StatusCode::CREATED);
	assert_eq!(
		response
			.headers
			.get("content-type")
			.unwrap()
			.to_str()
			.unwrap(),
		"text/plain; charset=utf-8"
	);
	reset_engines();
}

/// Test: `using` selects a named engine, and the default engine's template
/// set is not consulted
#[rstest]
#[serial]
fn test_render_with_named_engine() {
	reset_engines();
	register_engine(DEFAULT_ENGINE, engine_with(&[("page.html", "from default")]));
	register_engine("alt", engine_with(&[("page.html", "from alt")]));

	let options = RenderOptions {
		using: Some("alt".to_string()),
		..RenderOptions::default()
	};
	let response = render_with(&request(), &["page.html"], &Context::new(), options).unwrap();
	assert_eq!(body(&response), "from alt");
	reset_engines();
}

/// Test: an unregistered engine name is an error, not a silent fallback
#[rstest]
#[serial]
fn test_render_with_unknown_engine() {
	reset_engines();
	register_engine(DEFAULT_ENGINE, Tera::default());

	let options = RenderOptions {
		using: Some("nowhere".to_string()),
		..RenderOptions::default()
	};
	let err = render_with(&request(), &["page.html"], &Context::new(), options).unwrap_err();
	assert!(matches!(err, RenderError::UnknownEngine(name) if name == "nowhere"));
	reset_engines();
}

/// Test: with nothing registered, the default engine loads templates from
/// the directory named by HOTCLUB_TEMPLATE_DIR
#[rstest]
#[serial]
fn test_default_engine_loads_from_disk() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("disk.html"), "loaded {{ from }}").unwrap();

	// SAFETY: test runs serially, no other thread reads the environment
	unsafe { std::env::set_var("HOTCLUB_TEMPLATE_DIR", dir.path()) };
	reset_engines();

	let mut context = Context::new();
	context.insert("from", "disk");

	let response = render(&request(), "disk.html", &context).unwrap();
	assert_eq!(body(&response), "loaded disk");

	unsafe { std::env::remove_var("HOTCLUB_TEMPLATE_DIR") };
	reset_engines();
}

/// Test: a template that exists but fails mid-render propagates the engine
/// error and converts to a 500
#[rstest]
#[serial]
fn test_render_engine_failure_propagates() {
	reset_engines();
	register_engine(
		DEFAULT_ENGINE,
		engine_with(&[("broken.html", "{{ value_nobody_provided }}")]),
	);

	let err = render(&request(), "broken.html", &Context::new()).unwrap_err();
	assert!(matches!(err, RenderError::Rendering(_)));

	let response: Response = err.into();
	assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	reset_engines();
}
