//! Redirect shortcut integration tests
//!
//! Covers the three target kinds (literal URL, object accessor, registered
//! route name), the full permanent/preserve_request status table, and
//! propagation of reversal failures.

use hotclub_shortcuts::{redirect, redirect_with, AbsoluteUrl, RedirectTarget};
use hotclub_urls::{clear_routes, register_path, ReverseError};
use hyper::StatusCode;
use rstest::rstest;
use serial_test::serial;

struct Item {
	id: i64,
}

impl AbsoluteUrl for Item {
	fn absolute_url(&self) -> String {
		format!("/items/{}/", self.id)
	}
}

fn location(response: &hotclub_http::Response) -> &str {
	response
		.headers
		.get("location")
		.and_then(|v| v.to_str().ok())
		.unwrap_or_default()
}

/// Test: every flag combination maps to its status code
#[rstest]
#[case(false, false, StatusCode::FOUND)]
#[case(false, true, StatusCode::TEMPORARY_REDIRECT)]
#[case(true, false, StatusCode::MOVED_PERMANENTLY)]
#[case(true, true, StatusCode::PERMANENT_REDIRECT)]
fn test_status_table(
	#[case] permanent: bool,
	#[case] preserve_request: bool,
	#[case] expected: StatusCode,
) {
	let response = redirect_with("/somewhere/", permanent, preserve_request).unwrap();
	assert_eq!(response.status, expected);
	assert_eq!(location(&response), "/somewhere/");
}

/// Test: literal URL strings pass through untouched
#[rstest]
fn test_literal_url_target() {
	let response = redirect("https://example.com/next?page=2").unwrap();
	assert_eq!(response.status, StatusCode::FOUND);
	assert_eq!(location(&response), "https://example.com/next?page=2");
}

/// Test: an object target redirects to its own absolute URL; with both
/// flags set the status is 308
#[rstest]
fn test_object_target_permanent_preserving() {
	let item = Item { id: 1 };
	let response = redirect_with(RedirectTarget::object(&item), true, true).unwrap();
	assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
	assert_eq!(location(&response), "/items/1/");
}

/// Test: route-name targets resolve through the global registry
#[rstest]
#[serial]
fn test_route_target_resolves() {
	clear_routes();
	register_path("items:detail", "/items/{id}/");

	let response = redirect(RedirectTarget::route("items:detail", &[("id", "7")])).unwrap();
	assert_eq!(response.status, StatusCode::FOUND);
	assert_eq!(location(&response), "/items/7/");
	clear_routes();
}

/// Test: unresolvable route names surface the reversal error unchanged
#[rstest]
#[serial]
fn test_unknown_route_propagates_reverse_error() {
	clear_routes();
	let err = redirect(RedirectTarget::route::<&str>("missing:route", &[])).unwrap_err();
	assert_eq!(err, ReverseError::NotFound("missing:route".to_string()));
}

/// Test: a route missing a parameter fails before any response is built
#[rstest]
#[serial]
fn test_route_missing_param_propagates() {
	clear_routes();
	register_path("items:detail", "/items/{id}/");

	let err = redirect(RedirectTarget::route::<&str>("items:detail", &[])).unwrap_err();
	assert!(matches!(err, ReverseError::MissingParam { name, .. } if name == "id"));
	clear_routes();
}
