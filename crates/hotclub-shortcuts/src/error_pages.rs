//! Status-code error pages.
//!
//! Django-style error rendering: a 404 looks for `404.html`, a 500 for
//! `500.html`, and so on, in the default engine. When no such template
//! exists (or it fails to render), a built-in minimal page takes over, so
//! this function always produces a response.

use hotclub_http::{Request, Response};
use hyper::StatusCode;

use crate::context::Context;
use crate::engine;

/// Render the error page for a status code
///
/// The template, `{status}.html`, sees `status_code` and `request_path`
/// alongside whatever `context` carries.
///
/// # Examples
///
/// ```rust,ignore
/// use hotclub_shortcuts::render_error_page;
///
/// async fn missing_page(request: Request) -> Response {
///     render_error_page(&request, 404, None)
/// }
/// ```
pub fn render_error_page(
	request: &Request,
	status_code: u16,
	context: Option<&Context>,
) -> Response {
	let template_name = format!("{}.html", status_code);

	let mut engine_context = tera::Context::new();
	engine_context.insert("status_code", &status_code);
	engine_context.insert("request_path", request.path());
	if let Some(extra) = context {
		engine_context.extend(extra.to_engine());
	}

	let html = custom_page(&template_name, &engine_context)
		.unwrap_or_else(|| fallback_page(status_code, request.path()));

	let status =
		StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

	Response::new(status)
		.with_content_type("text/html; charset=utf-8")
		.with_body(html)
}

fn custom_page(template_name: &str, context: &tera::Context) -> Option<String> {
	let engine = engine::engine(None).ok()?;
	if !engine.get_template_names().any(|n| n == template_name) {
		return None;
	}
	match engine.render(template_name, context) {
		Ok(html) => Some(html),
		Err(e) => {
			tracing::error!("error page template '{}' failed: {}", template_name, e);
			None
		}
	}
}

fn fallback_page(status_code: u16, path: &str) -> String {
	let (title, message) = status_text(status_code);
	format!(
		"<!DOCTYPE html><html><head><title>{code} - {title}</title></head>\
		 <body><h1>{title}</h1><p>{message}</p><p>Path: {path}</p></body></html>",
		code = status_code,
		title = title,
		message = message,
		path = path,
	)
}

fn status_text(status_code: u16) -> (&'static str, &'static str) {
	match status_code {
		400 => (
			"Bad Request",
			"The request could not be understood by the server.",
		),
		403 => (
			"Forbidden",
			"You don't have permission to access this resource.",
		),
		404 => ("Not Found", "The requested page could not be found."),
		405 => (
			"Method Not Allowed",
			"The request method is not supported for this resource.",
		),
		500 => (
			"Internal Server Error",
			"An error occurred while processing your request.",
		),
		503 => (
			"Service Unavailable",
			"The server is currently unable to handle the request.",
		),
		_ => ("Error", "An error occurred while processing your request."),
	}
}
