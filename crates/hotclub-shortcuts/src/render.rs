//! Rendering shortcuts: templates to responses, plus the plain JSON, HTML,
//! and text response constructors.

use bytes::Bytes;
use hotclub_http::Response;
use serde::Serialize;

#[cfg(feature = "templates")]
use hotclub_http::Request;
#[cfg(feature = "templates")]
use hyper::StatusCode;

#[cfg(feature = "templates")]
use crate::context::Context;
#[cfg(feature = "templates")]
use crate::engine;

/// Failures surfaced by template rendering
#[cfg(feature = "templates")]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	/// No candidate template exists under the selected engine
	#[error("template not found, tried: {tried}")]
	TemplateNotFound { tried: String },
	/// The `using` selector names an engine nobody registered
	#[error("template engine '{0}' is not registered")]
	UnknownEngine(String),
	/// The engine accepted the template but failed while rendering it
	#[error("template rendering failed: {0}")]
	Rendering(#[from] tera::Error),
	/// The default engine could not be built
	#[error("template engine failed to load: {0}")]
	Engine(String),
}

#[cfg(feature = "templates")]
impl From<RenderError> for Response {
	fn from(error: RenderError) -> Self {
		match &error {
			RenderError::TemplateNotFound { .. } => {
				Response::not_found().with_body(error.to_string())
			}
			_ => {
				tracing::error!("render failure: {}", error);
				Response::internal_server_error().with_body(error.to_string())
			}
		}
	}
}

/// Knobs for [`render_with`]
///
/// Defaults match [`render`]: `text/html; charset=utf-8`, status 200, the
/// default engine.
#[cfg(feature = "templates")]
#[derive(Debug, Clone)]
pub struct RenderOptions {
	pub content_type: Option<String>,
	pub status: StatusCode,
	pub using: Option<String>,
}

#[cfg(feature = "templates")]
impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			content_type: None,
			status: StatusCode::OK,
			using: None,
		}
	}
}

/// Render a template with context and wrap it in a 200 HTML response
///
/// # Examples
///
/// ```rust,ignore
/// use hotclub_shortcuts::{render, Context};
///
/// async fn track_detail(request: Request) -> Result<Response, Response> {
///     let mut context = Context::new();
///     context.insert("title", "Minor Swing");
///     Ok(render(&request, "tracks/detail.html", &context)?)
/// }
/// ```
///
/// # Errors
///
/// [`RenderError::TemplateNotFound`] when the template does not exist under
/// the default engine; engine failures propagate unchanged.
#[cfg(feature = "templates")]
pub fn render(
	request: &Request,
	template_name: &str,
	context: &Context,
) -> Result<Response, RenderError> {
	render_with(request, &[template_name], context, RenderOptions::default())
}

/// Render the first existing candidate template with full control over
/// content type, status, and engine selection
///
/// Candidates are tried in order against the selected engine's template
/// set; the first one that exists is rendered. Lazy context values are
/// evaluated at this point and not before.
#[cfg(feature = "templates")]
pub fn render_with(
	_request: &Request,
	candidates: &[&str],
	context: &Context,
	options: RenderOptions,
) -> Result<Response, RenderError> {
	let engine = engine::engine(options.using.as_deref())?;
	let name = select_template(&engine, candidates)?;
	let html = engine.render(name, &context.to_engine())?;

	let content_type = options
		.content_type
		.as_deref()
		.unwrap_or("text/html; charset=utf-8");

	Ok(Response::new(options.status)
		.with_content_type(content_type)
		.with_body(html))
}

#[cfg(feature = "templates")]
fn select_template<'a>(engine: &tera::Tera, candidates: &[&'a str]) -> Result<&'a str, RenderError> {
	for &name in candidates {
		if engine.get_template_names().any(|n| n == name) {
			return Ok(name);
		}
	}
	Err(RenderError::TemplateNotFound {
		tried: candidates.join(", "),
	})
}

/// Serialize `data` as JSON into a 200 response
///
/// # Examples
///
/// ```
/// use hotclub_shortcuts::render_json;
/// use serde_json::json;
///
/// let response = render_json(&json!({"status": "ok"})).unwrap();
/// assert_eq!(
///     response.headers.get("content-type").unwrap().to_str().unwrap(),
///     "application/json"
/// );
/// ```
///
/// # Errors
///
/// Returns the serialization error untouched, so the caller never sees
/// partial output.
pub fn render_json<T: Serialize>(data: &T) -> Result<Response, serde_json::Error> {
	let json = serde_json::to_string(data)?;
	Ok(Response::ok()
		.with_content_type("application/json")
		.with_body(json))
}

/// Like [`render_json`], pretty-printed
pub fn render_json_pretty<T: Serialize>(data: &T) -> Result<Response, serde_json::Error> {
	let json = serde_json::to_string_pretty(data)?;
	Ok(Response::ok()
		.with_content_type("application/json")
		.with_body(json))
}

/// Wrap an HTML string in a 200 response
///
/// The input is passed through untouched. Never feed user-supplied content
/// to this function without escaping it first; use [`render_html_safe`]
/// for that.
pub fn render_html(html: impl Into<String>) -> Response {
	Response::ok()
		.with_content_type("text/html; charset=utf-8")
		.with_body(html.into())
}

/// Escape content and wrap it in a 200 HTML response
///
/// # Examples
///
/// ```
/// use hotclub_shortcuts::render_html_safe;
///
/// let response = render_html_safe("<script>alert('x')</script>");
/// let body = String::from_utf8(response.body.to_vec()).unwrap();
/// assert!(!body.contains("<script>"));
/// ```
pub fn render_html_safe(content: impl AsRef<str>) -> Response {
	Response::ok()
		.with_content_type("text/html; charset=utf-8")
		.with_body(escape_html(content.as_ref()))
}

/// Wrap a plain text string in a 200 response
pub fn render_text(text: impl Into<String>) -> Response {
	Response::ok()
		.with_content_type("text/plain; charset=utf-8")
		.with_body(Bytes::from(text.into()))
}

/// Replace HTML-significant characters with their entity forms
///
/// # Examples
///
/// ```
/// use hotclub_shortcuts::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#x27;"),
			_ => output.push(ch),
		}
	}
	output
}
