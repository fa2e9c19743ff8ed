//! Convenient shortcut functions for common Hot Club operations.
//!
//! The Hot Club equivalent of Django's `django.shortcuts` module: thin
//! helpers that compose the template, URL, and query layers into the
//! responses views actually return.
//!
//! ```rust,ignore
//! use hotclub_shortcuts::{get_object_or_404, redirect, render, Context};
//!
//! // Render a template with context
//! let response = render(&request, "tracks/detail.html", &context)?;
//!
//! // Redirect to a URL, an object, or a named route
//! let response = redirect("/tracks/")?;
//! let response = redirect(RedirectTarget::object(&track))?;
//!
//! // Fetch a row or surface a not-found signal
//! let track = get_object_or_404(Track::objects()?, [by_pk(1)]).await?;
//! ```
//!
//! Every helper is stateless. The not-found signal raised by the lookup
//! helpers is a value ([`LookupError::NotFound`]) for the request-handling
//! layer to turn into a 404; a `From` impl is provided for the common case.

mod redirect;
mod render;

#[cfg(feature = "templates")]
mod context;
#[cfg(feature = "templates")]
mod engine;
#[cfg(feature = "templates")]
mod error_pages;

#[cfg(feature = "database")]
mod get_or_404;

pub use redirect::{redirect, redirect_with, AbsoluteUrl, RedirectTarget};
pub use render::{escape_html, render_html, render_html_safe, render_json, render_json_pretty, render_text};

#[cfg(feature = "templates")]
pub use context::Context;
#[cfg(feature = "templates")]
pub use engine::{engine, register_engine, reset_engines, DEFAULT_ENGINE};
#[cfg(feature = "templates")]
pub use error_pages::render_error_page;
#[cfg(feature = "templates")]
pub use render::{render, render_with, RenderError, RenderOptions};

#[cfg(feature = "database")]
pub use get_or_404::{
	exists_or_404, exists_or_404_blocking, get_list_or_404, get_list_or_404_blocking,
	get_object_or_404, get_object_or_404_blocking, LookupError,
};
