//! Redirect shortcuts.
//!
//! A redirect target is one of three things: an object exposing its own
//! absolute URL, a registered route name with parameters, or a literal URL
//! string. All three resolve to a URL and become a redirect response whose
//! status is picked from a fixed table of the two flags:
//!
//! | `permanent` | `preserve_request` | status |
//! |---|---|---|
//! | false | false | 302 Found |
//! | false | true  | 307 Temporary Redirect |
//! | true  | false | 301 Moved Permanently |
//! | true  | true  | 308 Permanent Redirect |

use std::collections::HashMap;

use hotclub_http::Response;
use hotclub_urls::ReverseResult;
use hyper::StatusCode;

/// An object that knows its own canonical URL
///
/// The Hot Club spelling of Django's `get_absolute_url()`: model types
/// implement this so views can redirect to an instance directly.
///
/// # Examples
///
/// ```
/// use hotclub_shortcuts::{redirect, AbsoluteUrl, RedirectTarget};
///
/// struct Track { id: i64 }
/// impl AbsoluteUrl for Track {
///     fn absolute_url(&self) -> String {
///         format!("/tracks/{}/", self.id)
///     }
/// }
///
/// let response = redirect(RedirectTarget::object(&Track { id: 9 })).unwrap();
/// assert_eq!(
///     response.headers.get("location").unwrap().to_str().unwrap(),
///     "/tracks/9/"
/// );
/// ```
pub trait AbsoluteUrl {
	fn absolute_url(&self) -> String;
}

/// Where a redirect points
///
/// Strings convert to the literal-URL kind, so `redirect("/home/")` reads
/// the way it does in Django. Route names are explicit
/// (`RedirectTarget::route`) and resolve against the global route registry
/// at redirect time; resolution failures propagate unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectTarget {
	Url(String),
	Route {
		name: String,
		params: HashMap<String, String>,
	},
}

impl RedirectTarget {
	/// A literal absolute or relative URL
	pub fn url(url: impl Into<String>) -> Self {
		RedirectTarget::Url(url.into())
	}

	/// A registered route name plus parameters
	pub fn route<S: AsRef<str>>(name: impl Into<String>, params: &[(S, S)]) -> Self {
		RedirectTarget::Route {
			name: name.into(),
			params: params
				.iter()
				.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
				.collect(),
		}
	}

	/// An object's own URL, read through [`AbsoluteUrl`]
	pub fn object(obj: &impl AbsoluteUrl) -> Self {
		RedirectTarget::Url(obj.absolute_url())
	}

	fn resolve(self) -> ReverseResult<String> {
		match self {
			RedirectTarget::Url(url) => Ok(url),
			RedirectTarget::Route { name, params } => hotclub_urls::reverse(&name, &params),
		}
	}
}

impl From<&str> for RedirectTarget {
	fn from(url: &str) -> Self {
		RedirectTarget::Url(url.to_string())
	}
}

impl From<String> for RedirectTarget {
	fn from(url: String) -> Self {
		RedirectTarget::Url(url)
	}
}

/// Redirect with 302 Found
///
/// # Examples
///
/// ```
/// use hotclub_shortcuts::redirect;
/// use hyper::StatusCode;
///
/// let response = redirect("/login/").unwrap();
/// assert_eq!(response.status, StatusCode::FOUND);
/// ```
pub fn redirect(to: impl Into<RedirectTarget>) -> ReverseResult<Response> {
	redirect_with(to, false, false)
}

/// Redirect with the status picked from the flag table
///
/// `permanent` selects the 301/308 family, `preserve_request` the
/// method-preserving 307/308 family.
///
/// # Errors
///
/// Route-name targets surface reversal failures (unknown name, missing or
/// invalid parameters) unchanged; the other target kinds cannot fail.
pub fn redirect_with(
	to: impl Into<RedirectTarget>,
	permanent: bool,
	preserve_request: bool,
) -> ReverseResult<Response> {
	let url = to.into().resolve()?;
	Ok(Response::new(redirect_status(permanent, preserve_request)).with_location(&url))
}

fn redirect_status(permanent: bool, preserve_request: bool) -> StatusCode {
	match (permanent, preserve_request) {
		(false, false) => StatusCode::FOUND,
		(false, true) => StatusCode::TEMPORARY_REDIRECT,
		(true, false) => StatusCode::MOVED_PERMANENTLY,
		(true, true) => StatusCode::PERMANENT_REDIRECT,
	}
}
