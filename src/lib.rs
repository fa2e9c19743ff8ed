//! # Hot Club
//!
//! A Django-inspired web toolkit for Rust, assembled from small crates:
//! HTTP value types, URL reversal, a storage-agnostic query contract, and
//! the view shortcuts that tie them together.
//!
//! This facade re-exports the member crates under stable module names:
//!
//! - [`http`]: [`Request`](http::Request) and [`Response`](http::Response)
//!   values
//! - [`urls`]: named routes and URL reversal
//! - [`query`]: models, filters, query sets, backends (`database` feature)
//! - [`shortcuts`]: `render`, `redirect`, and the or-404 lookups
//!
//! ## Quick example
//!
//! ```rust,ignore
//! use hotclub::prelude::*;
//!
//! async fn track_detail(request: Request, id: i64) -> Result<Response, Response> {
//!     let track = get_object_or_404(
//!         Track::objects().map_err(LookupError::Query)?,
//!         [Filter::new("id", FilterOperator::Eq, id)],
//!     )
//!     .await?;
//!
//!     let mut context = Context::new();
//!     context.insert("track", &track);
//!     Ok(render(&request, "tracks/detail.html", &context)?)
//! }
//! ```

pub use hotclub_http as http;
pub use hotclub_urls as urls;

#[cfg(feature = "database")]
pub use hotclub_query as query;

pub use hotclub_shortcuts as shortcuts;

/// The names most applications want in scope
pub mod prelude {
	pub use crate::http::{Request, Response};
	pub use crate::urls::{register_path, register_route, reverse, reverse_with, Route};

	#[cfg(feature = "database")]
	pub use crate::query::{
		bind_backend, Filter, FilterOperator, FilterValue, Manager, MemoryBackend, Model,
		QueryError, QuerySet,
	};

	pub use crate::shortcuts::{redirect, redirect_with, AbsoluteUrl, RedirectTarget};

	#[cfg(feature = "templates")]
	pub use crate::shortcuts::{render, render_with, Context, RenderOptions};

	#[cfg(feature = "database")]
	pub use crate::shortcuts::{
		get_list_or_404, get_object_or_404, LookupError,
	};
}
