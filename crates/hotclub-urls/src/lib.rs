//! URL reversal for the Hot Club toolkit.
//!
//! Maps symbolic route names back to concrete URLs, the way Django's
//! `reverse()` does. Route *matching* is somebody else's job; this crate
//! only stores name-to-pattern pairs and substitutes parameters into them.
//!
//! Most applications register their routes once at startup into the
//! process-global registry and call [`reverse`] (or the shortcuts layer)
//! afterwards:
//!
//! ```
//! use hotclub_urls::{register_path, reverse_with, clear_routes};
//!
//! # clear_routes();
//! register_path("items:detail", "/items/{id}/");
//! let url = reverse_with("items:detail", &[("id", "42")]).unwrap();
//! assert_eq!(url, "/items/42/");
//! # clear_routes();
//! ```

mod pattern;
mod registry;
mod reverse;
mod route;

pub use pattern::extract_param_names;
pub use registry::{clear_routes, has_route, register_path, register_route, reverse, reverse_with};
pub use reverse::{ReverseError, ReverseResult, UrlReverser};
pub use route::Route;
