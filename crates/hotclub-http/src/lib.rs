//! HTTP value types for the Hot Club toolkit.
//!
//! This crate carries the plain request and response values the rest of the
//! workspace builds on. There is deliberately no server or connection
//! handling here: a [`Request`] is an already-parsed message, a [`Response`]
//! is a value a view hands back to whatever transport hosts it.

mod error;
mod request;
mod response;

pub use error::{Error, Result};
pub use request::{Request, RequestBuilder};
pub use response::Response;
