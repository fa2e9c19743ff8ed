//! The query contract for the Hot Club toolkit.
//!
//! Defines what it means to fetch model rows (filters, query sets,
//! managers, and the [`QueryBackend`] trait a storage engine implements)
//! without prescribing any particular storage engine. The one backend that
//! ships here, [`MemoryBackend`], keeps rows in process memory; it is the
//! reference implementation and the test double for everything built on
//! this contract.
//!
//! The single-result fetch distinguishes its two failure modes:
//! [`QueryError::DoesNotExist`] when nothing matches and
//! [`QueryError::MultipleObjectsReturned`] when more than one row does. The
//! filtering fetch never fails on absence; it returns an empty `Vec`.
//!
//! ```
//! use hotclub_query::{Filter, FilterOperator, Manager, MemoryBackend, Model};
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Track {
//!     id: i64,
//!     title: String,
//! }
//! impl Model for Track {}
//!
//! # fn main() {
//! let backend = Arc::new(MemoryBackend::from_rows(vec![
//!     Track { id: 1, title: "Minor Swing".into() },
//!     Track { id: 2, title: "Nuages".into() },
//! ]));
//! let manager = Manager::new(backend);
//!
//! let track = manager
//!     .filter("id", FilterOperator::Eq, 1)
//!     .get_blocking()
//!     .unwrap();
//! assert_eq!(track.title, "Minor Swing");
//! # }
//! ```

mod backend;
mod error;
mod filter;
mod manager;
mod model;
mod queryset;

pub use backend::{MemoryBackend, QueryBackend};
pub use error::QueryError;
pub use filter::{Filter, FilterOperator, FilterValue};
pub use manager::Manager;
pub use model::{bind_backend, clear_bindings, Model};
pub use queryset::{IntoQuerySet, QuerySet};
