//! Core types for Troupe.
//!
//! This crate defines the shared vocabulary of the workspace: the
//! [`Artist`](artist::Artist) document, the typed [`Selector`](selector::Selector)
//! predicate, the [`Store`](store::Store) trait that adapters implement,
//! and the crate-wide error type.

pub mod artist;
pub mod error;
pub mod selector;
pub mod store;

pub use artist::Artist;
pub use error::{Result, TroupeError};
pub use selector::{Clause, RangeField, Selector};
pub use store::{FindOptions, Sort, SortDirection, Store};
