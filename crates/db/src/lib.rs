//! Persistence adapters for folio content.
//!
//! Two interchangeable [`Backend`] implementations sit behind the entity
//! stores:
//!
//! - [`local::LocalListBackend`] keeps one JSON list per kind in a
//!   directory-backed key-value store.
//! - [`remote::RemoteTable`] talks to the hosted backend's REST table API,
//!   translating between in-memory field names and column names.
//!
//! The hosted backend's auth and object storage endpoints are wrapped by
//! [`remote::AuthClient`] and [`remote::StorageClient`].

pub mod backend;
pub mod error;
pub mod local;
pub mod remote;

pub use backend::Backend;
pub use error::StoreError;
