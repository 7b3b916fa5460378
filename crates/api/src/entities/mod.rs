//! In-memory entity stores.

mod store;

pub use store::EntityStore;
