//! Folio API server library.
//!
//! Exposes the building blocks (config, state, entity stores, session gate,
//! routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod contact;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod notify;
pub mod preferences;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
