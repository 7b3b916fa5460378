//! Folio domain layer.
//!
//! Plain records for the three admin-managed content kinds, the drafts the
//! forms edit, the bilingual string table, and visitor preferences. Nothing
//! in this crate performs I/O; persistence lives in `folio-db`.

pub mod entity;
pub mod error;
pub mod form;
pub mod i18n;
pub mod message;
pub mod preferences;
pub mod project;
pub mod seed;
pub mod testimonial;
pub mod types;
