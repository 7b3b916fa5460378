//! Folio notices and outbound email.
//!
//! - [`NoticeBus`]: in-process fan-out of one-shot user-visible
//!   notifications, backed by `tokio::sync::broadcast`.
//! - [`delivery::email`]: the transactional email API client used by the
//!   contact form.

pub mod bus;
pub mod delivery;

pub use bus::{Notice, NoticeBus, NoticeLevel};
pub use delivery::email::{ContactEmail, EmailConfig, EmailDelivery, EmailError};
