//! Contact form submission.
//!
//! The message is recorded in the messages store first, best effort: if the
//! backend refuses it the failure is logged and the email still goes out.

use folio_core::i18n::TextKey;
use folio_core::message::ContactForm;
use folio_events::{ContactEmail, Notice};

use crate::error::AppResult;
use crate::state::AppState;

/// Validate, record, and email one contact form. Returns the success
/// notice shown to the visitor.
pub async fn submit(state: &AppState, form: &ContactForm) -> AppResult<Notice> {
    let new = form.to_new()?;

    if let Err(e) = state.messages.add_quiet(new.clone()).await {
        tracing::error!(error = %e, "Could not record contact message");
    }

    let email = ContactEmail {
        from_name: new.name,
        from_email: new.email,
        message: new.message,
    };
    if let Err(e) = state.email.send(&email).await {
        state.notifier.error(TextKey::ContactErrorTitle, e.to_string());
        return Err(e.into());
    }

    Ok(state.notifier.success(
        TextKey::ContactSuccessTitle,
        state.notifier.text(TextKey::ContactSuccessDesc),
    ))
}
