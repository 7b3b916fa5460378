//! Draft lifecycle shared by every form.

use std::future::Future;

/// A draft plus the in-flight flag that disables the submit control.
#[derive(Debug, Clone, Default)]
pub struct FormState<D> {
    draft: D,
    submitting: bool,
}

impl<D: Default> FormState<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: D) -> Self {
        Self {
            draft,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Apply a field edit to the draft.
    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        self.draft = D::default();
        self.submitting = false;
    }

    /// Hand the draft to `save`. Success clears the draft; failure keeps it
    /// so the user can retry without retyping.
    pub async fn submit<T, E, F, Fut>(&mut self, save: F) -> Result<T, E>
    where
        F: FnOnce(&D) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.submitting = true;
        let result = save(&self.draft).await;
        self.submitting = false;

        if result.is_ok() {
            self.draft = D::default();
        }
        result
    }
}
