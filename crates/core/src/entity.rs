//! The contract every admin-managed record kind fulfils.
//!
//! Stores and persistence backends are written once against [`Entity`]
//! instead of once per kind.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreError;
use crate::i18n::TextKey;
use crate::types::{EntityId, Timestamp};

/// Translation keys used for the notices a store fires around one kind.
#[derive(Debug, Clone, Copy)]
pub struct NoticeKeys {
    /// Title of the success notice after an add. `None` when adds of this
    /// kind announce themselves elsewhere (contact messages).
    pub created: Option<TextKey>,
    pub updated: TextKey,
    pub deleted: TextKey,
}

pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Everything but the identifier and creation time.
    type New: Clone + Send + Sync + 'static;
    /// Field-level partial update; `None` leaves a field untouched.
    type Patch: Clone + Default + PartialEq + Send + Sync + 'static;

    /// Human-readable kind name used in errors and logs.
    const KIND: &'static str;
    const NOTICES: NoticeKeys;

    fn id(&self) -> &str;

    /// Short label shown in notices (title, author name, sender).
    fn label(&self) -> &str;

    fn from_new(id: EntityId, created_at: Timestamp, new: Self::New) -> Self;

    fn apply(&mut self, patch: &Self::Patch);

    /// Whether `patch` names no field at all.
    fn patch_is_empty(patch: &Self::Patch) -> bool {
        *patch == Self::Patch::default()
    }
}

/// Trim a required text field of a patch. Blank values are recorded in
/// `missing` and dropped.
pub(crate) fn required_field(
    name: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = value?.trim().to_string();
    if value.is_empty() {
        missing.push(name);
        return None;
    }
    Some(value)
}

/// The error for a patch that blanks required fields.
pub(crate) fn missing_fields(mut missing: Vec<&'static str>) -> Result<(), CoreError> {
    if missing.is_empty() {
        return Ok(());
    }
    missing.sort_unstable();
    Err(CoreError::Validation(format!(
        "required fields missing: {}",
        missing.join(", ")
    )))
}
