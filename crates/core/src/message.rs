//! Messages left through the public contact form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{Entity, NoticeKeys};
use crate::error::CoreError;
use crate::i18n::TextKey;
use crate::types::{EntityId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: EntityId,
    pub name: String,
    /// Stored as typed; the format is never checked.
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactMessagePatch {
    pub read: Option<bool>,
}

impl Entity for ContactMessage {
    type New = NewContactMessage;
    type Patch = ContactMessagePatch;

    const KIND: &'static str = "ContactMessage";
    const NOTICES: NoticeKeys = NoticeKeys {
        created: None,
        updated: TextKey::AdminMessageUpdated,
        deleted: TextKey::AdminMessageDeleted,
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn from_new(id: EntityId, created_at: Timestamp, new: NewContactMessage) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            message: new.message,
            created_at,
            read: false,
        }
    }

    fn apply(&mut self, patch: &ContactMessagePatch) {
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}

/// The public contact form draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactForm {
    pub fn to_new(&self) -> Result<NewContactMessage, CoreError> {
        let trimmed = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        trimmed.validate()?;

        Ok(NewContactMessage {
            name: trimmed.name,
            email: trimmed.email,
            message: trimmed.message,
        })
    }
}
