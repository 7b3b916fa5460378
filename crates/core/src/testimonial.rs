//! Client testimonials shown on the landing page.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entity::{missing_fields, required_field, Entity, NoticeKeys};
use crate::error::CoreError;
use crate::i18n::TextKey;
use crate::types::{EntityId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub text: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update. `image_url: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub text: Option<String>,
    #[serde(default, with = "double_option")]
    pub image_url: Option<Option<String>>,
}

impl TestimonialPatch {
    /// Trim text fields and reject a blank name, role or text. An emptied
    /// image clears it.
    pub fn validated(self) -> Result<Self, CoreError> {
        let mut missing = Vec::new();
        let name = required_field("name", self.name, &mut missing);
        let role = required_field("role", self.role, &mut missing);
        let text = required_field("text", self.text, &mut missing);
        missing_fields(missing)?;

        Ok(Self {
            name,
            role,
            text,
            image_url: self.image_url.map(|image| {
                image
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty())
            }),
        })
    }
}

impl From<NewTestimonial> for TestimonialPatch {
    fn from(new: NewTestimonial) -> Self {
        Self {
            name: Some(new.name),
            role: Some(new.role),
            text: Some(new.text),
            image_url: Some(new.image_url),
        }
    }
}

impl Entity for Testimonial {
    type New = NewTestimonial;
    type Patch = TestimonialPatch;

    const KIND: &'static str = "Testimonial";
    const NOTICES: NoticeKeys = NoticeKeys {
        created: Some(TextKey::AdminTestimonialCreated),
        updated: TextKey::AdminTestimonialUpdated,
        deleted: TextKey::AdminTestimonialDeleted,
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn from_new(id: EntityId, created_at: Timestamp, new: NewTestimonial) -> Self {
        Self {
            id,
            name: new.name,
            role: new.role,
            text: new.text,
            image_url: new.image_url,
            created_at,
        }
    }

    fn apply(&mut self, patch: &TestimonialPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(role) = &patch.role {
            self.role.clone_from(role);
        }
        if let Some(text) = &patch.text {
            self.text.clone_from(text);
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url.clone_from(image_url);
        }
    }
}

/// Editable copy of a testimonial as the admin form holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TestimonialForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub role: String,
    #[validate(length(min = 1))]
    pub text: String,
    pub image_url: String,
}

impl TestimonialForm {
    pub fn from_testimonial(testimonial: &Testimonial) -> Self {
        Self {
            name: testimonial.name.clone(),
            role: testimonial.role.clone(),
            text: testimonial.text.clone(),
            image_url: testimonial.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn into_new(self) -> Result<NewTestimonial, CoreError> {
        let trimmed = Self {
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            text: self.text.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
        };
        trimmed.validate()?;

        Ok(NewTestimonial {
            name: trimmed.name,
            role: trimmed.role,
            text: trimmed.text,
            image_url: Some(trimmed.image_url).filter(|url| !url.is_empty()),
        })
    }
}

/// Distinguishes an absent field from an explicit `null` in patch bodies.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            None => serializer.serialize_none(),
            Some(inner) => inner.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
