//! Wire shapes of the backend tables and their mapping to domain records.
//!
//! The table columns predate the domain names (`short_description`,
//! `is_featured`, `nombre`, `mensaje`), so every kind gets its own row type
//! instead of a serde rename on the domain struct.

use serde::{Deserialize, Deserializer, Serialize};

use folio_core::entity::Entity;
use folio_core::message::{ContactMessage, ContactMessagePatch, NewContactMessage};
use folio_core::project::{NewProject, Project, ProjectPatch};
use folio_core::testimonial::{NewTestimonial, Testimonial, TestimonialPatch};
use folio_core::types::{EntityId, Timestamp};

/// A domain record stored in one backend table.
pub trait WireRecord: Entity {
    const TABLE: &'static str;

    type Row: serde::de::DeserializeOwned + Send;
    type InsertRow: Serialize + Send + Sync;
    type PatchRow: Serialize + Send + Sync;

    fn from_row(row: Self::Row) -> Self;
    fn insert_row(new: &Self::New) -> Self::InsertRow;
    fn patch_row(patch: &Self::Patch) -> Self::PatchRow;
}

/// Ids are `bigint` in some tables and `uuid` in others.
fn id_as_string<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ProjectRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: EntityId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repository_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub demo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct ProjectInsert {
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub repository_url: String,
    pub demo_url: String,
    pub is_featured: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl WireRecord for Project {
    const TABLE: &'static str = "projects";

    type Row = ProjectRow;
    type InsertRow = ProjectInsert;
    type PatchRow = ProjectUpdate;

    fn from_row(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.short_description,
            full_description: row.full_description,
            tags: row.tags,
            image_url: row.image_url,
            repo_url: row.repository_url,
            demo_url: row.demo_url,
            featured: row.is_featured,
            created_at: row.created_at,
        }
    }

    fn insert_row(new: &NewProject) -> ProjectInsert {
        ProjectInsert {
            title: new.title.clone(),
            short_description: new.description.clone(),
            full_description: new.full_description.clone(),
            tags: new.tags.clone(),
            image_url: new.image_url.clone(),
            repository_url: new.repo_url.clone(),
            demo_url: new.demo_url.clone(),
            is_featured: new.featured,
        }
    }

    fn patch_row(patch: &ProjectPatch) -> ProjectUpdate {
        ProjectUpdate {
            title: patch.title.clone(),
            short_description: patch.description.clone(),
            full_description: patch.full_description.clone(),
            tags: patch.tags.clone(),
            image_url: patch.image_url.clone(),
            repository_url: patch.repo_url.clone(),
            demo_url: patch.demo_url.clone(),
            is_featured: patch.featured,
        }
    }
}

// ---------------------------------------------------------------------------
// testimonials
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TestimonialRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct TestimonialInsert {
    pub name: String,
    pub role: String,
    pub text: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct TestimonialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// `Some(None)` sends an explicit `null` to clear the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
}

impl WireRecord for Testimonial {
    const TABLE: &'static str = "testimonials";

    type Row = TestimonialRow;
    type InsertRow = TestimonialInsert;
    type PatchRow = TestimonialUpdate;

    fn from_row(row: TestimonialRow) -> Self {
        Testimonial {
            id: row.id,
            name: row.name,
            role: row.role,
            text: row.text,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }

    fn insert_row(new: &NewTestimonial) -> TestimonialInsert {
        TestimonialInsert {
            name: new.name.clone(),
            role: new.role.clone(),
            text: new.text.clone(),
            image_url: new.image_url.clone(),
        }
    }

    fn patch_row(patch: &TestimonialPatch) -> TestimonialUpdate {
        TestimonialUpdate {
            name: patch.name.clone(),
            role: patch.role.clone(),
            text: patch.text.clone(),
            image_url: patch.image_url.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// contact_messages
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ContactMessageRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: EntityId,
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mensaje: String,
    pub created_at: Timestamp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
}

#[derive(Debug, Serialize)]
pub struct ContactMessageInsert {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ContactMessageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

impl WireRecord for ContactMessage {
    const TABLE: &'static str = "contact_messages";

    type Row = ContactMessageRow;
    type InsertRow = ContactMessageInsert;
    type PatchRow = ContactMessageUpdate;

    fn from_row(row: ContactMessageRow) -> Self {
        ContactMessage {
            id: row.id,
            name: row.nombre,
            email: row.email,
            message: row.mensaje,
            created_at: row.created_at,
            read: row.read,
        }
    }

    fn insert_row(new: &NewContactMessage) -> ContactMessageInsert {
        ContactMessageInsert {
            nombre: new.name.clone(),
            email: new.email.clone(),
            mensaje: new.message.clone(),
        }
    }

    fn patch_row(patch: &ContactMessagePatch) -> ContactMessageUpdate {
        ContactMessageUpdate { read: patch.read }
    }
}
