use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::images::dtos::ImageUsageDto;
use crate::features::images::registry::OwnerKind;

/// Database model for a usage record.
///
/// One row per owning content record: the `(owner_type, owner_id)` pair is
/// unique and `image_id` is swapped in place when the owner changes images.
#[derive(Debug, Clone, FromRow)]
pub struct ImageUsage {
    pub id: Uuid,
    pub owner_type: OwnerKind,
    pub owner_id: Uuid,
    pub image_id: Uuid,
    /// Name of the owner's image reference field, from the registry
    pub field_name: String,
    /// Human-readable label of the owner at the time it was saved
    pub owner_label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ImageUsage> for ImageUsageDto {
    fn from(usage: ImageUsage) -> Self {
        Self {
            owner_type: usage.owner_type,
            owner_id: usage.owner_id,
            field_name: usage.field_name,
            owner_label: usage.owner_label,
            updated_at: usage.updated_at,
        }
    }
}
