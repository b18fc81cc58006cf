use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Button styles shared by hero and newsletter buttons, matching the
/// `button_style` database enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "button_style", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Accent,
}

/// Button sizes, matching the `button_size` database enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema, Default,
)]
#[sqlx(type_name = "button_size", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A call-to-action button belonging to a hero or newsletter section.
/// `section_id` points at whichever section table owns the button.
#[derive(Debug, Clone, FromRow)]
pub struct SectionButton {
    pub id: Uuid,
    pub section_id: Uuid,
    pub text: String,
    pub link: String,
    /// SVG icon markup or icon class
    pub icon: String,
    pub style: ButtonStyle,
    pub size: ButtonSize,
    pub is_external: bool,
    pub is_full_width: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
