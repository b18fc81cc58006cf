use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::images::dtos::ImageResponseDto;

/// Database model for an image in the media library.
///
/// An image carries at most one of two sources: an uploaded binary payload
/// (`file_key`/`file_url` into object storage) or an `external_url` pointing
/// at media hosted elsewhere. Rows with neither are valid placeholders.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: Uuid,
    /// Object-storage key of the uploaded payload, if any
    pub file_key: Option<String>,
    /// Public URL of the uploaded payload, captured at upload time
    pub file_url: Option<String>,
    pub content_type: Option<String>,
    pub file_size: Option<i64>,
    /// URL of externally hosted media, if any
    pub external_url: Option<String>,
    pub alt_text: String,
    pub caption: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Image {
    /// Resolve the URL the site should render for this image.
    ///
    /// The uploaded payload wins over an external URL; an image with
    /// neither resolves to an empty string.
    pub fn image_url(&self) -> String {
        self.file_url
            .as_deref()
            .or(self.external_url.as_deref())
            .unwrap_or_default()
            .to_string()
    }

    /// Whether this image owns an uploaded payload in object storage.
    pub fn has_payload(&self) -> bool {
        self.file_key.is_some()
    }
}

impl From<Image> for ImageResponseDto {
    fn from(image: Image) -> Self {
        let image_url = image.image_url();
        Self {
            id: image.id,
            image_url,
            external_url: image.external_url,
            alt_text: image.alt_text,
            caption: image.caption,
            width: image.width,
            height: image.height,
            content_type: image.content_type,
            file_size: image.file_size,
            created_at: image.created_at,
            updated_at: image.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_image() -> Image {
        Image {
            id: Uuid::new_v4(),
            file_key: None,
            file_url: None,
            content_type: None,
            file_size: None,
            external_url: None,
            alt_text: String::new(),
            caption: String::new(),
            width: None,
            height: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_image_url_prefers_uploaded_payload() {
        let mut image = blank_image();
        image.file_key = Some("public/images/x.jpg".to_string());
        image.file_url = Some("http://cdn.local/media/public/images/x.jpg".to_string());
        image.external_url = Some("https://elsewhere.example/pic.jpg".to_string());

        assert_eq!(image.image_url(), "http://cdn.local/media/public/images/x.jpg");
    }

    #[test]
    fn test_image_url_falls_back_to_external() {
        let mut image = blank_image();
        image.external_url = Some("https://elsewhere.example/pic.jpg".to_string());

        assert_eq!(image.image_url(), "https://elsewhere.example/pic.jpg");
    }

    #[test]
    fn test_image_url_empty_when_sourceless() {
        let image = blank_image();
        assert_eq!(image.image_url(), "");
        assert!(!image.has_payload());
    }
}
