use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::images::dtos::{
    CreateImageFromUrlDto, ImageDetailDto, ImageListItemDto, ImageListQuery, ImageResponseDto,
    UpdateImageDto,
};
use crate::features::images::metadata;
use crate::features::images::models::Image;
use crate::features::images::tracker::UsageTracker;
use crate::modules::storage::MinIOClient;
use crate::shared::constants::{image_extension, IMAGE_TEXT_MAX_LEN};
use crate::shared::text::truncate_chars;

/// Joined list row: an image with its live reference count
#[derive(Debug, sqlx::FromRow)]
struct ImageWithCount {
    id: Uuid,
    file_url: Option<String>,
    external_url: Option<String>,
    alt_text: String,
    caption: String,
    width: Option<i32>,
    height: Option<i32>,
    usage_count: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ImageWithCount> for ImageListItemDto {
    fn from(row: ImageWithCount) -> Self {
        let image_url = row
            .file_url
            .or(row.external_url)
            .unwrap_or_default();
        Self {
            id: row.id,
            image_url,
            alt_text: row.alt_text,
            caption: row.caption,
            width: row.width,
            height: row.height,
            usage_count: row.usage_count,
            created_at: row.created_at,
        }
    }
}

const IMAGE_COLUMNS: &str = "id, file_key, file_url, content_type, file_size, external_url, \
     alt_text, caption, width, height, created_at, updated_at";

/// Service for the image library
pub struct ImageService {
    pool: PgPool,
    minio_client: Arc<MinIOClient>,
    tracker: Arc<UsageTracker>,
}

impl ImageService {
    pub fn new(pool: PgPool, minio_client: Arc<MinIOClient>, tracker: Arc<UsageTracker>) -> Self {
        Self {
            pool,
            minio_client,
            tracker,
        }
    }

    /// Upload a binary payload and create its image row.
    ///
    /// Metadata extraction is best-effort: dimensions and descriptive text
    /// are filled in when the payload yields them, and the upload succeeds
    /// regardless.
    pub async fn upload(
        &self,
        data: Vec<u8>,
        original_filename: &str,
        content_type: &str,
        alt_text: Option<String>,
        caption: Option<String>,
    ) -> Result<ImageResponseDto> {
        let extension = image_extension(content_type).ok_or_else(|| {
            AppError::BadRequest(format!("Unsupported image type '{}'", content_type))
        })?;

        let file_size = data.len() as i64;
        let image_id = Uuid::new_v4();
        let file_key = self.minio_client.image_key(image_id, extension);

        let extracted = metadata::extract(&data, original_filename);

        self.minio_client
            .upload(&file_key, data, content_type)
            .await?;
        debug!("Image payload uploaded: {}", file_key);

        let file_url = self.minio_client.public_url(&file_key);

        let alt_text = resolve_text(alt_text, extracted.description.as_deref());
        let caption = resolve_text(caption, extracted.description.as_deref());

        let image = sqlx::query_as::<_, Image>(&format!(
            r#"
            INSERT INTO images (id, file_key, file_url, content_type, file_size,
                                alt_text, caption, width, height)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {IMAGE_COLUMNS}
            "#
        ))
        .bind(image_id)
        .bind(&file_key)
        .bind(&file_url)
        .bind(content_type)
        .bind(file_size)
        .bind(&alt_text)
        .bind(&caption)
        .bind(extracted.width)
        .bind(extracted.height)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        info!(
            "Image uploaded: id={}, key={}, size={}, dimensions={:?}x{:?}",
            image.id, file_key, file_size, image.width, image.height
        );

        Ok(image.into())
    }

    /// Register an externally hosted image (no payload, no extraction).
    pub async fn create_from_url(&self, dto: CreateImageFromUrlDto) -> Result<ImageResponseDto> {
        let alt_text = resolve_text(dto.alt_text, None);
        let caption = resolve_text(dto.caption, None);

        let image = sqlx::query_as::<_, Image>(&format!(
            r#"
            INSERT INTO images (external_url, alt_text, caption)
            VALUES ($1, $2, $3)
            RETURNING {IMAGE_COLUMNS}
            "#
        ))
        .bind(&dto.external_url)
        .bind(&alt_text)
        .bind(&caption)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        info!("External image registered: id={}", image.id);

        Ok(image.into())
    }

    /// List images with usage counts, newest first.
    pub async fn list(&self, query: &ImageListQuery) -> Result<(Vec<ImageListItemDto>, i64)> {
        let search_pattern = query.search.as_ref().map(|s| format!("%{}%", s));

        if let Some(ref pattern) = search_pattern {
            let total: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM images WHERE alt_text ILIKE $1 OR caption ILIKE $1",
            )
            .bind(pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

            let rows = sqlx::query_as::<_, ImageWithCount>(
                r#"
                SELECT i.id, i.file_url, i.external_url, i.alt_text, i.caption,
                       i.width, i.height, COUNT(u.id) AS usage_count, i.created_at
                FROM images i
                LEFT JOIN image_usage u ON u.image_id = i.id
                WHERE i.alt_text ILIKE $1 OR i.caption ILIKE $1
                GROUP BY i.id
                ORDER BY i.created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(pattern)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

            Ok((rows.into_iter().map(Into::into).collect(), total))
        } else {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM images")
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

            let rows = sqlx::query_as::<_, ImageWithCount>(
                r#"
                SELECT i.id, i.file_url, i.external_url, i.alt_text, i.caption,
                       i.width, i.height, COUNT(u.id) AS usage_count, i.created_at
                FROM images i
                LEFT JOIN image_usage u ON u.image_id = i.id
                GROUP BY i.id
                ORDER BY i.created_at DESC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

            Ok((rows.into_iter().map(Into::into).collect(), total))
        }
    }

    /// Image detail with its usage summary.
    pub async fn get_detail(&self, id: Uuid) -> Result<ImageDetailDto> {
        let image = self.fetch(id).await?;

        let usage_count = self.tracker.usage_count(id).await?;
        let owner_types = self.tracker.owner_type_names(id).await?;
        let usages = self
            .tracker
            .list_for_image(id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ImageDetailDto {
            image: image.into(),
            usage_count,
            owner_types,
            usages,
        })
    }

    /// Update alt text, caption and (for URL-backed images) the external URL.
    pub async fn update(&self, id: Uuid, dto: UpdateImageDto) -> Result<ImageResponseDto> {
        let current = self.fetch(id).await?;

        let external_url = resolve_external_url(current.has_payload(), dto.external_url);

        let alt_text = dto
            .alt_text
            .map(|s| truncate_chars(s.trim(), IMAGE_TEXT_MAX_LEN));
        let caption = dto
            .caption
            .map(|s| truncate_chars(s.trim(), IMAGE_TEXT_MAX_LEN));

        // external_url is applied unconditionally so a URL-backed image
        // can be cleared.
        let image = sqlx::query_as::<_, Image>(&format!(
            r#"
            UPDATE images
            SET alt_text = COALESCE($2, alt_text),
                caption = COALESCE($3, caption),
                external_url = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {IMAGE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(alt_text)
        .bind(caption)
        .bind(external_url)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(image.into())
    }

    /// Delete an image: its stored payload, its row and (via cascade) its
    /// usage rows. Content that referenced it keeps rendering without the
    /// image because owner references go NULL in the same statement.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let image = self.fetch(id).await?;

        if let Some(ref file_key) = image.file_key {
            // Storage cleanup must not wedge the library: the row removal
            // proceeds even when the object is already gone.
            if let Err(e) = self.minio_client.delete(file_key).await {
                warn!("Failed to delete stored payload '{}': {:?}", file_key, e);
            }
        }

        sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        info!("Image deleted: id={}", id);

        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Image> {
        sqlx::query_as::<_, Image>(&format!(
            "SELECT {IMAGE_COLUMNS} FROM images WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Image with id {} not found", id)))
    }
}

/// A row with an uploaded payload keeps resolving to it, so an external
/// URL edit there would be invisible; drop it.
fn resolve_external_url(has_payload: bool, requested: Option<String>) -> Option<String> {
    if has_payload {
        None
    } else {
        requested
    }
}

/// Editor-provided text wins; extracted text fills the gap; blank otherwise.
fn resolve_text(provided: Option<String>, extracted: Option<&str>) -> String {
    let provided = provided
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let text = provided.unwrap_or_else(|| extracted.unwrap_or_default().to_string());
    truncate_chars(&text, IMAGE_TEXT_MAX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_text_prefers_editor_input() {
        let resolved = resolve_text(Some("Villa exterior".to_string()), Some("From Exif"));
        assert_eq!(resolved, "Villa exterior");
    }

    #[test]
    fn test_resolve_text_uses_extracted_when_blank() {
        assert_eq!(resolve_text(Some("   ".to_string()), Some("From Exif")), "From Exif");
        assert_eq!(resolve_text(None, Some("From Exif")), "From Exif");
    }

    #[test]
    fn test_resolve_text_defaults_to_empty() {
        assert_eq!(resolve_text(None, None), "");
    }

    #[test]
    fn test_resolve_text_truncates() {
        let long = "x".repeat(500);
        assert_eq!(resolve_text(Some(long), None).chars().count(), IMAGE_TEXT_MAX_LEN);
    }

    #[test]
    fn test_external_url_passes_through_for_url_backed_images() {
        let url = Some("https://cdn.example.com/villa.jpg".to_string());
        assert_eq!(resolve_external_url(false, url.clone()), url);
        // An omitted URL clears the reference.
        assert_eq!(resolve_external_url(false, None), None);
    }

    #[test]
    fn test_external_url_dropped_for_payload_backed_images() {
        let url = Some("https://cdn.example.com/villa.jpg".to_string());
        assert_eq!(resolve_external_url(true, url), None);
    }
}
