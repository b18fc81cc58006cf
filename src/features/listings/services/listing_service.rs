use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::images::registry::OwnerKind;
use crate::features::images::tracker::UsageTracker;
use crate::features::listings::dtos::{
    CreateHomeDto, DetailGroupDto, DetailItemViewDto, GalleryImageDto, HomeCardDto,
    HomeDetailPageDto, HomeListQuery, ListingsCtaViewDto, ListingsHeroViewDto, ListingsPageDto,
    ReplaceDetailsDto, ReplaceGalleryDto, UpdateHomeDto, UpsertListingsCtaDto,
    UpsertListingsHeroDto,
};
use crate::features::listings::models::{
    DetailSection, Home, HomeDetail, ListingsCtaSection, ListingsHeroSection,
};
use crate::shared::text::slugify;
use crate::shared::validation::SLUG_REGEX;

const HOME_COLUMNS: &str = "id, title, slug, location, price, beds, baths, sqft, status, \
     description, is_featured, position, created_at, updated_at";

/// Gallery row joined with its resolved image URL.
#[derive(Debug, sqlx::FromRow)]
struct GalleryRow {
    id: Uuid,
    home_id: Uuid,
    image_id: Option<Uuid>,
    is_cover: bool,
    position: i32,
    file_url: Option<String>,
    external_url: Option<String>,
}

impl GalleryRow {
    fn image_url(&self) -> String {
        self.file_url
            .as_deref()
            .or(self.external_url.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Service for sale listings: homes, galleries, detail rows and the
/// available-homes page blocks.
pub struct ListingService {
    pool: PgPool,
    tracker: Arc<UsageTracker>,
}

impl ListingService {
    pub fn new(pool: PgPool, tracker: Arc<UsageTracker>) -> Self {
        Self { pool, tracker }
    }

    // ---- staff: homes ----

    pub async fn create(&self, dto: CreateHomeDto) -> Result<Home> {
        let slug = resolve_slug(dto.slug.as_deref(), &dto.title)?;

        let home = sqlx::query_as::<_, Home>(&format!(
            r#"
            INSERT INTO homes (title, slug, location, price, beds, baths, sqft, status,
                               description, is_featured, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {HOME_COLUMNS}
            "#
        ))
        .bind(&dto.title)
        .bind(&slug)
        .bind(&dto.location)
        .bind(&dto.price)
        .bind(dto.beds)
        .bind(dto.baths)
        .bind(dto.sqft)
        .bind(dto.status)
        .bind(&dto.description)
        .bind(dto.is_featured)
        .bind(dto.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        info!("Home created: id={}, slug={}", home.id, home.slug);

        Ok(home)
    }

    pub async fn get(&self, id: Uuid) -> Result<Home> {
        self.fetch(id).await
    }

    pub async fn list_admin(&self) -> Result<Vec<Home>> {
        let homes = sqlx::query_as::<_, Home>(&format!(
            "SELECT {HOME_COLUMNS} FROM homes ORDER BY position, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(homes)
    }

    pub async fn update(&self, id: Uuid, dto: UpdateHomeDto) -> Result<Home> {
        let current = self.fetch(id).await?;

        let slug = match dto.slug.as_deref() {
            Some(slug) => Some(resolve_slug(Some(slug), &current.title)?),
            None => None,
        };

        let home = sqlx::query_as::<_, Home>(&format!(
            r#"
            UPDATE homes
            SET title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                location = COALESCE($4, location),
                price = COALESCE($5, price),
                beds = COALESCE($6, beds),
                baths = COALESCE($7, baths),
                sqft = COALESCE($8, sqft),
                status = COALESCE($9, status),
                description = COALESCE($10, description),
                is_featured = COALESCE($11, is_featured),
                position = COALESCE($12, position),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {HOME_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.title)
        .bind(slug)
        .bind(dto.location)
        .bind(dto.price)
        .bind(dto.beds)
        .bind(dto.baths)
        .bind(dto.sqft)
        .bind(dto.status)
        .bind(dto.description)
        .bind(dto.is_featured)
        .bind(dto.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(home)
    }

    /// Delete a home; its gallery and detail rows cascade and the gallery's
    /// usage rows are cleared.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.fetch(id).await?;

        let gallery_ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM home_images WHERE home_id = $1")
                .bind(id)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        self.tracker
            .forget_many(OwnerKind::HomeImage, &gallery_ids)
            .await;

        sqlx::query("DELETE FROM homes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        info!("Home deleted: id={} ({} gallery images)", id, gallery_ids.len());

        Ok(())
    }

    // ---- staff: gallery and details ----

    /// Replace a home's gallery wholesale, preserving submitted order.
    pub async fn replace_gallery(
        &self,
        home_id: Uuid,
        dto: ReplaceGalleryDto,
    ) -> Result<Vec<GalleryImageDto>> {
        let home = self.fetch(home_id).await?;

        let old_ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM home_images WHERE home_id = $1")
                .bind(home_id)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM home_images WHERE home_id = $1")
            .bind(home_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let mut new_rows: Vec<(Uuid, Option<Uuid>)> = Vec::with_capacity(dto.images.len());

        for (position, entry) in dto.images.iter().enumerate() {
            let row_id: Uuid = sqlx::query_scalar(
                r#"
                INSERT INTO home_images (home_id, image_id, is_cover, position)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(home_id)
            .bind(entry.image_id)
            .bind(entry.is_cover)
            .bind(position as i32)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

            new_rows.push((row_id, entry.image_id));
        }

        tx.commit().await.map_err(AppError::Database)?;

        self.tracker.forget_many(OwnerKind::HomeImage, &old_ids).await;
        for (row_id, image_id) in &new_rows {
            self.tracker
                .sync(OwnerKind::HomeImage, *row_id, *image_id, Some(&home.title))
                .await;
        }

        self.gallery(home_id).await
    }

    /// Replace a home's detail rows wholesale; positions are assigned per
    /// section in submitted order.
    pub async fn replace_details(&self, home_id: Uuid, dto: ReplaceDetailsDto) -> Result<()> {
        self.fetch(home_id).await?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM home_details WHERE home_id = $1")
            .bind(home_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let mut positions: HashMap<DetailSection, i32> = HashMap::new();

        for item in &dto.details {
            let position = positions.entry(item.section).or_insert(0);

            sqlx::query(
                r#"
                INSERT INTO home_details (home_id, section, title, value, position)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(home_id)
            .bind(item.section)
            .bind(&item.title)
            .bind(&item.value)
            .bind(*position)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

            *position += 1;
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(())
    }

    // ---- staff: page blocks ----

    pub async fn upsert_hero(&self, page_id: Uuid, dto: UpsertListingsHeroDto) -> Result<Uuid> {
        self.ensure_page(page_id).await?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO listings_hero_sections (page_id, title, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (page_id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(section_id)
    }

    pub async fn upsert_cta(&self, page_id: Uuid, dto: UpsertListingsCtaDto) -> Result<Uuid> {
        self.ensure_page(page_id).await?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO listings_cta_sections (page_id, title, description, button_text,
                                               button_link)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (page_id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                button_text = EXCLUDED.button_text,
                button_link = EXCLUDED.button_link,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.button_text)
        .bind(&dto.button_link)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(section_id)
    }

    // ---- public ----

    /// Public listing cards with status/featured filters and pagination.
    pub async fn list(&self, query: &HomeListQuery) -> Result<(Vec<HomeCardDto>, i64)> {
        let homes = sqlx::query_as::<_, Home>(&format!(
            r#"
            SELECT {HOME_COLUMNS} FROM homes
            WHERE ($1::home_status IS NULL OR status = $1)
              AND ($2::BOOLEAN IS NULL OR is_featured = $2)
            ORDER BY position, title
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(query.status)
        .bind(query.featured)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM homes
            WHERE ($1::home_status IS NULL OR status = $1)
              AND ($2::BOOLEAN IS NULL OR is_featured = $2)
            "#,
        )
        .bind(query.status)
        .bind(query.featured)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let cards = self.cards(homes).await?;

        Ok((cards, total))
    }

    /// Public detail page by slug.
    pub async fn detail(&self, slug: &str) -> Result<HomeDetailPageDto> {
        let home = sqlx::query_as::<_, Home>(&format!(
            "SELECT {HOME_COLUMNS} FROM homes WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Home '{}' not found", slug)))?;

        let gallery = self.gallery(home.id).await?;

        let details = sqlx::query_as::<_, HomeDetail>(
            "SELECT * FROM home_details WHERE home_id = $1 ORDER BY position",
        )
        .bind(home.id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let description = home.description.clone();
        let card = card_from(home, cover_url(&gallery));

        Ok(HomeDetailPageDto {
            card,
            description,
            gallery,
            details: group_details(details),
        })
    }

    /// The assembled available-homes page: intro, all homes, call-to-action.
    pub async fn assemble_page(&self, page_id: Uuid) -> Result<ListingsPageDto> {
        let hero = sqlx::query_as::<_, ListingsHeroSection>(
            "SELECT * FROM listings_hero_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let cta = sqlx::query_as::<_, ListingsCtaSection>(
            "SELECT * FROM listings_cta_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let homes = sqlx::query_as::<_, Home>(&format!(
            "SELECT {HOME_COLUMNS} FROM homes ORDER BY position, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(ListingsPageDto {
            hero: hero
                .map(|h| ListingsHeroViewDto {
                    title: h.title,
                    description: h.description,
                })
                .unwrap_or_else(ListingsHeroViewDto::fallback),
            homes: self.cards(homes).await?,
            cta: cta
                .map(|c| ListingsCtaViewDto {
                    title: c.title,
                    description: c.description,
                    button_text: c.button_text,
                    button_link: c.button_link,
                })
                .unwrap_or_else(ListingsCtaViewDto::fallback),
        })
    }

    /// A home's gallery, in position order, with resolved image URLs.
    pub async fn gallery(&self, home_id: Uuid) -> Result<Vec<GalleryImageDto>> {
        let rows = sqlx::query_as::<_, GalleryRow>(
            r#"
            SELECT hi.id, hi.home_id, hi.image_id, hi.is_cover, hi.position,
                   i.file_url, i.external_url
            FROM home_images hi
            LEFT JOIN images i ON i.id = hi.image_id
            WHERE hi.home_id = $1
            ORDER BY hi.position
            "#,
        )
        .bind(home_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let image_url = row.image_url();
                GalleryImageDto {
                    id: row.id,
                    image_id: row.image_id,
                    image_url,
                    is_cover: row.is_cover,
                    position: row.position,
                }
            })
            .collect())
    }

    /// Build listing cards, resolving every home's cover image in one query.
    async fn cards(&self, homes: Vec<Home>) -> Result<Vec<HomeCardDto>> {
        let home_ids: Vec<Uuid> = homes.iter().map(|h| h.id).collect();

        let rows = sqlx::query_as::<_, GalleryRow>(
            r#"
            SELECT hi.id, hi.home_id, hi.image_id, hi.is_cover, hi.position,
                   i.file_url, i.external_url
            FROM home_images hi
            LEFT JOIN images i ON i.id = hi.image_id
            WHERE hi.home_id = ANY($1)
            ORDER BY hi.position
            "#,
        )
        .bind(&home_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut galleries: HashMap<Uuid, Vec<GalleryImageDto>> = HashMap::new();
        for row in rows {
            let image_url = row.image_url();
            galleries.entry(row.home_id).or_default().push(GalleryImageDto {
                id: row.id,
                image_id: row.image_id,
                image_url,
                is_cover: row.is_cover,
                position: row.position,
            });
        }

        Ok(homes
            .into_iter()
            .map(|home| {
                let cover = galleries
                    .get(&home.id)
                    .map(|g| cover_url(g))
                    .unwrap_or_default();
                card_from(home, cover)
            })
            .collect())
    }

    async fn fetch(&self, id: Uuid) -> Result<Home> {
        sqlx::query_as::<_, Home>(&format!("SELECT {HOME_COLUMNS} FROM homes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Home with id {} not found", id)))
    }

    async fn ensure_page(&self, page_id: Uuid) -> Result<()> {
        let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM pages WHERE id = $1")
            .bind(page_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        exists
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Page with id {} not found", page_id)))
    }
}

fn card_from(home: Home, image_url: String) -> HomeCardDto {
    HomeCardDto {
        id: home.id,
        title: home.title,
        slug: home.slug,
        location: home.location,
        price: home.price,
        beds: home.beds,
        baths: home.baths,
        sqft: home.sqft,
        status: home.status,
        status_display: home.status.display().to_string(),
        is_featured: home.is_featured,
        image_url,
    }
}

/// Cover resolution: the last gallery entry flagged as cover wins, else the
/// first entry by position, else empty.
fn cover_url(gallery: &[GalleryImageDto]) -> String {
    gallery
        .iter()
        .rev()
        .find(|g| g.is_cover)
        .or_else(|| gallery.first())
        .map(|g| g.image_url.clone())
        .unwrap_or_default()
}

/// Detail rows grouped per section, sections in display order, empty
/// sections omitted.
fn group_details(details: Vec<HomeDetail>) -> Vec<DetailGroupDto> {
    let mut grouped: HashMap<DetailSection, Vec<DetailItemViewDto>> = HashMap::new();

    for detail in details {
        grouped.entry(detail.section).or_default().push(DetailItemViewDto {
            title: detail.title,
            value: detail.value,
        });
    }

    DetailSection::ALL
        .iter()
        .filter_map(|section| {
            grouped.remove(section).map(|items| DetailGroupDto {
                section: *section,
                label: section.label().to_string(),
                items,
            })
        })
        .collect()
}

fn resolve_slug(provided: Option<&str>, title: &str) -> Result<String> {
    match provided {
        Some(slug) if !slug.trim().is_empty() => {
            let slug = slug.trim();
            if !SLUG_REGEX.is_match(slug) {
                return Err(AppError::Validation(format!(
                    "Invalid slug '{}': use lowercase letters, digits and single hyphens",
                    slug
                )));
            }
            Ok(slug.to_string())
        }
        _ => {
            let slug = slugify(title);
            if slug.is_empty() {
                return Err(AppError::Validation(
                    "Cannot derive a slug from the title; provide one explicitly".to_string(),
                ));
            }
            Ok(slug)
        }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict("A home with this slug already exists".to_string());
        }
    }
    AppError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_entry(is_cover: bool, position: i32, url: &str) -> GalleryImageDto {
        GalleryImageDto {
            id: Uuid::new_v4(),
            image_id: Some(Uuid::new_v4()),
            image_url: url.to_string(),
            is_cover,
            position,
        }
    }

    #[test]
    fn test_cover_prefers_last_flagged_entry() {
        let gallery = vec![
            gallery_entry(false, 0, "a.jpg"),
            gallery_entry(true, 1, "b.jpg"),
            gallery_entry(true, 2, "c.jpg"),
        ];
        assert_eq!(cover_url(&gallery), "c.jpg");
    }

    #[test]
    fn test_cover_falls_back_to_first_by_position() {
        let gallery = vec![
            gallery_entry(false, 0, "a.jpg"),
            gallery_entry(false, 1, "b.jpg"),
        ];
        assert_eq!(cover_url(&gallery), "a.jpg");
        assert_eq!(cover_url(&[]), "");
    }

    #[test]
    fn test_group_details_orders_sections_and_skips_empty() {
        let home_id = Uuid::new_v4();
        let detail = |section, title: &str, position| HomeDetail {
            id: Uuid::new_v4(),
            home_id,
            section,
            title: title.to_string(),
            value: "Yes".to_string(),
            position,
        };

        let groups = group_details(vec![
            detail(DetailSection::Outdoor, "Garden", 0),
            detail(DetailSection::Bathroom, "En-suite", 0),
            detail(DetailSection::Bathroom, "Heated floors", 1),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].section, DetailSection::Bathroom);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].label, "Outdoor Spaces");
    }
}
