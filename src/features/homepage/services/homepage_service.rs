use std::sync::Arc;

use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::homepage::dtos::{
    ButtonDto, UpsertClientReviewDto, UpsertDiasporaDto, UpsertFeaturesDto, UpsertHeroDto,
    UpsertNewsletterDto, UpsertPortfolioDto, UpsertServicesDto, UpsertStatsDto, UpsertStepsDto,
    UpsertWhoWeAreDto,
};
use crate::features::images::registry::OwnerKind;
use crate::features::images::tracker::UsageTracker;

/// Home-page sections a staff user can save or remove.
///
/// Handlers route per-section paths here; the service owns the one-per-page
/// upsert semantics and the child replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSlot {
    Hero,
    Stats,
    ClientReview,
    Diaspora,
    Features,
    Steps,
    Services,
    Newsletter,
    WhoWeAre,
    Portfolio,
}

impl SectionSlot {
    pub fn table(self) -> &'static str {
        match self {
            SectionSlot::Hero => "hero_sections",
            SectionSlot::Stats => "stats_sections",
            SectionSlot::ClientReview => "client_reviews",
            SectionSlot::Diaspora => "diaspora_sections",
            SectionSlot::Features => "features_sections",
            SectionSlot::Steps => "steps_sections",
            SectionSlot::Services => "services_sections",
            SectionSlot::Newsletter => "newsletter_sections",
            SectionSlot::WhoWeAre => "who_we_are_sections",
            SectionSlot::Portfolio => "portfolio_sections",
        }
    }

    /// Usage-tracker kind for image-bearing sections.
    pub fn owner_kind(self) -> Option<OwnerKind> {
        match self {
            SectionSlot::Hero => Some(OwnerKind::HeroSection),
            SectionSlot::Stats => Some(OwnerKind::StatsSection),
            SectionSlot::Diaspora => Some(OwnerKind::DiasporaSection),
            SectionSlot::WhoWeAre => Some(OwnerKind::WhoWeAreSection),
            _ => None,
        }
    }
}

impl std::str::FromStr for SectionSlot {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hero" => Ok(SectionSlot::Hero),
            "stats" => Ok(SectionSlot::Stats),
            "client-review" => Ok(SectionSlot::ClientReview),
            "diaspora" => Ok(SectionSlot::Diaspora),
            "features" => Ok(SectionSlot::Features),
            "steps" => Ok(SectionSlot::Steps),
            "services" => Ok(SectionSlot::Services),
            "newsletter" => Ok(SectionSlot::Newsletter),
            "who-we-are" => Ok(SectionSlot::WhoWeAre),
            "portfolio" => Ok(SectionSlot::Portfolio),
            other => Err(AppError::BadRequest(format!(
                "Unknown section '{}'",
                other
            ))),
        }
    }
}

/// Staff-facing service for home-page sections.
pub struct HomepageService {
    pool: PgPool,
    tracker: Arc<UsageTracker>,
}

impl HomepageService {
    pub fn new(pool: PgPool, tracker: Arc<UsageTracker>) -> Self {
        Self { pool, tracker }
    }

    pub async fn upsert_hero(&self, page_id: Uuid, dto: UpsertHeroDto) -> Result<Uuid> {
        let page_title = self.ensure_page(page_id).await?;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO hero_sections (page_id, tagline, heading_main, heading_highlight,
                                       heading_suffix, description, background_image_id,
                                       overlay_opacity, show_verified_badge, verified_text,
                                       show_live_tracking, live_tracking_text, company_name,
                                       company_location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (page_id) DO UPDATE SET
                tagline = EXCLUDED.tagline,
                heading_main = EXCLUDED.heading_main,
                heading_highlight = EXCLUDED.heading_highlight,
                heading_suffix = EXCLUDED.heading_suffix,
                description = EXCLUDED.description,
                background_image_id = EXCLUDED.background_image_id,
                overlay_opacity = EXCLUDED.overlay_opacity,
                show_verified_badge = EXCLUDED.show_verified_badge,
                verified_text = EXCLUDED.verified_text,
                show_live_tracking = EXCLUDED.show_live_tracking,
                live_tracking_text = EXCLUDED.live_tracking_text,
                company_name = EXCLUDED.company_name,
                company_location = EXCLUDED.company_location,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.tagline)
        .bind(&dto.heading_main)
        .bind(&dto.heading_highlight)
        .bind(&dto.heading_suffix)
        .bind(&dto.description)
        .bind(dto.background_image_id)
        .bind(dto.overlay_opacity)
        .bind(dto.show_verified_badge)
        .bind(&dto.verified_text)
        .bind(dto.show_live_tracking)
        .bind(&dto.live_tracking_text)
        .bind(&dto.company_name)
        .bind(&dto.company_location)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        replace_buttons(&mut tx, "hero_buttons", section_id, &dto.buttons).await?;

        tx.commit().await.map_err(AppError::Database)?;

        self.tracker
            .sync(
                OwnerKind::HeroSection,
                section_id,
                dto.background_image_id,
                Some(&page_title),
            )
            .await;

        info!("Hero section saved: page={}, section={}", page_id, section_id);

        Ok(section_id)
    }

    pub async fn upsert_stats(&self, page_id: Uuid, dto: UpsertStatsDto) -> Result<Uuid> {
        let page_title = self.ensure_page(page_id).await?;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO stats_sections (page_id, header, background_pattern_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (page_id) DO UPDATE SET
                header = EXCLUDED.header,
                background_pattern_id = EXCLUDED.background_pattern_id,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.header)
        .bind(dto.background_pattern_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM stat_items WHERE stats_section_id = $1")
            .bind(section_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for (position, stat) in dto.stats.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO stat_items (stats_section_id, number, subtitle, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(section_id)
            .bind(&stat.number)
            .bind(&stat.subtitle)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        self.tracker
            .sync(
                OwnerKind::StatsSection,
                section_id,
                dto.background_pattern_id,
                Some(&page_title),
            )
            .await;

        Ok(section_id)
    }

    pub async fn upsert_client_review(
        &self,
        page_id: Uuid,
        dto: UpsertClientReviewDto,
    ) -> Result<Uuid> {
        self.ensure_page(page_id).await?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO client_reviews (page_id, rating, total_reviews, label_text,
                                        button_text, button_link)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (page_id) DO UPDATE SET
                rating = EXCLUDED.rating,
                total_reviews = EXCLUDED.total_reviews,
                label_text = EXCLUDED.label_text,
                button_text = EXCLUDED.button_text,
                button_link = EXCLUDED.button_link,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(dto.rating)
        .bind(&dto.total_reviews)
        .bind(&dto.label_text)
        .bind(&dto.button_text)
        .bind(&dto.button_link)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(section_id)
    }

    pub async fn upsert_diaspora(&self, page_id: Uuid, dto: UpsertDiasporaDto) -> Result<Uuid> {
        let page_title = self.ensure_page(page_id).await?;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO diaspora_sections (page_id, eyebrow, heading, attribution,
                                           featured_label, featured_title, featured_image_id,
                                           featured_image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (page_id) DO UPDATE SET
                eyebrow = EXCLUDED.eyebrow,
                heading = EXCLUDED.heading,
                attribution = EXCLUDED.attribution,
                featured_label = EXCLUDED.featured_label,
                featured_title = EXCLUDED.featured_title,
                featured_image_id = EXCLUDED.featured_image_id,
                featured_image_url = EXCLUDED.featured_image_url,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.eyebrow)
        .bind(&dto.heading)
        .bind(&dto.attribution)
        .bind(&dto.featured_label)
        .bind(&dto.featured_title)
        .bind(dto.featured_image_id)
        .bind(&dto.featured_image_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM diaspora_challenges WHERE diaspora_section_id = $1")
            .bind(section_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for (position, challenge) in dto.challenges.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO diaspora_challenges (diaspora_section_id, title, description, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(section_id)
            .bind(&challenge.title)
            .bind(&challenge.description)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        self.tracker
            .sync(
                OwnerKind::DiasporaSection,
                section_id,
                dto.featured_image_id,
                Some(&page_title),
            )
            .await;

        Ok(section_id)
    }

    pub async fn upsert_features(&self, page_id: Uuid, dto: UpsertFeaturesDto) -> Result<Uuid> {
        self.ensure_page(page_id).await?;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO features_sections (page_id, eyebrow, heading)
            VALUES ($1, $2, $3)
            ON CONFLICT (page_id) DO UPDATE SET
                eyebrow = EXCLUDED.eyebrow,
                heading = EXCLUDED.heading,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.eyebrow)
        .bind(&dto.heading)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM features WHERE features_section_id = $1")
            .bind(section_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for (position, feature) in dto.features.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO features (features_section_id, title, description, icon_path, position)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(section_id)
            .bind(&feature.title)
            .bind(&feature.description)
            .bind(&feature.icon_path)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(section_id)
    }

    pub async fn upsert_steps(&self, page_id: Uuid, dto: UpsertStepsDto) -> Result<Uuid> {
        self.ensure_page(page_id).await?;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO steps_sections (page_id, eyebrow, heading, description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (page_id) DO UPDATE SET
                eyebrow = EXCLUDED.eyebrow,
                heading = EXCLUDED.heading,
                description = EXCLUDED.description,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.eyebrow)
        .bind(&dto.heading)
        .bind(&dto.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM steps WHERE steps_section_id = $1")
            .bind(section_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for (position, step) in dto.steps.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO steps (steps_section_id, title, description, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(section_id)
            .bind(&step.title)
            .bind(&step.description)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(section_id)
    }

    pub async fn upsert_services(&self, page_id: Uuid, dto: UpsertServicesDto) -> Result<Uuid> {
        self.ensure_page(page_id).await?;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO services_sections (page_id, subtitle, heading)
            VALUES ($1, $2, $3)
            ON CONFLICT (page_id) DO UPDATE SET
                subtitle = EXCLUDED.subtitle,
                heading = EXCLUDED.heading,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.subtitle)
        .bind(&dto.heading)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM service_items WHERE services_section_id = $1")
            .bind(section_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for (position, service) in dto.services.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO service_items (services_section_id, title, description, icon,
                                           expertise, position)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(section_id)
            .bind(&service.title)
            .bind(&service.description)
            .bind(&service.icon)
            .bind(&service.expertise)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(section_id)
    }

    pub async fn upsert_newsletter(
        &self,
        page_id: Uuid,
        dto: UpsertNewsletterDto,
    ) -> Result<Uuid> {
        self.ensure_page(page_id).await?;
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO newsletter_sections (page_id, heading, description, placeholder)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (page_id) DO UPDATE SET
                heading = EXCLUDED.heading,
                description = EXCLUDED.description,
                placeholder = EXCLUDED.placeholder,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.heading)
        .bind(&dto.description)
        .bind(&dto.placeholder)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        replace_buttons(&mut tx, "newsletter_buttons", section_id, &dto.buttons).await?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(section_id)
    }

    pub async fn upsert_who_we_are(&self, page_id: Uuid, dto: UpsertWhoWeAreDto) -> Result<Uuid> {
        let page_title = self.ensure_page(page_id).await?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO who_we_are_sections (page_id, label, heading, description, button_text,
                                             button_link, background_image_id,
                                             background_image_url, overlay_opacity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (page_id) DO UPDATE SET
                label = EXCLUDED.label,
                heading = EXCLUDED.heading,
                description = EXCLUDED.description,
                button_text = EXCLUDED.button_text,
                button_link = EXCLUDED.button_link,
                background_image_id = EXCLUDED.background_image_id,
                background_image_url = EXCLUDED.background_image_url,
                overlay_opacity = EXCLUDED.overlay_opacity,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.label)
        .bind(&dto.heading)
        .bind(&dto.description)
        .bind(&dto.button_text)
        .bind(&dto.button_link)
        .bind(dto.background_image_id)
        .bind(&dto.background_image_url)
        .bind(dto.overlay_opacity)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        self.tracker
            .sync(
                OwnerKind::WhoWeAreSection,
                section_id,
                dto.background_image_id,
                Some(&page_title),
            )
            .await;

        Ok(section_id)
    }

    pub async fn upsert_portfolio(&self, page_id: Uuid, dto: UpsertPortfolioDto) -> Result<Uuid> {
        self.ensure_page(page_id).await?;

        let section_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO portfolio_sections (page_id, eyebrow, heading, description,
                                            button_text, button_link)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (page_id) DO UPDATE SET
                eyebrow = EXCLUDED.eyebrow,
                heading = EXCLUDED.heading,
                description = EXCLUDED.description,
                button_text = EXCLUDED.button_text,
                button_link = EXCLUDED.button_link,
                updated_at = NOW()
            RETURNING id
            "#,
        )
        .bind(page_id)
        .bind(&dto.eyebrow)
        .bind(&dto.heading)
        .bind(&dto.description)
        .bind(&dto.button_text)
        .bind(&dto.button_link)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(section_id)
    }

    /// Remove a section from a page. Children cascade in the database; the
    /// usage row for image-bearing sections is cleared explicitly.
    pub async fn delete_section(&self, page_id: Uuid, slot: SectionSlot) -> Result<()> {
        self.ensure_page(page_id).await?;

        let section_id: Option<Uuid> = sqlx::query_scalar(&format!(
            "DELETE FROM {} WHERE page_id = $1 RETURNING id",
            slot.table()
        ))
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section_id) = section_id else {
            return Err(AppError::NotFound(format!(
                "Page {} has no {} section",
                page_id,
                slot.table()
            )));
        };

        if let Some(kind) = slot.owner_kind() {
            self.tracker.forget(kind, section_id).await;
        }

        info!("Section deleted: page={}, table={}", page_id, slot.table());

        Ok(())
    }

    /// The page must exist before a section can hang off it. Returns the
    /// title, used as the usage-row owner label.
    async fn ensure_page(&self, page_id: Uuid) -> Result<String> {
        sqlx::query_scalar("SELECT title FROM pages WHERE id = $1")
            .bind(page_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Page with id {} not found", page_id)))
    }
}

/// Replace a section's buttons wholesale, preserving submitted order.
async fn replace_buttons(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    section_id: Uuid,
    buttons: &[ButtonDto],
) -> Result<()> {
    sqlx::query(&format!("DELETE FROM {table} WHERE section_id = $1"))
        .bind(section_id)
        .execute(&mut **tx)
        .await
        .map_err(AppError::Database)?;

    for (position, button) in buttons.iter().enumerate() {
        sqlx::query(&format!(
            r#"
            INSERT INTO {table} (section_id, text, link, icon, style, size, is_external,
                                 is_full_width, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#
        ))
        .bind(section_id)
        .bind(&button.text)
        .bind(&button.link)
        .bind(&button.icon)
        .bind(button.style)
        .bind(button.size)
        .bind(button.is_external)
        .bind(button.is_full_width)
        .bind(position as i32)
        .execute(&mut **tx)
        .await
        .map_err(AppError::Database)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_slots_have_owner_kinds() {
        assert_eq!(SectionSlot::Hero.owner_kind(), Some(OwnerKind::HeroSection));
        assert_eq!(SectionSlot::Stats.owner_kind(), Some(OwnerKind::StatsSection));
        assert_eq!(SectionSlot::Diaspora.owner_kind(), Some(OwnerKind::DiasporaSection));
        assert_eq!(SectionSlot::WhoWeAre.owner_kind(), Some(OwnerKind::WhoWeAreSection));
        assert_eq!(SectionSlot::Portfolio.owner_kind(), None);
        assert_eq!(SectionSlot::Newsletter.owner_kind(), None);
    }

    #[test]
    fn test_slot_tables_are_distinct() {
        let slots = [
            SectionSlot::Hero,
            SectionSlot::Stats,
            SectionSlot::ClientReview,
            SectionSlot::Diaspora,
            SectionSlot::Features,
            SectionSlot::Steps,
            SectionSlot::Services,
            SectionSlot::Newsletter,
            SectionSlot::WhoWeAre,
            SectionSlot::Portfolio,
        ];
        let mut tables: Vec<&str> = slots.iter().map(|s| s.table()).collect();
        tables.sort();
        tables.dedup();
        assert_eq!(tables.len(), slots.len());
    }
}
