use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::homepage::dtos::{
    ButtonViewDto, ChallengeViewDto, ClientReviewViewDto, DiasporaViewDto, FeatureViewDto,
    FeaturesViewDto, HeroViewDto, HomePayloadDto, NewsletterViewDto, PortfolioViewDto,
    ServiceViewDto, ServicesViewDto, StatViewDto, StatsViewDto, StepViewDto, StepsViewDto,
    WhoWeAreViewDto,
};
use crate::features::homepage::models::{
    ClientReview, DiasporaChallenge, DiasporaSection, Feature, FeaturesSection, HeroSection,
    NewsletterSection, PortfolioSection, SectionButton, ServiceItem, ServicesSection, StatItem,
    StatsSection, Step, StepsSection, WhoWeAreSection,
};

/// Assembles the public home-page payload.
///
/// Every section falls back to the stock copy when its row is missing, so
/// the endpoint always returns a renderable page.
pub struct HomeAssemblyService {
    pool: PgPool,
}

impl HomeAssemblyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn assemble(&self, page_id: Uuid) -> Result<HomePayloadDto> {
        Ok(HomePayloadDto {
            hero: self.hero(page_id).await?,
            stats: self.stats(page_id).await?,
            client_review: self.client_review(page_id).await?,
            diaspora: self.diaspora(page_id).await?,
            features: self.features(page_id).await?,
            steps: self.steps(page_id).await?,
            services: self.services(page_id).await?,
            newsletter: self.newsletter(page_id).await?,
            who_we_are: self.who_we_are(page_id).await?,
            portfolio: self.portfolio(page_id).await?,
        })
    }

    async fn hero(&self, page_id: Uuid) -> Result<HeroViewDto> {
        let section = sqlx::query_as::<_, HeroSection>(
            "SELECT * FROM hero_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(HeroViewDto::fallback());
        };

        let image_url = self.image_url(section.background_image_id).await?;
        let buttons = self.buttons("hero_buttons", section.id).await?;

        Ok(HeroViewDto {
            tagline: section.tagline,
            heading_main: section.heading_main,
            heading_highlight: section.heading_highlight,
            heading_suffix: section.heading_suffix,
            description: section.description,
            image_url,
            overlay_opacity: section.overlay_opacity,
            show_verified_badge: section.show_verified_badge,
            verified_text: section.verified_text,
            show_live_tracking: section.show_live_tracking,
            live_tracking_text: section.live_tracking_text,
            company_name: section.company_name,
            company_location: section.company_location,
            buttons,
        })
    }

    async fn stats(&self, page_id: Uuid) -> Result<StatsViewDto> {
        let section = sqlx::query_as::<_, StatsSection>(
            "SELECT * FROM stats_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(StatsViewDto::fallback());
        };

        let background_url = self.image_url(section.background_pattern_id).await?;

        let items = sqlx::query_as::<_, StatItem>(
            "SELECT * FROM stat_items WHERE stats_section_id = $1 ORDER BY position",
        )
        .bind(section.id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(StatsViewDto {
            header: section.header,
            background_url,
            stats: items
                .into_iter()
                .map(|item| StatViewDto {
                    number: item.number,
                    subtitle: item.subtitle,
                })
                .collect(),
        })
    }

    async fn client_review(&self, page_id: Uuid) -> Result<ClientReviewViewDto> {
        let review = sqlx::query_as::<_, ClientReview>(
            "SELECT * FROM client_reviews WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(review
            .map(|review| ClientReviewViewDto {
                rating: review.rating,
                total_reviews: review.total_reviews,
                label_text: review.label_text,
                button_text: review.button_text,
                button_link: review.button_link,
            })
            .unwrap_or_else(ClientReviewViewDto::fallback))
    }

    async fn diaspora(&self, page_id: Uuid) -> Result<DiasporaViewDto> {
        let section = sqlx::query_as::<_, DiasporaSection>(
            "SELECT * FROM diaspora_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(DiasporaViewDto::fallback());
        };

        // Library image wins; the free-form URL is the editor's fallback
        let featured_image_url = match section.featured_image_id {
            Some(id) => self.image_url(Some(id)).await?,
            None => section.featured_image_url,
        };

        let challenges = sqlx::query_as::<_, DiasporaChallenge>(
            "SELECT * FROM diaspora_challenges WHERE diaspora_section_id = $1 ORDER BY position",
        )
        .bind(section.id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(DiasporaViewDto {
            eyebrow: section.eyebrow,
            heading: section.heading,
            attribution: section.attribution,
            featured_label: section.featured_label,
            featured_title: section.featured_title,
            featured_image_url,
            challenges: challenges
                .into_iter()
                .map(|c| ChallengeViewDto {
                    title: c.title,
                    description: c.description,
                })
                .collect(),
        })
    }

    async fn features(&self, page_id: Uuid) -> Result<FeaturesViewDto> {
        let section = sqlx::query_as::<_, FeaturesSection>(
            "SELECT * FROM features_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(FeaturesViewDto::fallback());
        };

        let features = sqlx::query_as::<_, Feature>(
            "SELECT * FROM features WHERE features_section_id = $1 ORDER BY position",
        )
        .bind(section.id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(FeaturesViewDto {
            eyebrow: section.eyebrow,
            heading: section.heading,
            features: features
                .into_iter()
                .map(|f| FeatureViewDto {
                    title: f.title,
                    description: f.description,
                    icon_path: f.icon_path,
                })
                .collect(),
        })
    }

    async fn steps(&self, page_id: Uuid) -> Result<StepsViewDto> {
        let section = sqlx::query_as::<_, StepsSection>(
            "SELECT * FROM steps_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(StepsViewDto::fallback());
        };

        let steps = sqlx::query_as::<_, Step>(
            "SELECT * FROM steps WHERE steps_section_id = $1 ORDER BY position",
        )
        .bind(section.id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(StepsViewDto {
            eyebrow: section.eyebrow,
            heading: section.heading,
            description: section.description,
            steps: steps
                .into_iter()
                .map(|s| StepViewDto {
                    title: s.title,
                    description: s.description,
                })
                .collect(),
        })
    }

    async fn services(&self, page_id: Uuid) -> Result<ServicesViewDto> {
        let section = sqlx::query_as::<_, ServicesSection>(
            "SELECT * FROM services_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(ServicesViewDto::fallback());
        };

        let items = sqlx::query_as::<_, ServiceItem>(
            "SELECT * FROM service_items WHERE services_section_id = $1 ORDER BY position",
        )
        .bind(section.id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(ServicesViewDto {
            subtitle: section.subtitle,
            heading: section.heading,
            services: items
                .into_iter()
                .map(|item| ServiceViewDto {
                    title: item.title,
                    description: item.description,
                    icon: item.icon,
                    expertise: split_expertise(&item.expertise),
                })
                .collect(),
        })
    }

    async fn newsletter(&self, page_id: Uuid) -> Result<NewsletterViewDto> {
        let section = sqlx::query_as::<_, NewsletterSection>(
            "SELECT * FROM newsletter_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(NewsletterViewDto::fallback());
        };

        let buttons = self.buttons("newsletter_buttons", section.id).await?;

        let cta_text = buttons
            .first()
            .map(|b| b.text.clone())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "GET THE GUIDE".to_string());

        Ok(NewsletterViewDto {
            heading: section.heading,
            description: section.description,
            placeholder: section.placeholder,
            cta_text,
            buttons,
        })
    }

    async fn who_we_are(&self, page_id: Uuid) -> Result<WhoWeAreViewDto> {
        let section = sqlx::query_as::<_, WhoWeAreSection>(
            "SELECT * FROM who_we_are_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let Some(section) = section else {
            return Ok(WhoWeAreViewDto::fallback());
        };

        let background_image_url = match section.background_image_id {
            Some(id) => self.image_url(Some(id)).await?,
            None => section.background_image_url,
        };

        Ok(WhoWeAreViewDto {
            label: section.label,
            heading: section.heading,
            description: section.description,
            button_text: section.button_text,
            button_link: section.button_link,
            background_image_url,
            overlay_opacity: section.overlay_opacity,
        })
    }

    async fn portfolio(&self, page_id: Uuid) -> Result<PortfolioViewDto> {
        let section = sqlx::query_as::<_, PortfolioSection>(
            "SELECT * FROM portfolio_sections WHERE page_id = $1",
        )
        .bind(page_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(section
            .map(|section| PortfolioViewDto {
                eyebrow: section.eyebrow,
                heading: section.heading,
                description: section.description,
                button_text: section.button_text,
                button_link: section.button_link,
            })
            .unwrap_or_else(PortfolioViewDto::fallback))
    }

    async fn buttons(&self, table: &str, section_id: Uuid) -> Result<Vec<ButtonViewDto>> {
        let buttons = sqlx::query_as::<_, SectionButton>(&format!(
            "SELECT * FROM {table} WHERE section_id = $1 ORDER BY position"
        ))
        .bind(section_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(buttons.into_iter().map(ButtonViewDto::from).collect())
    }

    /// Resolved URL of a library image: uploaded payload first, external
    /// URL second, empty when the reference is unset or dangling.
    async fn image_url(&self, image_id: Option<Uuid>) -> Result<String> {
        let Some(image_id) = image_id else {
            return Ok(String::new());
        };

        let urls: Option<(Option<String>, Option<String>)> =
            sqlx::query_as("SELECT file_url, external_url FROM images WHERE id = $1")
                .bind(image_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(urls
            .map(|(file_url, external_url)| {
                file_url.or(external_url).unwrap_or_default()
            })
            .unwrap_or_default())
    }
}

/// Comma-separated expertise string to a trimmed list, empty entries dropped.
fn split_expertise(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_expertise_trims_and_drops_empties() {
        assert_eq!(
            split_expertise("Structural Design, Project Management ,, Surveying"),
            vec!["Structural Design", "Project Management", "Surveying"]
        );
        assert!(split_expertise("").is_empty());
        assert!(split_expertise(" , ").is_empty());
    }

    #[test]
    fn test_fallback_home_payload_is_complete() {
        let hero = HeroViewDto::fallback();
        assert_eq!(hero.company_name, "TrustBuild");
        assert!(hero.image_url.starts_with("https://images.unsplash.com/"));

        let newsletter = NewsletterViewDto::fallback();
        assert_eq!(newsletter.cta_text, "GET THE GUIDE");

        let diaspora = DiasporaViewDto::fallback();
        assert_eq!(diaspora.featured_title, "The Grand Residence, Runda");
        assert!(diaspora.challenges.is_empty());
    }
}
