use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::leads::dtos::{
    CreateContactSubmissionDto, CreatePropertyOfferDto, CreateShowingRequestDto, LeadListQuery,
    PropertyOfferDto, ShowingRequestDto,
};
use crate::features::leads::models::{
    ContactSubmission, OfferStatus, PropertyOffer, ShowingRequest, ShowingStatus,
    SubmissionStatus,
};

const SUBMISSION_COLUMNS: &str =
    "id, first_name, last_name, email, subject, message, status, created_at, updated_at";

const SHOWING_COLUMNS: &str = "id, home_id, first_name, last_name, email, phone, \
     preferred_date, preferred_time, is_first_time_buyer, message, status, created_at, updated_at";

const OFFER_COLUMNS: &str = "id, home_id, first_name, last_name, email, phone, offer_amount, \
     financing_type, is_first_time_buyer, message, status, created_at, updated_at";

/// Service for captured leads: persistence plus the staff triage surface.
pub struct LeadService {
    pool: PgPool,
}

impl LeadService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---- public intake ----

    pub async fn submit_contact(
        &self,
        dto: CreateContactSubmissionDto,
    ) -> Result<ContactSubmission> {
        let submission = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            INSERT INTO contact_submissions (first_name, last_name, email, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SUBMISSION_COLUMNS}
            "#
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(dto.subject)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        info!("Contact submission received: id={}", submission.id);

        Ok(submission)
    }

    pub async fn submit_showing(
        &self,
        home_slug: &str,
        dto: CreateShowingRequestDto,
    ) -> Result<ShowingRequest> {
        let home_id = self.home_id_by_slug(home_slug).await?;

        let request = sqlx::query_as::<_, ShowingRequest>(&format!(
            r#"
            INSERT INTO showing_requests (home_id, first_name, last_name, email, phone,
                                          preferred_date, preferred_time, is_first_time_buyer,
                                          message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SHOWING_COLUMNS}
            "#
        ))
        .bind(home_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(dto.preferred_date)
        .bind(dto.preferred_time)
        .bind(dto.is_first_time_buyer)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        info!("Showing request received: id={}, home={}", request.id, home_slug);

        Ok(request)
    }

    pub async fn submit_offer(
        &self,
        home_slug: &str,
        dto: CreatePropertyOfferDto,
    ) -> Result<PropertyOffer> {
        let home_id = self.home_id_by_slug(home_slug).await?;

        let offer = sqlx::query_as::<_, PropertyOffer>(&format!(
            r#"
            INSERT INTO property_offers (home_id, first_name, last_name, email, phone,
                                         offer_amount, financing_type, is_first_time_buyer,
                                         message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {OFFER_COLUMNS}
            "#
        ))
        .bind(home_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.offer_amount)
        .bind(dto.financing_type)
        .bind(dto.is_first_time_buyer)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        info!("Property offer received: id={}, home={}", offer.id, home_slug);

        Ok(offer)
    }

    // ---- staff triage ----

    pub async fn list_submissions(
        &self,
        query: &LeadListQuery,
    ) -> Result<(Vec<ContactSubmission>, i64)> {
        let submissions = sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            SELECT {SUBMISSION_COLUMNS} FROM contact_submissions
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok((submissions, total))
    }

    pub async fn list_showings(
        &self,
        query: &LeadListQuery,
    ) -> Result<(Vec<ShowingRequestDto>, i64)> {
        let rows: Vec<(ShowingRequest, Option<String>)> = sqlx::query_as::<_, JoinedShowingRow>(
            r#"
            SELECT sr.*, h.title AS home_title
            FROM showing_requests sr
            LEFT JOIN homes h ON h.id = sr.home_id
            ORDER BY sr.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?
        .into_iter()
        .map(|row| (row.request, row.home_title))
        .collect();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM showing_requests")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let dtos = rows
            .into_iter()
            .map(|(request, title)| {
                ShowingRequestDto::from_model(request, title.unwrap_or_default())
            })
            .collect();

        Ok((dtos, total))
    }

    pub async fn list_offers(
        &self,
        query: &LeadListQuery,
    ) -> Result<(Vec<PropertyOfferDto>, i64)> {
        let rows: Vec<(PropertyOffer, Option<String>)> = sqlx::query_as::<_, JoinedOfferRow>(
            r#"
            SELECT po.*, h.title AS home_title
            FROM property_offers po
            LEFT JOIN homes h ON h.id = po.home_id
            ORDER BY po.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?
        .into_iter()
        .map(|row| (row.offer, row.home_title))
        .collect();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM property_offers")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let dtos = rows
            .into_iter()
            .map(|(offer, title)| PropertyOfferDto::from_model(offer, title.unwrap_or_default()))
            .collect();

        Ok((dtos, total))
    }

    pub async fn update_submission_status(
        &self,
        id: Uuid,
        status: SubmissionStatus,
    ) -> Result<ContactSubmission> {
        sqlx::query_as::<_, ContactSubmission>(&format!(
            r#"
            UPDATE contact_submissions SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {SUBMISSION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Contact submission {} not found", id)))
    }

    pub async fn update_showing_status(
        &self,
        id: Uuid,
        status: ShowingStatus,
    ) -> Result<ShowingRequest> {
        sqlx::query_as::<_, ShowingRequest>(&format!(
            r#"
            UPDATE showing_requests SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {SHOWING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Showing request {} not found", id)))
    }

    pub async fn update_offer_status(
        &self,
        id: Uuid,
        status: OfferStatus,
    ) -> Result<PropertyOffer> {
        sqlx::query_as::<_, PropertyOffer>(&format!(
            r#"
            UPDATE property_offers SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {OFFER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Property offer {} not found", id)))
    }

    async fn home_id_by_slug(&self, slug: &str) -> Result<Uuid> {
        sqlx::query_scalar("SELECT id FROM homes WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Home '{}' not found", slug)))
    }
}

#[derive(sqlx::FromRow)]
struct JoinedShowingRow {
    #[sqlx(flatten)]
    request: ShowingRequest,
    home_title: Option<String>,
}

#[derive(sqlx::FromRow)]
struct JoinedOfferRow {
    #[sqlx(flatten)]
    offer: PropertyOffer,
    home_title: Option<String>,
}
