use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::company::dtos::{
    CompanyInfoDto, CreateContactPersonDto, TeamMemberDto, UpdateContactPersonDto,
    UpsertCompanyDto,
};
use crate::features::company::models::{Company, ContactPerson};
use crate::features::images::registry::OwnerKind;
use crate::features::images::tracker::UsageTracker;

const COMPANY_COLUMNS: &str = "id, name, trading_name, tagline, registration_number, \
     tax_identification_number, vat_number, year_founded, company_type, \
     country_of_incorporation, physical_address, city, county, country, postal_code, po_box, \
     latitude, longitude, primary_phone, secondary_phone, whatsapp_number, primary_email, \
     support_email, website, facebook_url, instagram_url, twitter_url, linkedin_url, \
     youtube_url, tiktok_url, created_at, updated_at";

const PERSON_COLUMNS: &str = "id, company_id, first_name, last_name, email, phone, role, \
     title, portrait_image_id, bio, is_public, position, created_at, updated_at";

/// Contact person joined with its resolved portrait URL.
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    #[sqlx(flatten)]
    person: ContactPerson,
    file_url: Option<String>,
    external_url: Option<String>,
}

impl TeamRow {
    fn portrait_url(&self) -> String {
        self.file_url
            .as_deref()
            .or(self.external_url.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

/// Service for the company profile and its named contacts.
pub struct CompanyService {
    pool: PgPool,
    tracker: Arc<UsageTracker>,
}

impl CompanyService {
    pub fn new(pool: PgPool, tracker: Arc<UsageTracker>) -> Self {
        Self { pool, tracker }
    }

    // ---- public ----

    /// Footer/contact payload with the public team listing. The profile is
    /// singleton-style; the earliest row wins when several exist.
    pub async fn info(&self) -> Result<CompanyInfoDto> {
        let company = self.current().await?;

        let team = match &company {
            Some(company) => self.public_team(company.id).await?,
            None => Vec::new(),
        };

        Ok(CompanyInfoDto {
            company: company.map(Into::into),
            team,
        })
    }

    // ---- staff: company profile ----

    pub async fn get_company(&self) -> Result<Company> {
        self.current()
            .await?
            .ok_or_else(|| AppError::NotFound("Company profile not set up".to_string()))
    }

    /// Save the whole profile, creating the row on first save.
    pub async fn upsert_company(&self, dto: UpsertCompanyDto) -> Result<Company> {
        let existing: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM companies ORDER BY created_at LIMIT 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        let query = match existing {
            Some(_) => format!(
                r#"
                UPDATE companies
                SET name = $2, trading_name = $3, tagline = $4, registration_number = $5,
                    tax_identification_number = $6, vat_number = $7, year_founded = $8,
                    company_type = $9, country_of_incorporation = $10, physical_address = $11,
                    city = $12, county = $13, country = $14, postal_code = $15, po_box = $16,
                    latitude = $17, longitude = $18, primary_phone = $19, secondary_phone = $20,
                    whatsapp_number = $21, primary_email = $22, support_email = $23,
                    website = $24, facebook_url = $25, instagram_url = $26, twitter_url = $27,
                    linkedin_url = $28, youtube_url = $29, tiktok_url = $30,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING {COMPANY_COLUMNS}
                "#
            ),
            None => format!(
                r#"
                INSERT INTO companies (id, name, trading_name, tagline, registration_number,
                    tax_identification_number, vat_number, year_founded, company_type,
                    country_of_incorporation, physical_address, city, county, country,
                    postal_code, po_box, latitude, longitude, primary_phone, secondary_phone,
                    whatsapp_number, primary_email, support_email, website, facebook_url,
                    instagram_url, twitter_url, linkedin_url, youtube_url, tiktok_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                        $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28,
                        $29, $30)
                RETURNING {COMPANY_COLUMNS}
                "#
            ),
        };

        let id = existing.unwrap_or_else(Uuid::new_v4);

        let company = sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.trading_name)
            .bind(&dto.tagline)
            .bind(&dto.registration_number)
            .bind(&dto.tax_identification_number)
            .bind(&dto.vat_number)
            .bind(dto.year_founded)
            .bind(&dto.company_type)
            .bind(&dto.country_of_incorporation)
            .bind(&dto.physical_address)
            .bind(&dto.city)
            .bind(&dto.county)
            .bind(&dto.country)
            .bind(&dto.postal_code)
            .bind(&dto.po_box)
            .bind(dto.latitude)
            .bind(dto.longitude)
            .bind(&dto.primary_phone)
            .bind(&dto.secondary_phone)
            .bind(&dto.whatsapp_number)
            .bind(&dto.primary_email)
            .bind(&dto.support_email)
            .bind(dto.website.unwrap_or_default())
            .bind(dto.facebook_url.unwrap_or_default())
            .bind(dto.instagram_url.unwrap_or_default())
            .bind(dto.twitter_url.unwrap_or_default())
            .bind(dto.linkedin_url.unwrap_or_default())
            .bind(dto.youtube_url.unwrap_or_default())
            .bind(dto.tiktok_url.unwrap_or_default())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        info!("Company profile saved: id={}", company.id);

        Ok(company)
    }

    // ---- staff: contact persons ----

    pub async fn create_person(&self, dto: CreateContactPersonDto) -> Result<ContactPerson> {
        let company = self.get_company().await?;

        let person = sqlx::query_as::<_, ContactPerson>(&format!(
            r#"
            INSERT INTO contact_persons (company_id, first_name, last_name, email, phone,
                                         role, title, portrait_image_id, bio, is_public,
                                         position)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(company.id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(dto.phone.unwrap_or_default())
        .bind(dto.role)
        .bind(&dto.title)
        .bind(dto.portrait_image_id)
        .bind(&dto.bio)
        .bind(dto.is_public)
        .bind(dto.position)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        self.tracker
            .sync(
                OwnerKind::ContactPerson,
                person.id,
                person.portrait_image_id,
                Some(&person.full_name()),
            )
            .await;

        info!("Contact person created: id={}", person.id);

        Ok(person)
    }

    pub async fn list_persons(&self) -> Result<Vec<ContactPerson>> {
        let persons = sqlx::query_as::<_, ContactPerson>(&format!(
            "SELECT {PERSON_COLUMNS} FROM contact_persons ORDER BY position, role"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(persons)
    }

    pub async fn get_person(&self, id: Uuid) -> Result<ContactPerson> {
        sqlx::query_as::<_, ContactPerson>(&format!(
            "SELECT {PERSON_COLUMNS} FROM contact_persons WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Contact person {} not found", id)))
    }

    pub async fn update_person(
        &self,
        id: Uuid,
        dto: UpdateContactPersonDto,
    ) -> Result<ContactPerson> {
        // portrait_image_id is applied unconditionally so the portrait can
        // be cleared.
        let person = sqlx::query_as::<_, ContactPerson>(&format!(
            r#"
            UPDATE contact_persons
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                role = COALESCE($6, role),
                title = COALESCE($7, title),
                portrait_image_id = $8,
                bio = COALESCE($9, bio),
                is_public = COALESCE($10, is_public),
                position = COALESCE($11, position),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(dto.first_name)
        .bind(dto.last_name)
        .bind(dto.email)
        .bind(dto.phone)
        .bind(dto.role)
        .bind(dto.title)
        .bind(dto.portrait_image_id)
        .bind(dto.bio)
        .bind(dto.is_public)
        .bind(dto.position)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Contact person {} not found", id)))?;

        self.tracker
            .sync(
                OwnerKind::ContactPerson,
                person.id,
                person.portrait_image_id,
                Some(&person.full_name()),
            )
            .await;

        Ok(person)
    }

    pub async fn delete_person(&self, id: Uuid) -> Result<()> {
        let deleted: Option<Uuid> =
            sqlx::query_scalar("DELETE FROM contact_persons WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        if deleted.is_none() {
            return Err(AppError::NotFound(format!(
                "Contact person {} not found",
                id
            )));
        }

        self.tracker.forget(OwnerKind::ContactPerson, id).await;

        info!("Contact person deleted: id={}", id);

        Ok(())
    }

    // ---- helpers ----

    async fn current(&self) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn public_team(&self, company_id: Uuid) -> Result<Vec<TeamMemberDto>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT cp.*, i.file_url, i.external_url
            FROM contact_persons cp
            LEFT JOIN images i ON i.id = cp.portrait_image_id
            WHERE cp.company_id = $1 AND cp.is_public
            ORDER BY cp.position, cp.role
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let portrait_url = row.portrait_url();
                let person = row.person;
                TeamMemberDto {
                    full_name: person.full_name(),
                    role: person.role,
                    role_display: person.role.label().to_string(),
                    title: person.title,
                    email: person.email,
                    phone: person.phone,
                    portrait_url,
                    bio: person.bio,
                }
            })
            .collect())
    }
}
