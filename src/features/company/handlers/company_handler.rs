use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::company::dtos::{
    CompanyDto, CompanyInfoDto, ContactPersonDto, CreateContactPersonDto,
    DeletePersonResponseDto, UpdateContactPersonDto, UpsertCompanyDto,
};
use crate::features::company::services::CompanyService;
use crate::shared::types::{ApiResponse, Meta};

// ---- public ----

/// Company contact details and public team
#[utoipa::path(
    get,
    path = "/api/company",
    tag = "company",
    responses(
        (status = 200, description = "Company info retrieved successfully", body = ApiResponse<CompanyInfoDto>)
    )
)]
pub async fn get_company_info(
    State(service): State<Arc<CompanyService>>,
) -> Result<Json<ApiResponse<CompanyInfoDto>>> {
    let info = service.info().await?;
    Ok(Json(ApiResponse::success(Some(info), None, None)))
}

// ---- staff: company profile ----

/// Get the company profile
#[utoipa::path(
    get,
    path = "/api/admin/company",
    tag = "company",
    responses(
        (status = 200, description = "Company retrieved successfully", body = ApiResponse<CompanyDto>),
        (status = 404, description = "Company profile not set up"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_company(
    State(service): State<Arc<CompanyService>>,
) -> Result<Json<ApiResponse<CompanyDto>>> {
    let company = service.get_company().await?;
    Ok(Json(ApiResponse::success(Some(company.into()), None, None)))
}

/// Save the company profile
#[utoipa::path(
    put,
    path = "/api/admin/company",
    tag = "company",
    request_body = UpsertCompanyDto,
    responses(
        (status = 200, description = "Company saved successfully", body = ApiResponse<CompanyDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn upsert_company(
    State(service): State<Arc<CompanyService>>,
    AppJson(dto): AppJson<UpsertCompanyDto>,
) -> Result<Json<ApiResponse<CompanyDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.upsert_company(dto).await?;
    Ok(Json(ApiResponse::success(Some(company.into()), None, None)))
}

// ---- staff: contact persons ----

/// Add a contact person
#[utoipa::path(
    post,
    path = "/api/admin/company/persons",
    tag = "company",
    request_body = CreateContactPersonDto,
    responses(
        (status = 201, description = "Contact person created successfully", body = ApiResponse<ContactPersonDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Company profile not set up"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn create_person(
    State(service): State<Arc<CompanyService>>,
    AppJson(dto): AppJson<CreateContactPersonDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactPersonDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let person = service.create_person(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(person.into()), None, None)),
    ))
}

/// List all contact persons
#[utoipa::path(
    get,
    path = "/api/admin/company/persons",
    tag = "company",
    responses(
        (status = 200, description = "Contact persons retrieved successfully", body = ApiResponse<Vec<ContactPersonDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn list_persons(
    State(service): State<Arc<CompanyService>>,
) -> Result<Json<ApiResponse<Vec<ContactPersonDto>>>> {
    let persons = service.list_persons().await?;
    let total = persons.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(persons.into_iter().map(ContactPersonDto::from).collect()),
        None,
        Some(Meta { total }),
    )))
}

/// Get a contact person by ID
#[utoipa::path(
    get,
    path = "/api/admin/company/persons/{id}",
    tag = "company",
    params(("id" = Uuid, Path, description = "Contact person ID")),
    responses(
        (status = 200, description = "Contact person retrieved successfully", body = ApiResponse<ContactPersonDto>),
        (status = 404, description = "Contact person not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_person(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ContactPersonDto>>> {
    let person = service.get_person(id).await?;
    Ok(Json(ApiResponse::success(Some(person.into()), None, None)))
}

/// Update a contact person
#[utoipa::path(
    patch,
    path = "/api/admin/company/persons/{id}",
    tag = "company",
    params(("id" = Uuid, Path, description = "Contact person ID")),
    request_body = UpdateContactPersonDto,
    responses(
        (status = 200, description = "Contact person updated successfully", body = ApiResponse<ContactPersonDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Contact person not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn update_person(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateContactPersonDto>,
) -> Result<Json<ApiResponse<ContactPersonDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let person = service.update_person(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(person.into()), None, None)))
}

/// Delete a contact person
#[utoipa::path(
    delete,
    path = "/api/admin/company/persons/{id}",
    tag = "company",
    params(("id" = Uuid, Path, description = "Contact person ID")),
    responses(
        (status = 200, description = "Contact person deleted successfully", body = ApiResponse<DeletePersonResponseDto>),
        (status = 404, description = "Contact person not found"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_person(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeletePersonResponseDto>>> {
    service.delete_person(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeletePersonResponseDto { deleted: true }),
        Some("Contact person deleted successfully".to_string()),
        None,
    )))
}
