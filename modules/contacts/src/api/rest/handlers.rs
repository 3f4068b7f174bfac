//! Axum handlers for the contact endpoints.
//!
//! Handlers orchestrate but don't contain business logic: they convert DTOs,
//! call the domain service and wrap the result in the response envelope.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::info;
use uuid::Uuid;

use super::dto::{
    ContactDto, ContactEnvelope, ContactListEnvelope, CreateContactReq, ErrorEnvelope,
    MessageEnvelope, SearchQuery,
};
use super::error::ApiResult;
use crate::domain::service::Service;

/// Create a new contact with its phones and addresses.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = CreateContactReq,
    responses(
        (status = 201, description = "Contact created successfully", body = ContactEnvelope),
        (status = 400, description = "Invalid input", body = ErrorEnvelope)
    )
)]
pub async fn create_contact(
    State(svc): State<Arc<Service>>,
    Json(req): Json<CreateContactReq>,
) -> ApiResult<(StatusCode, Json<ContactEnvelope>)> {
    let aggregate = svc.create_contact(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ContactEnvelope {
            data: aggregate.into(),
        }),
    ))
}

/// Get a contact by email.
#[utoipa::path(
    get,
    path = "/contact/email/{email}",
    tag = "contact",
    params(("email" = String, Path, description = "Email address of the contact")),
    responses(
        (status = 200, description = "Contact found", body = ContactEnvelope),
        (status = 404, description = "Contact not found", body = ErrorEnvelope)
    )
)]
pub async fn get_contact_by_email(
    State(svc): State<Arc<Service>>,
    Path(email): Path<String>,
) -> ApiResult<Json<ContactEnvelope>> {
    info!(email = %email, "Getting contact by email");

    let aggregate = svc.get_contact_by_email(&email).await?;
    Ok(Json(ContactEnvelope {
        data: aggregate.into(),
    }))
}

/// Search contacts by personal data substring.
#[utoipa::path(
    get,
    path = "/contact/search",
    tag = "contact",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching contacts", body = Vec<ContactDto>)
    )
)]
pub async fn search_contacts(
    State(svc): State<Arc<Service>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<ContactDto>>> {
    info!(term = %query.search_term, "Searching contacts by personal data");

    let aggregates = svc.search_by_personal_data(&query.search_term).await?;
    Ok(Json(aggregates.into_iter().map(Into::into).collect()))
}

/// Get contacts by phone number.
#[utoipa::path(
    get,
    path = "/contact/phone/{phone}",
    tag = "contact",
    params(("phone" = String, Path, description = "Phone number of the contact")),
    responses(
        (status = 200, description = "Contacts found", body = ContactListEnvelope),
        (status = 404, description = "Contact not found", body = ErrorEnvelope)
    )
)]
pub async fn get_contacts_by_phone(
    State(svc): State<Arc<Service>>,
    Path(phone): Path<String>,
) -> ApiResult<Json<ContactListEnvelope>> {
    info!(phone = %phone, "Getting contacts by phone number");

    let aggregates = svc.search_by_phone_number(&phone).await?;
    Ok(Json(ContactListEnvelope {
        data: aggregates.into_iter().map(Into::into).collect(),
    }))
}

/// Get contacts by address substring.
#[utoipa::path(
    get,
    path = "/contact/address/{address}",
    tag = "contact",
    params(("address" = String, Path, description = "Address of the contact")),
    responses(
        (status = 200, description = "Contacts found", body = ContactListEnvelope),
        (status = 404, description = "Contact not found", body = ErrorEnvelope)
    )
)]
pub async fn get_contacts_by_address(
    State(svc): State<Arc<Service>>,
    Path(address): Path<String>,
) -> ApiResult<Json<ContactListEnvelope>> {
    info!(address = %address, "Getting contacts by address");

    let aggregates = svc.search_by_address(&address).await?;
    Ok(Json(ContactListEnvelope {
        data: aggregates.into_iter().map(Into::into).collect(),
    }))
}

/// Edit a contact. Child rows are overwritten positionally.
#[utoipa::path(
    post,
    path = "/contact/edit/{contact_id}",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "ID of the contact")),
    request_body = CreateContactReq,
    responses(
        (status = 200, description = "Contact edited successfully", body = ContactEnvelope),
        (status = 404, description = "Contact not found", body = ErrorEnvelope)
    )
)]
pub async fn edit_contact(
    State(svc): State<Arc<Service>>,
    Path(contact_id): Path<Uuid>,
    Json(req): Json<CreateContactReq>,
) -> ApiResult<Json<ContactEnvelope>> {
    info!(contact_id = %contact_id, "Editing contact");

    let aggregate = svc.edit_contact(contact_id, req.into()).await?;
    Ok(Json(ContactEnvelope {
        data: aggregate.into(),
    }))
}

/// Delete a contact with all of its phones and addresses.
#[utoipa::path(
    post,
    path = "/contact/delete/{contact_id}",
    tag = "contact",
    params(("contact_id" = Uuid, Path, description = "ID of the contact")),
    responses(
        (status = 200, description = "Contact deleted successfully", body = MessageEnvelope),
        (status = 404, description = "Contact not found", body = ErrorEnvelope)
    )
)]
pub async fn delete_contact(
    State(svc): State<Arc<Service>>,
    Path(contact_id): Path<Uuid>,
) -> ApiResult<Json<MessageEnvelope>> {
    info!(contact_id = %contact_id, "Deleting contact");

    svc.delete_contact(contact_id).await?;
    Ok(Json(MessageEnvelope {
        message: "Contact deleted successfully".to_owned(),
    }))
}

/// Liveness probe.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
