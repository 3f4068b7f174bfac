//! REST API route definitions - OpenAPI and axum routing.
//!
//! Routes orchestrate but don't contain business logic:
//! - Delegate to `handlers::*` for request processing
//! - Handlers call `domain::service::Service` for business operations
//! - Use `dto::*` types for request/response serialization

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;

use super::{dto, handlers};
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts Service",
        description = "Contact management CRUD API",
    ),
    paths(
        handlers::create_contact,
        handlers::get_contact_by_email,
        handlers::search_contacts,
        handlers::get_contacts_by_phone,
        handlers::get_contacts_by_address,
        handlers::edit_contact,
        handlers::delete_contact,
    ),
    components(schemas(
        dto::CreateContactReq,
        dto::PhoneReq,
        dto::AddressReq,
        dto::ContactDto,
        dto::PhoneDto,
        dto::AddressDto,
        dto::DocumentTypeDto,
        dto::ContactEnvelope,
        dto::ContactListEnvelope,
        dto::MessageEnvelope,
        dto::ErrorEnvelope,
    )),
    tags((name = "contact", description = "Contact management endpoints"))
)]
pub struct ApiDoc;

/// Build the module router with all contact routes and the health probes.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/contact", post(handlers::create_contact))
        .route("/contact/email/{email}", get(handlers::get_contact_by_email))
        .route("/contact/search", get(handlers::search_contacts))
        .route("/contact/phone/{phone}", get(handlers::get_contacts_by_phone))
        .route(
            "/contact/address/{address}",
            get(handlers::get_contacts_by_address),
        )
        .route("/contact/edit/{contact_id}", post(handlers::edit_contact))
        .route(
            "/contact/delete/{contact_id}",
            post(handlers::delete_contact),
        )
        .route("/health", get(handlers::health_check))
        .route("/healthz", get(|| async { "ok" }))
        .route("/api-docs/openapi.json", get(serve_openapi))
        .with_state(service)
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
