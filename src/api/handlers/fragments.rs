// src/api/handlers/fragments.rs
//! Current container markup, polled by the pages' own refresh script.

use actix_web::{web, HttpRequest, HttpResponse, Result};

use super::pages::{configuration_error, open_detail};
use crate::api::AppState;

/// GET /fragments/expressions
pub async fn list_fragment(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(state.list.container().snapshot().into_string()))
}

/// GET /fragments/expression?id=...
pub async fn detail_fragment(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    match open_detail(&state, &req).await {
        Ok((_, container)) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(container.snapshot().into_string())),
        Err(e) => Ok(configuration_error(&e)),
    }
}
