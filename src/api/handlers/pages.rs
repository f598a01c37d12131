// src/api/handlers/pages.rs
use actix_web::{http::header, web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use crate::api::{assets, AppState};
use crate::errors::ConfigurationError;
use crate::render::escape;
use crate::synchronizer::DetailSynchronizer;
use crate::view::{AlertBuffer, Container, InputField};
use std::sync::Arc;

const HTML: &str = "text/html; charset=utf-8";

#[derive(Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub expression: String,
}

/// GET / - expression list and submission form
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(match list_page(&state, None, "") {
        Some(body) => HttpResponse::Ok().content_type(HTML).body(body),
        None => missing_template("index.html"),
    })
}

/// POST /submit - hand the form input to the list view
pub async fn submit(
    state: web::Data<AppState>,
    form: web::Form<SubmitForm>,
) -> Result<HttpResponse> {
    let alerts = AlertBuffer::default();
    let session = state
        .list
        .with_input(InputField::default(), Arc::new(alerts.clone()));
    session.input().set(form.into_inner().expression);

    match session.submit().await {
        Ok(()) => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/"))
            .finish()),
        Err(e) => {
            log::warn!("Submission rejected: {}", e);
            // Only this response carries the alert and the preserved input.
            let input = session.input().value();
            Ok(match list_page(&state, alerts.take(), &input) {
                Some(body) => HttpResponse::BadGateway().content_type(HTML).body(body),
                None => missing_template("index.html"),
            })
        }
    }
}

/// GET /expression.html?id=... - detail page of one expression
pub async fn expression_page(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let (id, container) = match open_detail(&state, &req).await {
        Ok(opened) => opened,
        Err(e) => return Ok(configuration_error(&e)),
    };

    let Some(template) = assets::page("expression.html") else {
        return Ok(missing_template("expression.html"));
    };
    let id = escape(&id);
    let details = container.snapshot();
    let refresh_ms = state.config.detail_interval.as_millis().to_string();

    let body = assets::render_template(
        &template,
        &[
            ("id", &id),
            ("details", details.as_str()),
            ("refresh_ms", &refresh_ms),
        ],
    );
    Ok(HttpResponse::Ok().content_type(HTML).body(body))
}

/// Mounts (or reuses) the detail view named by the request's `id` parameter.
pub(super) async fn open_detail(
    state: &AppState,
    req: &HttpRequest,
) -> std::result::Result<(String, Container), ConfigurationError> {
    let location = req.uri().to_string();
    let sync = DetailSynchronizer::from_location(state.api.clone(), Container::new(), &location)?;
    let id = sync.id().to_string();
    let container = state.details.open(sync).await;
    Ok((id, container))
}

pub(super) fn configuration_error(e: &ConfigurationError) -> HttpResponse {
    log::warn!("Refusing to open detail view: {}", e);
    HttpResponse::BadRequest().content_type(HTML).body(format!(
        "<h1>Configuration error</h1><p>{}</p><a href=\"/\">All expressions</a>",
        escape(&e.to_string())
    ))
}

fn list_page(state: &AppState, alert: Option<String>, input: &str) -> Option<String> {
    let template = assets::page("index.html")?;
    let alert = alert.map(|m| escape(&m)).unwrap_or_default();
    let input = escape(input);
    let expressions = state.list.container().snapshot();
    let refresh_ms = state.config.list_interval.as_millis().to_string();

    Some(assets::render_template(
        &template,
        &[
            ("alert", &alert),
            ("input", &input),
            ("expressions", expressions.as_str()),
            ("refresh_ms", &refresh_ms),
        ],
    ))
}

fn missing_template(name: &str) -> HttpResponse {
    log::error!("Embedded page '{}' is missing", name);
    HttpResponse::InternalServerError().body("Page template missing")
}
