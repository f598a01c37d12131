// src/api/handlers/static_files.rs
use actix_web::{HttpRequest, HttpResponse, Responder};
use std::borrow::Cow;
use crate::api::assets::StaticAssets;

pub async fn static_file_handler(req: HttpRequest) -> impl Responder {
    // trim leading '/'
    let path = req.path().trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}
