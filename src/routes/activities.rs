use actix_web::{web, HttpResponse};

use crate::registry::ActivityRegistry;

/// Activities listing handler
#[tracing::instrument(name = "Listing all activities", skip(registry))]
pub async fn activities(registry: web::Data<ActivityRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(registry.snapshot())
}
