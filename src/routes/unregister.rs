use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::StudentEmail;
use crate::registry::{ActivityRegistry, UnregisterError};
use crate::routes::helpers::{Confirmation, ErrorDetail};

/// Web query parameters
#[derive(serde::Deserialize)]
pub struct UnregisterParameters {
    email: String,
}

impl ResponseError for UnregisterError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownActivity => StatusCode::NOT_FOUND,
            Self::NotRegistered => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}

/// Unregistration handler
#[tracing::instrument(
    name = "Unregistering a student from an activity",
    skip(parameters, registry),
    fields(
        activity = %activity_name,
        student_email = %parameters.email
    )
)]
pub async fn unregister(
    activity_name: web::Path<String>,
    parameters: web::Query<UnregisterParameters>,
    registry: web::Data<ActivityRegistry>,
) -> Result<HttpResponse, UnregisterError> {
    // Parse the student email before touching the roster
    let email = match StudentEmail::parse(parameters.into_inner().email) {
        Ok(email) => email,
        Err(e) => return Ok(HttpResponse::BadRequest().json(ErrorDetail { detail: e })),
    };

    registry.unregister(&activity_name, &email)?;

    Ok(HttpResponse::Ok().json(Confirmation {
        message: format!("Unregistered {} from {}", email.as_ref(), activity_name),
    }))
}
