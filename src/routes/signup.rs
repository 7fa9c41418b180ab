use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::StudentEmail;
use crate::registry::{ActivityRegistry, SignupError};
use crate::routes::helpers::{Confirmation, ErrorDetail};

/// Web query parameters
#[derive(serde::Deserialize)]
pub struct SignupParameters {
    email: String,
}

impl ResponseError for SignupError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownActivity => StatusCode::NOT_FOUND,
            Self::AlreadyRegistered => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}

/// Signup handler
#[tracing::instrument(
    name = "Signing up a student for an activity",
    skip(parameters, registry),
    fields(
        activity = %activity_name,
        student_email = %parameters.email
    )
)]
pub async fn signup(
    activity_name: web::Path<String>,
    parameters: web::Query<SignupParameters>,
    registry: web::Data<ActivityRegistry>,
) -> Result<HttpResponse, SignupError> {
    // Parse the student email before touching the roster
    let email = match StudentEmail::parse(parameters.into_inner().email) {
        Ok(email) => email,
        Err(e) => return Ok(HttpResponse::BadRequest().json(ErrorDetail { detail: e })),
    };

    registry.signup(&activity_name, &email)?;

    Ok(HttpResponse::Ok().json(Confirmation {
        message: format!("Signed up {} for {}", email.as_ref(), activity_name),
    }))
}
