use actix_web::http::header::{ContentType, LOCATION};
use actix_web::HttpResponse;

/// Home handler
pub async fn home() -> HttpResponse {
    // Send visitors to the front-end
    HttpResponse::TemporaryRedirect()
        .insert_header((LOCATION, "/static/index.html"))
        .finish()
}

/// Front-end page handler
pub async fn index_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("index.html"))
}

/// Front-end stylesheet handler
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("styles.css"))
}

/// Front-end script handler
pub async fn app_script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(include_str!("app.js"))
}
