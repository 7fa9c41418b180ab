/// Confirmation message returned by roster-changing endpoints
#[derive(serde::Serialize)]
pub struct Confirmation {
    pub message: String,
}

/// Error detail returned by failing endpoints
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
