//! HTTP request handlers for the link checker API

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::error::CheckError;
use crate::model::{CheckRequest, CheckResponse};
use crate::service::{check, AppState};

/// Expands a link and assesses where it leads
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://bit.ly/3xyz"
/// }
/// ```
///
/// # Response
///
/// - **200 OK** - Check completed, see [`CheckResponse`]
/// - **400 Bad Request** - `{"error": "..."}` for invalid input, including a
///   malformed JSON body, or when the link could not be followed
pub async fn unshorten(
    State(state): State<AppState>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, CheckError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "rejected request body");
            return Err(CheckError::Validation);
        }
    };

    check(&state.resolver, request).await.map(Json)
}
