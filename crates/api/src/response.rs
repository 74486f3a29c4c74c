//! Response envelope for successful API calls.
//!
//! Every success body is `{ "data": ... }`. Errors use the
//! `{ "error": ..., "code": ... }` shape produced by [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: todo }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
