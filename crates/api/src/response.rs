//! Response envelope for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` envelope wrapping every successful payload.
///
/// Handlers return this instead of ad-hoc `serde_json::json!` maps so the
/// shape stays consistent and type-checked across endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
