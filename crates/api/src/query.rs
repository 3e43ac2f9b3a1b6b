//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with [`shotpilot_db::clamp_limit`] and
/// [`shotpilot_db::clamp_offset`] before they reach a query.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// `(limit, offset)` after clamping.
    pub fn clamped(&self) -> (i64, i64) {
        (
            shotpilot_db::clamp_limit(self.limit),
            shotpilot_db::clamp_offset(self.offset),
        )
    }
}
