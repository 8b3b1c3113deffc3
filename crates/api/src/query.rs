//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

use dayroom_core::dates;
use dayroom_core::types::Category;

use crate::error::AppError;

/// Query parameters for endpoints that filter by task category (`?category=`).
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<Category>,
}

/// Date-range parameters (`?start=&end=`), both required.
///
/// Dates arrive as raw strings so a malformed value produces the standard
/// JSON error body rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RangeParams {
    /// Parse and validate the range.
    pub fn resolve(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        let (Some(start), Some(end)) = (&self.start, &self.end) else {
            return Err(AppError::BadRequest(
                "start and end query parameters are required".into(),
            ));
        };
        let start = dates::parse_date(start)?;
        let end = dates::parse_date(end)?;
        if start > end {
            return Err(AppError::BadRequest("start must not be after end".into()));
        }
        Ok((start, end))
    }
}
