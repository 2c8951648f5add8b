//! Pagination extractor
//!
//! Extracts the 1-based page number from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// 1-based page number; may arrive as any string
    #[serde(default)]
    pub page: Option<String>,
}

/// Validated 1-based page number
#[derive(Debug, Clone, Copy)]
pub struct Page(pub i64);

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<PageParams> for Page {
    type Error = ApiError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let Some(raw) = params.page else {
            return Ok(Self::default());
        };

        let page = raw
            .parse::<i64>()
            .map_err(|_| ApiError::invalid_query("'page' must be a positive integer"))?;
        if page < 1 {
            return Err(ApiError::invalid_query("'page' must be a positive integer"));
        }

        Ok(Self(page))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Page::try_from(params)
    }
}
