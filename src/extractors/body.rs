//! JSON body extractor that ignores the content type and reports decode failures as 422.

use crate::error::{AppError, FieldError};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

#[derive(Debug)]
pub struct JsonBody(pub Value);

impl JsonBody {
    pub fn parse(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(bytes).map(JsonBody).map_err(|e| {
            AppError::Validation(vec![FieldError::new(
                &["body"],
                e.to_string(),
                "value_error.jsondecode",
            )])
        })
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Self::parse(&bytes).map_err(IntoResponse::into_response)
    }
}
