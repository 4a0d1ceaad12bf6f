//! Query and path extractors: pagination bounds and positive integer ids.

use crate::error::{AppError, FieldError};
use crate::service::Page;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use std::collections::HashMap;

const NOT_INTEGER: (&str, &str) = ("value is not a valid integer", "type_error.integer");

/// `?offset=&limit=`, both optional and `>= 0`. All bad parameters are reported together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListParams(pub Page);

/// `{id}` path segment, a positive integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityId(pub i64);

fn parse_bound(name: &str, raw: Option<&String>, errors: &mut Vec<FieldError>) -> Option<u64> {
    let raw = raw?;
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Some(n as u64),
        Ok(_) => {
            errors.push(FieldError::new(
                &["query", name],
                "ensure this value is greater than or equal to 0",
                "value_error.number.not_ge",
            ));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(&["query", name], NOT_INTEGER.0, NOT_INTEGER.1));
            None
        }
    }
}

impl ListParams {
    pub fn from_pairs(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut errors = Vec::new();
        let offset = parse_bound("offset", params.get("offset"), &mut errors);
        let limit = parse_bound("limit", params.get("limit"), &mut errors);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(ListParams(Page { offset, limit }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::Validation(vec![FieldError::new(
                    &["query"],
                    e.body_text(),
                    "value_error.query",
                )])
            })?;
        Self::from_pairs(&params)
    }
}

impl EntityId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let n: i64 = raw.trim().parse().map_err(|_| {
            AppError::Validation(vec![FieldError::new(
                &["path", "id"],
                NOT_INTEGER.0,
                NOT_INTEGER.1,
            )])
        })?;
        if n <= 0 {
            return Err(AppError::Validation(vec![FieldError::new(
                &["path", "id"],
                "ensure this value is greater than 0",
                "value_error.number.not_gt",
            )]));
        }
        Ok(EntityId(n))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::Validation(vec![FieldError::new(
                    &["path", "id"],
                    e.body_text(),
                    "value_error.path",
                )])
            })?;
        Self::parse(&raw)
    }
}
