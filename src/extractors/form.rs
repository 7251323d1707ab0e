//! Form fields from the query string and, for `application/x-www-form-urlencoded` bodies, the body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{Form, FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, Method},
};
use std::collections::HashMap;

/// Message returned for form bodies that cannot be read.
pub const UNPROCESSABLE_FORM: &str = "Unable to process request";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form fields by name. Body values come before query values and the first value of a
/// repeated key wins. A request without a form body is not an error; it just has fewer fields.
/// An unreadable form is a 400, never a 415/422.
#[derive(Clone, Debug, Default)]
pub struct FormFields(pub HashMap<String, String>);

impl FormFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// All `names` must be present (empty values count as present); otherwise a 400 with `message`.
    pub fn require<const N: usize>(&self, names: [&str; N], message: &str) -> Result<[String; N], AppError> {
        let mut out: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, name) in out.iter_mut().zip(names) {
            *slot = self
                .get(name)
                .ok_or_else(|| AppError::BadRequest(message.to_string()))?
                .to_string();
        }
        Ok(out)
    }

    fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = HashMap::new();
        for (name, value) in pairs {
            fields.entry(name).or_insert(value);
        }
        FormFields(fields)
    }
}

fn rejected(e: impl std::fmt::Display) -> AppError {
    tracing::debug!(error = %e, "form rejected");
    AppError::BadRequest(UNPROCESSABLE_FORM.into())
}

fn has_form_body(req: &Request) -> bool {
    if req.method() == Method::GET || req.method() == Method::HEAD {
        return false;
    }
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Vec<(String, String)>>::try_from_uri(req.uri()).map_err(rejected)?;
        let body = if has_form_body(&req) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(rejected)?;
            pairs
        } else {
            Vec::new()
        };
        Ok(FormFields::from_pairs(body.into_iter().chain(query)))
    }
}
