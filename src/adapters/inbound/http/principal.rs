use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;

use super::dto::{fail, Envelope};
use crate::domain::errors::MarketError;
use crate::domain::models::{Principal, Role};
use crate::domain::value_objects::RecordId;

/// Identity headers attached by the upstream gateway after it has
/// verified the caller's credentials
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

fn unauthenticated(reason: impl Into<String>) -> (StatusCode, Json<Envelope>) {
    fail(MarketError::Unauthenticated {
        reason: reason.into(),
    })
}

fn header<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, (StatusCode, Json<Envelope>)> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| unauthenticated(format!("missing {} header", name)))?
        .to_str()
        .map_err(|_| unauthenticated(format!("malformed {} header", name)))
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Envelope>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = header(parts, USER_ID_HEADER)?;
        let id = RecordId::new(id.to_string())
            .map_err(|e| unauthenticated(format!("malformed {} header: {}", USER_ID_HEADER, e)))?;

        let role = header(parts, USER_ROLE_HEADER)?;
        let role =
            Role::parse(role).ok_or_else(|| unauthenticated(format!("unknown role '{}'", role)))?;

        Ok(Principal { id, role })
    }
}
