//! Owner identity plumbing.
//!
//! Authentication itself happens upstream: the gateway validates the session
//! and forwards the user's id in the `x-user-id` header. This service trusts
//! that header and never sees credentials.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::errors::AppError;

pub const OWNER_HEADER: &str = "x-user-id";

/// The authenticated owner's id, inserted into request extensions by
/// [`require_owner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerId(pub Uuid);

/// Rejects requests that carry no well-formed owner identity before they
/// reach a handler. Applied to every resume route and the generation route.
pub async fn require_owner(mut request: Request, next: Next) -> Result<Response, AppError> {
    let owner = parse_owner_header(request.headers()).ok_or(AppError::Unauthorized)?;
    request.extensions_mut().insert(OwnerId(owner));
    Ok(next.run(request).await)
}

fn parse_owner_header(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(OWNER_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<Uuid>()
        .ok()
}

/// Extractor handing handlers the owner id established by the middleware.
pub struct Owner(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<OwnerId>()
            .map(|owner| Owner(owner.0))
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(OWNER_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_valid_uuid_header_parses() {
        let id = Uuid::new_v4();
        let headers = headers_with(&id.to_string());
        assert_eq!(parse_owner_header(&headers), Some(id));
    }

    #[test]
    fn test_missing_header_rejected() {
        assert_eq!(parse_owner_header(&HeaderMap::new()), None);
    }

    #[test]
    fn test_malformed_header_rejected() {
        assert_eq!(parse_owner_header(&headers_with("not-a-uuid")), None);
        assert_eq!(parse_owner_header(&headers_with("")), None);
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        let id = Uuid::new_v4();
        let headers = headers_with(&format!("  {id} "));
        assert_eq!(parse_owner_header(&headers), Some(id));
    }
}
