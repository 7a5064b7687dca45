use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use contracts::system::auth::AuthSession;

use crate::errors::Error;

/// Extractor for the identity resolved by the auth middleware.
/// Usage in handlers: `async fn handler(CurrentUser(session): CurrentUser) -> ...`
pub struct CurrentUser(pub AuthSession);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSession>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| Error::Unauthorized("authentication required".into()))
    }
}
