use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use crate::errors::{Error, Result};

fn bearer_token(req: &Request<Body>) -> Result<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| Error::Unauthorized("missing bearer token".into()))
}

/// Middleware that requires a valid session token.
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response> {
    let token = bearer_token(&req)?;
    let session = super::session::validate_session(token).await?;

    // Hand the resolved identity to handlers through request extensions.
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

/// Middleware that additionally requires the admin role.
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response> {
    let token = bearer_token(&req)?;
    let session = super::session::validate_session(token).await?;

    if session.role != "admin" {
        return Err(Error::Forbidden);
    }

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
