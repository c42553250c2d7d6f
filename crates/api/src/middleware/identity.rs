//! Anonymous-identity cookie middleware.
//!
//! Every request passing through here ends up with a durable opaque user
//! id: a valid `token` cookie is decoded, anything else (missing,
//! malformed, expired, bad signature) is silently replaced by a freshly
//! minted identity attached to the response as a new cookie. No failure
//! path surfaces to the caller.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{InvalidHeaderValue, COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use primetime_core::error::CoreError;
use primetime_core::types::UserId;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::AppState;

/// Name of the identity cookie.
pub const IDENTITY_COOKIE: &str = "token";

/// The anonymous identity attached to the request by [`issue_identity`].
///
/// Use as an extractor parameter in any handler mounted behind the
/// middleware:
///
/// ```ignore
/// async fn my_handler(identity: Identity) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = %identity.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    /// The opaque anonymous user id (from the token's `sub` claim).
    pub user_id: UserId,
}

/// Middleware that guarantees a request identity.
///
/// Reissuing resets the user's vote-dedup window; that is accepted
/// behaviour for an anonymous credential, not something to prevent here.
pub async fn issue_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = cookie_value(request.headers(), IDENTITY_COOKIE)
        .and_then(|token| jwt::validate_identity_token(token, &state.config.jwt).ok());

    let (user_id, fresh_token) = match existing {
        Some(claims) => (claims.sub, None),
        None => {
            let user_id = jwt::mint_user_id();
            match jwt::generate_identity_token(&user_id, &state.config.jwt) {
                Ok(token) => (user_id, Some(token)),
                Err(err) => {
                    // Degrade to an uncookied identity; the client gets a
                    // new one on its next request.
                    tracing::warn!(error = %err, "Failed to sign identity token");
                    (user_id, None)
                }
            }
        }
    };

    request.extensions_mut().insert(Identity { user_id });
    let mut response = next.run(request).await;

    if let Some(token) = fresh_token {
        let max_age_secs = state.config.jwt.identity_expiry_days * 24 * 60 * 60;
        match identity_cookie(&token, max_age_secs) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(err) => tracing::warn!(error = %err, "Failed to build identity cookie"),
        }
    }

    response
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            AppError::Core(CoreError::Internal(
                "identity middleware not installed on this route".into(),
            ))
        })
    }
}

/// Build the `Set-Cookie` header for a fresh identity token.
fn identity_cookie(token: &str, max_age_secs: i64) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{IDENTITY_COOKIE}={token}; Max-Age={max_age_secs}; Path=/; HttpOnly; SameSite=Lax"
    ))
}

/// Extract a named cookie's value from the `Cookie` header.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn finds_named_cookie_among_several() {
        let headers = headers_with_cookie("session=abc; token=xyz; theme=dark");
        assert_eq!(cookie_value(&headers, "token"), Some("xyz"));
        assert_eq!(cookie_value(&headers, "theme"), Some("dark"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(cookie_value(&headers, "token"), None);
    }

    #[test]
    fn jwt_value_with_padding_survives_parsing() {
        // JWTs contain '=' only in rare padding cases, but the parser
        // must split on the first '=' regardless.
        let headers = headers_with_cookie("token=aaa.bbb.ccc=");
        assert_eq!(cookie_value(&headers, "token"), Some("aaa.bbb.ccc="));
    }

    #[test]
    fn identity_cookie_sets_http_only_and_max_age() {
        let value = identity_cookie("sometoken", 2_592_000).unwrap();
        let s = value.to_str().unwrap();
        assert!(s.starts_with("token=sometoken;"));
        assert!(s.contains("Max-Age=2592000"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("SameSite=Lax"));
        assert!(s.contains("Path=/"));
    }
}
