//! Caller identity. Verifies the auth provider's session token.
//!
//! The token arrives either as `Authorization: Bearer <jwt>` or in the `__session`
//! cookie set by the provider's frontend SDK. Verification failures are logged and
//! treated as "no identity"; the endpoint decides whether that is fatal.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::AppState;

const SESSION_COOKIE: &str = "__session";

/// Opaque handle for an authenticated user: the provider's user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: String,
}

/// Resolves a raw session token into an identity.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Option<UserIdentity>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub iss: Option<String>,
}

/// Verifies provider-issued session JWTs.
pub struct JwtIdentityResolver {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityResolver {
    pub fn new(key: DecodingKey, algorithm: Algorithm, issuer: Option<&str>) -> Self {
        let mut validation = Validation::new(algorithm);
        // Session tokens carry `azp`, not `aud`.
        validation.validate_aud = false;
        if let Some(iss) = issuer {
            validation.set_issuer(&[iss]);
        }
        Self { key, validation }
    }

    /// Production constructor: RS256 with the provider's PEM public key.
    pub fn from_rsa_pem(pem: &str, issuer: Option<&str>) -> anyhow::Result<Self> {
        let key = DecodingKey::from_rsa_pem(pem.as_bytes())?;
        Ok(Self::new(key, Algorithm::RS256, issuer))
    }
}

impl IdentityResolver for JwtIdentityResolver {
    fn resolve(&self, token: &str) -> Option<UserIdentity> {
        match decode::<SessionClaims>(token, &self.key, &self.validation) {
            Ok(data) if !data.claims.sub.is_empty() => Some(UserIdentity {
                user_id: data.claims.sub,
            }),
            Ok(_) => None,
            Err(e) => {
                debug!("Rejected session token: {e}");
                None
            }
        }
    }
}

/// Extracts the session token from the bearer header, falling back to the session cookie.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .find(|t| !t.is_empty())
}

/// The caller's identity, or `None` when no valid session accompanies the request.
pub struct CallerIdentity(pub Option<UserIdentity>);

#[async_trait]
impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = session_token(&parts.headers).and_then(|t| state.identity.resolve(t));
        Ok(CallerIdentity(identity))
    }
}
