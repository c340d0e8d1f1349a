use axum::{extract::{Request, State}, http::{header, StatusCode}, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use service::preference::{repository::PreferenceRepository, PreferenceService};

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub auth: ServerAuthConfig,
    pub preferences: Arc<PreferenceService<dyn PreferenceRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn PreferenceRepository>, auth: ServerAuthConfig) -> Self {
        Self { auth, preferences: Arc::new(PreferenceService::new(repo)) }
    }
}

/// Username of the authenticated caller, set by [`require_identity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub String);

/// Claims issued by the auth service; `sub` carries the username.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: Option<usize>,
}

const AUTH_COOKIE: &str = "auth_token";

fn bearer_token(req: &Request) -> Result<Option<String>, StatusCode> {
    let path = req.uri().path();
    if let Some(h) = req.headers().get(header::AUTHORIZATION) {
        let h = h.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;
        return match h.strip_prefix("Bearer ") {
            Some(t) if !t.trim().is_empty() => Ok(Some(t.trim().to_string())),
            _ => {
                tracing::warn!(%path, "invalid Authorization format (expect Bearer)");
                Err(StatusCode::UNAUTHORIZED)
            }
        };
    }
    // Cookie 回退：浏览器端可能只携带 auth_token
    let jar = CookieJar::from_headers(req.headers());
    Ok(jar.get(AUTH_COOKIE).map(|c| c.value().to_string()).filter(|t| !t.is_empty()))
}

/// Route middleware: verify the bearer JWT and attach [`Identity`] to the request.
/// Missing token → 400; invalid or expired → 401.
pub async fn require_identity(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = req.uri().path().to_string();
    let Some(token) = bearer_token(&req)? else {
        tracing::warn!(%path, "missing Authorization header and auth_token cookie");
        return Err(StatusCode::BAD_REQUEST);
    };

    let key = DecodingKey::from_secret(state.auth.jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    match decode::<Claims>(&token, &key, &validation) {
        Ok(data) if !data.claims.sub.trim().is_empty() => {
            req.extensions_mut().insert(Identity(data.claims.sub));
            Ok(next.run(req).await)
        }
        Ok(_) => {
            tracing::warn!(%path, "token has empty subject");
            Err(StatusCode::UNAUTHORIZED)
        }
        Err(e) => {
            tracing::warn!(%path, err = %e, "token validation failed");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
