#![allow(dead_code)]
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
use async_trait::async_trait;
use service::errors::ServiceError;
use service::preference::domain::{Member, Preference, PreferenceKind};
use service::preference::repository::{mock::MockPreferenceRepository, PreferenceRepository};
use tower::ServiceExt;

use server::routes::{self, auth};

pub const SECRET: &str = "test-secret";

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

/// Router backed by the in-memory repository, plus a handle to seed members.
pub fn mock_app() -> (Router, Arc<MockPreferenceRepository>) {
    let repo = Arc::new(MockPreferenceRepository::default());
    let state = auth::ServerState::new(repo.clone(), auth::ServerAuthConfig { jwt_secret: SECRET.into() });
    (routes::build_router(state, cors()), repo)
}

/// Repository whose every call fails the way a dropped Postgres connection would.
pub struct UnavailableRepository;

#[async_trait]
impl PreferenceRepository for UnavailableRepository {
    async fn find_member_by_username(&self, _username: &str) -> Result<Option<Member>, ServiceError> {
        Err(ServiceError::Db("connection refused (os error 111)".into()))
    }

    async fn find_preference(&self, _kind: PreferenceKind, _member_id: uuid::Uuid) -> Result<Option<Preference>, ServiceError> {
        Err(ServiceError::Db("connection refused (os error 111)".into()))
    }

    async fn save_preference(&self, _record: Preference) -> Result<Preference, ServiceError> {
        Err(ServiceError::Db("connection refused (os error 111)".into()))
    }
}

/// Router whose storage is down.
pub fn unavailable_app() -> Router {
    let state = auth::ServerState::new(Arc::new(UnavailableRepository), auth::ServerAuthConfig { jwt_secret: SECRET.into() });
    routes::build_router(state, cors())
}

pub fn token_for(username: &str) -> String {
    token_with(username, get_current_timestamp() as usize + 3600, SECRET)
}

pub fn token_with(username: &str, exp: usize, secret: &str) -> String {
    let claims = auth::Claims { sub: username.into(), exp, iat: Some(get_current_timestamp() as usize) };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).expect("encode token")
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut b = Request::builder().method("GET").uri(uri);
    if let Some(t) = token { b = b.header("authorization", format!("Bearer {}", t)); }
    b.body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut b = Request::builder().method("POST").uri(uri).header("content-type", "application/json");
    if let Some(t) = token { b = b.header("authorization", format!("Bearer {}", t)); }
    b.body(Body::from(serde_json::to_vec(&body).expect("json"))).expect("request")
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<Response<Body>> {
    Ok(app.clone().oneshot(req).await?)
}

pub async fn json_body(resp: Response<Body>) -> anyhow::Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
