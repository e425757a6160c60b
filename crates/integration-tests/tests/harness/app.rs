//! Routes that fail in every way a service can

use std::str::FromStr;
use std::sync::Arc;

use axum::{Json, Router, extract::Path, extract::State, routing::get};
use serde_json::{Value, json};
use svcerr::{
    BadRequest, HelpLink, Help, RetryInfo, ServiceError, StatusError, StatusKind, Translator, internal_err,
    invalid_args, not_found, resource_exhausted, wrap,
};

/// Build the test application
///
/// Routes under `/policy` translate through `translator`; every other route
/// relies on the `?` conversion into [`ServiceError`].
pub fn router(translator: Translator) -> Router {
    Router::new()
        .route("/users/{id}", get(user))
        .route("/kinds/{kind}", get(kind))
        .route("/detailed", get(detailed))
        .route("/throttled", get(throttled))
        .route("/plain", get(plain))
        .route("/wrapped", get(wrapped))
        .route("/grpc", get(grpc))
        .route("/policy/internal", get(policy_internal))
        .route("/policy/detailed", get(policy_detailed))
        .with_state(Arc::new(translator))
}

async fn user(Path(id): Path<u32>) -> Result<Json<Value>, ServiceError> {
    if id == 1 {
        return Ok(Json(json!({ "id": 1, "name": "alice" })));
    }
    Err(not_found(format!("user {id} not found"), []).into())
}

async fn kind(Path(name): Path<String>) -> Result<&'static str, ServiceError> {
    let kind = StatusKind::from_str(&name).map_err(|_| invalid_args(format!("unknown kind {name}"), []))?;
    if kind == StatusKind::Ok {
        return Ok("ok");
    }
    Err(StatusError::new(kind, name).into())
}

async fn detailed() -> Result<(), ServiceError> {
    Err(invalid_args(
        "Additional Message",
        [
            BadRequest::with_violation("Field Name", "mandatory field not provided").into(),
            Help::new(vec![HelpLink::new("field reference", "https://example.com/fields")]).into(),
        ],
    )
    .into())
}

async fn throttled() -> Result<(), ServiceError> {
    Err(resource_exhausted(
        "quota exceeded",
        [RetryInfo {
            retry_delay: Some(std::time::Duration::MAX),
        }
        .into()],
    )
    .into())
}

async fn plain() -> Result<(), ServiceError> {
    std::fs::read("/nonexistent/svcerr/plain")?;
    Ok(())
}

async fn wrapped() -> Result<(), ServiceError> {
    Err(wrap("Outer", not_found("Not Found", [])).into())
}

async fn grpc() -> Result<(), ServiceError> {
    Err(tonic::Status::unavailable("upstream down").into())
}

async fn policy_internal(State(translator): State<Arc<Translator>>) -> ServiceError {
    translator.translate(&internal_err("connection string leaked", []))
}

async fn policy_detailed(State(translator): State<Arc<Translator>>) -> ServiceError {
    translator.translate(&invalid_args(
        "bad input",
        [BadRequest::with_violation("name", "required").into()],
    ))
}
