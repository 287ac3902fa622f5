//! HTTP surface of the roster service.
//!
//! Thin translation layer: handlers take the shared lock, call into
//! [`roster_core::RosterService`], and dress results in the wire
//! shapes clients rely on. Success bodies carry a `message` field,
//! refusals carry a `detail` field.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, post},
    Json, Router,
};
use log::warn;
use roster_core::{ActivityMap, RosterError};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::state::SharedRoster;

/// State shared with all routes.
#[derive(Clone)]
pub struct AppState {
    pub roster: SharedRoster,
}

/// Builds the full application router: the JSON API, the health probe,
/// and the static signup page under `/static`.
pub fn router(state: AppState, static_dir: impl AsRef<std::path::Path>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", delete(unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The landing page lives in the static bundle; send browsers there.
async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn health_check() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct ParticipantQuery {
    email: String,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// [`RosterError`] dressed for the wire: 404 for unknown activities,
/// 400 for enrollment rule violations, with the detail strings clients
/// have always matched on.
struct ApiError(RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            RosterError::ActivityNotFound(_) => (StatusCode::NOT_FOUND, "Activity not found"),
            RosterError::AlreadyEnrolled { .. } => (
                StatusCode::BAD_REQUEST,
                "Student is already signed up for this activity",
            ),
            RosterError::NotEnrolled { .. } => (
                StatusCode::BAD_REQUEST,
                "Student is not signed up for this activity",
            ),
            RosterError::CapacityExceeded { .. } => {
                (StatusCode::BAD_REQUEST, "Activity is already full")
            }
        };
        warn!("API Server: refused request: {}", self.0);
        (
            status,
            Json(ErrorBody {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}

async fn list_activities(State(state): State<AppState>) -> Json<ActivityMap> {
    let roster = state.roster.read().unwrap();
    Json(roster.list())
}

async fn signup(
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut roster = state.roster.write().unwrap();
    let confirmation = roster.signup(&name, &query.email)?;
    Ok(Json(MessageBody {
        message: format!(
            "Signed up {} for {}",
            confirmation.participant(),
            confirmation.activity()
        ),
    }))
}

async fn unregister(
    Path(name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageBody>, ApiError> {
    let mut roster = state.roster.write().unwrap();
    let confirmation = roster.unregister(&name, &query.email)?;
    Ok(Json(MessageBody {
        message: format!(
            "Unregistered {} from {}",
            confirmation.participant(),
            confirmation.activity()
        ),
    }))
}
