use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{Direction, EditorView, ExportError, ScheduleStore, Weekday, clamp_grade};

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ScheduleStore>>,
}

impl AppState {
    pub fn new(store: ScheduleStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn with_shared(store: Arc<RwLock<ScheduleStore>>) -> Self {
        Self { store }
    }

    fn store(&self) -> Arc<RwLock<ScheduleStore>> {
        self.store.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    Invalid(String),
    PreconditionFailed(String),
}

impl ApiError {
    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<ExportError> for ApiError {
    fn from(value: ExportError) -> Self {
        ApiError::PreconditionFailed(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::PreconditionFailed(message) => {
                let body = Json(ErrorBody {
                    error: "precondition_failed",
                    message,
                });
                (StatusCode::PRECONDITION_FAILED, body).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct DimensionsPayload {
    grade: i64,
    #[serde(default)]
    classes: String,
    /// Raw text of the period field; absent or unparseable means 7.
    #[serde(default)]
    periods: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GradePayload {
    grade: i64,
}

#[derive(Debug, Deserialize)]
struct ClassesPayload {
    classes: String,
}

#[derive(Debug, Deserialize)]
struct PeriodsPayload {
    periods: String,
}

#[derive(Debug, Deserialize)]
struct WeekdayPayload {
    day: String,
}

#[derive(Debug, Deserialize)]
struct SlotPayload {
    value: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/editor", get(get_editor))
        .route("/dimensions", put(set_dimensions))
        .route("/grade", put(set_grade))
        .route("/classes", put(set_classes))
        .route("/periods", put(set_periods))
        .route("/weekday", put(select_weekday))
        .route("/sections/next", post(next_section))
        .route("/sections/prev", post(prev_section))
        .route("/slots/:period", put(set_slot))
        .route("/day", delete(clear_day))
        .route("/export", get(export_document))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, store: ScheduleStore) -> std::io::Result<()> {
    let state = AppState::new(store);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_editor(State(state): State<AppState>) -> Json<EditorView> {
    let store = state.store();
    let view = store.read().view();
    Json(view)
}

async fn set_dimensions(
    State(state): State<AppState>,
    Json(payload): Json<DimensionsPayload>,
) -> Json<EditorView> {
    let periods = crate::PeriodCount::parse(payload.periods.as_deref().unwrap_or_default());
    let store = state.store();
    let view = {
        let mut guard = store.write();
        guard.set_dimensions(
            clamp_grade(payload.grade),
            &payload.classes,
            periods.get() as i64,
        );
        guard.view()
    };
    Json(view)
}

async fn set_grade(
    State(state): State<AppState>,
    Json(payload): Json<GradePayload>,
) -> Json<EditorView> {
    let store = state.store();
    let view = {
        let mut guard = store.write();
        guard.set_grade(clamp_grade(payload.grade));
        guard.view()
    };
    Json(view)
}

async fn set_classes(
    State(state): State<AppState>,
    Json(payload): Json<ClassesPayload>,
) -> Json<EditorView> {
    let store = state.store();
    let view = {
        let mut guard = store.write();
        guard.set_section_list(&payload.classes);
        guard.view()
    };
    Json(view)
}

async fn set_periods(
    State(state): State<AppState>,
    Json(payload): Json<PeriodsPayload>,
) -> Json<EditorView> {
    let periods = crate::PeriodCount::parse(&payload.periods);
    let store = state.store();
    let view = {
        let mut guard = store.write();
        guard.set_period_count(periods.get() as i64);
        guard.view()
    };
    Json(view)
}

async fn select_weekday(
    State(state): State<AppState>,
    Json(payload): Json<WeekdayPayload>,
) -> Result<Json<EditorView>, ApiError> {
    // The store ignores unknown codes; the HTTP caller gets told.
    let day = payload
        .day
        .parse::<Weekday>()
        .map_err(|err| ApiError::invalid(err.to_string()))?;
    let store = state.store();
    let view = {
        let mut guard = store.write();
        guard.select_weekday(day);
        guard.view()
    };
    Ok(Json(view))
}

async fn step(state: AppState, direction: Direction) -> Json<EditorView> {
    let store = state.store();
    let view = {
        let mut guard = store.write();
        guard.step_section(direction);
        guard.view()
    };
    Json(view)
}

async fn next_section(State(state): State<AppState>) -> Json<EditorView> {
    step(state, Direction::Next).await
}

async fn prev_section(State(state): State<AppState>) -> Json<EditorView> {
    step(state, Direction::Prev).await
}

/// `period` is one-based, as shown next to each input.
async fn set_slot(
    State(state): State<AppState>,
    Path(period): Path<usize>,
    Json(payload): Json<SlotPayload>,
) -> Json<EditorView> {
    let store = state.store();
    let view = {
        let mut guard = store.write();
        if let Some(index) = period.checked_sub(1) {
            guard.set_slot_value(index, &payload.value);
        }
        guard.view()
    };
    Json(view)
}

async fn clear_day(State(state): State<AppState>) -> Json<EditorView> {
    let store = state.store();
    let view = {
        let mut guard = store.write();
        guard.clear_current_day();
        guard.view()
    };
    Json(view)
}

async fn export_document(State(state): State<AppState>) -> Result<Response, ApiError> {
    let store = state.store();
    let document = store.read().export_document()?;
    let headers = [(
        axum::http::header::CONTENT_DISPOSITION,
        format!(
            "attachment; filename=\"{}\"",
            crate::persistence::DEFAULT_EXPORT_FILE
        ),
    )];
    Ok((headers, Json(document)).into_response())
}
