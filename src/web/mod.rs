//! HTTP surface.
//!
//! One page at `/` (GET renders the form, POST submits a forwarding change)
//! plus a `/health` probe. Every request completes with a rendered page,
//! success or failure; internal errors never escape as a raw server error.

pub mod html;

use crate::config::MappingConfig;
use crate::extensions::ExtensionMap;
use crate::forwarding::{ForwardingSubmission, ForwardingTarget, Orchestrator, UpdateOutcome};
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::{Form, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use html::PageView;

/// Shared application state accessible to all handlers.
///
/// Everything here is read-only after bootstrap; handlers share it through
/// an `Arc` with no locking.
pub struct AppState {
    pub orchestrator: Orchestrator,
    pub mapping: MappingConfig,
    /// Server startup time for uptime reporting
    pub start_time: Instant,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator, mapping: MappingConfig) -> Self {
        Self {
            orchestrator,
            mapping,
            start_time: Instant::now(),
        }
    }
}

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(render_form).post(submit_form))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Form fields as posted by the page. Field names predate this rewrite and
/// are kept for parity with existing bookmarklets and tests.
#[derive(Debug, Deserialize)]
pub struct ForwardingForm {
    #[serde(rename = "phone-num", default)]
    pub phone_num: String,
    #[serde(rename = "forwarding-num", default)]
    pub forwarding_num: Option<String>,
    #[serde(rename = "forwarding-num-select", default)]
    pub forwarding_floor: Option<String>,
}

/// Load the floor list for rendering, honoring the per-view re-read policy.
fn load_floors(mapping: &MappingConfig) -> Result<Vec<String>, String> {
    if !mapping.enabled {
        return Ok(Vec::new());
    }
    ExtensionMap::load(&mapping.path)
        .map(|map| map.floors())
        .map_err(|e| e.to_string())
}

async fn render_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = match load_floors(&state.mapping) {
        Ok(floors) => PageView::form(state.mapping.enabled, floors),
        Err(message) => {
            tracing::error!(error = %message, "cannot render form");
            PageView::outcome(
                state.mapping.enabled,
                Vec::new(),
                UpdateOutcome::Failure {
                    message,
                    code: "extension_map_error".to_string(),
                },
            )
        }
    };
    Html(html::render_page(&view))
}

async fn submit_form(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ForwardingForm>, FormRejection>,
) -> Html<String> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "malformed form submission");
            let view = PageView::outcome(
                state.mapping.enabled,
                load_floors(&state.mapping).unwrap_or_default(),
                UpdateOutcome::Failure {
                    message: "The submission could not be read".to_string(),
                    code: "bad_request".to_string(),
                },
            );
            return Html(html::render_page(&view));
        }
    };

    let target = if state.mapping.enabled {
        ForwardingTarget::Floor(form.forwarding_floor.unwrap_or_default())
    } else {
        ForwardingTarget::Number(form.forwarding_num.unwrap_or_default())
    };

    let outcome = state
        .orchestrator
        .handle(ForwardingSubmission {
            pattern: form.phone_num,
            target,
        })
        .await;

    let view = PageView::outcome(
        state.mapping.enabled,
        load_floors(&state.mapping).unwrap_or_default(),
        outcome,
    );
    Html(html::render_page(&view))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_seconds: u64,
    mapping_enabled: bool,
}

/// Liveness probe. Reports process state only; no remote call is made.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_seconds: state.start_time.elapsed().as_secs(),
        mapping_enabled: state.mapping.enabled,
    })
}
