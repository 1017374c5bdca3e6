use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    middleware::tenant::TenantSlug,
    models::view::RenderedPage,
    services::{
        metrics::TEMPLATE_MISSES_COUNTER,
        pages::{render_page, PageRequest},
        tenants::TenantService,
    },
    templates::{registry, RegistryError},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// The visitor closed the error notice; local to this page view.
    #[serde(default)]
    pub dismiss_notice: bool,
}

type PageResult = Result<Json<RenderedPage>, (StatusCode, Json<Value>)>;

/// GET {base}/{template_id}
pub async fn render_home(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
    TenantSlug(school): TenantSlug,
    Query(query): Query<PageQuery>,
) -> PageResult {
    render(&state, &template_id, "/", &school, &query).await
}

/// GET {base}/{template_id}/{*path}
pub async fn render_path(
    State(state): State<AppState>,
    Path((template_id, path)): Path<(String, String)>,
    TenantSlug(school): TenantSlug,
    Query(query): Query<PageQuery>,
) -> PageResult {
    render(&state, &template_id, &format!("/{path}"), &school, &query).await
}

async fn render(state: &AppState, template_id: &str, path: &str, school: &str, query: &PageQuery) -> PageResult {
    // Unknown templates are rejected before any tenant fetch.
    if let Err(e) = registry().lookup(template_id) {
        TEMPLATE_MISSES_COUNTER.inc();
        return Err(not_found(e));
    }

    let tenant = TenantService::load_state(&state.db, school).await;
    let request = PageRequest {
        template_id,
        school_id: school,
        path,
        base_path: &state.config.site_base_path,
        origin: Some(state.config.app_base_url.as_str()),
        dismissed: query.dismiss_notice,
    };

    render_page(registry(), &request, &tenant, Utc::now())
        .map(Json)
        .map_err(not_found)
}

fn not_found(e: RegistryError) -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() })))
}
