pub mod health;
pub mod metrics;
pub mod sites;
pub mod templates;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Allows the app base URL, its subdomains (one per school) and localhost.
fn cors_layer(base_url: &str) -> CorsLayer {
    let base = base_url.trim_end_matches('/').to_string();
    let origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        let o = match origin.to_str() {
            Ok(s) => s,
            Err(_) => return false,
        };
        if o.starts_with("http://localhost") || o.starts_with("http://127.0.0.1") {
            return true;
        }
        if o == base {
            return true;
        }
        if let Some(idx) = base.find("://") {
            let after_scheme = &base[idx + 3..];
            let domain = after_scheme.split('/').next().unwrap_or(after_scheme);
            let domain = domain.split(':').next().unwrap_or(domain);
            let host = o.split("://").nth(1).unwrap_or(o);
            let host = host.split(':').next().unwrap_or(host);
            if host.ends_with(&format!(".{domain}")) {
                return true;
            }
        }
        false
    });

    CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-tenant"),
        ]))
        .allow_origin(origin)
}

pub fn build_router(state: AppState) -> Router {
    let base = state.config.site_base_path.clone();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/templates", get(templates::list_templates))
        .route(&format!("{base}/{{template_id}}"), get(sites::render_home))
        .route(&format!("{base}/{{template_id}}/{{*path}}"), get(sites::render_path))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.app_base_url))
        .with_state(state)
}
