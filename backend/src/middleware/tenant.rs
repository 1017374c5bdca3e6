use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Lowercase ASCII letters, digits and hyphens, no leading or trailing
/// hyphen, 2 to 63 characters.
pub fn is_valid_slug(s: &str) -> bool {
    let len = s.len();
    (2..=63).contains(&len)
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !s.starts_with('-')
        && !s.ends_with('-')
}

/// School identifier for the request, taken from the `X-Tenant` header, the
/// `school` query parameter, or the first subdomain, in that order.
///
/// Existence is not checked here: an unknown school still renders, with the
/// empty-content notice on top.
#[derive(Debug, Clone)]
pub struct TenantSlug(pub String);

#[derive(Deserialize)]
struct SchoolQuery {
    school: Option<String>,
}

impl<S> FromRequestParts<S> for TenantSlug
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_slug(parts).map(TenantSlug)
    }
}

fn extract_slug(parts: &Parts) -> Result<String, (StatusCode, Json<Value>)> {
    let invalid = || (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid school identifier" })));

    if let Some(tenant) = parts
        .headers
        .get("X-Tenant")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
    {
        return if is_valid_slug(&tenant) { Ok(tenant) } else { Err(invalid()) };
    }

    if let Some(school) = Query::<SchoolQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|q| q.0.school)
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
    {
        return if is_valid_slug(&school) { Ok(school) } else { Err(invalid()) };
    }

    if let Some(host) = parts.headers.get("Host").and_then(|v| v.to_str().ok()) {
        let domain = host.split(':').next().unwrap_or(host);
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() >= 3 {
            let subdomain = labels[0].to_lowercase();
            if subdomain != "www" && subdomain != "api" {
                return if is_valid_slug(&subdomain) { Ok(subdomain) } else { Err(invalid()) };
            }
        }
    }

    Err((StatusCode::BAD_REQUEST, Json(json!({ "error": "Missing school identifier" }))))
}
