use axum::Json;

use crate::templates::{registry, TemplateSummary};

/// GET /templates — every registered template with its route table.
pub async fn list_templates() -> Json<Vec<TemplateSummary>> {
    Json(registry().list().iter().map(|t| t.summary()).collect())
}
