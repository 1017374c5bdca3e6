use sqlx::PgPool;
use tracing::warn;

use crate::{
    models::{
        content::TenantContent,
        tenant::{TenantSite, TenantState},
    },
    services::metrics::TENANT_STATUS_COUNTER,
};

const EMPTY_MESSAGE: &str = "This school has not published its website content yet.";
const ERROR_MESSAGE: &str = "We could not load this school's website. Please try again.";

pub struct TenantService;

impl TenantService {
    pub async fn fetch(pool: &PgPool, school_id: &str) -> anyhow::Result<Option<TenantSite>> {
        let site = sqlx::query_as::<_, TenantSite>(
            "SELECT id, school_id, template_id, content, is_active, created_at, updated_at
             FROM tenant_sites
             WHERE school_id = $1 AND is_active = TRUE",
        )
        .bind(school_id)
        .fetch_optional(pool)
        .await?;
        Ok(site)
    }

    /// Fetches a tenant and folds every outcome into a [`TenantState`].
    /// Fetch failures become `error`, never an `Err`.
    pub async fn load_state(pool: &PgPool, school_id: &str) -> TenantState {
        let state = match Self::fetch(pool, school_id).await {
            Ok(site) => state_from_content(school_id, site.and_then(|s| s.content)),
            Err(e) => {
                warn!("Tenant {school_id}: content fetch failed: {e}");
                TenantState::error(ERROR_MESSAGE)
            }
        };
        TENANT_STATUS_COUNTER
            .with_label_values(&[&state.status.to_string()])
            .inc();
        state
    }

    pub async fn upsert(
        pool: &PgPool,
        school_id: &str,
        template_id: &str,
        content: &TenantContent,
    ) -> anyhow::Result<TenantSite> {
        let site = sqlx::query_as::<_, TenantSite>(
            "INSERT INTO tenant_sites (school_id, template_id, content)
             VALUES ($1, $2, $3)
             ON CONFLICT (school_id) DO UPDATE SET
                 template_id = EXCLUDED.template_id,
                 content = EXCLUDED.content,
                 is_active = TRUE,
                 updated_at = NOW()
             RETURNING id, school_id, template_id, content, is_active, created_at, updated_at",
        )
        .bind(school_id)
        .bind(template_id)
        .bind(serde_json::to_value(content)?)
        .fetch_one(pool)
        .await?;
        Ok(site)
    }
}

/// Maps a stored JSON document (or its absence) to a tenant state.
pub fn state_from_content(school_id: &str, content: Option<serde_json::Value>) -> TenantState {
    match content {
        None | Some(serde_json::Value::Null) => TenantState::empty(EMPTY_MESSAGE),
        Some(value) => match serde_json::from_value::<TenantContent>(value) {
            Ok(content) => TenantState::ok(content),
            Err(e) => {
                warn!("Tenant {school_id}: stored content is malformed: {e}");
                TenantState::error(ERROR_MESSAGE)
            }
        },
    }
}
