use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::content::TenantContent;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Ok,
    Empty,
    Error,
}

impl std::fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TenantStatus::Ok => "ok",
            TenantStatus::Empty => "empty",
            TenantStatus::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Request-scoped tenant fetch outcome. Built once per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TenantState {
    pub status: TenantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<TenantContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TenantState {
    pub fn ok(data: TenantContent) -> Self {
        TenantState { status: TenantStatus::Ok, data: Some(data), message: None }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        TenantState { status: TenantStatus::Empty, data: None, message: Some(message.into()) }
    }

    pub fn error(message: impl Into<String>) -> Self {
        TenantState { status: TenantStatus::Error, data: None, message: Some(message.into()) }
    }
}

/// Row of `tenant_sites`. `content` is JSONB and may be NULL for a tenant
/// that has been provisioned but not yet published.
#[derive(Debug, Clone, FromRow)]
pub struct TenantSite {
    pub id: Uuid,
    pub school_id: String,
    pub template_id: String,
    pub content: Option<serde_json::Value>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
