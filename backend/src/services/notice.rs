//! System notice overlaid on a template when tenant content is missing or
//! could not be fetched. The template always renders underneath it.

use serde::{Deserialize, Serialize};

use crate::models::tenant::{TenantState, TenantStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeState {
    Hidden,
    ShowingEmpty,
    ShowingError,
    Dismissed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeAction {
    /// Full page reload; there is no soft refetch.
    Reload,
}

impl NoticeState {
    pub fn from_status(status: TenantStatus) -> Self {
        match status {
            TenantStatus::Ok => NoticeState::Hidden,
            TenantStatus::Empty => NoticeState::ShowingEmpty,
            TenantStatus::Error => NoticeState::ShowingError,
        }
    }

    /// Only the error notice can be dismissed; every other state is unchanged.
    pub fn dismiss(self) -> Self {
        match self {
            NoticeState::ShowingError => NoticeState::Dismissed,
            other => other,
        }
    }

    pub fn retry(self) -> Option<NoticeAction> {
        match self {
            NoticeState::ShowingError => Some(NoticeAction::Reload),
            _ => None,
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, NoticeState::ShowingEmpty | NoticeState::ShowingError)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemNotice {
    pub state: NoticeState,
    pub title: String,
    pub message: String,
    pub dismissible: bool,
    pub retry: Option<NoticeAction>,
    /// Where a retry navigates to; the current page, scoped to the template.
    pub reload_href: Option<String>,
}

/// Builds the notice for a tenant state. `dismissed` is the visitor's local,
/// non-persisted dismiss flag; it never changes `state.status`.
pub fn system_notice(state: &TenantState, dismissed: bool, reload_href: &str) -> Option<SystemNotice> {
    let mut notice_state = NoticeState::from_status(state.status);
    if dismissed {
        notice_state = notice_state.dismiss();
    }
    if !notice_state.is_visible() {
        return None;
    }

    let (title, default_message) = match notice_state {
        NoticeState::ShowingEmpty => (
            "Website coming soon",
            "This school has not published its website content yet.",
        ),
        _ => (
            "Something went wrong",
            "We could not load this school's website. Please try again.",
        ),
    };
    let retry = notice_state.retry();

    Some(SystemNotice {
        state: notice_state,
        title: title.to_string(),
        message: state.message.clone().unwrap_or_else(|| default_message.to_string()),
        dismissible: notice_state == NoticeState::ShowingError,
        retry,
        reload_href: retry.map(|_| reload_href.to_string()),
    })
}
