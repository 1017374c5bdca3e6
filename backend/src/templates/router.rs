//! Request path → screen resolution. Stateless; unknown paths land on home.

use serde::Serialize;

use crate::models::view::Screen;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub screen: Screen,
    /// Navigation label; aliases carry `None` and stay out of the menu.
    pub nav_label: Option<&'static str>,
}

impl RouteEntry {
    pub const fn nav(path: &'static str, screen: Screen, label: &'static str) -> Self {
        RouteEntry { path, screen, nav_label: Some(label) }
    }

    pub const fn alias(path: &'static str, screen: Screen) -> Self {
        RouteEntry { path, screen, nav_label: None }
    }
}

pub const HOME: RouteEntry = RouteEntry::nav("/", Screen::Home, "Home");

/// Reduces a request path to a logical route: query and fragment dropped, an
/// optional template prefix stripped, lowercase, no trailing slash, and `/`
/// for anything empty.
pub fn normalize_path(path: &str, prefix: Option<&str>) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut path = path[..end].trim();

    if let Some(prefix) = prefix.map(|p| p.trim_end_matches('/')).filter(|p| !p.is_empty()) {
        if let Some(rest) = path.strip_prefix(prefix) {
            if rest.is_empty() || rest.starts_with('/') {
                path = rest;
            }
        }
    }

    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!("/{}", segments.join("/"))
}

/// Finds the route for `path`, falling back to the home route.
pub fn resolve_route(routes: &'static [RouteEntry], path: &str) -> &'static RouteEntry {
    let path = normalize_path(path, None);
    routes
        .iter()
        .find(|r| r.path == path)
        .or_else(|| routes.iter().find(|r| r.path == HOME.path))
        .unwrap_or(&HOME)
}
