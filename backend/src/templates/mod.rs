//! Template registry: maps a template id to the renderer that draws it.

pub mod classic1;
pub mod classic1_lite;
pub mod heritage1;
pub mod modern1;
pub mod router;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::Serialize;
use thiserror::Error;

use crate::{
    models::{site::SiteContent, view::ScreenView},
    services::{derive::DEFAULT_EVENT_LIMIT, view_model},
};
use router::{resolve_route, RouteEntry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("template not found: {0}")]
    NotFound(String),
}

/// Per-template knobs for how much of each list the home screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateProfile {
    pub home_event_limit: usize,
    pub sports_limit: Option<usize>,
    pub hero_image_limit: usize,
    pub home_gallery_limit: usize,
    pub home_faculty_limit: Option<usize>,
}

impl Default for TemplateProfile {
    fn default() -> Self {
        TemplateProfile {
            home_event_limit: DEFAULT_EVENT_LIMIT,
            sports_limit: Some(4),
            hero_image_limit: 5,
            home_gallery_limit: 6,
            home_faculty_limit: Some(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedScreen {
    /// Logical route that was matched (`/` for unknown paths).
    pub route: &'static str,
    pub view: ScreenView,
}

pub trait Renderer: Send + Sync {
    /// Every logical path this template answers, aliases included.
    fn routes(&self) -> &'static [RouteEntry];

    fn profile(&self) -> TemplateProfile {
        TemplateProfile::default()
    }

    /// Template-specific adaptation of canonical content. Must be total and
    /// idempotent; the default passes content through untouched.
    fn adapt_data(&self, content: SiteContent) -> SiteContent {
        content
    }

    fn render(&self, data: &SiteContent, path: &str, now: DateTime<Utc>) -> RenderedScreen {
        let route = resolve_route(self.routes(), path);
        RenderedScreen {
            route: route.path,
            view: view_model::build(route.screen, data, now, &self.profile()),
        }
    }

    /// `(label, logical path)` pairs for the site menu, in route-table order.
    fn nav(&self) -> Vec<(&'static str, &'static str)> {
        self.routes()
            .iter()
            .filter_map(|r| r.nav_label.map(|label| (label, r.path)))
            .collect()
    }
}

pub struct TemplateConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub routes: Vec<&'static str>,
    pub renderer: Box<dyn Renderer>,
}

impl TemplateConfig {
    pub fn new(id: &'static str, name: &'static str, renderer: Box<dyn Renderer>) -> Self {
        let routes = renderer.routes().iter().map(|r| r.path).collect();
        TemplateConfig { id, name, routes, renderer }
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
            routes: self.routes.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl std::fmt::Debug for TemplateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("routes", &self.routes)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub routes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<&'static str, TemplateConfig>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every template shipped with the crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(classic1::config());
        registry.register(classic1_lite::config());
        registry.register(modern1::config());
        registry.register(heritage1::config());
        registry
    }

    pub fn register(&mut self, config: TemplateConfig) {
        self.templates.insert(config.id, config);
    }

    /// Fails rather than substituting another template: rendering a tenant
    /// with the wrong layout is worse than a not-found.
    pub fn lookup(&self, id: &str) -> Result<&TemplateConfig, RegistryError> {
        self.templates
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn list(&self) -> Vec<&TemplateConfig> {
        let mut templates: Vec<&TemplateConfig> = self.templates.values().collect();
        templates.sort_by_key(|t| t.id);
        templates
    }
}

lazy_static! {
    static ref REGISTRY: TemplateRegistry = TemplateRegistry::builtin();
}

/// Process-wide registry, built on first use and read-only afterwards.
pub fn registry() -> &'static TemplateRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::Screen;
    use chrono::TimeZone;

    #[test]
    fn test_builtin_templates_registered() {
        let ids: Vec<_> = registry().list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["classic1", "classic1-lite", "heritage1", "modern1"]);
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        let err = registry().lookup("brutalist9").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("brutalist9".into()));
        assert_eq!(err.to_string(), "template not found: brutalist9");
        assert!(TemplateRegistry::new().lookup("classic1").is_err());
    }

    #[test]
    fn test_every_template_has_home_and_unknown_path_renders_home() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let content = SiteContent::fallback("greenfield");
        for template in registry().list() {
            assert_eq!(template.routes.first(), Some(&"/"), "{} must start with home", template.id);
            let home = template.renderer.render(&content, "/", now);
            let unknown = template.renderer.render(&content, "/nonexistent", now);
            assert_eq!(home, unknown, "{} should fall back to home", template.id);
            assert_eq!(unknown.view.screen(), Screen::Home);
        }
    }

    #[test]
    fn test_adapt_data_is_identity_and_idempotent() {
        let content = SiteContent::fallback("greenfield");
        for template in registry().list() {
            let once = template.renderer.adapt_data(content.clone());
            let twice = template.renderer.adapt_data(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_routes_are_unique_per_template() {
        for template in registry().list() {
            let mut routes = template.routes.clone();
            routes.sort();
            routes.dedup();
            assert_eq!(routes.len(), template.routes.len(), "{} has duplicate routes", template.id);
        }
    }
}
