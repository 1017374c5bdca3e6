//! Partial variant of the classic layout: four pages only.

use super::{
    router::{RouteEntry, HOME},
    Renderer, TemplateConfig, TemplateProfile,
};
use crate::models::view::Screen;

pub const ID: &str = "classic1-lite";

static ROUTES: [RouteEntry; 4] = [
    HOME,
    RouteEntry::nav("/about", Screen::About, "About"),
    RouteEntry::nav("/admission", Screen::Admission, "Admission"),
    RouteEntry::nav("/contact", Screen::Contact, "Contact"),
];

pub struct Classic1Lite;

impl Renderer for Classic1Lite {
    fn routes(&self) -> &'static [RouteEntry] {
        &ROUTES
    }

    fn profile(&self) -> TemplateProfile {
        TemplateProfile {
            sports_limit: Some(3),
            hero_image_limit: 3,
            home_gallery_limit: 4,
            home_faculty_limit: Some(3),
            ..TemplateProfile::default()
        }
    }
}

pub fn config() -> TemplateConfig {
    TemplateConfig::new(ID, "Classic Lite", Box::new(Classic1Lite))
}
