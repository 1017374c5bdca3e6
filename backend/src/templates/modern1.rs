use super::{
    router::{RouteEntry, HOME},
    Renderer, TemplateConfig, TemplateProfile,
};
use crate::models::view::Screen;

pub const ID: &str = "modern1";

static ROUTES: [RouteEntry; 13] = [
    HOME,
    RouteEntry::nav("/about", Screen::About, "Our School"),
    RouteEntry::nav("/academics", Screen::Activities, "Academics"),
    RouteEntry::nav("/admissions", Screen::Admission, "Admissions"),
    RouteEntry::alias("/admission", Screen::Admission),
    RouteEntry::nav("/campus", Screen::Infrastructure, "Campus"),
    RouteEntry::alias("/infrastructure", Screen::Infrastructure),
    RouteEntry::nav("/faculty", Screen::Faculty, "Faculty"),
    RouteEntry::nav("/events", Screen::Events, "Events"),
    RouteEntry::nav("/gallery", Screen::Gallery, "Gallery"),
    RouteEntry::nav("/notices", Screen::Notices, "Notices"),
    RouteEntry::alias("/broadcast", Screen::Notices),
    RouteEntry::nav("/contact", Screen::Contact, "Contact"),
];

pub struct Modern1;

impl Renderer for Modern1 {
    fn routes(&self) -> &'static [RouteEntry] {
        &ROUTES
    }

    // Full-bleed hero slider and an unbounded sports strip.
    fn profile(&self) -> TemplateProfile {
        TemplateProfile {
            sports_limit: None,
            hero_image_limit: 8,
            home_gallery_limit: 8,
            ..TemplateProfile::default()
        }
    }
}

pub fn config() -> TemplateConfig {
    TemplateConfig::new(ID, "Modern", Box::new(Modern1))
}
