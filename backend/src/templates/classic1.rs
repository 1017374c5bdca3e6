//! Classic: the full-featured original layout with a notice-board ticker.

use super::{
    router::{RouteEntry, HOME},
    Renderer, TemplateConfig,
};
use crate::models::view::Screen;

pub const ID: &str = "classic1";

static ROUTES: [RouteEntry; 12] = [
    HOME,
    RouteEntry::nav("/about", Screen::About, "About"),
    RouteEntry::nav("/activities", Screen::Activities, "Activities"),
    RouteEntry::nav("/admission", Screen::Admission, "Admission"),
    RouteEntry::alias("/admissions", Screen::Admission),
    RouteEntry::nav("/events", Screen::Events, "Events"),
    RouteEntry::nav("/faculty", Screen::Faculty, "Faculty"),
    RouteEntry::nav("/infrastructure", Screen::Infrastructure, "Infrastructure"),
    RouteEntry::nav("/gallery", Screen::Gallery, "Gallery"),
    RouteEntry::nav("/broadcast", Screen::Notices, "Notice Board"),
    RouteEntry::alias("/notices", Screen::Notices),
    RouteEntry::nav("/contact", Screen::Contact, "Contact"),
];

pub struct Classic1;

impl Renderer for Classic1 {
    fn routes(&self) -> &'static [RouteEntry] {
        &ROUTES
    }
}

pub fn config() -> TemplateConfig {
    TemplateConfig::new(ID, "Classic", Box::new(Classic1))
}
