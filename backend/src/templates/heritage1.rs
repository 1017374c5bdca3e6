//! Heritage: a long-form, text-led layout. Notices appear on the home page
//! only, so there is no separate notice route.

use super::{
    router::{RouteEntry, HOME},
    Renderer, TemplateConfig, TemplateProfile,
};
use crate::models::view::Screen;

pub const ID: &str = "heritage1";

static ROUTES: [RouteEntry; 11] = [
    HOME,
    RouteEntry::nav("/about", Screen::About, "Heritage"),
    RouteEntry::nav("/activities", Screen::Activities, "Student Life"),
    RouteEntry::nav("/admission", Screen::Admission, "Admission"),
    RouteEntry::alias("/admissions", Screen::Admission),
    RouteEntry::nav("/faculty", Screen::Faculty, "Faculty"),
    RouteEntry::nav("/facilities", Screen::Infrastructure, "Facilities"),
    RouteEntry::alias("/infrastructure", Screen::Infrastructure),
    RouteEntry::nav("/events", Screen::Events, "Events"),
    RouteEntry::nav("/gallery", Screen::Gallery, "Gallery"),
    RouteEntry::nav("/contact", Screen::Contact, "Contact"),
];

pub struct Heritage1;

impl Renderer for Heritage1 {
    fn routes(&self) -> &'static [RouteEntry] {
        &ROUTES
    }

    fn profile(&self) -> TemplateProfile {
        TemplateProfile {
            sports_limit: Some(3),
            home_faculty_limit: None,
            ..TemplateProfile::default()
        }
    }
}

pub fn config() -> TemplateConfig {
    TemplateConfig::new(ID, "Heritage", Box::new(Heritage1))
}
