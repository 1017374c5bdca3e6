//! Normalization boundary: maps whichever schema shape a tenant was saved in
//! onto the single canonical [`SiteContent`]. Total by construction; sparse or
//! malformed optional data degrades to empty values instead of failing.

use tracing::debug;

use crate::models::{
    academics::{Statistic, StatisticRecord},
    admission::{Admission, AdmissionRecord, ProcessSteps},
    campus::{Facility, FacilityRecord, GalleryImage, GalleryRecord},
    content::TenantContent,
    people::{FacultyMember, PersonnelRecord, Principal, PrincipalRecord},
    school::{Footer, FooterRecord, SocialLink, SocialLinkRecord},
    sections::SectionFlags,
    site::SiteContent,
};

pub fn normalize(content: TenantContent) -> SiteContent {
    let TenantContent {
        meta,
        contact,
        branding,
        social_links,
        vision_mission,
        vision,
        mission,
        principal,
        personnel,
        activities,
        infrastructure,
        facilities,
        gallery,
        media_library,
        events,
        announcements,
        academic_results,
        achievements,
        statistics,
        homepage_sections,
        admission,
        footer,
    } = content;

    let (structured_vision, structured_mission) = vision_mission
        .map(|vm| (vm.vision, vm.mission))
        .unwrap_or((None, None));

    let social_links = normalize_social_links(&social_links);
    let footer = normalize_footer(footer, &meta.school_name, &social_links);

    SiteContent {
        principal: normalize_principal(principal.as_ref(), &personnel),
        faculty: faculty_from_personnel(&personnel),
        vision: non_blank(structured_vision).or_else(|| non_blank(vision)),
        mission: non_blank(structured_mission).or_else(|| non_blank(mission)),
        branding: branding.unwrap_or_default(),
        facilities: normalize_facilities(facilities, infrastructure),
        gallery: normalize_gallery(gallery, media_library),
        statistics: statistics.into_iter().map(normalize_statistic).collect(),
        sections: SectionFlags::from_records(&homepage_sections),
        admission: admission.map(normalize_admission),
        meta,
        contact,
        social_links,
        activities,
        events,
        announcements,
        academic_results,
        achievements,
        footer,
    }
}

/// The structured `principal` field is authoritative when it carries anything;
/// otherwise the first `personnel` row typed as principal is used.
pub fn normalize_principal(
    record: Option<&PrincipalRecord>,
    personnel: &[PersonnelRecord],
) -> Option<Principal> {
    let from_record = record.and_then(|p| {
        let message = non_blank(p.message.clone()).or_else(|| non_blank(p.text.clone()));
        if p.name.trim().is_empty() && message.is_none() {
            return None;
        }
        Some(Principal {
            name: p.name.trim().to_string(),
            message: message.unwrap_or_default(),
            photo_url: non_blank(p.photo_url.clone()).or_else(|| non_blank(p.image.clone())),
        })
    });

    from_record.or_else(|| {
        personnel.iter().find(|p| p.is_principal()).map(|p| Principal {
            name: p.name.trim().to_string(),
            message: p.message.clone().unwrap_or_default(),
            photo_url: non_blank(p.photo_url.clone()),
        })
    })
}

fn faculty_from_personnel(personnel: &[PersonnelRecord]) -> Vec<FacultyMember> {
    let mut members: Vec<FacultyMember> = personnel
        .iter()
        .filter(|p| !p.is_principal() && !p.name.trim().is_empty())
        .map(|p| FacultyMember {
            name: p.name.trim().to_string(),
            designation: non_blank(p.designation.clone()),
            qualification: non_blank(p.qualification.clone()),
            department: non_blank(p.department.clone()),
            photo_url: non_blank(p.photo_url.clone()),
            display_order: p.display_order,
        })
        .collect();
    members.sort_by_key(|m| m.display_order);
    members
}

pub fn normalize_social_links(records: &[SocialLinkRecord]) -> Vec<SocialLink> {
    records
        .iter()
        .filter_map(|r| match r.platform.parse() {
            Ok(platform) if !r.url.trim().is_empty() => Some(SocialLink {
                platform,
                url: r.url.trim().to_string(),
            }),
            Ok(_) => None,
            Err(e) => {
                debug!("Dropping social link: {e}");
                None
            }
        })
        .collect()
}

fn normalize_footer(record: Option<FooterRecord>, school_name: &str, site_links: &[SocialLink]) -> Footer {
    let record = record.unwrap_or_default();
    let social_links = if record.social_links.is_empty() {
        site_links.to_vec()
    } else {
        normalize_social_links(&record.social_links)
    };
    Footer {
        copyright_text: non_blank(record.copyright_text)
            .unwrap_or_else(|| format!("© {school_name}. All rights reserved.")),
        social_links,
    }
}

/// Categorised `facilities` take precedence over the legacy flat `infrastructure` list.
fn normalize_facilities(facilities: Vec<FacilityRecord>, infrastructure: Vec<FacilityRecord>) -> Vec<Facility> {
    let source = if facilities.is_empty() { infrastructure } else { facilities };
    source
        .into_iter()
        .filter(|f| !f.name.trim().is_empty())
        .map(|f| Facility {
            name: f.name.trim().to_string(),
            description: f.description,
            image: non_blank(f.image),
            category: non_blank(f.category_name),
        })
        .collect()
}

fn normalize_gallery(gallery: Vec<GalleryRecord>, media_library: Vec<GalleryRecord>) -> Vec<GalleryImage> {
    let source = if gallery.is_empty() { media_library } else { gallery };
    source
        .into_iter()
        .enumerate()
        .filter_map(|(i, g)| {
            let image_url = non_blank(g.image_url)?;
            Some(GalleryImage {
                id: non_blank(g.id).unwrap_or_else(|| format!("image-{}", i + 1)),
                image_url,
                caption: non_blank(g.caption),
                category: non_blank(g.category),
                is_featured: g.is_featured,
            })
        })
        .collect()
}

fn normalize_statistic(record: StatisticRecord) -> Statistic {
    Statistic {
        label: record.label,
        value: record.value.to_string(),
        icon: non_blank(record.icon),
        display_order: record.display_order,
    }
}

pub fn normalize_admission(record: AdmissionRecord) -> Admission {
    Admission {
        overview: record.overview,
        steps: record.process.map(split_steps).unwrap_or_default(),
        form_fields: record.form_fields,
        fee_payment_url: non_blank(record.fee_payment_url),
        contact_note: non_blank(record.contact_note),
    }
}

/// Delimited process strings are split on commas and line breaks.
fn split_steps(process: ProcessSteps) -> Vec<String> {
    let raw: Vec<String> = match process {
        ProcessSteps::Steps(steps) => steps,
        ProcessSteps::Text(text) => text.split([',', '\n']).map(str::to_string).collect(),
    };
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::school::SocialPlatform;
    use serde_json::{json, Value};

    fn content(extra: Value) -> TenantContent {
        let mut base = json!({
            "meta": { "schoolId": "greenfield", "schoolName": "Greenfield High" },
            "contact": { "address": "1 School Rd", "phone": "555-0100", "email": "office@greenfield.test" }
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_principal_legacy_aliases_normalize_identically() {
        let legacy = normalize(content(json!({
            "principal": { "name": "Dr. Rao", "text": "X", "image": "Y" }
        })));
        let current = normalize(content(json!({
            "principal": { "name": "Dr. Rao", "message": "X", "photoUrl": "Y" }
        })));

        assert_eq!(legacy.principal, current.principal);
        assert_eq!(
            legacy.principal,
            Some(Principal { name: "Dr. Rao".into(), message: "X".into(), photo_url: Some("Y".into()) })
        );
    }

    #[test]
    fn test_principal_from_personnel_list() {
        let site = normalize(content(json!({
            "personnel": [
                { "name": "Ms. Iyer", "personType": "faculty", "designation": "Physics", "displayOrder": 2 },
                { "name": "Mr. Shah", "personType": "Principal", "message": "Welcome", "image": "shah.jpg" },
                { "name": "Mr. Das", "personType": "faculty", "displayOrder": 1 }
            ]
        })));

        let principal = site.principal.unwrap();
        assert_eq!(principal.name, "Mr. Shah");
        assert_eq!(principal.photo_url.as_deref(), Some("shah.jpg"));
        let names: Vec<_> = site.faculty.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Mr. Das", "Ms. Iyer"]);
    }

    #[test]
    fn test_structured_vision_mission_wins_over_flat_fields() {
        let site = normalize(content(json!({
            "visionMission": { "vision": "Structured vision", "mission": "  " },
            "vision": "Old vision",
            "mission": "Old mission"
        })));

        assert_eq!(site.vision.as_deref(), Some("Structured vision"));
        assert_eq!(site.mission.as_deref(), Some("Old mission"));
    }

    #[test]
    fn test_admission_process_string_and_list_agree() {
        let from_text = normalize(content(json!({
            "admission": { "overview": "Open", "process": "Enquiry, Visit,Test ,, Enrol" }
        })));
        let from_list = normalize(content(json!({
            "admission": { "overview": "Open", "process": ["Enquiry", "Visit", "Test", "Enrol"] }
        })));

        assert_eq!(from_text.admission, from_list.admission);
        assert_eq!(from_text.admission.unwrap().steps, vec!["Enquiry", "Visit", "Test", "Enrol"]);
    }

    #[test]
    fn test_unknown_social_platforms_are_dropped() {
        let site = normalize(content(json!({
            "socialLinks": [
                { "platform": "facebook", "url": "https://fb.test/school" },
                { "platform": "myspace", "url": "https://myspace.test/school" },
                { "platform": "linkedin", "url": "https://linkedin.test/school" }
            ]
        })));

        let platforms: Vec<_> = site.social_links.iter().map(|l| l.platform).collect();
        assert_eq!(platforms, vec![SocialPlatform::Facebook, SocialPlatform::Linkedin]);
        assert_eq!(site.footer.social_links, site.social_links);
        assert_eq!(site.footer.copyright_text, "© Greenfield High. All rights reserved.");
    }

    #[test]
    fn test_gallery_and_facility_aliases() {
        let site = normalize(content(json!({
            "mediaLibrary": [
                { "url": "a.jpg", "category": "campus" },
                { "caption": "no image" },
                { "id": "m3", "imageUrl": "c.jpg" }
            ],
            "infrastructure": [ { "name": "Library", "description": "Books", "image": "lib.jpg" } ]
        })));

        let ids: Vec<_> = site.gallery.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["image-1", "m3"]);
        assert_eq!(site.facilities.len(), 1);
        assert_eq!(site.facilities[0].category, None);
    }
}
