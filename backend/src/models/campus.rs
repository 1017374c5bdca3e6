use serde::{Deserialize, Serialize};

/// Facility as stored under either `infrastructure` (legacy, flat with image)
/// or `facilities` (categorised).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacilityGroup {
    pub category: String,
    pub items: Vec<Facility>,
}

/// Gallery entry as stored under `gallery` or `mediaLibrary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "url")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub image_url: String,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub is_featured: bool,
}
