use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The six fixed activity buckets. Any of them may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activities {
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub academic: Vec<ActivityItem>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub clubs: Vec<ActivityItem>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub sports: Vec<ActivityItem>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub extra_curricular: Vec<ActivityItem>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub arts: Vec<ActivityItem>,
    #[serde(default, deserialize_with = "crate::models::lenient::list")]
    pub leadership: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityBucket {
    Academic,
    Clubs,
    Sports,
    ExtraCurricular,
    Arts,
    Leadership,
}

impl ActivityBucket {
    pub const ALL: [ActivityBucket; 6] = [
        ActivityBucket::Academic,
        ActivityBucket::Clubs,
        ActivityBucket::Sports,
        ActivityBucket::ExtraCurricular,
        ActivityBucket::Arts,
        ActivityBucket::Leadership,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityBucket::Academic => "Academic",
            ActivityBucket::Clubs => "Clubs",
            ActivityBucket::Sports => "Sports",
            ActivityBucket::ExtraCurricular => "Extra-Curricular",
            ActivityBucket::Arts => "Arts",
            ActivityBucket::Leadership => "Leadership",
        }
    }
}

impl Activities {
    pub fn bucket(&self, bucket: ActivityBucket) -> &[ActivityItem] {
        match bucket {
            ActivityBucket::Academic => &self.academic,
            ActivityBucket::Clubs => &self.clubs,
            ActivityBucket::Sports => &self.sports,
            ActivityBucket::ExtraCurricular => &self.extra_curricular,
            ActivityBucket::Arts => &self.arts,
            ActivityBucket::Leadership => &self.leadership,
        }
    }
}
