use serde::{Deserialize, Serialize};

/// Principal as stored; `text`/`image` are the legacy spellings of `message`/`photoUrl`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub name: String,
    pub message: String,
    pub photo_url: Option<String>,
}

pub const PRINCIPAL_PERSON_TYPE: &str = "principal";

/// One row of the newer `personnel` list (principal, faculty and staff alike).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub person_type: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "image")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl PersonnelRecord {
    pub fn is_principal(&self) -> bool {
        self.person_type.eq_ignore_ascii_case(PRINCIPAL_PERSON_TYPE)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    pub name: String,
    pub designation: Option<String>,
    pub qualification: Option<String>,
    pub department: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: i32,
}
