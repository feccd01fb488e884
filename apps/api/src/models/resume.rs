use serde::{Deserialize, Serialize};

use crate::fields::UNKNOWN_NAME;

/// The flat record handed to the presentation layer.
///
/// Field order and key names are fixed; serialization follows this struct's order.
/// `Email` and `Phone` serialize as `null` when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    /// Matched vocabulary entries joined with `", "`.
    #[serde(rename = "Skills")]
    pub skills: String,
    /// Matched lines joined with `"\n"`; the same for the sections below.
    #[serde(rename = "Work Experience")]
    pub work_experience: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Certifications")]
    pub certifications: String,
    #[serde(rename = "Projects")]
    pub projects: String,
    #[serde(rename = "Languages")]
    pub languages: String,
}

impl ResumeRecord {
    pub const FIELD_KEYS: [&'static str; 9] = [
        "Name",
        "Email",
        "Phone",
        "Skills",
        "Work Experience",
        "Education",
        "Certifications",
        "Projects",
        "Languages",
    ];

    /// `(key, value)` pairs in display order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("Name", Some(self.name.as_str())),
            ("Email", self.email.as_deref()),
            ("Phone", self.phone.as_deref()),
            ("Skills", Some(self.skills.as_str())),
            ("Work Experience", Some(self.work_experience.as_str())),
            ("Education", Some(self.education.as_str())),
            ("Certifications", Some(self.certifications.as_str())),
            ("Projects", Some(self.projects.as_str())),
            ("Languages", Some(self.languages.as_str())),
        ]
    }

    /// True when no field carries anything beyond its default.
    pub fn is_empty(&self) -> bool {
        self.name == UNKNOWN_NAME
            && self
                .fields()
                .iter()
                .skip(1)
                .all(|(_, value)| value.map_or(true, str::is_empty))
    }
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: None,
            phone: None,
            skills: String::new(),
            work_experience: String::new(),
            education: String::new(),
            certifications: String::new(),
            projects: String::new(),
            languages: String::new(),
        }
    }
}
