//! Field extractors. Each one scans the full plain text for a single resume
//! field and is pure: same text in, same value out.

pub mod contact;
pub mod name;
pub mod sections;
pub mod skills;

pub use contact::{extract_email, extract_phone_number};
pub use name::{extract_name, UNKNOWN_NAME};
pub use sections::{
    extract_certifications, extract_education, extract_languages, extract_projects,
    extract_work_experience, SectionMatchMode,
};
pub use skills::{extract_skills, DEFAULT_SKILLS};
