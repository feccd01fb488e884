//! Keyword-triggered section extraction.
//!
//! Each section owns a fixed list of trigger phrases. A line belongs to a
//! section when any trigger occurs in it as a case-insensitive substring.
//! Sections are independent: one line can land in several of them.

use std::str::FromStr;

use anyhow::{bail, Error};

const WORK_KEYWORDS: &[&str] = &[
    "experience",
    "worked at",
    "position",
    "role",
    "company",
    "employed at",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "degree",
    "bachelor",
    "master",
    "phd",
    "graduated",
    "university",
    "college",
    "school",
];

const CERTIFICATION_KEYWORDS: &[&str] = &["certified", "certification", "certificate", "license"];

const PROJECT_KEYWORDS: &[&str] = &[
    "project",
    "worked on",
    "developed",
    "built",
    "designed",
    "created",
];

const LANGUAGE_KEYWORDS: &[&str] = &["languages", "fluent in", "spoken", "proficiency"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    WorkExperience,
    Education,
    Certifications,
    Projects,
    Languages,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::WorkExperience,
        Section::Education,
        Section::Certifications,
        Section::Projects,
        Section::Languages,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Section::WorkExperience => WORK_KEYWORDS,
            Section::Education => EDUCATION_KEYWORDS,
            Section::Certifications => CERTIFICATION_KEYWORDS,
            Section::Projects => PROJECT_KEYWORDS,
            Section::Languages => LANGUAGE_KEYWORDS,
        }
    }
}

/// How a line that hits several triggers of the same section is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionMatchMode {
    /// The line is appended once, however many triggers it contains.
    #[default]
    OncePerLine,
    /// The line is appended once per trigger it contains.
    PerKeyword,
}

impl FromStr for SectionMatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once-per-line" => Ok(SectionMatchMode::OncePerLine),
            "per-keyword" => Ok(SectionMatchMode::PerKeyword),
            other => bail!("unknown section match mode '{other}'"),
        }
    }
}

/// Raw per-keyword matches: every line is trimmed and emitted once for each
/// trigger it contains, in line order then keyword order.
pub fn match_lines(text: &str, keywords: &[&str]) -> Vec<String> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut matches = Vec::new();
    for line in text.lines() {
        let line_lower = line.to_lowercase();
        for keyword in &keywords {
            if line_lower.contains(keyword.as_str()) {
                matches.push(line.trim().to_string());
            }
        }
    }
    matches
}

pub fn extract_section(text: &str, section: Section, mode: SectionMatchMode) -> Vec<String> {
    match mode {
        SectionMatchMode::PerKeyword => match_lines(text, section.keywords()),
        SectionMatchMode::OncePerLine => {
            let keywords: Vec<String> = section
                .keywords()
                .iter()
                .map(|k| k.to_lowercase())
                .collect();
            text.lines()
                .filter(|line| {
                    let line_lower = line.to_lowercase();
                    keywords.iter().any(|k| line_lower.contains(k.as_str()))
                })
                .map(|line| line.trim().to_string())
                .collect()
        }
    }
}

pub fn extract_work_experience(text: &str, mode: SectionMatchMode) -> Vec<String> {
    extract_section(text, Section::WorkExperience, mode)
}

pub fn extract_education(text: &str, mode: SectionMatchMode) -> Vec<String> {
    extract_section(text, Section::Education, mode)
}

pub fn extract_certifications(text: &str, mode: SectionMatchMode) -> Vec<String> {
    extract_section(text, Section::Certifications, mode)
}

pub fn extract_projects(text: &str, mode: SectionMatchMode) -> Vec<String> {
    extract_section(text, Section::Projects, mode)
}

pub fn extract_languages(text: &str, mode: SectionMatchMode) -> Vec<String> {
    extract_section(text, Section::Languages, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAP_LINE: &str = "I developed a certified training project";

    #[test]
    fn test_line_lands_in_every_matching_section() {
        let certs = extract_certifications(OVERLAP_LINE, SectionMatchMode::OncePerLine);
        let projects = extract_projects(OVERLAP_LINE, SectionMatchMode::OncePerLine);
        assert_eq!(certs, vec![OVERLAP_LINE]);
        assert_eq!(projects, vec![OVERLAP_LINE]);
    }

    #[test]
    fn test_raw_matches_repeat_line_per_keyword() {
        // "project" and "developed" both trigger.
        let raw = match_lines(OVERLAP_LINE, Section::Projects.keywords());
        assert_eq!(raw, vec![OVERLAP_LINE, OVERLAP_LINE]);
        assert_eq!(
            extract_projects(OVERLAP_LINE, SectionMatchMode::PerKeyword),
            raw
        );
    }

    #[test]
    fn test_once_per_line_collapses_keyword_repeats_only() {
        let text = "Built and designed a project\nunrelated\nBuilt and designed a project";
        assert_eq!(
            extract_projects(text, SectionMatchMode::OncePerLine),
            vec![
                "Built and designed a project",
                "Built and designed a project"
            ]
        );
        assert_eq!(extract_projects(text, SectionMatchMode::PerKeyword).len(), 6);
    }

    #[test]
    fn test_lines_are_trimmed_and_case_insensitive() {
        let text = "   WORK EXPERIENCE   \n\tGraduated from State UNIVERSITY\t";
        assert_eq!(
            extract_work_experience(text, SectionMatchMode::OncePerLine),
            vec!["WORK EXPERIENCE"]
        );
        assert_eq!(
            extract_education(text, SectionMatchMode::OncePerLine),
            vec!["Graduated from State UNIVERSITY"]
        );
    }

    #[test]
    fn test_lines_without_triggers_never_appear() {
        let text = "Jane Doe\nFluent in French and Spanish\nHobbies: chess";
        let languages = extract_languages(text, SectionMatchMode::OncePerLine);
        assert_eq!(languages, vec!["Fluent in French and Spanish"]);
        for section in Section::ALL {
            let lines = extract_section(text, section, SectionMatchMode::PerKeyword);
            assert!(!lines.iter().any(|l| l == "Hobbies: chess"));
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Summary\r\nExperience: worked at Acme Corp.\r\n";
        assert_eq!(
            extract_work_experience(text, SectionMatchMode::OncePerLine),
            vec!["Experience: worked at Acme Corp."]
        );
    }

    #[test]
    fn test_substring_triggers_inside_words() {
        // "company" inside "accompanying" counts.
        assert_eq!(
            extract_work_experience("Accompanying the tour", SectionMatchMode::OncePerLine),
            vec!["Accompanying the tour"]
        );
    }

    #[test]
    fn test_empty_text_has_no_sections() {
        for section in Section::ALL {
            assert!(extract_section("", section, SectionMatchMode::PerKeyword).is_empty());
        }
    }

    #[test]
    fn test_match_mode_parsing() {
        assert_eq!(
            "per-keyword".parse::<SectionMatchMode>().unwrap(),
            SectionMatchMode::PerKeyword
        );
        assert_eq!(
            " Once-Per-Line ".parse::<SectionMatchMode>().unwrap(),
            SectionMatchMode::OncePerLine
        );
        assert!("dedup".parse::<SectionMatchMode>().is_err());
        assert_eq!(SectionMatchMode::default(), SectionMatchMode::OncePerLine);
    }
}
