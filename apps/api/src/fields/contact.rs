//! Email and phone extraction. First match wins; candidates are never ranked.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

// Deliberately loose: any run of three or more digit groups matches, so years,
// zip codes and date ranges are all candidates.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(?\+?[0-9]*\)?[-.\s]?[0-9]+[-.\s]?[0-9]+[-.\s]?[0-9]+").unwrap()
});

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Returns the first phone-shaped token exactly as matched, including any
/// leading separator the pattern consumed.
pub fn extract_phone_number(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Contact: jane.doe@example.com, (555) 123-4567. Skills: Python, SQL. Experience: worked at Acme Corp.";

    #[test]
    fn test_email_from_sample() {
        assert_eq!(extract_email(SAMPLE).as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_phone_from_sample() {
        assert_eq!(extract_phone_number(SAMPLE).as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_first_email_wins() {
        let text = "work: j.doe@acme.io\npersonal: jane+cv@mail.example.org";
        assert_eq!(extract_email(text).as_deref(), Some("j.doe@acme.io"));
    }

    #[test]
    fn test_uppercase_domain_email() {
        assert_eq!(
            extract_email("Reach me at JANE_DOE%x@Example.COM today").as_deref(),
            Some("JANE_DOE%x@Example.COM")
        );
    }

    #[test]
    fn test_no_email() {
        assert_eq!(extract_email("jane at example dot com"), None);
        assert_eq!(extract_email("jane@localhost"), None);
    }

    #[test]
    fn test_international_phone() {
        assert_eq!(
            extract_phone_number("Phone +44 20 7946 0958").as_deref(),
            Some("+44 20 7946 0958")
        );
    }

    #[test]
    fn test_dotted_phone() {
        assert_eq!(extract_phone_number("555.123.4567").as_deref(), Some("555.123.4567"));
    }

    #[test]
    fn test_year_is_a_phone_false_positive() {
        assert_eq!(extract_phone_number("Class of 2019").as_deref(), Some(" 2019"));
    }

    #[test]
    fn test_short_digit_runs_do_not_match() {
        assert_eq!(extract_phone_number("Top 10 engineer, 5 years"), None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        assert_eq!(extract_email(SAMPLE), extract_email(SAMPLE));
        assert_eq!(extract_phone_number(SAMPLE), extract_phone_number(SAMPLE));
    }
}
