use crate::roles::PageRole;
use crate::types::content_bundle::ValidationReport;

use super::lexicon::{first_match, ABSTRACT_RE, ACTION_RE, COMMERCIAL_RE, LEARNING_RE};

pub const TITLE_IDEAL: (usize, usize) = (30, 70);
pub const DESCRIPTION_IDEAL: (usize, usize) = (80, 180);

#[derive(Clone, Copy)]
enum Kind {
    Title,
    Description,
}

impl Kind {
    fn lower(self) -> &'static str {
        match self {
            Kind::Title => "title",
            Kind::Description => "description",
        }
    }

    fn upper(self) -> &'static str {
        match self {
            Kind::Title => "Title",
            Kind::Description => "Description",
        }
    }

    fn ideal(self) -> (usize, usize) {
        match self {
            Kind::Title => TITLE_IDEAL,
            Kind::Description => DESCRIPTION_IDEAL,
        }
    }
}

pub fn validate_title(text: &str, role: PageRole) -> ValidationReport {
    check(text, role, Kind::Title)
}

pub fn validate_description(text: &str, role: PageRole) -> ValidationReport {
    check(text, role, Kind::Description)
}

fn check(text: &str, role: PageRole, kind: Kind) -> ValidationReport {
    let mut report = ValidationReport::new();
    let text = text.trim();

    if text.is_empty() {
        report.error(format!("{} is empty", kind.upper()));
        return report;
    }

    let len = text.chars().count();
    let (min, max) = kind.ideal();
    if len < min {
        report.warn(format!("{} too short ({len} chars, ideal {min}-{max})", kind.upper()));
    } else if len > max {
        report.warn(format!("{} too long ({len} chars, ideal {min}-{max})", kind.upper()));
    }

    match role {
        PageRole::Conversion => {
            if !ACTION_RE.is_match(text) {
                report.warn(format!(
                    "Conversion {} missing action or service signal",
                    kind.lower()
                ));
            }
            if let Some(term) = first_match(&ABSTRACT_RE, text) {
                report.error(format!(
                    "Conversion {} contains abstract term: {term}",
                    kind.lower()
                ));
            }
        }
        PageRole::Authority => {
            if !LEARNING_RE.is_match(text) {
                report.warn(format!("Authority {} missing learning signal", kind.lower()));
            }
            if let Some(term) = first_match(&COMMERCIAL_RE, text) {
                report.error(format!(
                    "Authority {} contains commercial call to action: {term}",
                    kind.lower()
                ));
            }
        }
        PageRole::Hybrid => {}
    }

    report
}
