use crate::roles::PageRole;

use super::lexicon::{normalize_whitespace, strip_abstract_words};
use super::SnippetData;

/// Compose a title for `role` from fields with abstract words stripped.
///
/// - conversion: `{service} in {location}: {outcome}`
/// - authority: `{topic}: {takeaway}`
/// - hybrid: `{service} for {who} | {domain}`
///
/// A field left empty by stripping is omitted along with its connector.
pub fn generate_title(role: PageRole, data: &SnippetData) -> String {
    let composed = match role {
        PageRole::Conversion => joined(
            joined(stripped(data.service()), " in ", stripped(data.location())),
            ": ",
            stripped(data.outcome()),
        ),
        PageRole::Authority => joined(stripped(data.topic()), ": ", stripped(data.takeaway())),
        PageRole::Hybrid => joined(
            joined(stripped(data.service()), " for ", stripped(data.who())),
            " | ",
            stripped(data.domain()),
        ),
    };

    composed.unwrap_or_default()
}

fn stripped(field: Option<&str>) -> Option<String> {
    field.map(strip_abstract_words).filter(|s| !s.is_empty())
}

/// Compose a description for `role`: segments joined with `". "` and ended with `"."`.
pub fn generate_description(role: PageRole, data: &SnippetData) -> String {
    let segments: Vec<Option<String>> = match role {
        PageRole::Conversion => vec![
            joined(data.service(), " in ", data.location()),
            data.outcome().map(str::to_string),
            data.who().map(|who| format!("Built for {who}")),
            data.proof().map(str::to_string),
        ],
        PageRole::Authority => vec![
            data.topic().map(|topic| format!("Learn {topic}")),
            data.takeaway().map(str::to_string),
            data.who().map(|who| format!("Written for {who}")),
            data.proof().map(str::to_string),
        ],
        PageRole::Hybrid => vec![
            data.domain().map(str::to_string),
            joined(data.service(), " for ", data.who()),
            data.outcome().map(str::to_string),
            data.proof().map(str::to_string),
        ],
    };

    let parts: Vec<String> = segments
        .into_iter()
        .flatten()
        .map(|s| normalize_whitespace(s.trim_end_matches('.')))
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("{}.", parts.join(". "))
    }
}

/// `a{sep}b`, or whichever side is present.
fn joined<A, B>(a: Option<A>, sep: &str, b: Option<B>) -> Option<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    match (a, b) {
        (Some(a), Some(b)) => Some(format!("{}{sep}{}", a.as_ref(), b.as_ref())),
        (Some(a), None) => Some(a.as_ref().to_string()),
        (None, Some(b)) => Some(b.as_ref().to_string()),
        (None, None) => None,
    }
}
