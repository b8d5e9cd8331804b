//! Fixed section templates. Every interpolated value goes through [`escape_html`].

/// Escape `& < > " '` for embedding in HTML text or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// `agentic-seo` -> `Agentic Seo`
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `austin-tx` -> `Austin, TX`. A trailing two-letter segment is read as a
/// region code; anything else is plain title case.
pub fn city_display_from_slug(slug: &str) -> String {
    let words: Vec<&str> = slug.split('-').filter(|w| !w.is_empty()).collect();
    match words.split_last() {
        Some((region, place))
            if !place.is_empty()
                && region.len() == 2
                && region.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            let place = place.iter().map(|w| capitalize(w)).collect::<Vec<_>>().join(" ");
            format!("{place}, {}", region.to_ascii_uppercase())
        }
        _ => title_case_slug(slug),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `a`, `a and b`, `a, b and c`
pub fn natural_join(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// `<tag class="...">` list with escaped items; empty input renders nothing.
pub fn render_list(tag: &str, class: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("<{tag} class=\"{class}\">");
    for item in items {
        out.push_str("<li>");
        out.push_str(&escape_html(item));
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
    out
}

/// Optional `<p>` footer appended under a list.
pub fn with_footer(list: String, footer: Option<&String>) -> String {
    match footer {
        Some(text) => format!("{list}<p>{}</p>", escape_html(text)),
        None => list,
    }
}

/// Join the non-empty parts with single spaces.
pub fn join_present(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}
