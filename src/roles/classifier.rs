use super::PageRole;

/// Path predicate. Paths are lowercased before matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    Contains(String),
    ContainsAny(Vec<String>),
    Exact(String),
}

impl PathMatcher {
    pub fn contains(needle: &str) -> Self {
        PathMatcher::Contains(needle.to_string())
    }

    pub fn contains_any(needles: &[&str]) -> Self {
        PathMatcher::ContainsAny(needles.iter().map(|n| n.to_string()).collect())
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatcher::Contains(needle) => path.contains(needle.as_str()),
            PathMatcher::ContainsAny(needles) => needles.iter().any(|n| path.contains(n.as_str())),
            PathMatcher::Exact(expected) => path == expected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRule {
    pub matcher: PathMatcher,
    pub role: PageRole,
}

/// Ordered rule list; the first matching rule decides.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    rules: Vec<RoleRule>,
    fallback: PageRole,
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoleClassifier {
    pub fn new(rules: Vec<RoleRule>, fallback: PageRole) -> Self {
        Self { rules, fallback }
    }

    /// v0 rules: services, then editorial sections, then about/contact.
    pub fn standard() -> Self {
        Self::new(
            vec![
                RoleRule {
                    matcher: PathMatcher::contains("/services/"),
                    role: PageRole::Conversion,
                },
                RoleRule {
                    matcher: PathMatcher::contains_any(&[
                        "/insights/",
                        "/case-studies/",
                        "/resources/",
                        "/how-to-",
                        "/what-is-",
                    ]),
                    role: PageRole::Authority,
                },
                RoleRule {
                    matcher: PathMatcher::contains_any(&["/about/", "/contact/"]),
                    role: PageRole::Hybrid,
                },
            ],
            PageRole::Hybrid,
        )
    }

    pub fn rules(&self) -> &[RoleRule] {
        &self.rules
    }

    /// Append a rule with the lowest precedence.
    pub fn push_rule(&mut self, rule: RoleRule) {
        self.rules.push(rule);
    }

    /// An explicit hint always wins; otherwise the first matching rule, else the fallback.
    pub fn classify(&self, path: &str, hint: Option<PageRole>) -> PageRole {
        if let Some(role) = hint {
            return role;
        }
        let path = path.to_ascii_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(&path))
            .map(|rule| rule.role)
            .unwrap_or(self.fallback)
    }

    /// Same as [`classify`](Self::classify) with a free-form hint string.
    pub fn classify_with_hint(&self, path: &str, hint: &str) -> PageRole {
        self.classify(path, resolve_hint(hint))
    }
}

/// Map a free-form hint onto a role.
///
/// Only the empty string means "no hint"; any other hint wins over the path.
/// Role names and common page aliases (trimmed, case-insensitive) resolve to
/// their role. Everything else, whitespace included, resolves to hybrid.
pub fn resolve_hint(hint: &str) -> Option<PageRole> {
    if hint.is_empty() {
        return None;
    }
    let normalized = hint.trim().to_ascii_lowercase();
    let role = match normalized.as_str() {
        "conversion" | "service" | "services" => PageRole::Conversion,
        "authority" | "insight" | "insights" | "article" | "guide" | "case-study" => {
            PageRole::Authority
        }
        "hybrid" | "about" | "contact" | "homepage" | "home" => PageRole::Hybrid,
        other => {
            tracing::debug!(hint = other, "Unrecognised role hint, defaulting to hybrid");
            PageRole::Hybrid
        }
    };
    Some(role)
}
