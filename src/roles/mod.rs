pub mod classifier;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use classifier::{resolve_hint, PathMatcher, RoleClassifier, RoleRule};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown role: {0:?}")]
pub struct ParseRoleError(pub String);

/// Communicative intent of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageRole {
    Conversion,
    Authority,
    Hybrid,
}

impl PageRole {
    pub const ALL: [PageRole; 3] = [PageRole::Conversion, PageRole::Authority, PageRole::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageRole::Conversion => "conversion",
            PageRole::Authority => "authority",
            PageRole::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for PageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conversion" => Ok(PageRole::Conversion),
            "authority" => Ok(PageRole::Authority),
            "hybrid" => Ok(PageRole::Hybrid),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Role used by the schema policy. Finer than [`PageRole`]: homepage,
/// service and contact pages carry their own hard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaRole {
    Conversion,
    Authority,
    Hybrid,
    Homepage,
    Service,
    Contact,
}

impl SchemaRole {
    pub const ALL: [SchemaRole; 6] = [
        SchemaRole::Conversion,
        SchemaRole::Authority,
        SchemaRole::Hybrid,
        SchemaRole::Homepage,
        SchemaRole::Service,
        SchemaRole::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaRole::Conversion => "conversion",
            SchemaRole::Authority => "authority",
            SchemaRole::Hybrid => "hybrid",
            SchemaRole::Homepage => "homepage",
            SchemaRole::Service => "service",
            SchemaRole::Contact => "contact",
        }
    }

    /// Capitalised form used in report messages.
    pub fn label(&self) -> &'static str {
        match self {
            SchemaRole::Conversion => "Conversion",
            SchemaRole::Authority => "Authority",
            SchemaRole::Hybrid => "Hybrid",
            SchemaRole::Homepage => "Home",
            SchemaRole::Service => "Service",
            SchemaRole::Contact => "Contact",
        }
    }

    /// Narrow a page role using the page path.
    pub fn for_page(path: &str, role: PageRole) -> Self {
        let path = path.to_ascii_lowercase();
        if path.is_empty() || path == "/" {
            SchemaRole::Homepage
        } else if path.contains("/contact/") {
            SchemaRole::Contact
        } else if path.contains("/services/") && role == PageRole::Conversion {
            SchemaRole::Service
        } else {
            SchemaRole::from(role)
        }
    }

    pub fn page_role(&self) -> PageRole {
        match self {
            SchemaRole::Conversion | SchemaRole::Service => PageRole::Conversion,
            SchemaRole::Authority => PageRole::Authority,
            SchemaRole::Hybrid | SchemaRole::Homepage | SchemaRole::Contact => PageRole::Hybrid,
        }
    }
}

impl From<PageRole> for SchemaRole {
    fn from(role: PageRole) -> Self {
        match role {
            PageRole::Conversion => SchemaRole::Conversion,
            PageRole::Authority => SchemaRole::Authority,
            PageRole::Hybrid => SchemaRole::Hybrid,
        }
    }
}

impl fmt::Display for SchemaRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        SchemaRole::ALL
            .into_iter()
            .find(|role| role.as_str() == lowered)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}
